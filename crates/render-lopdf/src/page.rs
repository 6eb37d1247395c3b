use boardpass_types::{Point, Raster, Rect, Size, Transform};

/// Everything needed to draw one page.
#[derive(Debug, Clone)]
pub struct PageSpec {
    /// Written to the document information dictionary.
    pub title: String,
    pub size: Size,
    /// Images referenced by [`ImageBlock::image`] (index into this list).
    pub images: Vec<Raster>,
    /// Drawn in order; later blocks paint over earlier ones.
    pub blocks: Vec<Block>,
}

impl PageSpec {
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            size,
            images: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<Raster>) -> Self {
        self.images = images;
        self
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextBlock),
    Line(LineBlock),
    Frame(FrameBlock),
    Image(ImageBlock),
}

/// A single line of Helvetica text starting at `(x, baseline)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub x: f32,
    pub baseline: f32,
    pub font_size: f32,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
    pub phase: f32,
}

impl DashPattern {
    pub fn new(on: f32, off: f32) -> Self {
        Self { on, off, phase: 0.0 }
    }
}

/// A stroked straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBlock {
    pub from: Point,
    pub to: Point,
    pub width: f32,
    pub dash: Option<DashPattern>,
}

/// A stroked (unfilled) rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBlock {
    pub rect: Rect,
    pub width: f32,
}

/// Draws a registered image. `transform` maps the unit square of image
/// space onto the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub image: usize,
    pub transform: Transform,
}

impl Block {
    pub fn text(x: f32, baseline: f32, font_size: f32, content: impl Into<String>) -> Self {
        Block::Text(TextBlock {
            x,
            baseline,
            font_size,
            content: content.into(),
        })
    }

    pub fn line(from: Point, to: Point, width: f32, dash: Option<DashPattern>) -> Self {
        Block::Line(LineBlock { from, to, width, dash })
    }

    pub fn frame(rect: Rect, width: f32) -> Self {
        Block::Frame(FrameBlock { rect, width })
    }

    pub fn image(image: usize, transform: Transform) -> Self {
        Block::Image(ImageBlock { image, transform })
    }
}
