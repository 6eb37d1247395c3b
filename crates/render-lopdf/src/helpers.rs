//! Content-stream construction: turns positioned blocks into PDF operators.

use crate::error::RenderError;
use crate::page::{Block, DashPattern, FrameBlock, ImageBlock, LineBlock, TextBlock};
use boardpass_types::Raster;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream, StringFormat};

/// Resource name of the single Helvetica font every page uses.
pub(crate) const FONT_RESOURCE: &str = "F1";

pub(crate) fn image_resource_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

/// An uncompressed 8-bit DeviceGray image XObject.
pub(crate) fn image_stream(raster: &Raster) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(raster.width()),
            "Height" => i64::from(raster.height()),
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
        },
        raster.pixels().to_vec(),
    )
}

pub(crate) fn render_blocks(blocks: &[Block], image_count: usize) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(image_count);
    for block in blocks {
        page_ctx.draw_block(block)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext {
    content: Content,
    image_count: usize,
    font_size: Option<f32>,
}

impl PageContext {
    fn new(image_count: usize) -> Self {
        Self {
            content: Content { operations: vec![] },
            image_count,
            font_size: None,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_block(&mut self, block: &Block) -> Result<(), RenderError> {
        match block {
            Block::Text(text) => self.draw_text(text),
            Block::Line(line) => self.draw_line(line),
            Block::Frame(frame) => self.draw_frame(frame),
            Block::Image(image) => self.draw_image(image)?,
        }
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) {
        if self.font_size != Some(size) {
            self.push("Tf", vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), size.into()]);
            self.font_size = Some(size);
        }
    }

    fn draw_text(&mut self, text: &TextBlock) {
        if text.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font_size(text.font_size);
        self.push("Td", vec![text.x.into(), text.baseline.into()]);
        self.push("Tj", vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)]);
        self.push("ET", vec![]);
    }

    fn set_dash(&mut self, dash: Option<DashPattern>) {
        if let Some(dash) = dash {
            let array = Object::Array(vec![dash.on.into(), dash.off.into()]);
            self.push("d", vec![array, dash.phase.into()]);
        }
    }

    fn draw_line(&mut self, line: &LineBlock) {
        self.push("q", vec![]);
        self.push("w", vec![line.width.into()]);
        self.set_dash(line.dash);
        self.push("m", vec![line.from.x.into(), line.from.y.into()]);
        self.push("l", vec![line.to.x.into(), line.to.y.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn draw_frame(&mut self, frame: &FrameBlock) {
        let r = frame.rect;
        self.push("q", vec![]);
        self.push("w", vec![frame.width.into()]);
        self.push("re", vec![r.x.into(), r.y.into(), r.width.into(), r.height.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn draw_image(&mut self, image: &ImageBlock) -> Result<(), RenderError> {
        if image.image >= self.image_count {
            return Err(RenderError::MissingImage(image.image));
        }
        let matrix = image.transform.to_array().into_iter().map(Object::from).collect();
        self.push("q", vec![]);
        self.push("cm", matrix);
        self.push("Do", vec![Object::Name(image_resource_name(image.image).into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }
}

/// Helvetica is written with WinAnsiEncoding; anything outside Latin-1
/// becomes `?`.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}
