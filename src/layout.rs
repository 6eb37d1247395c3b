//! Shared table geometry for the composers.
//!
//! Every pass prints its fields as border-less rows of left-aligned Helvetica
//! cells. A [`TableLayout`] fixes the column grid and row height once so the
//! kiosk, desktop and mobile pages cannot drift apart visually.

use boardpass_render_lopdf::Block;

/// Row height of the four-column summary tables.
pub const WIDE_ROW_HEIGHT: f32 = 20.0;
/// Row height of the two-column mobile table.
pub const COMPACT_ROW_HEIGHT: f32 = 18.0;
pub const CELL_FONT_SIZE: f32 = 12.0;
const CELL_PADDING: f32 = 2.0;
/// Helvetica's cap height sits at roughly 0.8 em below the top of a line.
const ASCENT: f32 = 0.8;

/// Relative widths of the summary columns: two passenger-copy columns, a
/// spacer and the condensed airline copy.
const SUMMARY_PROPORTIONS: [f32; 4] = [225.0, 225.0, 5.0, 190.0];
/// Index of the summary spacer column.
pub const SPACER_COLUMN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    x: f32,
    top: f32,
    widths: Vec<f32>,
    row_height: f32,
}

impl TableLayout {
    /// Splits `width` between columns in the given proportions.
    pub fn new(x: f32, top: f32, width: f32, proportions: &[f32], row_height: f32) -> Self {
        let total: f32 = proportions.iter().sum();
        let widths = if total > 0.0 {
            proportions.iter().map(|p| width * p / total).collect()
        } else {
            Vec::new()
        };
        Self {
            x,
            top,
            widths,
            row_height,
        }
    }

    /// The four-column summary grid used by the kiosk and desktop passes.
    pub fn summary(x: f32, top: f32, width: f32) -> Self {
        Self::new(x, top, width, &SUMMARY_PROPORTIONS, WIDE_ROW_HEIGHT)
    }

    /// The summary grid with a spacer `spacer` points wide. The airline copy
    /// keeps its share of `width` and the passenger columns split the rest.
    pub fn summary_with_spacer(x: f32, top: f32, width: f32, spacer: f32) -> Self {
        let total: f32 = SUMMARY_PROPORTIONS.iter().sum();
        let airline = width * SUMMARY_PROPORTIONS[3] / total;
        let passenger = ((width - airline - spacer) / 2.0).max(0.0);
        Self::new(x, top, width, &[passenger, passenger, spacer, airline], WIDE_ROW_HEIGHT)
    }

    /// Two equal columns with compact rows, used on the mobile pass.
    pub fn compact(x: f32, top: f32, width: f32) -> Self {
        Self::new(x, top, width, &[1.0, 1.0], COMPACT_ROW_HEIGHT)
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Left edge of every column.
    pub fn column_x(&self) -> Vec<f32> {
        self.widths
            .iter()
            .scan(self.x, |left, width| {
                let this = *left;
                *left += width;
                Some(this)
            })
            .collect()
    }

    /// Left and right edge of column `index`.
    pub fn column_span(&self, index: usize) -> Option<(f32, f32)> {
        let left = *self.column_x().get(index)?;
        Some((left, left + self.widths.get(index)?))
    }

    /// Vertical extent of `rows` rows.
    pub fn height(&self, rows: usize) -> f32 {
        self.row_height * rows as f32
    }

    /// Lays out `rows` top to bottom. Cells beyond the column count and
    /// empty cells produce nothing.
    pub fn cells<R: AsRef<[String]>>(&self, rows: &[R]) -> Vec<Block> {
        let columns = self.column_x();
        rows.iter()
            .enumerate()
            .flat_map(|(index, row)| {
                let baseline =
                    self.top - self.height(index) - CELL_PADDING - CELL_FONT_SIZE * ASCENT;
                row.as_ref()
                    .iter()
                    .zip(&columns)
                    .filter(|(text, _)| !text.is_empty())
                    .map(move |(text, x)| {
                        Block::text(x + CELL_PADDING, baseline, CELL_FONT_SIZE, text.as_str())
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// A summary row: two passenger-copy cells, the spacer, and the airline copy.
pub fn summary_row(
    first: impl Into<String>,
    second: impl Into<String>,
    airline: impl Into<String>,
) -> [String; 4] {
    [first.into(), second.into(), String::new(), airline.into()]
}

/// Greedy word wrap for Helvetica at `font_size`, using an average glyph
/// width of half an em. Line breaks in `text` are kept; a word wider than the
/// line is placed on a line of its own.
pub fn wrap_text(text: &str, width: f32, font_size: f32) -> Vec<String> {
    let max_chars = ((width / (font_size * 0.5)).floor() as usize).max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
