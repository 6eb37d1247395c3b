//! The printable A4 desktop pass.
//!
//! The agent copy is separated from the customer copy by check-in
//! instructions and a dotted cut line. Each copy is framed, repeats the
//! summary table and carries a PDF417 code turned on its side between the
//! passenger and airline halves.

use super::{header_pair, summary_rows};
use crate::channel::ArtifactKind;
use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::layout::{SPACER_COLUMN, TableLayout, wrap_text};
use crate::pass::BoardingPass;
use boardpass_barcode::Symbology;
use boardpass_render_lopdf::{Block, DashPattern, PageSpec, RenderError};
use boardpass_types::{Point, Rect, Size, Transform};
use std::f32::consts::FRAC_PI_2;

pub const HEADER: &str = "DD Airways Web Check-In";
pub const AIRLINE_HEADER: &str = "Web Check-In";
pub const FOOTER: &str = "DD Airways Electronic Boarding Pass - Wish you a Pleasant Flight";
pub const CUT_HINT: &str = "cut on the dotted line below.";

const HEADER_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 16.0;
const INSTRUCTION_SIZE: f32 = 10.0;
const INSTRUCTION_LEADING: f32 = 13.0;
const INSTRUCTION_TOP: f32 = 546.0;
/// Instruction lines stop above the customer copy.
const INSTRUCTION_FLOOR: f32 = 252.0;
const MARGIN_X: f32 = 36.0;
const CUT_LINE_Y: f32 = 590.0;

const BARCODE_PIXELS: (u32, u32) = (240, 64);
const BARCODE_SIZE: Size = Size::new(110.0, 30.0);
/// Spacer between the passenger and airline halves; holds the turned code.
const BARCODE_GUTTER: f32 = 40.0;

/// Geometry of one framed copy of the pass.
struct Stub {
    label: &'static str,
    label_baseline: f32,
    frame: Rect,
    header_baseline: f32,
    table_top: f32,
    barcode_center_y: f32,
}

const AGENT: Stub = Stub {
    label: "Agent Copy",
    label_baseline: 806.0,
    frame: Rect::new(10.0, 620.0, 570.0, 170.0),
    header_baseline: 765.0,
    table_top: 750.0,
    barcode_center_y: 690.0,
};

const CUSTOMER: Stub = Stub {
    label: "Customer Copy",
    label_baseline: 566.0,
    frame: Rect::new(10.0, 70.0, 570.0, 170.0),
    header_baseline: 215.0,
    table_top: 200.0,
    barcode_center_y: 140.0,
};

impl Stub {
    fn table(&self) -> TableLayout {
        TableLayout::summary_with_spacer(14.0, self.table_top, 567.0, BARCODE_GUTTER)
    }

    /// Centre of the turned barcode: the middle of the table's spacer.
    fn barcode_center(&self) -> Result<Point, RenderError> {
        let (left, right) = self
            .table()
            .column_span(SPACER_COLUMN)
            .ok_or_else(|| RenderError::Other("summary table has no spacer column".into()))?;
        Ok(Point::new((left + right) / 2.0, self.barcode_center_y))
    }

    fn blocks(&self, rows: &[[String; 4]]) -> Result<Vec<Block>, RenderError> {
        let mut blocks = vec![Block::text(MARGIN_X, self.label_baseline, LABEL_SIZE, self.label)];
        blocks.extend(header_pair(
            (60.0, HEADER),
            (420.0, AIRLINE_HEADER),
            self.header_baseline,
            HEADER_SIZE,
        ));
        blocks.extend(self.table().cells(rows));
        let barcode = Rect::centered(self.barcode_center()?, BARCODE_SIZE);
        blocks.push(Block::image(0, Transform::place_rotated(barcode, FRAC_PI_2)));
        blocks.push(Block::frame(self.frame, 1.0));
        Ok(blocks)
    }
}

/// Lines that fit between the cut line and the customer copy.
const INSTRUCTION_CAPACITY: usize =
    ((INSTRUCTION_TOP - INSTRUCTION_FLOOR) / INSTRUCTION_LEADING) as usize + 1;

/// Fails when the wrapped text does not fit above the customer copy.
fn instruction_blocks(text: &str) -> Result<Vec<Block>, RenderError> {
    let lines = wrap_text(text, Size::a4().width - 2.0 * MARGIN_X, INSTRUCTION_SIZE);
    if lines.len() > INSTRUCTION_CAPACITY {
        return Err(RenderError::Other(format!(
            "check-in instructions need {} lines, only {} fit on the page",
            lines.len(),
            INSTRUCTION_CAPACITY
        )));
    }
    Ok(lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let baseline = INSTRUCTION_TOP - INSTRUCTION_LEADING * i as f32;
            Block::text(MARGIN_X, baseline, INSTRUCTION_SIZE, line)
        })
        .collect())
}

pub fn page(pass: &BoardingPass, env: &RenderEnv) -> Result<PageSpec, BoardingPassError> {
    let payload = pass.payload(ArtifactKind::Electronic);
    let (width, height) = BARCODE_PIXELS;
    let barcode = env.encoder().encode(&payload, Symbology::Pdf417, width, height)?;

    let rows = summary_rows(pass, false);
    let page_size = Size::a4();

    let mut blocks = AGENT.blocks(&rows)?;
    blocks.push(Block::text(225.0, CUT_LINE_Y + 8.0, INSTRUCTION_SIZE, CUT_HINT));
    blocks.push(Block::line(
        Point::new(MARGIN_X, CUT_LINE_Y),
        Point::new(page_size.width - MARGIN_X, CUT_LINE_Y),
        1.0,
        Some(DashPattern::new(1.0, 2.0)),
    ));
    blocks.extend(CUSTOMER.blocks(&rows)?);
    blocks.extend(instruction_blocks(env.instructions())?);
    blocks.push(Block::text(25.0, 40.0, FOOTER_SIZE, FOOTER));

    Ok(PageSpec::new(FOOTER, page_size)
        .with_images(vec![barcode])
        .with_blocks(blocks))
}

pub fn compose(pass: &BoardingPass, env: &RenderEnv) -> Result<Vec<u8>, BoardingPassError> {
    let spec = page(pass, env)?;
    Ok(env.renderer().render(&spec)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::fixtures;

    fn text_blocks(spec: &PageSpec) -> Vec<(f32, &str)> {
        spec.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) => Some((t.baseline, t.content.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn instructions_sit_between_the_copies() {
        let spec = page(&fixtures::pass(), &RenderEnv::bundled()).unwrap();
        let instructions: Vec<_> = text_blocks(&spec)
            .into_iter()
            .filter(|(y, _)| *y <= INSTRUCTION_TOP && *y >= INSTRUCTION_FLOOR)
            .collect();
        assert!(!instructions.is_empty());
        assert!(INSTRUCTION_FLOOR > CUSTOMER.frame.top());
        assert!(INSTRUCTION_TOP < CUSTOMER.label_baseline);
    }

    #[test]
    fn instructions_may_fill_the_gap_exactly() {
        let full = "line\n".repeat(INSTRUCTION_CAPACITY);
        let blocks = instruction_blocks(&full).unwrap();
        assert_eq!(blocks.len(), 23);
        let lowest = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) => Some(t.baseline),
                _ => None,
            })
            .fold(f32::MAX, f32::min);
        assert!(lowest >= INSTRUCTION_FLOOR);
    }

    #[test]
    fn overflowing_instructions_fail_the_render() {
        let long = "line\n".repeat(INSTRUCTION_CAPACITY + 1);
        assert!(matches!(instruction_blocks(&long), Err(RenderError::Other(_))));

        let env = RenderEnv::builder()
            .with_instructions("word ".repeat(5000))
            .build()
            .unwrap();
        assert!(matches!(
            compose(&fixtures::pass(), &env),
            Err(BoardingPassError::Render(RenderError::Other(_)))
        ));
    }

    #[test]
    fn barcode_is_rotated_a_quarter_turn_in_both_copies() {
        let spec = page(&fixtures::pass(), &RenderEnv::bundled()).unwrap();
        let transforms: Vec<Transform> = spec
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Image(image) => Some(image.transform),
                _ => None,
            })
            .collect();
        assert_eq!(transforms.len(), 2);
        for (transform, stub) in transforms.iter().zip([&AGENT, &CUSTOMER]) {
            let center = transform.apply(Point::new(0.5, 0.5));
            assert!((center.x - stub.barcode_center().unwrap().x).abs() < 1e-3);
            assert!((center.y - stub.barcode_center_y).abs() < 1e-3);
            // the long side of the code now runs vertically
            let [a, b, ..] = transform.to_array();
            assert!(a.abs() < 1e-3 && (b.abs() - BARCODE_SIZE.width).abs() < 1e-3);
        }
    }

    #[test]
    fn barcode_stays_clear_of_both_halves() {
        let spec = page(&fixtures::pass(), &RenderEnv::bundled()).unwrap();
        let transforms = spec.blocks.iter().filter_map(|b| match b {
            Block::Image(image) => Some(image.transform),
            _ => None,
        });
        for (transform, stub) in transforms.zip([&AGENT, &CUSTOMER]) {
            let (gutter_left, gutter_right) = stub.table().column_span(SPACER_COLUMN).unwrap();
            let xs: Vec<f32> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
                .into_iter()
                .map(|(x, y)| transform.apply(Point::new(x, y)).x)
                .collect();
            let left = xs.iter().copied().fold(f32::MAX, f32::min);
            let right = xs.iter().copied().fold(f32::MIN, f32::max);
            // the passenger half ends where the gutter starts
            assert!(left > gutter_left && right < gutter_right, "{left}..{right}");
        }
    }

    #[test]
    fn gate_is_not_printed() {
        let spec = page(&fixtures::pass().with_gate("45C"), &RenderEnv::bundled()).unwrap();
        assert!(text_blocks(&spec).iter().all(|(_, text)| !text.contains("45C")));
    }
}
