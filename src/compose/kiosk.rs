//! The landscape kiosk pass, shared by the kiosk and airport-counter channels.
//!
//! The page is split by a dashed rule into a passenger copy on the left and
//! a narrow airline copy on the right. Both halves carry the same PDF417
//! code, scaled into each region from a single encoding.

use super::{header_pair, summary_rows};
use crate::channel::ArtifactKind;
use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::layout::TableLayout;
use crate::pass::BoardingPass;
use boardpass_barcode::Symbology;
use boardpass_render_lopdf::{Block, DashPattern, PageSpec};
use boardpass_types::{Point, Rect, Size, Transform};

pub const PAGE_SIZE: Size = Size::new(595.0, 220.0);
pub const HEADER: &str = "DD Airways Kiosk Check-In";
pub const AIRLINE_HEADER: &str = "Kiosk Check-In";

const HEADER_SIZE: f32 = 24.0;
const HEADER_BASELINE: f32 = 190.0;
const TABLE_TOP: f32 = 176.0;
/// x of the rule between the passenger and airline regions.
const DIVIDER_X: f32 = 410.0;
const BARCODE_PIXELS: (u32, u32) = (400, 80);
const PASSENGER_BARCODE: Rect = Rect::new(50.0, 2.0, 300.0, 52.0);
const AIRLINE_BARCODE: Rect = Rect::new(420.0, 2.0, 120.0, 52.0);

pub fn page(pass: &BoardingPass, env: &RenderEnv) -> Result<PageSpec, BoardingPassError> {
    let payload = pass.payload(ArtifactKind::Kiosk);
    let (width, height) = BARCODE_PIXELS;
    let barcode = env.encoder().encode(&payload, Symbology::Pdf417, width, height)?;

    let table = TableLayout::summary(14.0, TABLE_TOP, 567.0);

    let mut blocks = Vec::new();
    blocks.extend(header_pair(
        (60.0, HEADER),
        (420.0, AIRLINE_HEADER),
        HEADER_BASELINE,
        HEADER_SIZE,
    ));
    blocks.extend(table.cells(&summary_rows(pass, true)));
    blocks.push(Block::image(0, Transform::place(PASSENGER_BARCODE)));
    blocks.push(Block::image(0, Transform::place(AIRLINE_BARCODE)));
    blocks.push(Block::line(
        Point::new(DIVIDER_X, PAGE_SIZE.height),
        Point::new(DIVIDER_X, 0.0),
        1.0,
        Some(DashPattern::new(3.0, 3.0)),
    ));

    Ok(PageSpec::new(HEADER, PAGE_SIZE)
        .with_images(vec![barcode])
        .with_blocks(blocks))
}

pub fn compose(pass: &BoardingPass, env: &RenderEnv) -> Result<Vec<u8>, BoardingPassError> {
    let spec = page(pass, env)?;
    Ok(env.renderer().render(&spec)?)
}
