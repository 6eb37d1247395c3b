//! The small-screen pass: Aztec code on top, a two-column summary below.

use crate::channel::ArtifactKind;
use crate::env::RenderEnv;
use crate::error::BoardingPassError;
use crate::layout::TableLayout;
use crate::pass::BoardingPass;
use boardpass_barcode::Symbology;
use boardpass_render_lopdf::{Block, PageSpec};
use boardpass_types::{Rect, Size, Transform};

pub const PAGE_SIZE: Size = Size::new(220.0, 340.0);
pub const HEADER: &str = "DD Airways";
pub const FOOTER: &str = "Mobile Boarding Pass";

const TITLE_SIZE: f32 = 16.0;
const BARCODE_PIXELS: u32 = 135;
const BARCODE_BOX: Rect = Rect::new(42.5, 170.0, 135.0, 135.0);

fn rows(pass: &BoardingPass) -> Vec<[String; 2]> {
    let flight = pass.flight();
    let passenger = pass.passenger();
    vec![
        [passenger.first_name().to_string(), passenger.last_name().to_string()],
        [flight.carrier().to_string(), flight.number().to_string()],
        [flight.origin().code().to_string(), flight.destination().code().to_string()],
        [flight.departure_time(), flight.arrival_time()],
        [passenger.travel_class().to_string(), pass.seat().to_string()],
        ["DATE".to_string(), flight.departure_date()],
        ["PNR".to_string(), pass.pnr().to_string()],
    ]
}

pub fn page(pass: &BoardingPass, env: &RenderEnv) -> Result<PageSpec, BoardingPassError> {
    let payload = pass.payload(ArtifactKind::Mobile);
    let barcode = env
        .encoder()
        .encode(&payload, Symbology::Aztec, BARCODE_PIXELS, BARCODE_PIXELS)?;

    let table = TableLayout::compact(36.0, BARCODE_BOX.y - 6.0, 148.0);

    let mut blocks = vec![
        Block::text(70.0, 315.0, TITLE_SIZE, HEADER),
        Block::image(0, Transform::place(BARCODE_BOX)),
    ];
    blocks.extend(table.cells(&rows(pass)));
    blocks.push(Block::text(35.0, 10.0, TITLE_SIZE, FOOTER));

    Ok(PageSpec::new(FOOTER, PAGE_SIZE)
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

    #[test]
    fn table_sits_below_the_barcode_and_above_the_footer() {
        let spec = page(&fixtures::pass(), &RenderEnv::bundled()).unwrap();
        let baselines: Vec<f32> = spec
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) if t.font_size == crate::layout::CELL_FONT_SIZE => Some(t.baseline),
                _ => None,
            })
            .collect();
        assert_eq!(baselines.len(), 14);
        assert!(baselines.iter().all(|&y| y < BARCODE_BOX.y && y > 10.0 + TITLE_SIZE));
    }

    #[test]
    fn gate_is_never_shown() {
        let spec = page(&fixtures::pass().with_gate("45C"), &RenderEnv::bundled()).unwrap();
        let shows_gate = spec
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Text(t) if t.content.contains("45C")));
        assert!(!shows_gate);
    }
}
