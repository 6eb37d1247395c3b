//! Barcode encoding for boarding passes.
//!
//! Composers ask for a payload to be encoded in one of two symbologies at a
//! target pixel size and receive a grayscale [`Raster`] they can hand to the
//! drawing engine. The pixel-level encoding itself is delegated to `rxing`.

mod error;

pub use error::BarcodeError;

use boardpass_types::Raster;
use rxing::{BarcodeFormat, MultiFormatWriter, Writer};
use std::fmt;

/// The barcode schemes printed on passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// Stacked linear code used on kiosk and desktop passes.
    Pdf417,
    /// Square matrix code used on mobile passes.
    Aztec,
}

impl Symbology {
    fn format(self) -> BarcodeFormat {
        match self {
            Symbology::Pdf417 => BarcodeFormat::PDF_417,
            Symbology::Aztec => BarcodeFormat::AZTEC,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbology::Pdf417 => f.write_str("PDF417"),
            Symbology::Aztec => f.write_str("Aztec"),
        }
    }
}

/// Turns a payload into pixels.
///
/// The target size is a hint: encoders may return a larger bitmap when the
/// payload does not fit, and callers scale the image onto the page anyway.
pub trait BarcodeEncoder: Send + Sync + fmt::Debug {
    fn encode(
        &self,
        payload: &str,
        symbology: Symbology,
        width: u32,
        height: u32,
    ) -> Result<Raster, BarcodeError>;
}

/// The default encoder backed by `rxing`'s multi-format writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct RxingEncoder;

impl BarcodeEncoder for RxingEncoder {
    fn encode(
        &self,
        payload: &str,
        symbology: Symbology,
        width: u32,
        height: u32,
    ) -> Result<Raster, BarcodeError> {
        let to_i32 = |v: u32| {
            i32::try_from(v).map_err(|_| BarcodeError::Encode {
                symbology,
                message: format!("target dimension {v} is out of range"),
            })
        };
        let matrix = MultiFormatWriter::default()
            .encode(payload, &symbology.format(), to_i32(width)?, to_i32(height)?)
            .map_err(|e| BarcodeError::Encode {
                symbology,
                message: e.to_string(),
            })?;

        let (w, h) = (matrix.width(), matrix.height());
        let mut pixels = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                pixels.push(if matrix.get(x, y) { 0 } else { 255 });
            }
        }
        log::debug!(
            "Encoded {} barcode: {}x{} px for {} payload bytes",
            symbology,
            w,
            h,
            payload.len()
        );

        Raster::new(w, h, pixels)
            .filter(|r| !r.is_empty())
            .ok_or(BarcodeError::EmptyMatrix(symbology))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aztec_is_square() {
        let raster = RxingEncoder
            .encode("9W465BOMMAA18OCT2610D0018First Last", Symbology::Aztec, 135, 135)
            .unwrap();
        assert_eq!(raster.width(), raster.height());
        assert!(raster.pixels().contains(&0));
        assert!(raster.pixels().contains(&255));
    }

    #[test]
    fn pdf417_is_wider_than_tall() {
        let raster = RxingEncoder
            .encode("9W465BOMMAA18OCT2645C10D0018First Last", Symbology::Pdf417, 400, 80)
            .unwrap();
        assert!(raster.width() > raster.height());
    }
}
