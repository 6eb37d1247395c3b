#![allow(dead_code)]

pub mod fixtures;

use boardpass::{
    BarcodeEncoder, BarcodeError, RenderEnv, Symbology, extract_text_lines,
};
use boardpass_types::Raster;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a rendered PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// `[width, height]` of the first page's MediaBox.
    pub fn page_size(&self) -> Result<[f32; 2], Box<dyn std::error::Error>> {
        let pages = self.doc.get_pages();
        let page_id = pages.get(&1).ok_or("no first page")?;
        let media_box = self.doc.get_dictionary(*page_id)?.get(b"MediaBox")?.as_array()?;
        Ok([media_box[2].as_float()?, media_box[3].as_float()?])
    }

    pub fn text_lines(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(extract_text_lines(&self.bytes)?)
    }
}

/// An encoder that refuses every payload.
#[derive(Debug)]
pub struct FailingEncoder;

impl BarcodeEncoder for FailingEncoder {
    fn encode(
        &self,
        _payload: &str,
        symbology: Symbology,
        _width: u32,
        _height: u32,
    ) -> Result<Raster, BarcodeError> {
        Err(BarcodeError::Encode {
            symbology,
            message: "payload rejected".to_string(),
        })
    }
}

pub fn failing_env() -> Result<RenderEnv, boardpass::BoardingPassError> {
    RenderEnv::builder()
        .with_encoder(std::sync::Arc::new(FailingEncoder))
        .build()
}

/// Drops the fields that legitimately differ between two renders of the
/// same event, after undoing line folding.
pub fn stable_calendar_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .replace("\r\n ", "")
        .lines()
        .filter(|line| !line.starts_with("UID:") && !line.starts_with("DTSTAMP:"))
        .collect::<Vec<_>>()
        .join("\n")
}
