use boardpass_barcode::BarcodeError;
use boardpass_render_lopdf::RenderError;
use boardpass_resource::ResourceError;
use thiserror::Error;

/// Everything that can fail while rendering or packaging a boarding pass.
#[derive(Error, Debug)]
pub enum BoardingPassError {
    #[error("Barcode encoding failed: {0}")]
    Barcode(#[from] BarcodeError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Resource loading failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Package(#[from] zip::result::ZipError),
}
