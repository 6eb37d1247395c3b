use crate::Symbology;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BarcodeError {
    #[error("{symbology} encoding failed: {message}")]
    Encode { symbology: Symbology, message: String },

    #[error("{0} encoder produced an empty matrix")]
    EmptyMatrix(Symbology),
}
