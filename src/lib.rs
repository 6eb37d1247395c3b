//! Boarding pass rendering.
//!
//! A [`BoardingPass`] is rendered for a check-in [`Channel`] into an ordered
//! list of [`Artifact`]s:
//!
//! | Channel | Artifacts |
//! |---|---|
//! | Airport counter | kiosk pass |
//! | Kiosk | kiosk pass |
//! | Desktop | electronic pass, calendar event |
//! | Mobile | mobile pass, calendar event |
//!
//! Documents are single-page PDFs drawn by `boardpass-render-lopdf`; the
//! calendar event always attaches the mobile pass.

pub mod channel;
pub mod compose;
pub mod config;
pub mod env;
pub mod error;
pub mod layout;
pub mod package;
pub mod pass;
pub mod payload;

pub use channel::{Artifact, ArtifactKind, Channel, UnknownChannel};
pub use config::RenderConfig;
pub use env::{RenderEnv, RenderEnvBuilder};
pub use error::BoardingPassError;
pub use package::write_artifacts_for;
pub use pass::BoardingPass;
pub use payload::build_payload;

pub use boardpass_barcode::{BarcodeEncoder, BarcodeError, RxingEncoder, Symbology};
pub use boardpass_render_lopdf::{DocumentRenderer, LopdfRenderer, RenderError, extract_text_lines};
pub use boardpass_resource::{
    FilesystemResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
};
pub use boardpass_types::{Airport, Flight, Passenger};
