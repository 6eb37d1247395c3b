//! Static resources for boarding pass rendering.
//!
//! Resources such as the desktop pass check-in instructions are read once
//! when the render environment is built. Providers abstract where the bytes
//! come from:
//!
//! - [`FilesystemResourceProvider`]: files below a base directory
//! - [`InMemoryResourceProvider`]: pre-populated map, used for bundled text and tests

mod error;
mod filesystem;
mod provider;

pub use error::ResourceError;
pub use filesystem::FilesystemResourceProvider;
pub use provider::{InMemoryResourceProvider, ResourceProvider, SharedResourceData};
