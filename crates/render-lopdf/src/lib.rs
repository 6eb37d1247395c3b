//! Single-page PDF drawing engine using lopdf.
//!
//! Composers describe a page up front as an immutable [`PageSpec`]: a page
//! size, the images it references and a flat list of positioned [`Block`]s.
//! A [`DocumentRenderer`] turns that description into PDF bytes in one call,
//! so there is never a partially drawn document to reason about.
//!
//! [`extract_text_lines`] reads the text back out of a rendered page, ordered
//! top to bottom, and is what the tests use to check headers and footers.

mod error;
mod extract;
mod helpers;
mod page;
mod renderer;

pub use error::RenderError;
pub use extract::extract_text_lines;
pub use page::{Block, DashPattern, FrameBlock, ImageBlock, LineBlock, PageSpec, TextBlock};
pub use renderer::{DocumentRenderer, LopdfRenderer};
