//! # Canvasmark Parser
//!
//! Loader for JSON canvas documents (the `.canvas` format written by
//! Obsidian and compatible editors). Produces the
//! [`Canvas`](canvasmark_core::canvas::Canvas) element model consumed by the
//! outline pipeline.
//!
//! ## Usage
//!
//! ```
//! # use canvasmark_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{
//!         "nodes": [
//!             {"id":"g1","type":"group","label":"Week 1","x":0,"y":0,"width":400,"height":300},
//!             {"id":"t1","type":"text","text":"Long run","x":20,"y":40,"width":200,"height":60}
//!         ],
//!         "edges": []
//!     }"#;
//!
//!     let canvas = parse(source)?;
//!     assert_eq!(canvas.len(), 2);
//!     Ok(())
//! }
//! ```

mod document;
mod elaborate;
pub mod error;
mod span;

pub use span::Span;

use canvasmark_core::canvas::Canvas;

use elaborate::Builder;
use error::ParseError;

/// Parse canvas JSON into the element model.
///
/// Unknown fields are ignored, missing `nodes`/`edges` collections count as
/// empty, and fractional coordinates are truncated toward zero.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic found when the source is
/// not valid JSON, does not have the canvas shape, reuses a node id, or has
/// an edge naming an unknown node.
pub fn parse(source: &str) -> Result<Canvas, ParseError> {
    Builder::new(source).build()
}
