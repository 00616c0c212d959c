//! Error and diagnostic system for the canvas loader.
//!
//! Every problem found while loading a canvas is reported as a [`Diagnostic`]:
//! a severity, an optional [`ErrorCode`], a message, labelled byte ranges of
//! the source document and an optional help line. Loading stops at the end of
//! a phase, so one run can report every duplicate id or dangling edge at once.
//! The diagnostics of a failed load are wrapped in [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use canvasmark_parser::error::{Diagnostic, ErrorCode};
//! # use canvasmark_parser::Span;
//!
//! let diag = Diagnostic::error("node id `a1` is used more than once")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(120..180), "duplicate node")
//!     .with_secondary_label(Span::new(12..70), "first used here")
//!     .with_help("give every node a unique `id`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
