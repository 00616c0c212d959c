//! Canvasmark - Turn spatial canvas documents into nested Markdown outlines.
//!
//! A canvas places notes, files and groups on an infinite plane. Canvasmark
//! recovers the hierarchy implied by that layout: an element belongs to the
//! smallest group whose rectangle contains its top-left corner, and groups
//! nest the same way. The result is rendered as Markdown headings and
//! bullets.

pub mod config;
pub mod export;
pub mod structure;

mod error;

pub use canvasmark_core::{canvas, element, geometry, identifier};

pub use error::CanvasmarkError;

use log::{debug, info, trace};

use canvas::Canvas;
use config::AppConfig;
use export::{Exporter, markdown::MarkdownExporter};
use structure::GroupForest;

/// Builder for parsing canvases and rendering their outlines.
///
/// # Examples
///
/// ```
/// use canvasmark::{OutlineBuilder, config::AppConfig};
///
/// let source = r#"{"nodes":[
///     {"id":"r","type":"group","label":"R","x":0,"y":0,"width":100,"height":100},
///     {"id":"s","type":"group","label":"S","x":10,"y":10,"width":50,"height":50},
///     {"id":"t","type":"text","text":"Hello\nWorld","x":20,"y":20,"width":10,"height":10}
/// ],"edges":[]}"#;
///
/// let builder = OutlineBuilder::new(AppConfig::default());
/// let canvas = builder.parse(source).expect("Failed to parse");
/// let outline = builder.render_outline(&canvas);
///
/// assert_eq!(outline, "## R\n\n### S\n\n  - Hello\n\n\n");
/// ```
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    config: AppConfig,
}

impl OutlineBuilder {
    /// Create a new outline builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse canvas JSON into the element model.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasmarkError::Parse`] with every diagnostic of the source
    /// and the source itself, so the caller can point at the offending nodes.
    pub fn parse(&self, source: &str) -> Result<Canvas, CanvasmarkError> {
        info!("Parsing canvas");

        let canvas = canvasmark_parser::parse(source)
            .map_err(|err| CanvasmarkError::new_parse_error(err, source))?;

        debug!(
            elements = canvas.len(),
            connections = canvas.connections().len();
            "Canvas parsed successfully"
        );
        trace!(canvas:?; "Parsed canvas");

        Ok(canvas)
    }

    /// Resolve which group every element of `canvas` belongs to.
    pub fn resolve<'a>(&self, canvas: &'a Canvas) -> GroupForest<'a> {
        GroupForest::from_canvas(canvas)
    }

    /// Render the Markdown outline of `canvas`.
    pub fn render_outline(&self, canvas: &Canvas) -> String {
        info!("Resolving containment");
        let forest = self.resolve(canvas);

        let outline = MarkdownExporter::new(self.config.outline()).export(&forest);

        info!(bytes = outline.len(); "Outline rendered successfully");
        outline
    }
}
