//! Configuration types for outline rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so a
//! configuration file only needs the keys it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`OutlineConfig`] - Texts and indentation used by the Markdown outline.
//!
//! # Example
//!
//! ```
//! # use canvasmark::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.outline().ungrouped_title(), "Without group");
//! assert_eq!(config.outline().indent_width(), 2);
//! ```

use serde::Deserialize;

/// Largest accepted [`OutlineConfig::indent_width`].
///
/// The exporter clamps wider settings to this value.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Outline configuration section.
    #[serde(default)]
    outline: OutlineConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given outline settings.
    pub fn new(outline: OutlineConfig) -> Self {
        Self { outline }
    }

    /// Returns the outline configuration.
    pub fn outline(&self) -> &OutlineConfig {
        &self.outline
    }
}

/// Settings of the Markdown outline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Heading text for a group without a label.
    group_placeholder: String,

    /// Title of the trailing section listing elements outside every group.
    ungrouped_title: String,

    /// Spaces per nesting level in front of a leaf bullet, at most
    /// [`MAX_INDENT_WIDTH`].
    indent_width: usize,
}

impl OutlineConfig {
    /// Creates a new [`OutlineConfig`].
    ///
    /// # Arguments
    ///
    /// * `group_placeholder` - Heading text for unlabeled groups.
    /// * `ungrouped_title` - Title of the section of ungrouped elements.
    /// * `indent_width` - Spaces per depth level before leaf bullets.
    pub fn new(
        group_placeholder: impl Into<String>,
        ungrouped_title: impl Into<String>,
        indent_width: usize,
    ) -> Self {
        Self {
            group_placeholder: group_placeholder.into(),
            ungrouped_title: ungrouped_title.into(),
            indent_width,
        }
    }

    pub fn group_placeholder(&self) -> &str {
        &self.group_placeholder
    }

    pub fn ungrouped_title(&self) -> &str {
        &self.ungrouped_title
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new("Group", "Without group", 2)
    }
}
