//! Exporters turning a resolved [`GroupForest`] into text.

pub mod markdown;

use crate::structure::GroupForest;

/// Renders a resolved forest to a complete document.
pub trait Exporter {
    fn export(&self, forest: &GroupForest<'_>) -> String;
}
