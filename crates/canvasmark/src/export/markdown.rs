//! Markdown outline exporter.
//!
//! Groups become headings, nested one level deeper per nesting depth; leaves
//! become bullets under the heading of their group. Elements outside every
//! group are listed at the end under a top-level heading.
//!
//! ```text
//! ## Training
//!
//! - Warm-up
//! ### Week 1
//!
//!   - Long run
//!   - File: plans/week1.md
//!
//!
//! # Without group
//!
//! - Loose idea
//!
//! ```
//!
//! The exporter first produces a flat list of [`Fragment`]s and then joins
//! their Markdown forms, so each fragment's text is decided in one place.

use std::borrow::Cow;

use canvasmark_core::element::{Element, ElementKind, first_line};

use crate::{
    config::{MAX_INDENT_WIDTH, OutlineConfig},
    export::Exporter,
    structure::{Child, GroupForest, GroupIndex},
};

/// Heading level of root groups.
const ROOT_HEADING_LEVEL: usize = 2;

/// Deepest heading level Markdown supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Heading level of the section listing ungrouped elements.
const UNGROUPED_HEADING_LEVEL: usize = 1;

/// Heading level of a group at `depth` (roots at depth 0).
pub fn heading_level(depth: usize) -> usize {
    depth
        .saturating_add(ROOT_HEADING_LEVEL)
        .min(MAX_HEADING_LEVEL)
}

/// One-line description of an element as shown in a bullet.
///
/// | kind  | description                         |
/// |-------|-------------------------------------|
/// | text  | first line of the text              |
/// | file  | `File: <path>`                      |
/// | group | `Group: <label>`                    |
/// | other | the raw type tag                    |
///
/// Missing payloads describe as empty strings.
pub fn describe(element: &Element) -> Cow<'_, str> {
    match element.kind() {
        ElementKind::Text { text } => Cow::Borrowed(first_line(text.as_deref().unwrap_or(""))),
        ElementKind::File { path } => Cow::Owned(format!("File: {}", path.as_deref().unwrap_or(""))),
        ElementKind::Group { label } => {
            Cow::Owned(format!("Group: {}", label.as_deref().unwrap_or("")))
        }
        ElementKind::Other { tag } => Cow::Borrowed(tag),
    }
}

/// A piece of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// `#`-prefixed heading line.
    Heading { level: usize, text: Cow<'a, str> },
    /// Bullet line, indented by its depth.
    Bullet { depth: usize, text: Cow<'a, str> },
    /// Empty line.
    Blank,
}

impl Fragment<'_> {
    /// The Markdown line of this fragment, including its line break.
    ///
    /// `indent_width` is clamped to [`MAX_INDENT_WIDTH`].
    pub fn to_markdown(&self, indent_width: usize) -> String {
        match self {
            Fragment::Heading { level, text } => {
                format!("{} {text}\n", "#".repeat((*level).min(MAX_HEADING_LEVEL)))
            }
            Fragment::Bullet { depth, text } => {
                let indent = depth.saturating_mul(indent_width.min(MAX_INDENT_WIDTH));
                format!("{}- {text}\n", " ".repeat(indent))
            }
            Fragment::Blank => "\n".to_string(),
        }
    }
}

/// Exports a [`GroupForest`] as a nested Markdown outline.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownExporter<'c> {
    config: &'c OutlineConfig,
}

impl<'c> MarkdownExporter<'c> {
    pub fn new(config: &'c OutlineConfig) -> Self {
        Self { config }
    }

    /// All fragments of the outline, in output order.
    ///
    /// Root groups come first in document order, each followed by its whole
    /// subtree; the ungrouped section follows only if there are ungrouped
    /// elements.
    pub fn fragments<'a>(&self, forest: &GroupForest<'a>) -> Vec<Fragment<'a>>
    where
        'c: 'a,
    {
        let mut fragments: Vec<Fragment<'a>> = forest
            .roots()
            .iter()
            .flat_map(|&root| self.group_fragments(forest, root, 0))
            .collect();

        if !forest.ungrouped().is_empty() {
            fragments.push(Fragment::Heading {
                level: UNGROUPED_HEADING_LEVEL,
                text: Cow::Borrowed(self.config.ungrouped_title()),
            });
            fragments.push(Fragment::Blank);
            fragments.extend(forest.ungrouped().iter().map(|&leaf| Fragment::Bullet {
                depth: 0,
                text: describe(leaf),
            }));
            fragments.push(Fragment::Blank);
        }

        fragments
    }

    /// Fragments of the group at `idx` and everything nested in it.
    fn group_fragments<'a>(
        &self,
        forest: &GroupForest<'a>,
        idx: GroupIndex,
        depth: usize,
    ) -> Vec<Fragment<'a>>
    where
        'c: 'a,
    {
        let node = forest.node(idx);
        let title = node
            .group()
            .label()
            .unwrap_or(self.config.group_placeholder());

        let mut fragments = vec![
            Fragment::Heading {
                level: heading_level(depth),
                text: Cow::Borrowed(title),
            },
            Fragment::Blank,
        ];

        for child in node.children() {
            match *child {
                Child::Group(nested) => {
                    fragments.extend(self.group_fragments(forest, nested, depth + 1));
                }
                Child::Leaf(leaf) => fragments.push(Fragment::Bullet {
                    depth,
                    text: describe(leaf),
                }),
            }
        }

        fragments.push(Fragment::Blank);
        fragments
    }
}

impl Exporter for MarkdownExporter<'_> {
    fn export(&self, forest: &GroupForest<'_>) -> String {
        let indent_width = self.config.indent_width();
        self.fragments(forest)
            .iter()
            .map(|fragment| fragment.to_markdown(indent_width))
            .collect()
    }
}
