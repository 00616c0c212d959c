//! Canvas element types.
//!
//! An [`Element`] is one positioned item of a canvas. Its [`ElementKind`]
//! carries the kind-specific payload, so a group can only ever hold a label
//! and a file node can only ever hold a path.

use std::fmt;

use crate::{geometry::Rect, identifier::Id};

/// Returns the part of `text` before the first line break, or all of it.
///
/// # Examples
///
/// ```
/// # use canvasmark_core::element::first_line;
/// assert_eq!(first_line("Hello\nWorld"), "Hello");
/// assert_eq!(first_line("single"), "single");
/// ```
pub fn first_line(text: &str) -> &str {
    text.split_once('\n').map_or(text, |(first, _)| first)
}

/// The kind of a canvas element together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A container whose rectangle groups other elements.
    Group { label: Option<String> },

    /// A text note. The text may span several lines.
    Text { text: Option<String> },

    /// A reference to a file, usually a vault-relative path.
    File { path: Option<String> },

    /// Any other element type, kept by its raw type tag.
    Other { tag: String },
}

impl ElementKind {
    /// Returns the type tag this kind is read from and written as.
    pub fn tag(&self) -> &str {
        match self {
            ElementKind::Group { .. } => "group",
            ElementKind::Text { .. } => "text",
            ElementKind::File { .. } => "file",
            ElementKind::Other { tag } => tag,
        }
    }

    /// Returns `true` for [`ElementKind::Group`].
    pub fn is_group(&self) -> bool {
        matches!(self, ElementKind::Group { .. })
    }
}

/// A single positioned item on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: Id,
    order: usize,
    bounds: Rect,
    kind: ElementKind,
}

impl Element {
    /// Create a new element.
    ///
    /// The input order starts at zero and is assigned when the element is
    /// placed into a [`Canvas`](crate::canvas::Canvas).
    pub fn new(id: Id, bounds: Rect, kind: ElementKind) -> Self {
        Self {
            id,
            order: 0,
            bounds,
            kind,
        }
    }

    /// Get the element identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Zero-based position of this element in the input document.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Set the document position (builder style).
    ///
    /// Elements placed into a [`Canvas`](crate::canvas::Canvas) are renumbered
    /// by their position there.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    /// Get the rectangle occupied by the element.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Borrow the element kind and payload.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Returns `true` if this element is a group.
    pub fn is_group(&self) -> bool {
        self.kind.is_group()
    }

    /// Returns the group label, if this is a labelled group.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Group { label } => label.as_deref(),
            _ => None,
        }
    }

    /// Checks whether this element's origin lies inside `group`'s rectangle.
    pub fn is_inside(&self, group: &Element) -> bool {
        group.bounds.contains_origin_of(self.bounds)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ElementKind::Group { label } => {
                write!(f, "Group[id={}, '{}']", self.id, label.as_deref().unwrap_or(""))
            }
            ElementKind::Text { text } => write!(
                f,
                "Text[id={}, firstLine={}]",
                self.id,
                first_line(text.as_deref().unwrap_or(""))
            ),
            ElementKind::File { path } => {
                write!(f, "File[id={}, path={}]", self.id, path.as_deref().unwrap_or(""))
            }
            ElementKind::Other { tag } => write!(f, "{tag}[id={}]", self.id),
        }
    }
}

/// A directed connection between two elements.
///
/// Connections are carried through the model for other consumers; the
/// outline does not use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    source: Id,
    target: Id,
}

impl Connection {
    /// Create a new connection from `source` to `target`.
    pub fn new(source: Id, target: Id) -> Self {
        Self { source, target }
    }

    /// Get the source element id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target element id.
    pub fn target(&self) -> Id {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &str, x: i64, y: i64, text: Option<&str>) -> Element {
        Element::new(
            Id::new(id),
            Rect::new(x, y, 100, 40),
            ElementKind::Text {
                text: text.map(str::to_owned),
            },
        )
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Hello\nWorld"), "Hello");
        assert_eq!(first_line("no break"), "no break");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("\nsecond"), "");
    }

    #[test]
    fn test_kind_tag() {
        assert_eq!(ElementKind::Group { label: None }.tag(), "group");
        assert_eq!(ElementKind::Text { text: None }.tag(), "text");
        assert_eq!(ElementKind::File { path: None }.tag(), "file");
        assert_eq!(
            ElementKind::Other {
                tag: "link".to_string()
            }
            .tag(),
            "link"
        );
    }

    #[test]
    fn test_label_only_for_groups() {
        let group = Element::new(
            Id::new("g"),
            Rect::new(0, 0, 10, 10),
            ElementKind::Group {
                label: Some("Plan".to_string()),
            },
        );
        let note = text("t", 0, 0, Some("Plan"));

        assert_eq!(group.label(), Some("Plan"));
        assert_eq!(note.label(), None);
        assert!(group.is_group());
        assert!(!note.is_group());
    }

    #[test]
    fn test_is_inside_tests_origin_only() {
        let group = Element::new(
            Id::new("g"),
            Rect::new(0, 0, 50, 50),
            ElementKind::Group { label: None },
        );

        assert!(text("t1", 50, 50, None).is_inside(&group));
        assert!(!text("t2", 51, 0, None).is_inside(&group));
    }

    #[test]
    fn test_display() {
        let group = Element::new(
            Id::new("g1"),
            Rect::default(),
            ElementKind::Group {
                label: Some("Week".to_string()),
            },
        );
        let note = text("t1", 0, 0, Some("Run\n5km"));
        let file = Element::new(
            Id::new("f1"),
            Rect::default(),
            ElementKind::File {
                path: Some("plan.md".to_string()),
            },
        );
        let link = Element::new(
            Id::new("l1"),
            Rect::default(),
            ElementKind::Other {
                tag: "link".to_string(),
            },
        );

        assert_eq!(group.to_string(), "Group[id=g1, 'Week']");
        assert_eq!(note.to_string(), "Text[id=t1, firstLine=Run]");
        assert_eq!(file.to_string(), "File[id=f1, path=plan.md]");
        assert_eq!(link.to_string(), "link[id=l1]");
    }
}
