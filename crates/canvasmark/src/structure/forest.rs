//! The resolved forest of group nodes.
//!
//! Group nodes live in an arena indexed by [`GroupIndex`]; a node refers to
//! its nested groups by index and to its leaf elements by reference into the
//! [`Canvas`], so the forest borrows the canvas and owns no element data.

use std::collections::HashMap;

use log::{debug, trace};

use canvasmark_core::{canvas::Canvas, element::Element, identifier::Id};

use super::containment::{deepest_group, direct_parent};

/// Slot of a group node in a [`GroupForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupIndex(usize);

/// A child entry of a group node.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    /// A nested group.
    Group(GroupIndex),
    /// A non-group element assigned to this group.
    Leaf(&'a Element),
}

/// One group of the canvas together with its ordered children.
#[derive(Debug)]
pub struct GroupNode<'a> {
    group: &'a Element,
    parent: Option<GroupIndex>,
    children: Vec<Child<'a>>,
}

impl<'a> GroupNode<'a> {
    /// The group element this node wraps.
    pub fn group(&self) -> &'a Element {
        self.group
    }

    /// The direct parent group, or `None` for a root.
    pub fn parent(&self) -> Option<GroupIndex> {
        self.parent
    }

    /// Nested groups and leaves, in document order of their elements.
    pub fn children(&self) -> &[Child<'a>] {
        &self.children
    }
}

/// Groups of a canvas arranged as a forest, plus the leaves no group contains.
///
/// # Examples
///
/// ```
/// # use canvasmark::structure::{Child, GroupForest};
/// let canvas = canvasmark_parser::parse(r#"{"nodes":[
///     {"id":"r","type":"group","label":"R","x":0,"y":0,"width":100,"height":100},
///     {"id":"t","type":"text","text":"Hello","x":20,"y":20,"width":10,"height":10}
/// ]}"#).expect("valid canvas");
///
/// let forest = GroupForest::from_canvas(&canvas);
/// let root = forest.node(forest.roots()[0]);
/// assert_eq!(root.group().label(), Some("R"));
/// assert!(matches!(root.children(), [Child::Leaf(_)]));
/// assert!(forest.ungrouped().is_empty());
/// ```
#[derive(Debug)]
pub struct GroupForest<'a> {
    nodes: Vec<GroupNode<'a>>,
    roots: Vec<GroupIndex>,
    ungrouped: Vec<&'a Element>,
    by_id: HashMap<Id, GroupIndex>,
}

impl<'a> GroupForest<'a> {
    /// Resolve the containment structure of `canvas`.
    ///
    /// Every group gets at most one parent: the smallest of the groups that
    /// directly enclose it. Every leaf goes to the smallest group containing
    /// its origin. Roots, children and ungrouped leaves all keep document
    /// order.
    pub fn from_canvas(canvas: &'a Canvas) -> Self {
        let groups: Vec<&Element> = canvas.groups().collect();

        let mut nodes = Vec::with_capacity(groups.len());
        let mut by_id = HashMap::with_capacity(groups.len());
        for (idx, &group) in groups.iter().enumerate() {
            by_id.insert(group.id(), GroupIndex(idx));
            nodes.push(GroupNode {
                group,
                parent: None,
                children: Vec::new(),
            });
        }

        let mut forest = Self {
            nodes,
            roots: Vec::new(),
            ungrouped: Vec::new(),
            by_id,
        };

        // Walking the canvas in document order keeps every list ordered.
        for element in canvas.elements() {
            if element.is_group() {
                forest.attach_group(element, &groups);
            } else {
                forest.attach_leaf(element, &groups);
            }
        }

        debug!(
            groups = forest.nodes.len(),
            roots = forest.roots.len(),
            ungrouped = forest.ungrouped.len();
            "Containment resolved"
        );

        forest
    }

    fn attach_group(&mut self, group: &'a Element, groups: &[&'a Element]) {
        let idx = self.by_id[&group.id()];
        match direct_parent(group, groups) {
            Some(parent) => {
                let parent_idx = self.by_id[&parent.id()];
                trace!(group:% = group, parent:% = parent; "Nested group");
                self.nodes[idx.0].parent = Some(parent_idx);
                self.nodes[parent_idx.0].children.push(Child::Group(idx));
            }
            None => {
                trace!(group:% = group; "Root group");
                self.roots.push(idx);
            }
        }
    }

    fn attach_leaf(&mut self, leaf: &'a Element, groups: &[&'a Element]) {
        match deepest_group(leaf, groups) {
            Some(group) => {
                trace!(leaf:% = leaf, group:% = group; "Assigned leaf");
                let idx = self.by_id[&group.id()];
                self.nodes[idx.0].children.push(Child::Leaf(leaf));
            }
            None => {
                trace!(leaf:% = leaf; "Ungrouped leaf");
                self.ungrouped.push(leaf);
            }
        }
    }

    /// Root groups in document order.
    pub fn roots(&self) -> &[GroupIndex] {
        &self.roots
    }

    /// The node stored at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was produced by another forest with more groups.
    pub fn node(&self, idx: GroupIndex) -> &GroupNode<'a> {
        &self.nodes[idx.0]
    }

    /// The node wrapping the group with id `id`, if it is a group.
    pub fn find(&self, id: Id) -> Option<&GroupNode<'a>> {
        self.by_id.get(&id).map(|&idx| self.node(idx))
    }

    /// Id of the direct parent group of the group `id`.
    pub fn parent_of(&self, id: Id) -> Option<Id> {
        let parent = self.find(id)?.parent?;
        Some(self.node(parent).group.id())
    }

    /// Leaves contained by no group, in document order.
    pub fn ungrouped(&self) -> &[&'a Element] {
        &self.ungrouped
    }

    /// Number of group nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the canvas has no groups.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
