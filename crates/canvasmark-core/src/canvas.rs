//! The canvas: an ordered list of elements with id-keyed lookup.

use std::collections::HashMap;

use crate::{
    element::{Connection, Element},
    identifier::Id,
};

/// All elements and connections of one canvas, in document order.
///
/// Element ids are expected to be unique; the loader rejects duplicates
/// before a `Canvas` is built. If duplicates slip through, lookups by id
/// resolve to the last element carrying that id.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    elements: Vec<Element>,
    connections: Vec<Connection>,
    by_id: HashMap<Id, usize>,
}

impl Canvas {
    /// Create a canvas, numbering elements by their position in `elements`.
    pub fn new(mut elements: Vec<Element>, connections: Vec<Connection>) -> Self {
        let mut by_id = HashMap::with_capacity(elements.len());
        for (order, element) in elements.iter_mut().enumerate() {
            element.set_order(order);
            by_id.insert(element.id(), order);
        }

        Self {
            elements,
            connections,
            by_id,
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All connections in document order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up an element by id.
    pub fn element(&self, id: Id) -> Option<&Element> {
        self.by_id.get(&id).map(|&idx| &self.elements[idx])
    }

    /// Group elements in document order.
    pub fn groups(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|element| element.is_group())
    }

    /// Non-group elements in document order.
    pub fn leaves(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|element| !element.is_group())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the canvas holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
