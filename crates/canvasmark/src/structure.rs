//! Containment resolution: from a flat canvas to a forest of groups.
//!
//! Groups nest by geometry. A group whose origin lies inside another group's
//! rectangle is a candidate child of it; the forest keeps only the *direct*
//! relation (no third group in between) and gives every group at most one
//! parent. Non-group elements are attached to the smallest group containing
//! their origin.
//!
//! - [`containment`] holds the geometric predicates and selection rules.
//! - [`GroupForest`] is the resolved arena of group nodes.

pub mod containment;
mod forest;

pub use forest::{Child, GroupForest, GroupIndex, GroupNode};
