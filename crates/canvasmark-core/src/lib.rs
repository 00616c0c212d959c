//! Canvasmark Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Canvasmark pipeline. It includes:
//!
//! - **Identifiers**: Interned element identifiers ([`identifier::Id`])
//! - **Geometry**: Integer points and rectangles ([`geometry`] module)
//! - **Elements**: Canvas elements, their kinds and connections ([`element`] module)
//! - **Canvas**: The ordered element list handed to the resolver ([`canvas::Canvas`])

pub mod canvas;
pub mod element;
pub mod geometry;
pub mod identifier;
