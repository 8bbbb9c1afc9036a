//! Pure math/data for geometry in Cascade
//!
//! This crate contains the geometry primitives shared by the Cascade
//! layout engine and its consumers.

mod geometry;

pub use geometry::*;
