//! Shared geometry primitives: the axis-aligned box and its queries.
//!
//! # Invariants
//! - Every constructed `Aabb` satisfies `min <= max` per axis.
//! - All queries are total functions; fallibility ends at construction.

pub mod aabb;

pub use aabb::{Aabb, Axis, GeometryError};

pub fn crate_info() -> &'static str {
    "mazewalk-common v0.1.0"
}
