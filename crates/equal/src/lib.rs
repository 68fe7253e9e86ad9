//! plainlang-equal - Structural deep equality for plainlang
//!
//! Equality in plainlang is purely structural: two values are equal when they
//! are built from the same constructors with equal contents, regardless of
//! where they live in memory. This crate provides the capability trait, a
//! dynamic value model, and the list operations that depend on equality.

pub mod list;
pub mod structural;
pub mod value;

// Re-exports for convenience
pub use list::{delete_first, elem_index, intersect, is_member, lookup, nub, union};
pub use structural::{equals, not_equals, StructurallyComparable};
pub use value::{Number, Value};
