//! plainlang-prelude - Standard operations in argument-tuple style
//!
//! plainlang functions take all of their arguments as a single tuple, so a
//! student writes `isMember(xs, x)` rather than `isMember xs x`. This crate
//! is that calling convention applied to the runtime core: every function
//! with more than one parameter takes one tuple, and each delegates to
//! [`plainlang_equal`] or [`plainlang_random`].
//!
//! # Examples
//!
//! ```
//! use plainlang_prelude::{equals, is_member, lookup, nub, seed_randoms, shuffle};
//!
//! assert!(equals((vec![1, 2], vec![1, 2])));
//! assert_eq!(nub(vec![1, 2, 1]), vec![1, 2]);
//! assert!(is_member((vec!["a", "b"], "b")));
//! assert_eq!(lookup((vec![("x", 1)], "x")), Some(1));
//!
//! let randoms: Vec<f64> = seed_randoms(0.5).take(3).collect();
//! assert_eq!(randoms.len(), 3);
//! assert_eq!(shuffle((Vec::<i32>::new(), 0.5)), Vec::<i32>::new());
//! ```

pub mod list;
pub mod random;

pub use list::{delete_first, equals, intersect, is_member, lookup, not_equals, nub, union};
pub use random::{seed_randoms, shuffle};

pub use plainlang_equal::{structural_eq, Number, StructurallyComparable, Value};
pub use plainlang_random::{LazyStream, RandomStream};
