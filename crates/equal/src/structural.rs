use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Structural equality, independent of identity and of `PartialEq`.
///
/// Two values are structurally equal when they are built from the same
/// constructors with pairwise equal contents:
/// - Primitives (bool, integers, char, text) compare by value
/// - Floats compare numerically, with `0.0 == -0.0` and `NaN` equal to `NaN`
///   so that the relation stays reflexive
/// - Sequences compare element-by-element and require equal length
/// - `Option` and `Result` require the same variant, then compare payloads
/// - Tuples compare component-wise from left to right
///
/// Function types deliberately have no implementation, so comparing them is
/// rejected at compile time.
///
/// # Examples
///
/// ```
/// use plainlang_equal::StructurallyComparable;
///
/// let a = vec![(1, Some("x".to_string())), (2, None)];
/// let b = vec![(1, Some("x".to_string())), (2, None)];
/// let c = vec![(1, Some("y".to_string())), (2, None)];
///
/// assert!(a.structurally_equals(&b));
/// assert!(!a.structurally_equals(&c));
/// ```
pub trait StructurallyComparable {
    /// Returns `true` if `self` and `other` are structurally equal.
    fn structurally_equals(&self, other: &Self) -> bool;

    /// Negation of [`structurally_equals`](Self::structurally_equals).
    fn structurally_differs(&self, other: &Self) -> bool {
        !self.structurally_equals(other)
    }
}

/// Deep equality between two values of the same type.
///
/// # Examples
///
/// ```
/// use plainlang_equal::equals;
///
/// assert!(equals(&[1.0, 2.0], &[1.0, 2.0]));
/// assert!(!equals(&Some(1), &None));
/// ```
pub fn equals<T: StructurallyComparable + ?Sized>(a: &T, b: &T) -> bool {
    a.structurally_equals(b)
}

/// Deep inequality, always the negation of [`equals`].
pub fn not_equals<T: StructurallyComparable + ?Sized>(a: &T, b: &T) -> bool {
    a.structurally_differs(b)
}

macro_rules! by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StructurallyComparable for $ty {
                #[inline]
                fn structurally_equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

by_value!(
    (),
    bool,
    char,
    str,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

macro_rules! by_numeric_value {
    ($($ty:ty),*) => {
        $(
            impl StructurallyComparable for $ty {
                #[inline]
                fn structurally_equals(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

by_numeric_value!(f32, f64);

impl<T: StructurallyComparable + ?Sized> StructurallyComparable for &T {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        (**self).structurally_equals(*other)
    }
}

impl<T: StructurallyComparable + ?Sized> StructurallyComparable for Box<T> {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        (**self).structurally_equals(&**other)
    }
}

impl<T: StructurallyComparable + ?Sized> StructurallyComparable for Rc<T> {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        (**self).structurally_equals(&**other)
    }
}

impl<T: StructurallyComparable + ?Sized> StructurallyComparable for Arc<T> {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        (**self).structurally_equals(&**other)
    }
}

impl<T: StructurallyComparable> StructurallyComparable for [T] {
    fn structurally_equals(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other)
            .all(|(a, b)| a.structurally_equals(b))
    }
}

impl<T: StructurallyComparable, const N: usize> StructurallyComparable for [T; N] {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        self.as_slice().structurally_equals(other.as_slice())
    }
}

impl<T: StructurallyComparable> StructurallyComparable for Vec<T> {
    #[inline]
    fn structurally_equals(&self, other: &Self) -> bool {
        self.as_slice().structurally_equals(other.as_slice())
    }
}

impl<T: StructurallyComparable> StructurallyComparable for VecDeque<T> {
    fn structurally_equals(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other)
            .all(|(a, b)| a.structurally_equals(b))
    }
}

impl<T: StructurallyComparable> StructurallyComparable for Option<T> {
    fn structurally_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.structurally_equals(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: StructurallyComparable, E: StructurallyComparable> StructurallyComparable for Result<T, E> {
    fn structurally_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Ok(a), Ok(b)) => a.structurally_equals(b),
            (Err(a), Err(b)) => a.structurally_equals(b),
            _ => false,
        }
    }
}

macro_rules! tuple_impls {
    ($( ($($name:ident $idx:tt),+) )+) => {
        $(
            impl<$($name: StructurallyComparable),+> StructurallyComparable for ($($name,)+) {
                #[inline]
                fn structurally_equals(&self, other: &Self) -> bool {
                    $(self.$idx.structurally_equals(&other.$idx))&&+
                }
            }
        )+
    };
}

tuple_impls! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

/// Implements [`StructurallyComparable`] for a user-defined type by comparing
/// its fields.
///
/// Structs list their fields by name or by position. Enums list each variant
/// with the binding names of its positional fields, or the names of its named
/// fields in braces. Fields are compared left to right and comparison stops at
/// the first mismatch. Generic types are not supported; implement the trait
/// by hand for those.
///
/// # Examples
///
/// ```
/// use plainlang_equal::{structural_eq, StructurallyComparable};
///
/// struct Point { x: f64, y: f64 }
/// structural_eq!(struct Point { x, y });
///
/// struct Meters(f64);
/// structural_eq!(struct Meters(0));
///
/// enum Shape { Circle(f64), Rect(f64, f64), Label { text: String }, Empty }
/// structural_eq!(enum Shape { Circle(r), Rect(w, h), Label { text }, Empty });
///
/// assert!(Point { x: 1.0, y: 2.0 }.structurally_equals(&Point { x: 1.0, y: 2.0 }));
/// assert!(Meters(3.0).structurally_equals(&Meters(3.0)));
/// assert!(!Shape::Rect(1.0, 2.0).structurally_equals(&Shape::Rect(2.0, 1.0)));
/// assert!(!Shape::Circle(0.0).structurally_equals(&Shape::Empty));
/// let label = |text: &str| Shape::Label { text: text.into() };
/// assert!(label("a").structurally_equals(&label("a")));
/// ```
#[macro_export]
macro_rules! structural_eq {
    (struct $ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::StructurallyComparable for $ty {
            fn structurally_equals(&self, other: &Self) -> bool {
                true $(&& $crate::StructurallyComparable::structurally_equals(&self.$field, &other.$field))*
            }
        }
    };
    (struct $ty:ident ( $($idx:tt),* $(,)? )) => {
        impl $crate::StructurallyComparable for $ty {
            fn structurally_equals(&self, other: &Self) -> bool {
                true $(&& $crate::StructurallyComparable::structurally_equals(&self.$idx, &other.$idx))*
            }
        }
    };
    (enum $ty:ident {
        $($variant:ident $(( $($binding:ident),* $(,)? ))? $({ $($field:ident),* $(,)? })?),* $(,)?
    }) => {
        impl $crate::StructurallyComparable for $ty {
            #[allow(unreachable_patterns)]
            fn structurally_equals(&self, other: &Self) -> bool {
                match self {
                    $(
                        $ty::$variant $(( $($binding),* ))? $({ $($field),* })? => {
                            let lhs = ( $( $($binding,)* )? $( $($field,)* )? );
                            match other {
                                $ty::$variant $(( $($binding),* ))? $({ $($field),* })? => {
                                    let rhs = ( $( $($binding,)* )? $( $($field,)* )? );
                                    $crate::StructurallyComparable::structurally_equals(&lhs, &rhs)
                                }
                                _ => false,
                            }
                        }
                    )*
                }
            }
        }
    };
}
