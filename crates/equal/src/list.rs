//! List operations driven by structural equality.
//!
//! All of these are quadratic in the worst case; plainlang programs work on
//! small lists and the element types need not be hashable or ordered.

use crate::structural::StructurallyComparable;

/// Removes later duplicates, keeping the first occurrence of each element in
/// its original position.
///
/// # Examples
///
/// ```
/// use plainlang_equal::nub;
///
/// assert_eq!(nub(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn nub<T: StructurallyComparable>(xs: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for x in xs {
        if !is_member(&unique, &x) {
            unique.push(x);
        }
    }
    unique
}

/// Returns `true` if some element of `xs` equals `x`.
pub fn is_member<T: StructurallyComparable>(xs: &[T], x: &T) -> bool {
    xs.iter().any(|y| y.structurally_equals(x))
}

/// Finds the value paired with the first key equal to `key`.
///
/// # Examples
///
/// ```
/// use plainlang_equal::lookup;
///
/// let pairs = [("a", 1), ("b", 2), ("a", 3)];
/// assert_eq!(lookup(&pairs, &"a"), Some(&1));
/// assert_eq!(lookup(&pairs, &"z"), None);
/// ```
pub fn lookup<'a, K: StructurallyComparable, V>(pairs: &'a [(K, V)], key: &K) -> Option<&'a V> {
    pairs
        .iter()
        .find(|(k, _)| k.structurally_equals(key))
        .map(|(_, v)| v)
}

/// Position of the first element equal to `x`.
pub fn elem_index<T: StructurallyComparable>(xs: &[T], x: &T) -> Option<usize> {
    xs.iter().position(|y| y.structurally_equals(x))
}

/// Removes the first element equal to `x`, if there is one.
pub fn delete_first<T: StructurallyComparable>(mut xs: Vec<T>, x: &T) -> Vec<T> {
    if let Some(index) = elem_index(&xs, x) {
        xs.remove(index);
    }
    xs
}

/// `xs` followed by the distinct elements of `ys` that are not in `xs`.
///
/// Duplicates already present in `xs` are kept.
pub fn union<T: StructurallyComparable>(mut xs: Vec<T>, ys: Vec<T>) -> Vec<T> {
    let extra: Vec<T> = nub(ys)
        .into_iter()
        .filter(|y| !is_member(&xs, y))
        .collect();
    xs.extend(extra);
    xs
}

/// Elements of `xs` that also occur in `ys`, in the order of `xs`.
pub fn intersect<T: StructurallyComparable>(xs: Vec<T>, ys: &[T]) -> Vec<T> {
    xs.into_iter().filter(|x| is_member(ys, x)).collect()
}
