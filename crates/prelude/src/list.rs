//! Equality and the list operations that depend on it.

use plainlang_equal::StructurallyComparable;

/// `a == b`
pub fn equals<T: StructurallyComparable>((a, b): (T, T)) -> bool {
    plainlang_equal::equals(&a, &b)
}

/// `a /= b`
pub fn not_equals<T: StructurallyComparable>((a, b): (T, T)) -> bool {
    plainlang_equal::not_equals(&a, &b)
}

/// The list without later duplicates.
pub fn nub<T: StructurallyComparable>(xs: Vec<T>) -> Vec<T> {
    plainlang_equal::nub(xs)
}

/// Whether `x` occurs in `xs`.
pub fn is_member<T, L>((xs, x): (L, T)) -> bool
where
    T: StructurallyComparable,
    L: AsRef<[T]>,
{
    plainlang_equal::is_member(xs.as_ref(), &x)
}

/// The value paired with the first occurrence of `key`, if any.
pub fn lookup<K, V, L>((pairs, key): (L, K)) -> Option<V>
where
    K: StructurallyComparable,
    V: Clone,
    L: AsRef<[(K, V)]>,
{
    plainlang_equal::lookup(pairs.as_ref(), &key).cloned()
}

/// `xs` without its first occurrence of `x`.
pub fn delete_first<T: StructurallyComparable>((xs, x): (Vec<T>, T)) -> Vec<T> {
    plainlang_equal::delete_first(xs, &x)
}

/// `xs` followed by the new distinct elements of `ys`.
pub fn union<T: StructurallyComparable>((xs, ys): (Vec<T>, Vec<T>)) -> Vec<T> {
    plainlang_equal::union(xs, ys)
}

/// Elements of `xs` that also occur in `ys`.
pub fn intersect<T: StructurallyComparable>((xs, ys): (Vec<T>, Vec<T>)) -> Vec<T> {
    plainlang_equal::intersect(xs, &ys)
}
