//! Priority predicates
//!
//! A heap is ordered by a single capability: deciding whether one element
//! must come out before another. [`Compare`] captures that capability.
//!
//! `has_priority(a, b)` should return `true` only when `a` is *strictly*
//! higher priority than `b`. Returning `false` for equal elements avoids
//! needless swaps. The predicate does not have to be a total order; with a
//! partial order the heap stays valid, its extraction order among
//! incomparable elements is just unspecified.
//!
//! Provided predicates:
//!
//! | Predicate        | Comes out first                     |
//! |------------------|-------------------------------------|
//! | [`MinFirst`]     | smallest by `PartialOrd`            |
//! | [`MaxFirst`]     | largest by `PartialOrd`             |
//! | [`ByKey`]        | smallest projected `Ord` key        |
//! | `Fn(&T, &T) -> bool` | whatever the closure says       |

use std::fmt;

/// The "has priority over" capability used to order a heap.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must be extracted before `b`.
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first, using [`PartialOrd`]. The default predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: ?Sized + PartialOrd> Compare<T> for MinFirst {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first, using [`PartialOrd`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: ?Sized + PartialOrd> Compare<T> for MaxFirst {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest projected key first.
///
/// Wrap the key in [`std::cmp::Reverse`] to get largest-key-first.
///
/// ```rust
/// use mary_heap::compare::{ByKey, Compare};
///
/// let by_len = ByKey::new(|s: &&str| s.len());
/// assert!(by_len.has_priority(&"ab", &"abc"));
/// assert!(!by_len.has_priority(&"abc", &"xyz"));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Orders elements by the key `key` extracts from them.
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<F, K, T> Compare<T> for ByKey<F>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
}
