//! m-ary heap
//!
//! A heap stored implicitly in a contiguous vector, where every node has up
//! to `m` children. Node `i` has its children at `m*i + 1 ..= m*i + m` and its
//! parent at `(i - 1) / m`. Order is decided by a [`Compare`] predicate, so
//! the same container works as a min-heap, a max-heap, or a queue keyed on
//! any projection of its elements.
//!
//! Wider nodes make the tree shallower: `push` does fewer comparisons
//! (O(log_m n)) while `pop` does more per level (O(m log_m n)).
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `push`    | O(log_m n)     |
//! | `pop`     | O(m log_m n)   |
//! | `peek`    | O(1)           |
//! | `len`     | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{HeapError, MaryHeap};
//! use mary_heap::compare::MaxFirst;
//!
//! let mut heap = MaryHeap::with_comparator(3, MaxFirst)?;
//! for x in [4, 9, 1, 7] {
//!     heap.push(x);
//! }
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.peek(), Ok(&7));
//! # Ok::<(), HeapError>(())
//! ```

use std::fmt;

use crate::compare::{Compare, MinFirst};
use crate::config::{HeapConfig, MIN_ARITY};
use crate::traits::{Heap, HeapError};

/// A priority queue backed by an m-ary heap.
///
/// The backing vector is private: the heap exposes only push, peek, pop and
/// size queries, never random access or iteration.
pub struct MaryHeap<T, C = MinFirst> {
    /// Heap-ordered elements; index 0 is the root
    items: Vec<T>,
    arity: usize,
    compare: C,
}

impl<T: PartialOrd> MaryHeap<T> {
    /// Creates an empty min-heap with `arity` children per node.
    ///
    /// # Errors
    /// Returns [`HeapError::Configuration`] if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(arity, MinFirst)
    }

    /// Creates an empty binary min-heap.
    pub fn binary() -> Self {
        Self::build(MIN_ARITY, MinFirst)
    }
}

impl<T, C: Compare<T>> MaryHeap<T, C> {
    /// Creates an empty heap ordered by `compare`.
    ///
    /// `compare.has_priority(a, b)` must return true when `a` has to come
    /// out before `b`.
    ///
    /// # Errors
    /// Returns [`HeapError::Configuration`] if `arity < 2`.
    pub fn with_comparator(arity: usize, compare: C) -> Result<Self, HeapError> {
        Self::from_config(&HeapConfig::with_arity(arity), compare)
    }

    /// Creates an empty heap from validated settings.
    ///
    /// # Errors
    /// Returns [`HeapError::Configuration`] if `config` is invalid or its
    /// capacity cannot be allocated.
    pub fn from_config(config: &HeapConfig, compare: C) -> Result<Self, HeapError> {
        let config = config.validated()?;
        let mut heap = Self::build(config.arity, compare);
        let capacity = config.capacity;
        heap.items.try_reserve(capacity).map_err(|err| {
            HeapError::configuration(format!("cannot reserve {capacity} elements: {err}"))
        })?;
        Ok(heap)
    }

    fn build(arity: usize, compare: C) -> Self {
        log::trace!("Creating {arity}-ary heap");
        Self {
            items: Vec::new(),
            arity,
            compare,
        }
    }

    /// Returns the number of children per node.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts `item`, moving it up until its parent is not worse than it.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns the highest priority element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or_else(|| {
            log::trace!("peek on empty heap");
            HeapError::Empty
        })
    }

    /// Removes and returns the highest priority element.
    ///
    /// The last element takes the root's place and is moved down until no
    /// child has priority over it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements. The heap
    /// is not modified in that case.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            log::trace!("pop on empty heap");
            return Err(HeapError::Empty);
        }

        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Drops every element, keeping the arity and comparator.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Releases spare capacity in the backing vector.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Consumes the heap, returning its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap-order invariant over the whole backing vector.
    ///
    /// Returns false if some element has priority over its parent. This is a
    /// full O(n) scan intended for tests and debugging.
    pub fn verify_heap_property(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let parent = self.parent(i);
            !self.compare.has_priority(&self.items[i], &self.items[parent])
        })
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    /// Index of the first child of `index`, `None` if it is past `usize::MAX`
    #[inline]
    fn first_child(&self, index: usize) -> Option<usize> {
        index.checked_mul(self.arity)?.checked_add(1)
    }

    /// Index of the last child of `index`, saturating at `usize::MAX`
    #[inline]
    fn last_child(&self, index: usize) -> usize {
        index.saturating_mul(self.arity).saturating_add(self.arity)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self
                .compare
                .has_priority(&self.items[index], &self.items[parent])
            {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let first = match self.first_child(index) {
                Some(first) if first < len => first,
                _ => break,
            };

            // Ties keep the leftmost candidate.
            let end = self.last_child(index).min(len - 1);
            let mut best = first;
            for child in first + 1..=end {
                if self
                    .compare
                    .has_priority(&self.items[child], &self.items[best])
                {
                    best = child;
                }
            }

            if self
                .compare
                .has_priority(&self.items[best], &self.items[index])
            {
                self.items.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for MaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        MaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MaryHeap::push(self, item)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        MaryHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        MaryHeap::pop(self)
    }
}

impl<T: PartialOrd> Default for MaryHeap<T> {
    fn default() -> Self {
        Self::binary()
    }
}

impl<T, C: Compare<T>> Extend<T> for MaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for MaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::binary();
        heap.extend(iter);
        heap
    }
}

impl<T: Clone, C: Clone> Clone for MaryHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            arity: self.arity,
            compare: self.compare.clone(),
        }
    }
}

impl<T, C> fmt::Debug for MaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaryHeap")
            .field("len", &self.items.len())
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ByKey, MaxFirst};

    #[test]
    fn test_basic_operations() {
        let mut heap = MaryHeap::new(2).unwrap();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        for x in [5, 3, 8, 1, 9, 2] {
            heap.push(x);
        }

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Ok(&1));

        let mut popped = Vec::new();
        while let Ok(x) = heap.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_max_first_ternary() {
        let mut heap = MaryHeap::with_comparator(3, MaxFirst).unwrap();
        heap.extend([4, 9, 1, 7]);
        assert_eq!(heap.peek(), Ok(&9));
        assert_eq!(heap.pop(), Ok(9));
        assert_eq!(heap.peek(), Ok(&7));
    }

    #[test]
    fn test_invalid_arity() {
        for arity in [0, 1] {
            assert!(matches!(
                MaryHeap::<i32>::new(arity),
                Err(HeapError::Configuration { .. })
            ));
        }
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: MaryHeap<i32> = MaryHeap::binary();
        assert_eq!(heap.peek(), Err(HeapError::Empty));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert_eq!(heap.len(), 0);

        heap.push(1);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.peek(), Err(HeapError::Empty));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_index_arithmetic() {
        let heap: MaryHeap<i32> = MaryHeap::new(3).unwrap();
        assert_eq!(heap.first_child(0), Some(1));
        assert_eq!(heap.last_child(0), 3);
        assert_eq!(heap.first_child(2), Some(7));
        assert_eq!(heap.last_child(2), 9);
        for child in 7..=9 {
            assert_eq!(heap.parent(child), 2);
        }
        assert_eq!(heap.parent(1), 0);
        assert_eq!(heap.parent(3), 0);
    }

    #[test]
    fn test_ties_keep_leftmost_child() {
        // Order only by the key; the tag records which element moved.
        let mut heap: MaryHeap<(u8, char), _> =
            MaryHeap::with_comparator(3, ByKey::new(|p: &(u8, char)| p.0)).unwrap();
        // Root 0, children 5a 5b 5c, no swaps during push.
        heap.extend([(0, 'r'), (5, 'a'), (5, 'b'), (5, 'c'), (9, 'z')]);
        assert_eq!(heap.pop(), Ok((0, 'r')));
        // (9, 'z') moved to the root and was replaced by the leftmost tie.
        assert_eq!(heap.peek(), Ok(&(5, 'a')));
        assert!(heap.verify_heap_property());
    }

    #[test]
    fn test_partial_order_stays_valid() {
        let mut heap = MaryHeap::new(4).unwrap();
        heap.extend([3.0, f64::NAN, 1.0, 2.0, f64::NAN, 0.5]);
        assert!(heap.verify_heap_property());
        while heap.pop().is_ok() {
            assert!(heap.verify_heap_property());
        }
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap: MaryHeap<_> = [7, 3, 9, 3, 1].into_iter().collect();
        assert_eq!(heap.arity(), 2);
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 3, 7, 9]);
    }

    #[test]
    fn test_huge_arity() {
        let mut heap = MaryHeap::new(usize::MAX).unwrap();
        assert_eq!(heap.first_child(1), None);
        assert_eq!(heap.last_child(1), usize::MAX);

        heap.extend([1, 5, 2, 3]);
        assert!(heap.verify_heap_property());
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_unreservable_capacity() {
        let config: HeapConfig =
            serde_json::from_str(&format!(r#"{{"arity":2,"capacity":{}}}"#, usize::MAX)).unwrap();
        let result = MaryHeap::<u64, _>::from_config(&config, MinFirst);
        assert!(matches!(result, Err(HeapError::Configuration { .. })));
    }

    #[test]
    fn test_from_config() {
        let config = HeapConfig::with_arity(4).capacity(64);
        let heap: MaryHeap<u32, _> = MaryHeap::from_config(&config, MinFirst).unwrap();
        assert_eq!(heap.arity(), 4);

        let bad = HeapConfig::with_arity(1);
        assert!(MaryHeap::<u32, _>::from_config(&bad, MinFirst).is_err());
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut heap = MaryHeap::with_comparator(5, MaxFirst).unwrap();
        heap.extend(0..100);
        heap.clear();
        heap.shrink_to_fit();
        assert!(heap.is_empty());
        assert_eq!(heap.arity(), 5);
        heap.extend([1, 3, 2]);
        assert_eq!(heap.peek(), Ok(&3));
    }

    #[test]
    fn test_debug_hides_items() {
        let heap: MaryHeap<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{heap:?}"), "MaryHeap { len: 3, arity: 2, .. }");
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = MaryHeap::new(4).unwrap();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MaryHeap::new(4).unwrap();

        for i in (0..100).rev() {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }
}
