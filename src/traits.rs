//! Common trait and error type for priority queues
//!
//! This module provides the [`Heap`] trait, the small surface every priority
//! queue in this crate exposes:
//!
//! - `push` inserts an element
//! - `peek` borrows the element with the highest priority
//! - `pop` removes and returns the element with the highest priority
//! - `len` / `is_empty` report the size
//!
//! Unlike `std::collections::BinaryHeap`, which returns `Option`, reading or
//! removing from an empty heap is reported as [`HeapError::Empty`]. A failed
//! `pop` never modifies the heap.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap could not be constructed with the requested settings
    ///
    /// Raised when the branching factor is smaller than 2 or a
    /// [`HeapConfig`](crate::config::HeapConfig) fails validation.
    #[error("invalid heap configuration: {reason}")]
    Configuration { reason: String },
    /// `peek` or `pop` was called on a heap holding no elements
    #[error("heap is empty")]
    Empty,
}

impl HeapError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("Rejected heap configuration: {reason}");
        HeapError::Configuration { reason }
    }
}

/// Base trait for priority queues
///
/// The element with the highest priority is decided by the queue's own
/// ordering (for [`MaryHeap`](crate::MaryHeap), its comparator).
///
/// # Example
///
/// ```rust
/// use mary_heap::{Heap, HeapError, MaryHeap};
///
/// fn drain<H: Heap<u32>>(heap: &mut H) -> Vec<u32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Ok(item) = heap.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = MaryHeap::new(4)?;
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.pop(), Err(HeapError::Empty));
/// # Ok::<(), HeapError>(())
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) swaps, amortized O(1) allocation.
    fn push(&mut self, item: T);

    /// Returns the highest priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements, in which
    /// case the heap is left untouched.
    ///
    /// # Time Complexity
    /// Depends on the implementation; O(m log_m n) for an m-ary
    /// [`MaryHeap`](crate::MaryHeap).
    fn pop(&mut self) -> Result<T, HeapError>;
}
