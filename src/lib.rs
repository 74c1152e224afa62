//! m-ary Heap Priority Queue for Rust
//!
//! This crate provides [`MaryHeap`], a priority queue stored as an implicit
//! m-ary heap in a contiguous vector. The branching factor `m` (at least 2)
//! and the priority predicate are chosen when the heap is built.
//!
//! # Features
//!
//! - **Any branching factor**: binary, ternary, 4-ary, ... heaps from one type
//! - **Custom priority**: min-first, max-first, by projected key, or any
//!   `Fn(&T, &T) -> bool` closure (see [`compare`])
//! - **Checked access**: `peek`/`pop` on an empty heap return
//!   [`HeapError::Empty`] and leave the heap untouched
//! - **Serializable settings**: [`HeapConfig`] loads from host config files
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{HeapError, MaryHeap};
//!
//! let mut heap = MaryHeap::new(2)?;
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x);
//! }
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
//!
//! assert!(matches!(MaryHeap::<i32>::new(1), Err(HeapError::Configuration { .. })));
//! # Ok::<(), HeapError>(())
//! ```
//!
//! `MaryHeap` does no internal locking; share it across threads behind a
//! `Mutex` or similar.

pub mod compare;
pub mod config;
pub mod mary;
pub mod traits;

pub use config::HeapConfig;
pub use mary::MaryHeap;
pub use traits::{Heap, HeapError};
