//! Heap construction settings
//!
//! [`HeapConfig`] bundles the branching factor and the initial capacity of a
//! [`MaryHeap`](crate::MaryHeap). It can be embedded in a host application's
//! own configuration file:
//!
//! ```rust
//! use mary_heap::config::HeapConfig;
//!
//! let config: HeapConfig = serde_json::from_str(r#"{ "arity": 4 }"#).unwrap();
//! assert_eq!(config.arity, 4);
//! assert_eq!(config.capacity, 0);
//! assert!(config.validated().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::traits::HeapError;

/// Smallest branching factor a heap accepts.
pub const MIN_ARITY: usize = 2;

/// Settings used to build a [`MaryHeap`](crate::MaryHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HeapConfig {
    /// Number of children per node. Must be at least [`MIN_ARITY`].
    #[validate(range(min = 2))]
    pub arity: usize,
    /// Number of elements to pre-allocate room for.
    pub capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            arity: MIN_ARITY,
            capacity: 0,
        }
    }
}

impl HeapConfig {
    /// Settings for a heap with `arity` children per node and no
    /// pre-allocation.
    pub fn with_arity(arity: usize) -> Self {
        Self {
            arity,
            ..Self::default()
        }
    }

    /// Builds settings from a signed branching factor.
    ///
    /// Zero, one and negative values are all rejected.
    ///
    /// # Errors
    /// Returns [`HeapError::Configuration`] if `arity < 2`.
    pub fn from_signed_arity(arity: i64) -> Result<Self, HeapError> {
        let arity = usize::try_from(arity).map_err(|_| {
            HeapError::configuration(format!("arity must be at least {MIN_ARITY}, got {arity}"))
        })?;
        Self::with_arity(arity).validated()
    }

    /// Sets the number of elements to pre-allocate room for.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the settings, returning them unchanged when valid.
    ///
    /// # Errors
    /// Returns [`HeapError::Configuration`] if validation fails.
    pub fn validated(self) -> Result<Self, HeapError> {
        self.validate().map_err(|_| {
            HeapError::configuration(format!(
                "arity must be at least {MIN_ARITY}, got {}",
                self.arity
            ))
        })?;
        Ok(self)
    }
}
