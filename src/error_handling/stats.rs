//! Failure statistics tracking.
//!
//! Counts per-rewrite failures by `ErrorType` over a single sync run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Failure counters keyed by `ErrorType`.
///
/// Every category is initialized to zero on creation, so lookups never miss.
pub struct FailureStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl FailureStats {
    /// Creates counters for every category, all at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        FailureStats { errors }
    }

    /// Increment the counter for a category.
    pub fn increment(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                error
            );
        }
    }

    /// Get the count for a category.
    pub fn get_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all categories.
    pub fn total(&self) -> usize {
        ErrorType::iter().map(|e| self.get_count(e)).sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FailureStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for error in ErrorType::iter() {
            let count = self.get_count(error);
            if count > 0 {
                map.entry(&error, &count);
            }
        }
        map.finish()
    }
}
