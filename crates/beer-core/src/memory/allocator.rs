//! Identity allocation

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, increasing positive identifiers
///
/// Each entity kind owns its own allocator. Values are never handed out
/// twice, even across concurrent callers.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Resume allocation after previously issued identifiers. Zero is never issued.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Retire and return the next identifier
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`IdAllocator::next`] would return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
