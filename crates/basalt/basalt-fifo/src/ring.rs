//! Ring capacity configuration and cursor index arithmetic.
//!
//! This module provides the foundational primitives for the bounded ring:
//! - Configuration with capacity validation
//! - Wraparound cursor advancement

use crate::fifo::FifoError;

/// Configuration for a ring buffer.
///
/// Any strictly positive capacity is accepted. Cursors wrap by an
/// increment-and-reset step rather than bitmasking, so capacities are not
/// restricted to powers of two.
#[derive(Debug, Copy, Clone)]
pub struct RingConfig {
    /// Number of usable slots in the ring. Always greater than zero.
    capacity: usize,
}

impl RingConfig {
    /// Creates a new ring configuration with the specified capacity.
    ///
    /// # Errors
    /// Returns [`FifoError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Example
    /// ```
    /// use basalt_fifo::RingConfig;
    /// let cfg = RingConfig::new(12).unwrap(); // any positive size works
    /// assert_eq!(cfg.capacity(), 12);
    /// assert!(RingConfig::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        if capacity == 0 {
            return Err(FifoError::InvalidCapacity);
        }
        Ok(Self { capacity })
    }

    /// Returns the number of slots in the ring.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Advances a cursor by one slot, wrapping at `capacity`.
///
/// Equivalent to `(index + 1) % capacity` without the division. Every
/// cursor move in the crate goes through this function, so staying inside
/// `[0, capacity)` is a property of this one step.
///
/// # Examples
///
/// With `capacity = 3`:
/// ```text
/// index = 0 → 1
/// index = 1 → 2
/// index = 2 → 0  (wraps around)
/// ```
#[inline(always)]
pub fn advance(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next == capacity { 0 } else { next }
}
