//! # coalescing-set
//!
//! A compact set over any totally ordered domain, stored as a union of
//! disjoint, automatically merged half-open intervals.
//!
//! ## Overview
//!
//! - **Membership**: `contains` answers from one search over the boundary
//!   sequence, linear for short sets and binary for long ones
//! - **Insertion**: `insert(low, high)` merges `[low, high)` with everything
//!   it touches; `high <= low` inserts the open-ended `[low, +∞)`
//! - **Traversal**: `intervals` and `for_each_interval` walk the coalesced
//!   intervals in ascending order
//!
//! ## Example
//!
//! ```rust
//! use coalescing_set::prelude::*;
//!
//! let mut set = IntervalSet::new();
//! set.insert(1, 3);
//! set.insert(6, 8);
//! set.insert(0, 9);
//! assert_eq!(set.to_string(), "[0,9)");
//! assert!(set.contains(&8));
//! assert!(!set.contains(&9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use coalescing_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::interval::*;
}

pub mod interval;
