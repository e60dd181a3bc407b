//! Coalescing interval sets.
//!
//! This module provides [`IntervalSet`], a set over any totally ordered type
//! stored as a union of disjoint half-open intervals:
//!
//! - [`IntervalSet`]: the set itself, kept in minimal coalesced form
//! - [`Interval`]: a borrowed view of one stored interval
//! - [`Intervals`]: ascending iterator over the stored intervals
//! - [`SearchStrategy`]: how membership lookups locate a value
//! - [`BoundaryOrderError`]: rejection from checked construction
//!
//! # Encoding
//!
//! The set owns one strictly increasing boundary sequence. Even positions open
//! an interval and odd positions close it, so `[1, 3, 6, 8]` is
//! `[1,3) ∪ [6,8)` and `[1, 3, 6]` is `[1,3) ∪ [6,+∞)`. Insertion restores
//! this invariant every time, merging whatever the new interval touches.
//!
//! # Examples
//!
//! ## Coalescing
//!
//! ```rust
//! use coalescing_set::interval::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.insert(1, 3);
//! set.insert(6, 8);
//! set.insert(3, 6);
//!
//! let mut direct = IntervalSet::new();
//! direct.insert(1, 8);
//! assert_eq!(set, direct);
//! ```
//!
//! ## Open-ended intervals
//!
//! ```rust
//! use coalescing_set::interval::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.insert(3u8, 5);
//! set.insert(8, 8);
//! assert_eq!(set.to_string(), "[3,5)[8...");
//!
//! // Anything at or above the open start is already covered
//! set.insert(9, 12);
//! assert_eq!(set.to_string(), "[3,5)[8...");
//! assert!(set.contains(&200));
//! ```

mod error;
mod iter;
mod search;
mod set;

pub use error::BoundaryOrderError;
pub use iter::Interval;
pub use iter::Intervals;
pub use search::LINEAR_SEARCH_THRESHOLD;
pub use search::SearchStrategy;
pub use set::IntervalSet;
