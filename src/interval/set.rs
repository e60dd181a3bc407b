//! The coalescing interval set.
//!
//! [`IntervalSet`] stores a union of half-open intervals as one strictly
//! increasing sequence of boundaries. Position parity carries the meaning of
//! each boundary:
//!
//! ```text
//!  index:   0       1       2       3       4
//!           [       )       [       )       [ ......
//!  value:   1       3       6       8       10
//! ```
//!
//! Even positions open an interval (inclusive), odd positions close it
//! (exclusive). An odd boundary count leaves the last interval open-ended.
//! Because touching and overlapping intervals are merged on insertion, the
//! stored sequence is always the minimal encoding of the set, and two sets are
//! equal exactly when their boundary sequences are equal.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity                     |
//! |---------------------|--------------------------------|
//! | `contains`          | O(n) below 64 boundaries, O(log n) above |
//! | `insert`            | O(n)                           |
//! | `clear`             | O(n)                           |
//! | `intervals`         | O(1) + O(n)                    |
//! | `interval_count`    | O(1)                           |

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;

use super::error::{BoundaryOrderError, first_disorder};
use super::iter::{Interval, Intervals};
use super::search::{SearchResult, SearchStrategy, is_open_boundary, linear_search};

/// Number of boundaries stored inline before spilling to the heap.
const INLINE_BOUNDARIES: usize = 8;

static_assertions::assert_impl_all!(IntervalSet<u8>: Send, Sync);
static_assertions::assert_impl_all!(IntervalSet<String>: Send, Sync);

/// A set of values stored as disjoint, automatically merged half-open intervals.
///
/// Inserting `[low, high)` merges it with every interval it overlaps or
/// touches. Inserting with `high <= low` adds the open-ended interval
/// `[low, +∞)` instead.
///
/// # Type Parameters
///
/// * `T` - The element type. Only comparison is required; no arithmetic on
///   elements is ever performed.
///
/// # Examples
///
/// ```rust
/// use coalescing_set::interval::IntervalSet;
///
/// let mut set = IntervalSet::new();
/// set.insert(1, 3);
/// set.insert(6, 8);
/// assert_eq!(set.to_string(), "[1,3)[6,8)");
///
/// // Touching intervals coalesce
/// set.insert(3, 6);
/// assert_eq!(set.to_string(), "[1,8)");
///
/// // high <= low inserts an open-ended interval
/// set.insert(10, 10);
/// assert_eq!(set.to_string(), "[1,8)[10...");
/// assert!(set.contains(&u32::MAX));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    boundaries: SmallVec<[T; INLINE_BOUNDARIES]>,
}

impl<T> IntervalSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let set: IntervalSet<u8> = IntervalSet::new();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&0));
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundaries: SmallVec::new(),
        }
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Returns `true` if the set ends with an open-ended interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(2, 4);
    /// assert!(!set.is_unbounded());
    ///
    /// set.insert_unbounded(9);
    /// assert!(set.is_unbounded());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        !is_open_boundary(self.boundaries.len())
    }

    /// Returns the number of coalesced intervals, counting a trailing
    /// open-ended interval.
    #[inline]
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.boundaries.len().div_ceil(2)
    }

    /// Returns the raw boundary sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(3, 5);
    /// set.insert(8, 8);
    /// assert_eq!(set.boundaries(), &[3, 5, 8]);
    /// ```
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &[T] {
        &self.boundaries
    }

    /// Consumes the set and returns its boundary sequence.
    #[must_use]
    pub fn into_boundaries(self) -> Vec<T> {
        self.boundaries.into_vec()
    }

    /// Returns an iterator over the coalesced intervals in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(6, 8);
    /// set.insert(1, 3);
    ///
    /// let starts: Vec<&i32> = set.intervals().map(|interval| interval.start()).collect();
    /// assert_eq!(starts, vec![&1, &6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn intervals(&self) -> Intervals<'_, T> {
        Intervals {
            chunks: self.boundaries.chunks(2),
        }
    }

    /// Returns the lowest interval, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Interval<'_, T>> {
        self.intervals().next()
    }

    /// Returns the highest interval, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Interval<'_, T>> {
        self.intervals().next_back()
    }

    /// Calls `visitor` with `(start, end)` for every interval in ascending order.
    ///
    /// A trailing open-ended interval is reported as `(start, start)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let set = IntervalSet::from_boundaries(vec![1, 3, 6]);
    /// let mut visited = Vec::new();
    /// set.for_each_interval(|start, end| visited.push((*start, *end)));
    /// assert_eq!(visited, vec![(1, 3), (6, 6)]);
    /// ```
    pub fn for_each_interval<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &T),
    {
        for interval in self.intervals() {
            let (start, end) = interval.as_pair();
            visitor(start, end);
        }
    }

    /// Removes every interval.
    #[inline]
    pub fn clear(&mut self) {
        self.boundaries.clear();
    }

    /// Returns `true` if the boundaries still fit in inline storage.
    #[cfg(test)]
    fn is_inline(&self) -> bool {
        !self.boundaries.spilled()
    }
}

impl<T: Ord> IntervalSet<T> {
    /// Creates a set from an already coalesced boundary sequence.
    ///
    /// # Preconditions
    ///
    /// `boundaries` must be strictly increasing. Even positions open an
    /// interval, odd positions close it.
    ///
    /// In debug builds, this precondition is validated with `debug_assert!`.
    /// In release builds, invalid input yields an incorrect set (logic error,
    /// not memory unsafety). Use [`IntervalSet::try_from_boundaries`] for
    /// untrusted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let set = IntervalSet::from_boundaries(vec![b'b', b'd', b'f']);
    /// assert!(set.contains(&b'c'));
    /// assert!(!set.contains(&b'e'));
    /// assert!(set.contains(&0xff));
    /// ```
    #[must_use]
    pub fn from_boundaries(boundaries: Vec<T>) -> Self {
        debug_assert!(
            first_disorder(&boundaries).is_none(),
            "{}",
            BOUNDARY_INVARIANT_PANIC_MESSAGE
        );
        Self {
            boundaries: SmallVec::from_vec(boundaries),
        }
    }

    /// Creates a set from a boundary sequence, rejecting sequences that are
    /// not strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryOrderError`] naming the first boundary that is not
    /// greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// assert!(IntervalSet::try_from_boundaries(vec![1, 3, 6]).is_ok());
    /// assert_eq!(
    ///     IntervalSet::try_from_boundaries(vec![1, 3, 3]).unwrap_err().index,
    ///     2
    /// );
    /// ```
    pub fn try_from_boundaries(boundaries: Vec<T>) -> Result<Self, BoundaryOrderError> {
        match first_disorder(&boundaries) {
            Some(index) => Err(BoundaryOrderError { index }),
            None => Ok(Self {
                boundaries: SmallVec::from_vec(boundaries),
            }),
        }
    }

    /// Returns `true` if `value` lies in any interval of the set.
    ///
    /// Short boundary sequences are scanned linearly and longer ones bisected;
    /// see [`SearchStrategy`].
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait, so an `IntervalSet<String>` can be queried with `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(6u8, 6);
    /// assert!(!set.contains(&5));
    /// assert!(set.contains(&6));
    /// assert!(set.contains(&255));
    ///
    /// let mut words = IntervalSet::new();
    /// words.insert("apple".to_string(), "cherry".to_string());
    /// assert!(words.contains("banana"));
    /// assert!(!words.contains("cherry"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.contains_with(value, SearchStrategy::default())
    }

    /// Returns `true` if `value` lies in any interval, locating it with `strategy`.
    ///
    /// The answer never depends on the strategy.
    #[must_use]
    pub fn contains_with<Q>(&self, value: &Q, strategy: SearchStrategy) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = strategy.search(&self.boundaries, value);
        // open boundaries are members, close boundaries are not
        found.is_open_slot() == found.matched
    }

    /// Adds `[low, high)` to the set, merging it with every interval it
    /// overlaps or touches.
    ///
    /// When `high <= low` the open-ended interval `[low, +∞)` is added
    /// instead, absorbing every interval that reaches `low` or beyond.
    ///
    /// # Complexity
    ///
    /// O(n): a linear scan to locate both endpoints plus one splice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::from_boundaries(vec![1, 3, 6, 8]);
    /// set.insert(4, 9);
    /// assert_eq!(set.to_string(), "[1,3)[4,9)");
    ///
    /// set.insert(0, 9);
    /// assert_eq!(set.to_string(), "[0,9)");
    ///
    /// let mut open = IntervalSet::from_boundaries(vec![3, 5, 8]);
    /// open.insert(6, 8);
    /// assert_eq!(open.to_string(), "[3,5)[6...");
    /// ```
    pub fn insert(&mut self, low: T, high: T) {
        if high <= low {
            self.insert_unbounded(low);
        } else {
            self.insert_bounded(low, high);
        }
    }

    /// Adds the open-ended interval `[low, +∞)`.
    ///
    /// Everything stored at or above `low` is absorbed into it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::IntervalSet;
    ///
    /// let mut set = IntervalSet::from_boundaries(vec![1, 3, 6, 8]);
    /// set.insert_unbounded(4);
    /// assert_eq!(set.to_string(), "[1,3)[4...");
    ///
    /// set.insert_unbounded(2);
    /// assert_eq!(set.to_string(), "[1...");
    /// ```
    pub fn insert_unbounded(&mut self, low: T) {
        let count = self.boundaries.len();
        if count == 0 {
            self.boundaries.push(low);
            self.debug_assert_coalesced();
            return;
        }

        if self.boundaries[count - 1] < low {
            // an existing open-ended interval already covers `low`
            if is_open_boundary(count) {
                self.boundaries.push(low);
            }
            self.debug_assert_coalesced();
            return;
        }

        let SearchResult { index, matched } = self.locate(&low, 0);
        if is_open_boundary(index) {
            self.boundaries.truncate(index + 1);
            if !matched {
                self.boundaries[index] = low;
            }
        } else {
            // `low` sits inside an interval whose start now opens the tail
            self.boundaries.truncate(index);
        }
        self.debug_assert_coalesced();
    }

    fn insert_bounded(&mut self, low: T, high: T) {
        let count = self.boundaries.len();
        if count == 0 {
            self.boundaries.extend([low, high]);
            self.debug_assert_coalesced();
            return;
        }

        if self.boundaries[count - 1] < low {
            if is_open_boundary(count) {
                self.boundaries.extend([low, high]);
            }
            self.debug_assert_coalesced();
            return;
        }

        if high < self.boundaries[0] {
            self.boundaries.insert_many(0, [low, high]);
            self.debug_assert_coalesced();
            return;
        }

        //        [       )       [       )
        //  ..gap.. inside ..gap.. inside ..
        let lower = self.locate(&low, 0);
        let upper = self.locate(&high, lower.index);

        // an endpoint "touches" when it lands inside an interval or on one of its boundaries
        let low_touches = lower.matched || !lower.is_open_slot();
        let high_touches = upper.matched || !upper.is_open_slot();

        let mut start = lower.index;
        let mut end = upper.index;

        if low_touches || high_touches {
            if lower.matched && lower.is_open_slot() {
                start += 1;
            }
            if upper.matched && upper.is_open_slot() {
                end += 1;
            }
            if low_touches != high_touches {
                end -= 1;
            }

            self.boundaries.drain(start..end);

            if !high_touches {
                self.boundaries[start] = high;
            }
            if !low_touches {
                self.boundaries[start] = low;
            }
        } else if start == end {
            self.boundaries.insert_many(start, [low, high]);
        } else {
            // both endpoints in gaps, swallowing every interval in between
            if start + 2 < end {
                self.boundaries.drain(start + 2..end);
            }
            self.boundaries[start] = low;
            self.boundaries[start + 1] = high;
        }
        self.debug_assert_coalesced();
    }

    #[inline]
    fn locate(&self, value: &T, start: usize) -> SearchResult {
        linear_search(&self.boundaries, value, start)
    }

    #[inline]
    fn debug_assert_coalesced(&self) {
        debug_assert!(
            first_disorder(&self.boundaries).is_none(),
            "{}",
            BOUNDARY_INVARIANT_PANIC_MESSAGE
        );
    }
}

impl<T> Default for IntervalSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> TryFrom<Vec<T>> for IntervalSet<T> {
    type Error = BoundaryOrderError;

    fn try_from(boundaries: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_boundaries(boundaries)
    }
}

impl<T: Ord> Extend<(T, T)> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (low, high) in iter {
            self.insert(low, high);
        }
    }
}

impl<T: Ord> FromIterator<(T, T)> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = Interval<'a, T>;
    type IntoIter = Intervals<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.intervals()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntervalSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.intervals()).finish()
    }
}

/// Renders bounded intervals as `[low,high)` and a trailing open-ended
/// interval as `[low...`, concatenated in ascending order.
impl<T: fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in self.intervals() {
            write!(formatter, "{interval}")?;
        }
        Ok(())
    }
}

/// Message constant for panic when the boundary sequence is not strictly increasing.
const BOUNDARY_INVARIANT_PANIC_MESSAGE: &str =
    "interval boundaries must be strictly increasing (sorted, no duplicates)";
