//! Position lookup over a strictly increasing boundary slice.
//!
//! Both strategies answer the same question: the first index whose boundary is
//! not less than the probe, and whether that boundary equals the probe. The
//! linear scan wins for short slices where branch prediction and cache
//! locality dominate; the binary search wins once the slice grows past a few
//! cache lines. [`SearchStrategy`] selects between them.

use std::borrow::Borrow;

/// Boundary count below which [`SearchStrategy::Adaptive`] scans linearly by default.
pub const LINEAR_SEARCH_THRESHOLD: usize = 64;

/// Outcome of locating a value in a boundary slice.
///
/// `index` is the insertion position: every boundary before it is strictly
/// less than the probe. `matched` is `true` when the boundary at `index`
/// equals the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) index: usize,
    pub(crate) matched: bool,
}

impl SearchResult {
    /// Returns `true` if the insertion position is an interval-open slot.
    #[inline]
    pub(crate) const fn is_open_slot(self) -> bool {
        is_open_boundary(self.index)
    }
}

/// Even positions open an interval, odd positions close it.
#[inline]
pub(crate) const fn is_open_boundary(index: usize) -> bool {
    index & 1 == 0
}

/// Chooses how [`IntervalSet::contains_with`](super::IntervalSet::contains_with)
/// locates a value.
///
/// Every strategy yields the same membership answer; only the cost differs.
///
/// # Examples
///
/// ```rust
/// use coalescing_set::interval::{IntervalSet, SearchStrategy};
///
/// let set = IntervalSet::from_boundaries(vec![1, 3, 6]);
/// assert!(set.contains_with(&2, SearchStrategy::Linear));
/// assert!(set.contains_with(&2, SearchStrategy::Binary));
/// assert!(set.contains_with(&9, SearchStrategy::Adaptive { threshold: 2 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Always scan from the front.
    Linear,
    /// Always bisect.
    Binary,
    /// Scan when fewer than `threshold` boundaries are stored, bisect otherwise.
    Adaptive {
        /// Boundary count at which bisection takes over.
        threshold: usize,
    },
}

impl Default for SearchStrategy {
    #[inline]
    fn default() -> Self {
        Self::Adaptive {
            threshold: LINEAR_SEARCH_THRESHOLD,
        }
    }
}

impl SearchStrategy {
    #[inline]
    pub(crate) fn search<T, Q>(self, boundaries: &[T], value: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Linear => linear_search(boundaries, value, 0),
            Self::Binary => binary_search(boundaries, value, 0),
            Self::Adaptive { threshold } if boundaries.len() < threshold => {
                linear_search(boundaries, value, 0)
            }
            Self::Adaptive { .. } => binary_search(boundaries, value, 0),
        }
    }
}

/// Scans forward from `start` until a boundary not less than `value` is found.
pub(crate) fn linear_search<T, Q>(boundaries: &[T], value: &Q, start: usize) -> SearchResult
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut index = start;
    while index < boundaries.len() && boundaries[index].borrow() < value {
        index += 1;
    }
    finish(boundaries, value, index)
}

/// Bisects `boundaries[start..]` for the first boundary not less than `value`.
pub(crate) fn binary_search<T, Q>(boundaries: &[T], value: &Q, start: usize) -> SearchResult
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut low = start;
    let mut high = boundaries.len();
    while low < high {
        let middle = low + (high - low) / 2;
        if boundaries[middle].borrow() < value {
            // everything before `low` stays below `value`
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    finish(boundaries, value, low)
}

#[inline]
fn finish<T, Q>(boundaries: &[T], value: &Q, index: usize) -> SearchResult
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    SearchResult {
        index,
        matched: boundaries
            .get(index)
            .is_some_and(|boundary| boundary.borrow() == value),
    }
}
