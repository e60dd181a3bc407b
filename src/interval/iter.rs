//! Borrowed views over the coalesced intervals of an [`IntervalSet`](super::IntervalSet).

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

/// One coalesced interval, borrowed from its set.
///
/// A set whose boundary count is odd ends with an [`Interval::Unbounded`]
/// interval; every other interval is [`Interval::Bounded`].
///
/// # Examples
///
/// ```rust
/// use coalescing_set::interval::{Interval, IntervalSet};
///
/// let set = IntervalSet::from_boundaries(vec![1, 3, 6]);
/// let intervals: Vec<Interval<'_, i32>> = set.intervals().collect();
///
/// assert_eq!(intervals[0], Interval::Bounded { start: &1, end: &3 });
/// assert_eq!(intervals[1], Interval::Unbounded { start: &6 });
/// assert_eq!(intervals[1].to_string(), "[6...");
/// ```
#[derive(PartialEq, Eq, Hash)]
pub enum Interval<'a, T> {
    /// `[start, end)`.
    Bounded {
        /// First member.
        start: &'a T,
        /// First value past the interval.
        end: &'a T,
    },
    /// `[start, +∞)`.
    Unbounded {
        /// First member.
        start: &'a T,
    },
}

impl<T> Clone for Interval<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Interval<'_, T> {}

impl<'a, T> Interval<'a, T> {
    /// Returns the inclusive lower bound.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> &'a T {
        match self {
            Self::Bounded { start, .. } | Self::Unbounded { start } => *start,
        }
    }

    /// Returns the exclusive upper bound, or `None` for the open-ended interval.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<&'a T> {
        match self {
            Self::Bounded { end, .. } => Some(*end),
            Self::Unbounded { .. } => None,
        }
    }

    /// Returns `true` for `[start, end)` intervals.
    #[inline]
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded { .. })
    }

    /// Returns the `(start, end)` pair handed to
    /// [`IntervalSet::for_each_interval`](super::IntervalSet::for_each_interval).
    ///
    /// The open-ended interval reports its start twice.
    #[inline]
    #[must_use]
    pub const fn as_pair(&self) -> (&'a T, &'a T) {
        match self {
            Self::Bounded { start, end } => (*start, *end),
            Self::Unbounded { start } => (*start, *start),
        }
    }

    /// Returns `true` if `value` lies inside this interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coalescing_set::interval::Interval;
    ///
    /// let interval = Interval::Bounded { start: &2, end: &5 };
    /// assert!(interval.contains(&2));
    /// assert!(!interval.contains(&5));
    /// assert!(Interval::Unbounded { start: &2 }.contains(&500));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Bounded { start, end } => T::borrow(start) <= value && value < T::borrow(end),
            Self::Unbounded { start } => T::borrow(start) <= value,
        }
    }

    #[inline]
    pub(crate) fn from_chunk(chunk: &'a [T]) -> Self {
        match chunk {
            [start, end] => Self::Bounded { start, end },
            [start] => Self::Unbounded { start },
            _ => unreachable!("boundary chunks hold one or two values"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded { start, end } => write!(formatter, "[{start},{end})"),
            Self::Unbounded { start } => write!(formatter, "[{start}..."),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Interval<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded { start, end } => write!(formatter, "{start:?}..{end:?}"),
            Self::Unbounded { start } => write!(formatter, "{start:?}.."),
        }
    }
}

/// Iterator over the coalesced intervals of a set, in ascending order.
///
/// Created by [`IntervalSet::intervals`](super::IntervalSet::intervals).
pub struct Intervals<'a, T> {
    pub(crate) chunks: std::slice::Chunks<'a, T>,
}

impl<T> Clone for Intervals<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
        }
    }
}

impl<'a, T> Iterator for Intervals<'a, T> {
    type Item = Interval<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Interval::from_chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T> DoubleEndedIterator for Intervals<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(Interval::from_chunk)
    }
}

impl<T> ExactSizeIterator for Intervals<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.chunks.len()
    }
}

impl<T> FusedIterator for Intervals<'_, T> {}
