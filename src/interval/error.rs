//! Error types for checked interval set construction.

/// Returned by [`IntervalSet::try_from_boundaries`](super::IntervalSet::try_from_boundaries)
/// when the supplied boundaries are not strictly increasing.
///
/// `index` is the first position whose boundary is not greater than the one
/// before it.
///
/// # Examples
///
/// ```rust
/// use coalescing_set::interval::{BoundaryOrderError, IntervalSet};
///
/// let error = IntervalSet::try_from_boundaries(vec![1, 4, 4]).unwrap_err();
/// assert_eq!(error, BoundaryOrderError { index: 2 });
/// assert_eq!(
///     format!("{error}"),
///     "boundary at index 2 is not greater than its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryOrderError {
    /// Position of the offending boundary.
    pub index: usize,
}

impl std::fmt::Display for BoundaryOrderError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "boundary at index {} is not greater than its predecessor",
            self.index
        )
    }
}

impl std::error::Error for BoundaryOrderError {}

/// Finds the first position that breaks strict ordering, if any.
pub(crate) fn first_disorder<T: Ord>(boundaries: &[T]) -> Option<usize> {
    boundaries
        .windows(2)
        .position(|window| window[0] >= window[1])
        .map(|position| position + 1)
}
