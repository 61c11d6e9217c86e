use thiserror::Error;

/// Errors returned by [`IntervalTree`](crate::IntervalTree) and
/// [`NaiveArray`](crate::naive::NaiveArray).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The range is reversed or reaches outside `[1, len]`.
    #[error("invalid range [{left}, {right}] for {len} elements")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
    /// A tree was requested over zero elements.
    #[error("cannot build a tree over zero elements")]
    InvalidConstruction,
    /// An update would move a value in the range outside `i64`, or the
    /// aggregate of the range does not fit in `i64`.
    #[error("values over [{left}, {right}] do not fit in i64")]
    Overflow { left: usize, right: usize },
}

impl TreeError {
    pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<(), Self> {
        if left == 0 || left > right || right > len {
            Err(TreeError::InvalidRange { left, right, len })
        } else {
            Ok(())
        }
    }

    pub(crate) fn narrow(value: i128, left: usize, right: usize) -> Result<i64, Self> {
        i64::try_from(value).map_err(|_| TreeError::Overflow { left, right })
    }
}
