mod max;
mod min;
mod sum;

pub use max::Max;
pub use min::Min;
pub use sum::Sum;

/// How the values of a range combine into one aggregate, and how that
/// aggregate reacts to the range being overwritten or shifted.
///
/// Aggregates are `i128` so that a sum over `i64` values never overflows.
pub trait Aggregate {
    fn name() -> &'static str;
    fn combine(left: i128, right: i128) -> i128;
    /// Aggregate of `len` copies of `value`.
    fn assigned(value: i128, len: usize) -> i128;
    /// Aggregate after `delta` is added to each of `len` values.
    fn shifted(aggregate: i128, delta: i128, len: usize) -> i128;
}
