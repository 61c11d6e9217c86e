use super::Aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Max;

impl Aggregate for Max {
    fn name() -> &'static str {
        "max"
    }
    fn combine(left: i128, right: i128) -> i128 {
        if left < right {
            right
        } else {
            left
        }
    }
    fn assigned(value: i128, _len: usize) -> i128 {
        value
    }
    // every value moves by the same delta, so the largest one stays the largest
    fn shifted(aggregate: i128, delta: i128, _len: usize) -> i128 {
        aggregate + delta
    }
}
