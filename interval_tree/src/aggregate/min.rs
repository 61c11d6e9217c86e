use super::Aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Min;

impl Aggregate for Min {
    fn name() -> &'static str {
        "min"
    }
    fn combine(left: i128, right: i128) -> i128 {
        if left < right {
            left
        } else {
            right
        }
    }
    fn assigned(value: i128, _len: usize) -> i128 {
        value
    }
    fn shifted(aggregate: i128, delta: i128, _len: usize) -> i128 {
        aggregate + delta
    }
}
