use super::Aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum;

impl Aggregate for Sum {
    fn name() -> &'static str {
        "sum"
    }
    fn combine(left: i128, right: i128) -> i128 {
        left + right
    }
    fn assigned(value: i128, len: usize) -> i128 {
        value * len as i128
    }
    fn shifted(aggregate: i128, delta: i128, len: usize) -> i128 {
        aggregate + delta * len as i128
    }
}
