//! Linear-scan reference with the same interface as [`IntervalTree`](crate::IntervalTree).
//!
//! Every update and query walks the whole range, which makes it slow but
//! obviously correct, so it serves as the oracle the tree is checked against.

use super::{Aggregate, TreeError};

#[derive(Debug, Clone)]
pub struct NaiveArray<A: Aggregate> {
    values: Vec<i64>,
    _marker: std::marker::PhantomData<A>,
}

impl<A: Aggregate> NaiveArray<A> {
    pub fn build(values: &[i64]) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::InvalidConstruction);
        }
        Ok(Self {
            values: values.to_vec(),
            _marker: std::marker::PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn assign(&mut self, left: usize, right: usize, value: i64) -> Result<(), TreeError> {
        for slot in self.range_mut(left, right)? {
            *slot = value;
        }
        Ok(())
    }

    pub fn add(&mut self, left: usize, right: usize, delta: i64) -> Result<(), TreeError> {
        let range = self.range_mut(left, right)?;
        if range.iter().any(|value| value.checked_add(delta).is_none()) {
            return Err(TreeError::Overflow { left, right });
        }
        for slot in range {
            *slot += delta;
        }
        Ok(())
    }

    pub fn query(&self, left: usize, right: usize) -> Result<i64, TreeError> {
        TreeError::check_range(left, right, self.len())?;
        let range = &self.values[left - 1..right];
        let aggregate = range[1..].iter().fold(i128::from(range[0]), |aggregate, &value| {
            A::combine(aggregate, i128::from(value))
        });
        TreeError::narrow(aggregate, left, right)
    }

    fn range_mut(&mut self, left: usize, right: usize) -> Result<&mut [i64], TreeError> {
        TreeError::check_range(left, right, self.len())?;
        Ok(&mut self.values[left - 1..right])
    }
}
