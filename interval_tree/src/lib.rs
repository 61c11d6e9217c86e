//! Segment trees over a fixed array of `i64` with lazy range updates.
//!
//! An [`IntervalTree`] supports overwriting every element of a range
//! ([`assign`](IntervalTree::assign)), shifting every element of a range
//! ([`add`](IntervalTree::add)) and aggregating a range
//! ([`query`](IntervalTree::query)), each in `O(log n)`. The aggregate is
//! chosen by the type parameter: [`Sum`], [`Max`] or [`Min`].
//!
//! Indices are 1-based and ranges are inclusive on both ends. Every position
//! always holds an `i64`: an add that would push one outside that range, or a
//! query whose aggregate does not fit, fails with [`TreeError::Overflow`].
//!
//! ```
//! use interval_tree::SumTree;
//!
//! let mut tree = SumTree::build(&[3, 1, 1, 1, 3]).unwrap();
//! tree.add(1, 5, 2).unwrap();
//! assert_eq!(tree.query(1, 5).unwrap(), 19);
//! tree.assign(2, 4, 10).unwrap();
//! assert_eq!(tree.query(2, 4).unwrap(), 30);
//! assert_eq!(tree.query(1, 5).unwrap(), 40);
//! ```

mod aggregate;
mod error;
mod impls;
pub mod naive;
mod tag;
mod tree;

pub use aggregate::{Aggregate, Max, Min, Sum};
pub use error::TreeError;
pub use tag::Tag;
use tree::Tree;

#[derive(Debug, Clone)]
pub struct IntervalTree<A: Aggregate> {
    tree: Tree,
    _marker: std::marker::PhantomData<A>,
}

pub type SumTree = IntervalTree<Sum>;
pub type MaxTree = IntervalTree<Max>;
pub type MinTree = IntervalTree<Min>;
