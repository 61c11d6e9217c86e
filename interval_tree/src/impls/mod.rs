mod query;
mod update;

use super::tree::{Span, Summary, Tree};
use super::{Aggregate, IntervalTree, TreeError};

impl<A: Aggregate> IntervalTree<A> {
    /// Builds a tree holding `values`, so that position `i` (1-based) holds
    /// `values[i - 1]`.
    pub fn build(values: &[i64]) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::InvalidConstruction);
        }
        let mut tree = Self {
            tree: Tree::with_leaf_count(values.len()),
            _marker: std::marker::PhantomData,
        };
        let (root, span) = (tree.tree.root(), tree.tree.root_span());
        tree.build_node(values, root, span);
        log::debug!("built {} tree over {} values", A::name(), values.len());
        Ok(tree)
    }

    /// Builds a tree of `leaf_count` zeros.
    pub fn with_leaf_count(leaf_count: usize) -> Result<Self, TreeError> {
        Self::build(&vec![0; leaf_count])
    }

    fn build_node(&mut self, values: &[i64], node: usize, span: Span) {
        if span.is_leaf() {
            self.tree.set_summary(node, Summary::leaf(values[span.lo - 1]));
            return;
        }
        let (left, right) = self.tree.children(node);
        let (left_span, right_span) = span.split();
        self.build_node(values, left, left_span);
        self.build_node(values, right, right_span);
        self.push_up(node);
    }

    pub fn len(&self) -> usize {
        self.tree.leaf_count()
    }

    // a tree always holds at least one value
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Aggregate over every position.
    pub fn total(&self) -> Result<i64, TreeError> {
        let total = self.tree.summary(self.tree.root()).value;
        TreeError::narrow(total, 1, self.len())
    }

    pub fn get(&mut self, index: usize) -> Result<i64, TreeError> {
        self.query(index, index)
    }

    /// Current value of every position, in order.
    pub fn to_vec(&mut self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len());
        let (root, span) = (self.tree.root(), self.tree.root_span());
        self.collect_leaves(root, span, &mut values);
        values
    }

    fn collect_leaves(&mut self, node: usize, span: Span, values: &mut Vec<i64>) {
        if span.is_leaf() {
            // every leaf holds an i64, add rejects updates that would break this
            values.push(self.tree.summary(node).value as i64);
            return;
        }
        self.push_down(node, span);
        let (left, right) = self.tree.children(node);
        let (left_span, right_span) = span.split();
        self.collect_leaves(left, left_span, values);
        self.collect_leaves(right, right_span, values);
    }

    fn target(&self, left: usize, right: usize) -> Result<Span, TreeError> {
        TreeError::check_range(left, right, self.len())?;
        Ok(Span::new(left, right))
    }
}
