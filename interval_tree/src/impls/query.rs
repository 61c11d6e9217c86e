use super::{Aggregate, IntervalTree, Span, Summary, TreeError};

impl<A: Aggregate> IntervalTree<A> {
    /// Aggregate of the positions in `[left, right]`.
    ///
    /// Takes `&mut self` because pending updates are pushed down along the
    /// way; the values the tree holds do not change.
    pub fn query(&mut self, left: usize, right: usize) -> Result<i64, TreeError> {
        let target = self.target(left, right)?;
        let aggregate = self.summarize(target).value;
        log::trace!("{} over [{}, {}] is {}", A::name(), left, right, aggregate);
        TreeError::narrow(aggregate, left, right)
    }

    pub(super) fn summarize(&mut self, target: Span) -> Summary {
        let (root, span) = (self.tree.root(), self.tree.root_span());
        self.query_node(root, span, target)
    }

    // assumes span intersects target
    fn query_node(&mut self, node: usize, span: Span, target: Span) -> Summary {
        if span.within(target) {
            return self.tree.summary(node);
        }
        self.push_down(node, span);
        let (left, right) = self.tree.children(node);
        let (left_span, right_span) = span.split();
        match (target.lo <= left_span.hi, target.hi >= right_span.lo) {
            (true, true) => {
                let left_summary = self.query_node(left, left_span, target);
                let right_summary = self.query_node(right, right_span, target);
                left_summary.merge::<A>(right_summary)
            }
            (true, false) => self.query_node(left, left_span, target),
            (false, true) => self.query_node(right, right_span, target),
            (false, false) => unreachable!("{:?} does not intersect {:?}", span, target),
        }
    }
}
