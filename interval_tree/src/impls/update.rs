use super::{Aggregate, IntervalTree, Span, TreeError};
use crate::Tag;

impl<A: Aggregate> IntervalTree<A> {
    /// Sets every position in `[left, right]` to `value`.
    pub fn assign(&mut self, left: usize, right: usize, value: i64) -> Result<(), TreeError> {
        let target = self.target(left, right)?;
        log::trace!("assign {} to [{}, {}]", value, left, right);
        self.update(target, Tag::Assign(i128::from(value)));
        Ok(())
    }

    /// Adds `delta` to every position in `[left, right]`.
    ///
    /// Fails with [`TreeError::Overflow`], leaving the tree unchanged, if any
    /// position would end up outside `i64`.
    pub fn add(&mut self, left: usize, right: usize, delta: i64) -> Result<(), TreeError> {
        let target = self.target(left, right)?;
        let range = self.summarize(target);
        let delta = i128::from(delta);
        TreeError::narrow(range.low + delta, left, right)?;
        TreeError::narrow(range.high + delta, left, right)?;
        log::trace!("add {} to [{}, {}]", delta, left, right);
        self.update(target, Tag::Add(delta));
        Ok(())
    }

    fn update(&mut self, target: Span, tag: Tag) {
        let (root, span) = (self.tree.root(), self.tree.root_span());
        self.update_node(root, span, target, tag);
    }

    // assumes span intersects target
    fn update_node(&mut self, node: usize, span: Span, target: Span, tag: Tag) {
        if span.within(target) {
            self.apply_tag(node, span.len(), tag);
            return;
        }
        self.push_down(node, span);
        let (left, right) = self.tree.children(node);
        let (left_span, right_span) = span.split();
        if target.lo <= left_span.hi {
            self.update_node(left, left_span, target, tag);
        }
        if target.hi >= right_span.lo {
            self.update_node(right, right_span, target, tag);
        }
        self.push_up(node);
    }

    // the node's value becomes exact for its span right away, its children
    // only catch up on the next push_down
    fn apply_tag(&mut self, node: usize, len: usize, tag: Tag) {
        let summary = self.tree.summary(node).apply::<A>(tag, len);
        self.tree.set_summary(node, summary);
        let pending = self.tree.tag(node);
        self.tree.set_tag(node, pending.then(tag));
    }

    // assumes an internal node was provided
    pub(super) fn push_down(&mut self, node: usize, span: Span) {
        let tag = self.tree.take_tag(node);
        if tag.is_none() {
            return;
        }
        let (left, right) = self.tree.children(node);
        let (left_span, right_span) = span.split();
        self.apply_tag(left, left_span.len(), tag);
        self.apply_tag(right, right_span.len(), tag);
    }

    pub(super) fn push_up(&mut self, node: usize) {
        let (left, right) = self.tree.children(node);
        let summary = self.tree.summary(left).merge::<A>(self.tree.summary(right));
        self.tree.set_summary(node, summary);
    }
}
