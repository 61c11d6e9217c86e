use super::{Aggregate, Max, Min, Tag};

/// A node's aggregate together with the smallest and largest leaf below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub value: i128,
    pub low: i128,
    pub high: i128,
}

impl Summary {
    pub fn leaf(value: i64) -> Self {
        let value = i128::from(value);
        Self {
            value,
            low: value,
            high: value,
        }
    }

    pub fn merge<A: Aggregate>(self, other: Summary) -> Self {
        Self {
            value: A::combine(self.value, other.value),
            low: Min::combine(self.low, other.low),
            high: Max::combine(self.high, other.high),
        }
    }

    pub fn apply<A: Aggregate>(self, tag: Tag, len: usize) -> Self {
        Self {
            value: tag.apply::<A>(self.value, len),
            low: tag.apply::<Min>(self.low, len),
            high: tag.apply::<Max>(self.high, len),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    summary: Summary,
    tag: Tag,
}

/// Inclusive, 1-based range of leaves covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    pub fn is_leaf(&self) -> bool {
        self.lo == self.hi
    }

    pub fn split(&self) -> (Span, Span) {
        let mid = (self.lo + self.hi) / 2;
        (Span::new(self.lo, mid), Span::new(mid + 1, self.hi))
    }

    pub fn within(&self, other: Span) -> bool {
        other.lo <= self.lo && self.hi <= other.hi
    }
}

// node 0 is never used, the root lives at 1 and node i has children 2i and 2i + 1
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    leaf_count: usize,
}

impl Tree {
    pub fn with_leaf_count(leaf_count: usize) -> Self {
        Self {
            nodes: vec![Node::default(); 4 * leaf_count],
            leaf_count,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    // assumes self isn't empty
    pub fn root(&self) -> usize {
        1
    }

    pub fn root_span(&self) -> Span {
        Span::new(1, self.leaf_count)
    }

    // assumes an internal node was provided
    pub fn children(&self, node: usize) -> (usize, usize) {
        (2 * node, 2 * node + 1)
    }

    pub fn summary(&self, node: usize) -> Summary {
        self.nodes[node].summary
    }

    pub fn set_summary(&mut self, node: usize, summary: Summary) {
        self.nodes[node].summary = summary;
    }

    pub fn tag(&self, node: usize) -> Tag {
        self.nodes[node].tag
    }

    pub fn set_tag(&mut self, node: usize, tag: Tag) {
        self.nodes[node].tag = tag;
    }

    pub fn take_tag(&mut self, node: usize) -> Tag {
        std::mem::take(&mut self.nodes[node].tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sum;
    use rstest::rstest;

    #[test]
    fn summaries_track_the_extreme_leaves() {
        let merged = Summary::leaf(7).merge::<Sum>(Summary::leaf(-3));
        assert_eq!(merged, Summary { value: 4, low: -3, high: 7 });
        let shifted = merged.apply::<Sum>(Tag::Add(5), 2);
        assert_eq!(shifted, Summary { value: 14, low: 2, high: 12 });
        let assigned = shifted.apply::<Max>(Tag::Assign(1), 2);
        assert_eq!(assigned, Summary { value: 1, low: 1, high: 1 });
    }

    #[rstest]
    #[case(Span::new(1, 5), Span::new(1, 3), Span::new(4, 5))]
    #[case(Span::new(1, 2), Span::new(1, 1), Span::new(2, 2))]
    #[case(Span::new(4, 7), Span::new(4, 5), Span::new(6, 7))]
    fn split_puts_the_extra_leaf_on_the_left(
        #[case] span: Span,
        #[case] left: Span,
        #[case] right: Span,
    ) {
        assert_eq!(span.split(), (left, right));
        assert_eq!(left.len() + right.len(), span.len());
    }

    #[test]
    fn within_is_inclusive() {
        let target = Span::new(2, 6);
        assert!(Span::new(2, 6).within(target));
        assert!(Span::new(3, 3).within(target));
        assert!(!Span::new(1, 2).within(target));
        assert!(!Span::new(6, 7).within(target));
    }

    #[test]
    fn take_tag_leaves_none_behind() {
        let mut tree = Tree::with_leaf_count(3);
        tree.set_tag(1, Tag::Assign(4));
        assert_eq!(tree.take_tag(1), Tag::Assign(4));
        assert_eq!(tree.tag(1), Tag::None);
    }
}
