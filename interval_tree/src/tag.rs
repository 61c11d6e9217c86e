use super::Aggregate;

/// An update a node has already absorbed but not yet handed to its children.
///
/// Payloads are `i128`: two adds that each keep the values within `i64`
/// can still compose into a delta that does not fit in `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    None,
    /// Every leaf below still needs the delta added.
    Add(i128),
    /// Every leaf below holds this value.
    Assign(i128),
}

impl Tag {
    /// The single tag equivalent to applying `self` and then `later`.
    ///
    /// An assignment discards whatever was pending before it, and an add
    /// issued after an assignment shifts the assigned value.
    pub fn then(self, later: Tag) -> Tag {
        match (self, later) {
            (pending, Tag::None) => pending,
            (_, Tag::Assign(value)) => Tag::Assign(value),
            (Tag::None, Tag::Add(delta)) => Tag::Add(delta),
            (Tag::Add(pending), Tag::Add(delta)) => Tag::Add(pending + delta),
            (Tag::Assign(value), Tag::Add(delta)) => Tag::Assign(value + delta),
        }
    }

    /// Aggregate of `len` leaves whose aggregate was `value`, after the tag.
    pub fn apply<A: Aggregate>(self, value: i128, len: usize) -> i128 {
        match self {
            Tag::None => value,
            Tag::Add(delta) => A::shifted(value, delta, len),
            Tag::Assign(assigned) => A::assigned(assigned, len),
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Tag::None)
    }
}
