use crate::adapter::ops::Relation;
use crate::category::RangeCategory;
use crate::range::{ForwardRange, InputRange, Range};

/// The first element of every run of related elements.
///
/// Each element is compared with the head of its run, not with its
/// predecessor, so with a non-transitive relation a run ends at the first
/// element unrelated to the head. Stepping reads the head once and skips
/// its run, which works over single-pass ranges too. The view is never more
/// than forward: finding the head of the previous run needs a scan.
#[derive(Debug, Clone)]
pub struct UniqueRange<R, Q> {
    range: R,
    relation: Q,
}

impl<R, Q> UniqueRange<R, Q>
where
    R: InputRange,
    Q: Relation<R::Item>,
{
    /// Collapses runs of `range` related by `relation`.
    #[inline]
    pub fn new(range: R, relation: Q) -> Self {
        Self { range, relation }
    }

    /// The underlying range.
    #[inline]
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R, Q> Range for UniqueRange<R, Q>
where
    R: InputRange,
    Q: Relation<R::Item>,
{
    type Position = R::Position;
    const CATEGORY: RangeCategory = R::CATEGORY.common(RangeCategory::Forward);

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.range.begin_pos()
    }

    #[inline]
    fn end_pos(&self) -> R::Position {
        self.range.end_pos()
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: R::Position) {
        self.range.set_begin_pos(pos);
    }

    #[inline]
    fn set_end_pos(&mut self, pos: R::Position) {
        self.range.set_end_pos(pos);
    }

    fn increment_pos(&self, pos: &mut R::Position) {
        let head = self.range.at_pos(pos);
        let end = self.range.end_pos();
        self.range.increment_pos(pos);
        while *pos != end && self.relation.holds(&head, &self.range.at_pos(pos)) {
            self.range.increment_pos(pos);
        }
    }
}

impl<R, Q> InputRange for UniqueRange<R, Q>
where
    R: InputRange,
    Q: Relation<R::Item>,
{
    type Item = R::Item;

    #[inline]
    fn at_pos(&self, pos: &R::Position) -> R::Item {
        self.range.at_pos(pos)
    }
}

impl<R, Q> ForwardRange for UniqueRange<R, Q>
where
    R: InputRange + ForwardRange,
    Q: Relation<R::Item>,
{
}
