use crate::adapter::ops::Predicate;
use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, Range};

/// The elements of a range that pass a predicate.
///
/// The first match is located eagerly on construction; later matches are
/// found as positions step forward. Filtering caps the category at
/// bidirectional since distances are no longer computable in O(1).
#[derive(Clone)]
pub struct FilteredRange<R: Range, P> {
    range: R,
    pred: P,
    first: R::Position,
}

impl<R, P> FilteredRange<R, P>
where
    R: InputRange,
    P: Predicate<R::Item>,
{
    /// Filters `range` by `pred`.
    pub fn new(range: R, pred: P) -> Self {
        let mut first = range.begin_pos();
        let end = range.end_pos();
        while first != end && !pred.test(range.at_pos(&first)) {
            range.increment_pos(&mut first);
        }
        Self { range, pred, first }
    }

    /// The unfiltered range, starting at the current first match.
    pub fn into_inner(mut self) -> R {
        self.range.set_begin_pos(self.first);
        self.range
    }

    fn skip_rejected(&self, pos: &mut R::Position) {
        let end = self.range.end_pos();
        while *pos != end && !self.pred.test(self.range.at_pos(pos)) {
            self.range.increment_pos(pos);
        }
    }
}

impl<R, P> Range for FilteredRange<R, P>
where
    R: InputRange,
    P: Predicate<R::Item>,
{
    type Position = R::Position;
    const CATEGORY: RangeCategory = R::CATEGORY.common(RangeCategory::Bidirectional);

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.first.clone()
    }

    #[inline]
    fn end_pos(&self) -> R::Position {
        self.range.end_pos()
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: R::Position) {
        self.first = pos;
    }

    #[inline]
    fn set_end_pos(&mut self, pos: R::Position) {
        self.range.set_end_pos(pos);
    }

    fn increment_pos(&self, pos: &mut R::Position) {
        self.range.increment_pos(pos);
        self.skip_rejected(pos);
    }
}

impl<R, P> InputRange for FilteredRange<R, P>
where
    R: InputRange,
    P: Predicate<R::Item>,
{
    type Item = R::Item;

    #[inline]
    fn at_pos(&self, pos: &R::Position) -> R::Item {
        self.range.at_pos(pos)
    }
}

impl<R, P> ForwardRange for FilteredRange<R, P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
}

impl<R, P> BidirectionalRange for FilteredRange<R, P>
where
    R: InputRange + BidirectionalRange,
    P: Predicate<R::Item>,
{
    fn decrement_pos(&self, pos: &mut R::Position) {
        let begin = self.range.begin_pos();
        loop {
            self.range.decrement_pos(pos);
            if *pos == begin || self.pred.test(self.range.at_pos(pos)) {
                break;
            }
        }
    }
}
