use crate::adapter::ops::Operation;
use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange, Range};

/// A range whose elements are mapped through an operation on read.
///
/// Navigation is delegated unchanged, so the view keeps the category of the
/// underlying range. The operation runs every time an element is read.
#[derive(Debug, Clone)]
pub struct TransformedRange<R, F> {
    range: R,
    op: F,
}

impl<R: Range, F> TransformedRange<R, F> {
    /// Maps the elements of `range` through `op`.
    #[inline]
    pub fn new(range: R, op: F) -> Self {
        Self { range, op }
    }

    /// The unmapped range.
    #[inline]
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R: Range, F> Range for TransformedRange<R, F> {
    type Position = R::Position;
    const CATEGORY: RangeCategory = R::CATEGORY;

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

    #[inline]
    fn increment_pos(&self, pos: &mut R::Position) {
        self.range.increment_pos(pos);
    }
}

impl<R, F> InputRange for TransformedRange<R, F>
where
    R: InputRange,
    F: Operation<R::Item>,
{
    type Item = F::Output;

    #[inline]
    fn at_pos(&self, pos: &R::Position) -> F::Output {
        self.op.apply(self.range.at_pos(pos))
    }
}

impl<R: ForwardRange, F> ForwardRange for TransformedRange<R, F> {
    #[inline]
    fn distance_pos(&self, from: &R::Position, to: &R::Position) -> usize {
        self.range.distance_pos(from, to)
    }

    #[inline]
    fn advance_by(&self, pos: &mut R::Position, n: usize) {
        self.range.advance_by(pos, n);
    }
}

impl<R: BidirectionalRange, F> BidirectionalRange for TransformedRange<R, F> {
    #[inline]
    fn decrement_pos(&self, pos: &mut R::Position) {
        self.range.decrement_pos(pos);
    }

    #[inline]
    fn retreat_by(&self, pos: &mut R::Position, n: usize) {
        self.range.retreat_by(pos, n);
    }
}

impl<R: RandomAccessRange, F> RandomAccessRange for TransformedRange<R, F> {}
