use crate::category::RangeCategory;
use crate::range::{
    BidirectionalRange, ForwardRange, InputRange, MutableRange, RandomAccessRange, Range,
};

/// A bidirectional range traversed back to front.
///
/// Positions are shared with the underlying range, shifted by one: the
/// reversed view reads the element *before* a position, so the underlying
/// end is the reversed begin and vice versa.
///
/// # Examples
/// ```
/// use position_range::{make_range, RangeExt};
///
/// let data = [1, 2, 3];
/// let back: Vec<i32> = make_range(&data).reversed().iter().copied().collect();
/// assert_eq!(back, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ReversedRange<R> {
    range: R,
}

impl<R: BidirectionalRange> ReversedRange<R> {
    /// Reverses `range`.
    #[inline]
    pub fn new(range: R) -> Self {
        Self { range }
    }

    /// The range in its original direction.
    #[inline]
    pub fn into_inner(self) -> R {
        self.range
    }

    #[inline]
    fn before(&self, pos: &R::Position) -> R::Position {
        let mut prev = pos.clone();
        self.range.decrement_pos(&mut prev);
        prev
    }
}

impl<R: BidirectionalRange> Range for ReversedRange<R> {
    type Position = R::Position;
    const CATEGORY: RangeCategory = R::CATEGORY;

    #[inline]
    fn begin_pos(&self) -> R::Position {
        self.range.end_pos()
    }

    #[inline]
    fn end_pos(&self) -> R::Position {
        self.range.begin_pos()
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: R::Position) {
        self.range.set_end_pos(pos);
    }

    #[inline]
    fn set_end_pos(&mut self, pos: R::Position) {
        self.range.set_begin_pos(pos);
    }

    #[inline]
    fn increment_pos(&self, pos: &mut R::Position) {
        self.range.decrement_pos(pos);
    }
}

impl<R: InputRange + BidirectionalRange> InputRange for ReversedRange<R> {
    type Item = R::Item;

    #[inline]
    fn at_pos(&self, pos: &R::Position) -> R::Item {
        self.range.at_pos(&self.before(pos))
    }
}

impl<R: MutableRange + BidirectionalRange> MutableRange for ReversedRange<R> {
    type Value = R::Value;

    #[inline]
    fn value_at(&self, pos: &R::Position) -> &R::Value {
        let prev = self.before(pos);
        self.range.value_at(&prev)
    }

    #[inline]
    fn value_at_mut(&mut self, pos: &R::Position) -> &mut R::Value {
        let prev = self.before(pos);
        self.range.value_at_mut(&prev)
    }

    #[inline]
    fn swap_at(&mut self, a: &R::Position, b: &R::Position) {
        let (a, b) = (self.before(a), self.before(b));
        self.range.swap_at(&a, &b);
    }
}

impl<R: BidirectionalRange> ForwardRange for ReversedRange<R> {
    #[inline]
    fn distance_pos(&self, from: &R::Position, to: &R::Position) -> usize {
        self.range.distance_pos(to, from)
    }

    #[inline]
    fn advance_by(&self, pos: &mut R::Position, n: usize) {
        self.range.retreat_by(pos, n);
    }
}

impl<R: BidirectionalRange> BidirectionalRange for ReversedRange<R> {
    #[inline]
    fn decrement_pos(&self, pos: &mut R::Position) {
        self.range.increment_pos(pos);
    }

    #[inline]
    fn retreat_by(&self, pos: &mut R::Position, n: usize) {
        self.range.advance_by(pos, n);
    }
}

impl<R: RandomAccessRange> RandomAccessRange for ReversedRange<R> {}
