use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange, Range};

/// Two ranges traversed one after the other.
///
/// A position is a pair: the head position moves until it reaches the end of
/// the head range, then the tail position takes over. The category is the
/// weaker of the two parts.
#[derive(Clone)]
pub struct ConcatenatedRange<R1: Range, R2: Range> {
    head: R1,
    tail: R2,
    first: (R1::Position, R2::Position),
    last: (R1::Position, R2::Position),
}

impl<R1: Range, R2: Range> ConcatenatedRange<R1, R2> {
    /// Chains `head` and `tail`.
    pub fn new(head: R1, tail: R2) -> Self {
        let first = (head.begin_pos(), tail.begin_pos());
        let last = (head.end_pos(), tail.end_pos());
        Self {
            head,
            tail,
            first,
            last,
        }
    }

    /// The two underlying ranges.
    pub fn into_parts(self) -> (R1, R2) {
        (self.head, self.tail)
    }
}

impl<R1: Range, R2: Range> Range for ConcatenatedRange<R1, R2> {
    type Position = (R1::Position, R2::Position);
    const CATEGORY: RangeCategory = R1::CATEGORY.common(R2::CATEGORY);

    #[inline]
    fn begin_pos(&self) -> Self::Position {
        self.first.clone()
    }

    #[inline]
    fn end_pos(&self) -> Self::Position {
        self.last.clone()
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: Self::Position) {
        self.first = pos;
    }

    #[inline]
    fn set_end_pos(&mut self, pos: Self::Position) {
        self.last = pos;
    }

    fn increment_pos(&self, pos: &mut Self::Position) {
        if pos.0 != self.head.end_pos() {
            self.head.increment_pos(&mut pos.0);
        } else {
            self.tail.increment_pos(&mut pos.1);
        }
    }
}

impl<R1, R2> InputRange for ConcatenatedRange<R1, R2>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
{
    type Item = R1::Item;

    fn at_pos(&self, pos: &Self::Position) -> R1::Item {
        if pos.0 != self.head.end_pos() {
            self.head.at_pos(&pos.0)
        } else {
            self.tail.at_pos(&pos.1)
        }
    }
}

impl<R1: ForwardRange, R2: ForwardRange> ForwardRange for ConcatenatedRange<R1, R2> {
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        self.head.distance_pos(&from.0, &to.0) + self.tail.distance_pos(&from.1, &to.1)
    }

    fn advance_by(&self, pos: &mut Self::Position, n: usize) {
        let head_end = self.head.end_pos();
        let room = self.head.distance_pos(&pos.0, &head_end);
        if n <= room {
            self.head.advance_by(&mut pos.0, n);
        } else {
            pos.0 = head_end;
            self.tail.advance_by(&mut pos.1, n - room);
        }
    }
}

impl<R1, R2> BidirectionalRange for ConcatenatedRange<R1, R2>
where
    R1: BidirectionalRange,
    R2: BidirectionalRange,
{
    fn decrement_pos(&self, pos: &mut Self::Position) {
        if pos.1 != self.tail.begin_pos() {
            self.tail.decrement_pos(&mut pos.1);
        } else {
            self.head.decrement_pos(&mut pos.0);
        }
    }

    fn retreat_by(&self, pos: &mut Self::Position, n: usize) {
        let tail_begin = self.tail.begin_pos();
        let room = self.tail.distance_pos(&tail_begin, &pos.1);
        if n <= room {
            self.tail.retreat_by(&mut pos.1, n);
        } else {
            pos.1 = tail_begin;
            self.head.retreat_by(&mut pos.0, n - room);
        }
    }
}

impl<R1, R2> RandomAccessRange for ConcatenatedRange<R1, R2>
where
    R1: RandomAccessRange,
    R2: RandomAccessRange,
{
}
