use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange, Range};

/// Position in a [`RotatedRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotatedPos<P> {
    /// Position in the underlying range.
    pub pos: P,
    /// Set once traversal has passed the end of the underlying range and
    /// restarted from its beginning.
    pub wrapped: bool,
}

/// A forward range viewed as if rotated left by `n` elements.
///
/// Traversal starts at the `n`-th element, runs to the end, wraps to the
/// beginning and stops where it started. Rotation amounts are taken modulo
/// the length, negative amounts rotating right.
#[derive(Clone)]
pub struct RotatedRange<R: Range> {
    range: R,
    middle: R::Position,
    tail_len: usize,
    first: RotatedPos<R::Position>,
    last: RotatedPos<R::Position>,
}

impl<R: ForwardRange> RotatedRange<R> {
    /// Rotates `range` left by `n`.
    pub fn new(range: R, n: isize) -> Self {
        let len = range.length();
        let shift = if len == 0 {
            0
        } else {
            n.rem_euclid(len as isize) as usize
        };
        if shift as isize != n {
            tracing::trace!(requested = n, len, shift, "normalized rotation amount");
        }

        let mut middle = range.begin_pos();
        range.advance_by(&mut middle, shift);
        let first = RotatedPos {
            pos: middle.clone(),
            wrapped: len == 0,
        };
        let last = RotatedPos {
            pos: middle.clone(),
            wrapped: true,
        };
        Self {
            range,
            middle,
            tail_len: len - shift,
            first,
            last,
        }
    }

    /// Index of `pos` in the rotated order.
    fn index(&self, pos: &RotatedPos<R::Position>) -> usize {
        if pos.wrapped {
            self.tail_len + self.range.distance_pos(&self.range.begin_pos(), &pos.pos)
        } else {
            self.range.distance_pos(&self.middle, &pos.pos)
        }
    }

    fn pos_for(&self, index: usize) -> RotatedPos<R::Position> {
        if index < self.tail_len {
            let mut pos = self.middle.clone();
            self.range.advance_by(&mut pos, index);
            RotatedPos {
                pos,
                wrapped: false,
            }
        } else {
            let mut pos = self.range.begin_pos();
            self.range.advance_by(&mut pos, index - self.tail_len);
            RotatedPos { pos, wrapped: true }
        }
    }
}

impl<R: ForwardRange> Range for RotatedRange<R> {
    type Position = RotatedPos<R::Position>;
    const CATEGORY: RangeCategory = R::CATEGORY;

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
        self.range.increment_pos(&mut pos.pos);
        if !pos.wrapped && pos.pos == self.range.end_pos() {
            pos.pos = self.range.begin_pos();
            pos.wrapped = true;
        }
    }
}

impl<R: InputRange + ForwardRange> InputRange for RotatedRange<R> {
    type Item = R::Item;

    #[inline]
    fn at_pos(&self, pos: &Self::Position) -> R::Item {
        self.range.at_pos(&pos.pos)
    }
}

impl<R: ForwardRange> ForwardRange for RotatedRange<R> {
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        self.index(to) - self.index(from)
    }

    fn advance_by(&self, pos: &mut Self::Position, n: usize) {
        *pos = self.pos_for(self.index(pos) + n);
    }
}

impl<R: BidirectionalRange> BidirectionalRange for RotatedRange<R> {
    fn decrement_pos(&self, pos: &mut Self::Position) {
        if pos.wrapped && pos.pos == self.range.begin_pos() {
            pos.pos = self.range.end_pos();
            pos.wrapped = false;
        }
        self.range.decrement_pos(&mut pos.pos);
    }

    fn retreat_by(&self, pos: &mut Self::Position, n: usize) {
        *pos = self.pos_for(self.index(pos) - n);
    }
}

impl<R: RandomAccessRange> RandomAccessRange for RotatedRange<R> {}
