use crate::adapter::ops::Predicate;
use crate::category::RangeCategory;
use crate::range::{ForwardRange, InputRange, Range};

/// Position in a [`PartitionedRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartitionedPos<P> {
    /// Position in the underlying range.
    pub pos: P,
    /// Set once traversal has moved from the passing elements to the
    /// rejected ones.
    pub second: bool,
}

/// A forward range viewed with the elements passing a predicate gathered
/// in front of the rest.
///
/// Both groups keep their relative order, as if the range had been stably
/// partitioned, but nothing moves: the view makes two passes over the
/// underlying range.
#[derive(Clone)]
pub struct PartitionedRange<R: Range, P> {
    range: R,
    pred: P,
    first: PartitionedPos<R::Position>,
    last: PartitionedPos<R::Position>,
}

impl<R, P> PartitionedRange<R, P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
    /// Gathers the elements of `range` passing `pred` at the front.
    pub fn new(range: R, pred: P) -> Self {
        let mut view = Self {
            first: PartitionedPos {
                pos: range.begin_pos(),
                second: false,
            },
            last: PartitionedPos {
                pos: range.end_pos(),
                second: true,
            },
            range,
            pred,
        };
        let mut pos = view.range.begin_pos();
        view.seek(&mut pos, true);
        view.first = if pos != view.range.end_pos() {
            PartitionedPos { pos, second: false }
        } else {
            let mut pos = view.range.begin_pos();
            view.seek(&mut pos, false);
            PartitionedPos { pos, second: true }
        };
        view
    }

    /// Advances `pos` to the next element whose test result is `wanted`.
    fn seek(&self, pos: &mut R::Position, wanted: bool) {
        let end = self.range.end_pos();
        while *pos != end && self.pred.test(self.range.at_pos(pos)) != wanted {
            self.range.increment_pos(pos);
        }
    }
}

impl<R, P> Range for PartitionedRange<R, P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
    type Position = PartitionedPos<R::Position>;
    const CATEGORY: RangeCategory = R::CATEGORY.common(RangeCategory::Forward);

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
        if pos.second {
            self.seek(&mut pos.pos, false);
            return;
        }
        self.seek(&mut pos.pos, true);
        if pos.pos == self.range.end_pos() {
            pos.pos = self.range.begin_pos();
            pos.second = true;
            self.seek(&mut pos.pos, false);
        }
    }
}

impl<R, P> InputRange for PartitionedRange<R, P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
    type Item = R::Item;

    #[inline]
    fn at_pos(&self, pos: &Self::Position) -> R::Item {
        self.range.at_pos(&pos.pos)
    }
}

impl<R, P> ForwardRange for PartitionedRange<R, P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
}
