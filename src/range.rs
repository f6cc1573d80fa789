//! The position protocol every range, algorithm and adapter is built on.
//!
//! A range is a pair of positions into some underlying sequence. Positions
//! are weaker than iterators: they can only be compared and moved through the
//! range that produced them, and they carry no access to elements on their
//! own.
//!
//! Capabilities are split across traits so that algorithms can state exactly
//! what they need:
//!
//! - [`Range`]: begin/end positions and forward steps (single-pass).
//! - [`ForwardRange`]: positions may be revisited (multi-pass).
//! - [`BidirectionalRange`]: positions may move backward.
//! - [`RandomAccessRange`]: positions move by any offset in O(1).
//! - [`InputRange`]: elements are read by value at a position.
//! - [`MutableRange`]: elements are borrowed, mutated and swapped in place.
//! - [`OutputRange`]: a sink that accepts values.

use alloc::vec::Vec;

use crate::category::RangeCategory;
use crate::error::RangeError;

/// A pair of positions and the ability to step forward between them.
pub trait Range {
    /// Cursor into the underlying sequence.
    type Position: Clone + PartialEq;

    /// Capability tier of this range.
    const CATEGORY: RangeCategory;

    /// Position of the first element.
    fn begin_pos(&self) -> Self::Position;

    /// Position one past the last element.
    fn end_pos(&self) -> Self::Position;

    /// Moves the front of the range to `pos`.
    fn set_begin_pos(&mut self, pos: Self::Position);

    /// Moves the back of the range to `pos`.
    fn set_end_pos(&mut self, pos: Self::Position);

    /// Steps `pos` to the next element.
    fn increment_pos(&self, pos: &mut Self::Position);

    /// Returns `true` if the range has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.begin_pos() == self.end_pos()
    }

    /// Drops the first element.
    #[inline]
    fn shrink_front(&mut self) {
        debug_assert!(!self.is_empty(), "shrink_front on an empty range");
        let mut pos = self.begin_pos();
        self.increment_pos(&mut pos);
        self.set_begin_pos(pos);
    }
}

/// A range whose elements can be read by value.
///
/// For borrowed sequences the item is usually a reference (`&'a T`), for
/// computed views it is the computed value.
pub trait InputRange: Range {
    /// Element type produced at a position.
    type Item;

    /// Reads the element at `pos`.
    ///
    /// `pos` must be a valid, non-end position of this range.
    fn at_pos(&self, pos: &Self::Position) -> Self::Item;

    /// Reads the first element.
    #[inline]
    fn front(&self) -> Self::Item {
        self.at_pos(&self.begin_pos())
    }
}

/// A range whose elements live in place and can be mutated.
pub trait MutableRange: Range {
    /// Stored element type.
    type Value;

    /// Borrows the element at `pos`.
    fn value_at(&self, pos: &Self::Position) -> &Self::Value;

    /// Mutably borrows the element at `pos`.
    fn value_at_mut(&mut self, pos: &Self::Position) -> &mut Self::Value;

    /// Exchanges the elements at `a` and `b`.
    fn swap_at(&mut self, a: &Self::Position, b: &Self::Position);
}

/// A multi-pass range: positions can be copied and traversed again.
pub trait ForwardRange: Range {
    /// Number of steps from `from` to `to`.
    ///
    /// `to` must be reachable from `from`.
    fn distance_pos(&self, from: &Self::Position, to: &Self::Position) -> usize {
        let mut pos = from.clone();
        let mut n = 0;
        while pos != *to {
            self.increment_pos(&mut pos);
            n += 1;
        }
        n
    }

    /// Steps `pos` forward `n` times.
    fn advance_by(&self, pos: &mut Self::Position, n: usize) {
        for _ in 0..n {
            self.increment_pos(pos);
        }
    }

    /// Number of elements in the range.
    #[inline]
    fn length(&self) -> usize {
        self.distance_pos(&self.begin_pos(), &self.end_pos())
    }
}

/// A range whose positions can also move backward.
pub trait BidirectionalRange: ForwardRange {
    /// Steps `pos` to the previous element.
    fn decrement_pos(&self, pos: &mut Self::Position);

    /// Steps `pos` backward `n` times.
    fn retreat_by(&self, pos: &mut Self::Position, n: usize) {
        for _ in 0..n {
            self.decrement_pos(pos);
        }
    }

    /// Drops the last element.
    #[inline]
    fn shrink_back(&mut self) {
        debug_assert!(!self.is_empty(), "shrink_back on an empty range");
        let mut pos = self.end_pos();
        self.decrement_pos(&mut pos);
        self.set_end_pos(pos);
    }
}

/// A range whose positions move by any offset in constant time.
///
/// Implementors override [`ForwardRange::advance_by`],
/// [`ForwardRange::distance_pos`] and [`BidirectionalRange::retreat_by`]
/// with O(1) versions; the provided methods here build on them.
pub trait RandomAccessRange: BidirectionalRange {
    /// Moves `pos` by a signed offset.
    #[inline]
    fn offset_pos(&self, pos: &mut Self::Position, n: isize) {
        if n >= 0 {
            self.advance_by(pos, n as usize);
        } else {
            self.retreat_by(pos, n.unsigned_abs());
        }
    }

    /// Position of the element `index` steps from the front.
    #[inline]
    fn pos_at(&self, index: usize) -> Self::Position {
        let mut pos = self.begin_pos();
        self.advance_by(&mut pos, index);
        pos
    }

    /// Number of steps from the front to `pos`.
    #[inline]
    fn index_of(&self, pos: &Self::Position) -> usize {
        self.distance_pos(&self.begin_pos(), pos)
    }
}

/// A sink that accepts values one at a time.
pub trait OutputRange<T> {
    /// Writes `value` and moves past it.
    fn put(&mut self, value: T) -> Result<(), RangeError>;
}

impl<T> OutputRange<T> for Vec<T> {
    #[inline]
    fn put(&mut self, value: T) -> Result<(), RangeError> {
        self.push(value);
        Ok(())
    }
}

impl<T, O: OutputRange<T> + ?Sized> OutputRange<T> for &mut O {
    #[inline]
    fn put(&mut self, value: T) -> Result<(), RangeError> {
        (**self).put(value)
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Reads the first element of `range`.
#[inline]
pub fn front<R: InputRange>(range: &R) -> R::Item {
    range.front()
}

/// Reads the last element of `range`.
#[inline]
pub fn back<R: InputRange + BidirectionalRange>(range: &R) -> R::Item {
    let mut pos = range.end_pos();
    range.decrement_pos(&mut pos);
    range.at_pos(&pos)
}

/// Drops the first `n` elements.
///
/// Fails without modifying the range if it holds fewer than `n` elements.
/// Single-pass ranges cannot honour that, so they use
/// [`RangeExt::trim_front`](crate::RangeExt::trim_front) instead.
pub fn drop_first<R: ForwardRange>(range: &mut R, n: usize) -> Result<(), RangeError> {
    let mut pos = range.begin_pos();
    step_forward(range, &mut pos, n)?;
    range.set_begin_pos(pos);
    Ok(())
}

/// Drops the last `n` elements.
///
/// Fails without modifying the range if it holds fewer than `n` elements.
pub fn drop_last<R: BidirectionalRange>(range: &mut R, n: usize) -> Result<(), RangeError> {
    let mut pos = range.end_pos();
    retreat_pos(range, &mut pos, n)?;
    range.set_end_pos(pos);
    Ok(())
}

/// Moves `pos` forward by `n` elements.
///
/// A generic range only guarantees forward movement, so a negative `n` is
/// rejected with [`RangeError::BackwardAdvance`]; use [`retreat_pos`] on
/// bidirectional ranges. Stepping past the end fails with
/// [`RangeError::OutOfBounds`] and leaves `pos` at the end.
pub fn advance_pos<R: Range>(
    range: &R,
    pos: &mut R::Position,
    n: isize,
) -> Result<(), RangeError> {
    if n < 0 {
        return Err(RangeError::BackwardAdvance);
    }
    step_forward(range, pos, n.unsigned_abs())
}

fn step_forward<R: Range>(
    range: &R,
    pos: &mut R::Position,
    requested: usize,
) -> Result<(), RangeError> {
    let end = range.end_pos();
    for done in 0..requested {
        if *pos == end {
            return Err(RangeError::OutOfBounds {
                requested,
                available: done,
            });
        }
        range.increment_pos(pos);
    }
    Ok(())
}

/// Moves `pos` backward by `n` elements.
///
/// Stepping before the beginning fails with [`RangeError::OutOfBounds`] and
/// leaves `pos` at the beginning.
pub fn retreat_pos<R: BidirectionalRange>(
    range: &R,
    pos: &mut R::Position,
    n: usize,
) -> Result<(), RangeError> {
    let begin = range.begin_pos();
    for done in 0..n {
        if *pos == begin {
            return Err(RangeError::OutOfBounds {
                requested: n,
                available: done,
            });
        }
        range.decrement_pos(pos);
    }
    Ok(())
}

/// Number of elements in `range`.
#[inline]
pub fn length<R: ForwardRange>(range: &R) -> usize {
    range.length()
}

/// Copy of a multi-pass range that can be traversed independently.
#[inline]
pub fn save<R: ForwardRange + Clone>(range: &R) -> R {
    range.clone()
}

/// The part of `range` before `pos`.
#[inline]
pub fn range_before<R: Range>(mut range: R, pos: R::Position) -> R {
    range.set_end_pos(pos);
    range
}

/// The part of `range` from `pos` onward.
#[inline]
pub fn range_after<R: Range>(mut range: R, pos: R::Position) -> R {
    range.set_begin_pos(pos);
    range
}

/// The part of `range` between `first` and `last`.
#[inline]
pub fn subrange<R: Range>(mut range: R, first: R::Position, last: R::Position) -> R {
    range.set_begin_pos(first);
    range.set_end_pos(last);
    range
}
