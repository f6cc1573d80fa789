//! Merging and set operations on sorted ranges.
//!
//! Set operations follow multiset semantics: an element appearing `m` times
//! in one input and `n` times in the other appears `max(m, n)` times in the
//! union, `min(m, n)` times in the intersection and so on. Where an element
//! is taken from both inputs, the copy from the first one is written.

use core::cmp::Ordering;

use crate::algorithm::sort::merge_in_place;
use crate::algorithm::Slots;
use crate::error::RangeError;
use crate::range::{InputRange, MutableRange, OutputRange, RandomAccessRange};

/// Walks two sorted ranges in lockstep.
struct Lockstep<'r, R1: InputRange, R2: InputRange> {
    r1: &'r R1,
    r2: &'r R2,
    p1: R1::Position,
    p2: R2::Position,
    end1: R1::Position,
    end2: R2::Position,
}

impl<'r, R1, R2> Lockstep<'r, R1, R2>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
{
    fn new(r1: &'r R1, r2: &'r R2) -> Self {
        Self {
            p1: r1.begin_pos(),
            p2: r2.begin_pos(),
            end1: r1.end_pos(),
            end2: r2.end_pos(),
            r1,
            r2,
        }
    }

    fn both_left(&self) -> bool {
        self.p1 != self.end1 && self.p2 != self.end2
    }

    /// Order of the current first-range item relative to the second's.
    fn compare<F>(&self, cmp: &mut F) -> Ordering
    where
        F: FnMut(&R1::Item, &R1::Item) -> Ordering,
    {
        cmp(&self.r1.at_pos(&self.p1), &self.r2.at_pos(&self.p2))
    }

    fn take_first(&mut self) -> R1::Item {
        let item = self.r1.at_pos(&self.p1);
        self.r1.increment_pos(&mut self.p1);
        item
    }

    fn take_second(&mut self) -> R1::Item {
        let item = self.r2.at_pos(&self.p2);
        self.r2.increment_pos(&mut self.p2);
        item
    }

    fn skip_first(&mut self) {
        self.r1.increment_pos(&mut self.p1);
    }

    fn skip_second(&mut self) {
        self.r2.increment_pos(&mut self.p2);
    }

    /// Copies what is left of the first range.
    fn drain_first<O: OutputRange<R1::Item>>(&mut self, out: &mut O) -> Result<usize, RangeError> {
        let mut written = 0;
        while self.p1 != self.end1 {
            out.put(self.take_first())?;
            written += 1;
        }
        Ok(written)
    }

    /// Copies what is left of the second range.
    fn drain_second<O: OutputRange<R1::Item>>(
        &mut self,
        out: &mut O,
    ) -> Result<usize, RangeError> {
        let mut written = 0;
        while self.p2 != self.end2 {
            out.put(self.take_second())?;
            written += 1;
        }
        Ok(written)
    }
}

/// Writes the elements of two sorted ranges to `out` in sorted order.
///
/// Stable: of two equal elements, the one from `r1` is written first.
pub fn merge<R1, R2, O>(r1: &R1, r2: &R2, out: O) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
    O: OutputRange<R1::Item>,
{
    merge_by(r1, r2, out, Ord::cmp)
}

/// [`merge`] with a custom ordering.
pub fn merge_by<R1, R2, O, F>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut cmp: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    O: OutputRange<R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    let mut written = 0;
    while walk.both_left() {
        let item = if walk.compare(&mut cmp) == Ordering::Greater {
            walk.take_second()
        } else {
            walk.take_first()
        };
        out.put(item)?;
        written += 1;
    }
    written += walk.drain_first(&mut out)?;
    written += walk.drain_second(&mut out)?;
    Ok(written)
}

/// Stably merges the sorted runs before and after `middle` in place.
pub fn inplace_merge<R>(range: &mut R, middle: R::Position)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    inplace_merge_by(range, middle, Ord::cmp);
}

/// [`inplace_merge`] with a custom ordering.
pub fn inplace_merge_by<R, F>(range: &mut R, middle: R::Position, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let mid = slots.index(&middle);
    let len = slots.len();
    merge_in_place(&mut slots, 0, mid, len, &mut cmp);
}

/// Returns `true` if every element of sorted `r2` appears in sorted `r1`
/// (counting repetitions).
pub fn includes<R1, R2>(r1: &R1, r2: &R2) -> bool
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
{
    includes_by(r1, r2, Ord::cmp)
}

/// [`includes`] with a custom ordering.
pub fn includes_by<R1, R2, F>(r1: &R1, r2: &R2, mut cmp: F) -> bool
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    while walk.both_left() {
        match walk.compare(&mut cmp) {
            Ordering::Less => walk.skip_first(),
            Ordering::Greater => return false,
            Ordering::Equal => {
                walk.skip_first();
                walk.skip_second();
            }
        }
    }
    walk.p2 == walk.end2
}

/// Writes the sorted union of two sorted ranges to `out`.
pub fn set_union<R1, R2, O>(r1: &R1, r2: &R2, out: O) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
    O: OutputRange<R1::Item>,
{
    set_union_by(r1, r2, out, Ord::cmp)
}

/// [`set_union`] with a custom ordering.
pub fn set_union_by<R1, R2, O, F>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut cmp: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    O: OutputRange<R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    let mut written = 0;
    while walk.both_left() {
        let item = match walk.compare(&mut cmp) {
            Ordering::Less => walk.take_first(),
            Ordering::Greater => walk.take_second(),
            Ordering::Equal => {
                walk.skip_second();
                walk.take_first()
            }
        };
        out.put(item)?;
        written += 1;
    }
    written += walk.drain_first(&mut out)?;
    written += walk.drain_second(&mut out)?;
    Ok(written)
}

/// Writes the sorted intersection of two sorted ranges to `out`.
pub fn set_intersection<R1, R2, O>(r1: &R1, r2: &R2, out: O) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
    O: OutputRange<R1::Item>,
{
    set_intersection_by(r1, r2, out, Ord::cmp)
}

/// [`set_intersection`] with a custom ordering.
pub fn set_intersection_by<R1, R2, O, F>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut cmp: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    O: OutputRange<R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    let mut written = 0;
    while walk.both_left() {
        match walk.compare(&mut cmp) {
            Ordering::Less => walk.skip_first(),
            Ordering::Greater => walk.skip_second(),
            Ordering::Equal => {
                walk.skip_second();
                out.put(walk.take_first())?;
                written += 1;
            }
        }
    }
    Ok(written)
}

/// Writes the elements of sorted `r1` missing from sorted `r2` to `out`.
pub fn set_difference<R1, R2, O>(r1: &R1, r2: &R2, out: O) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
    O: OutputRange<R1::Item>,
{
    set_difference_by(r1, r2, out, Ord::cmp)
}

/// [`set_difference`] with a custom ordering.
pub fn set_difference_by<R1, R2, O, F>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut cmp: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    O: OutputRange<R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    let mut written = 0;
    while walk.both_left() {
        match walk.compare(&mut cmp) {
            Ordering::Less => {
                out.put(walk.take_first())?;
                written += 1;
            }
            Ordering::Greater => walk.skip_second(),
            Ordering::Equal => {
                walk.skip_first();
                walk.skip_second();
            }
        }
    }
    written += walk.drain_first(&mut out)?;
    Ok(written)
}

/// Writes the elements found in exactly one of two sorted ranges to `out`.
pub fn set_symmetric_difference<R1, R2, O>(r1: &R1, r2: &R2, out: O) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
    O: OutputRange<R1::Item>,
{
    set_symmetric_difference_by(r1, r2, out, Ord::cmp)
}

/// [`set_symmetric_difference`] with a custom ordering.
pub fn set_symmetric_difference_by<R1, R2, O, F>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut cmp: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    O: OutputRange<R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let mut walk = Lockstep::new(r1, r2);
    let mut written = 0;
    while walk.both_left() {
        match walk.compare(&mut cmp) {
            Ordering::Less => {
                out.put(walk.take_first())?;
                written += 1;
            }
            Ordering::Greater => {
                out.put(walk.take_second())?;
                written += 1;
            }
            Ordering::Equal => {
                walk.skip_first();
                walk.skip_second();
            }
        }
    }
    written += walk.drain_first(&mut out)?;
    written += walk.drain_second(&mut out)?;
    Ok(written)
}
