//! Algorithms that write elements, in place or to an output range.

use core::borrow::Borrow;

use rand::Rng;

use crate::algorithm::{rotate_positions, Slots};
use crate::error::RangeError;
use crate::range::{
    BidirectionalRange, ForwardRange, InputRange, MutableRange, OutputRange, RandomAccessRange,
};

/// Writes every element to `out`.
pub fn copy<R, O>(range: &R, out: O) -> Result<usize, RangeError>
where
    R: InputRange,
    O: OutputRange<R::Item>,
{
    copy_if(range, out, |_| true)
}

/// Writes the first `n` elements to `out`.
///
/// Fails with [`RangeError::OutOfBounds`] once the range runs out; the
/// elements before that point have been written.
pub fn copy_n<R, O>(range: &R, n: usize, mut out: O) -> Result<usize, RangeError>
where
    R: InputRange,
    O: OutputRange<R::Item>,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    for written in 0..n {
        if pos == end {
            return Err(RangeError::OutOfBounds {
                requested: n,
                available: written,
            });
        }
        out.put(range.at_pos(&pos))?;
        range.increment_pos(&mut pos);
    }
    Ok(n)
}

/// Writes the elements passing `pred` to `out`.
pub fn copy_if<R, O, P>(range: &R, mut out: O, mut pred: P) -> Result<usize, RangeError>
where
    R: InputRange,
    O: OutputRange<R::Item>,
    P: FnMut(&R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    let mut written = 0;
    while pos != end {
        let item = range.at_pos(&pos);
        if pred(&item) {
            out.put(item)?;
            written += 1;
        }
        range.increment_pos(&mut pos);
    }
    Ok(written)
}

/// Writes `f(item)` for every element to `out`.
pub fn transform<R, O, F, U>(range: &R, mut out: O, mut f: F) -> Result<usize, RangeError>
where
    R: InputRange,
    O: OutputRange<U>,
    F: FnMut(R::Item) -> U,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    let mut written = 0;
    while pos != end {
        out.put(f(range.at_pos(&pos)))?;
        written += 1;
        range.increment_pos(&mut pos);
    }
    Ok(written)
}

/// Writes `f(a, b)` for pairs of elements of `r1` and `r2` to `out`,
/// stopping at the end of the shorter range.
pub fn transform_binary<R1, R2, O, F, U>(
    r1: &R1,
    r2: &R2,
    mut out: O,
    mut f: F,
) -> Result<usize, RangeError>
where
    R1: InputRange,
    R2: InputRange,
    O: OutputRange<U>,
    F: FnMut(R1::Item, R2::Item) -> U,
{
    let (end1, end2) = (r1.end_pos(), r2.end_pos());
    let (mut p1, mut p2) = (r1.begin_pos(), r2.begin_pos());
    let mut written = 0;
    while p1 != end1 && p2 != end2 {
        out.put(f(r1.at_pos(&p1), r2.at_pos(&p2)))?;
        written += 1;
        r1.increment_pos(&mut p1);
        r2.increment_pos(&mut p2);
    }
    Ok(written)
}

/// Overwrites every element equal to `old` with a clone of `new`.
pub fn replace<R>(range: &mut R, old: &R::Value, new: &R::Value)
where
    R: MutableRange,
    R::Value: PartialEq + Clone,
{
    replace_if(range, |value| value == old, new);
}

/// Overwrites every element passing `pred` with a clone of `new`.
pub fn replace_if<R, P>(range: &mut R, mut pred: P, new: &R::Value)
where
    R: MutableRange,
    R::Value: Clone,
    P: FnMut(&R::Value) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end {
        if pred(range.value_at(&pos)) {
            *range.value_at_mut(&pos) = new.clone();
        }
        range.increment_pos(&mut pos);
    }
}

/// Writes every element to `out`, substituting `new` for elements equal to `old`.
pub fn replace_copy<R, O, V>(range: &R, out: O, old: &V, new: V) -> Result<usize, RangeError>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq + Clone,
    O: OutputRange<V>,
{
    replace_copy_if(range, out, |value| value == old, new)
}

/// Writes every element to `out`, substituting `new` for elements passing `pred`.
pub fn replace_copy_if<R, O, V, P>(
    range: &R,
    out: O,
    mut pred: P,
    new: V,
) -> Result<usize, RangeError>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: Clone,
    O: OutputRange<V>,
    P: FnMut(&V) -> bool,
{
    transform(range, out, |item| {
        let value = item.borrow();
        if pred(value) {
            new.clone()
        } else {
            value.clone()
        }
    })
}

/// Overwrites every element with a clone of `value`.
pub fn fill<R>(range: &mut R, value: &R::Value)
where
    R: MutableRange,
    R::Value: Clone,
{
    generate(range, || value.clone());
}

/// Writes `n` clones of `value` to `out`.
pub fn fill_n<O, T>(out: O, n: usize, value: T) -> Result<usize, RangeError>
where
    O: OutputRange<T>,
    T: Clone,
{
    generate_n(out, n, || value.clone())
}

/// Overwrites every element with successive results of `g`.
pub fn generate<R, G>(range: &mut R, mut g: G)
where
    R: MutableRange,
    G: FnMut() -> R::Value,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end {
        *range.value_at_mut(&pos) = g();
        range.increment_pos(&mut pos);
    }
}

/// Writes `n` successive results of `g` to `out`.
pub fn generate_n<O, T, G>(mut out: O, n: usize, mut g: G) -> Result<usize, RangeError>
where
    O: OutputRange<T>,
    G: FnMut() -> T,
{
    for _ in 0..n {
        out.put(g())?;
    }
    Ok(n)
}

/// Moves the elements not equal to `value` to the front, keeping their
/// order, and returns the new logical end.
///
/// Elements past the returned position are the removed ones, in
/// unspecified order.
pub fn remove<R>(range: &mut R, value: &R::Value) -> R::Position
where
    R: MutableRange + ForwardRange,
    R::Value: PartialEq,
{
    remove_if(range, |item| item == value)
}

/// Moves the elements failing `pred` to the front, keeping their order,
/// and returns the new logical end.
pub fn remove_if<R, P>(range: &mut R, mut pred: P) -> R::Position
where
    R: MutableRange + ForwardRange,
    P: FnMut(&R::Value) -> bool,
{
    let end = range.end_pos();
    let mut kept = range.begin_pos();
    while kept != end && !pred(range.value_at(&kept)) {
        range.increment_pos(&mut kept);
    }
    if kept == end {
        return end;
    }
    let mut pos = kept.clone();
    range.increment_pos(&mut pos);
    while pos != end {
        if !pred(range.value_at(&pos)) {
            range.swap_at(&kept, &pos);
            range.increment_pos(&mut kept);
        }
        range.increment_pos(&mut pos);
    }
    kept
}

/// Writes the elements not equal to `value` to `out`.
pub fn remove_copy<R, O, V>(range: &R, out: O, value: &V) -> Result<usize, RangeError>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq + ?Sized,
    O: OutputRange<R::Item>,
{
    copy_if(range, out, |item| item.borrow() != value)
}

/// Writes the elements failing `pred` to `out`.
pub fn remove_copy_if<R, O, P>(range: &R, out: O, mut pred: P) -> Result<usize, RangeError>
where
    R: InputRange,
    O: OutputRange<R::Item>,
    P: FnMut(&R::Item) -> bool,
{
    copy_if(range, out, |item| !pred(item))
}

/// Keeps the first element of every run of equal elements at the front and
/// returns the new logical end.
pub fn unique<R>(range: &mut R) -> R::Position
where
    R: MutableRange + ForwardRange,
    R::Value: PartialEq,
{
    unique_by(range, |a, b| a == b)
}

/// [`unique`] with a custom equivalence.
///
/// Each element is compared with the first element of its run.
pub fn unique_by<R, F>(range: &mut R, mut eq: F) -> R::Position
where
    R: MutableRange + ForwardRange,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let end = range.end_pos();
    let mut kept = range.begin_pos();
    if kept == end {
        return end;
    }
    let mut pos = kept.clone();
    range.increment_pos(&mut pos);
    while pos != end {
        if !eq(range.value_at(&kept), range.value_at(&pos)) {
            range.increment_pos(&mut kept);
            if kept != pos {
                range.swap_at(&kept, &pos);
            }
        }
        range.increment_pos(&mut pos);
    }
    range.increment_pos(&mut kept);
    kept
}

/// Writes the first element of every run of equal elements to `out`.
pub fn unique_copy<R, O>(range: &R, out: O) -> Result<usize, RangeError>
where
    R: InputRange,
    R::Item: PartialEq + Clone,
    O: OutputRange<R::Item>,
{
    unique_copy_by(range, out, |a, b| a == b)
}

/// [`unique_copy`] with a custom equivalence.
pub fn unique_copy_by<R, O, F>(range: &R, mut out: O, mut eq: F) -> Result<usize, RangeError>
where
    R: InputRange,
    R::Item: Clone,
    O: OutputRange<R::Item>,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    if pos == end {
        return Ok(0);
    }
    let mut head = range.at_pos(&pos);
    out.put(head.clone())?;
    let mut written = 1;
    range.increment_pos(&mut pos);
    while pos != end {
        let item = range.at_pos(&pos);
        if !eq(&head, &item) {
            out.put(item.clone())?;
            written += 1;
            head = item;
        }
        range.increment_pos(&mut pos);
    }
    Ok(written)
}

/// Reverses the elements in place.
pub fn reverse<R>(range: &mut R)
where
    R: MutableRange + BidirectionalRange,
{
    let (first, last) = (range.begin_pos(), range.end_pos());
    reverse_positions(range, first, last);
}

pub(crate) fn reverse_positions<R>(range: &mut R, mut first: R::Position, mut last: R::Position)
where
    R: MutableRange + BidirectionalRange,
{
    while first != last {
        range.decrement_pos(&mut last);
        if first == last {
            break;
        }
        range.swap_at(&first, &last);
        range.increment_pos(&mut first);
    }
}

/// Writes the elements back to front to `out`.
pub fn reverse_copy<R, O>(range: &R, mut out: O) -> Result<usize, RangeError>
where
    R: InputRange + BidirectionalRange,
    O: OutputRange<R::Item>,
{
    let begin = range.begin_pos();
    let mut pos = range.end_pos();
    let mut written = 0;
    while pos != begin {
        range.decrement_pos(&mut pos);
        out.put(range.at_pos(&pos))?;
        written += 1;
    }
    Ok(written)
}

/// Rotates the elements so that `middle` becomes the front.
///
/// Returns the new position of the element that used to be first.
pub fn rotate<R>(range: &mut R, middle: R::Position) -> R::Position
where
    R: MutableRange + ForwardRange,
{
    let (first, last) = (range.begin_pos(), range.end_pos());
    rotate_positions(range, first, middle, last)
}

/// Writes the elements from `middle` to the end, then those before
/// `middle`, to `out`.
pub fn rotate_copy<R, O>(range: &R, middle: &R::Position, mut out: O) -> Result<usize, RangeError>
where
    R: InputRange + ForwardRange,
    O: OutputRange<R::Item>,
{
    let mut written = 0;
    let end = range.end_pos();
    let mut pos = middle.clone();
    while pos != end {
        out.put(range.at_pos(&pos))?;
        written += 1;
        range.increment_pos(&mut pos);
    }
    pos = range.begin_pos();
    while pos != *middle {
        out.put(range.at_pos(&pos))?;
        written += 1;
        range.increment_pos(&mut pos);
    }
    Ok(written)
}

/// Exchanges elements of `r1` and `r2` pairwise, stopping at the end of the
/// shorter range, and returns the position in `r2` after the last swap.
pub fn swap_ranges<R1, R2>(r1: &mut R1, r2: &mut R2) -> R2::Position
where
    R1: MutableRange,
    R2: MutableRange<Value = R1::Value>,
{
    let (end1, end2) = (r1.end_pos(), r2.end_pos());
    let (mut p1, mut p2) = (r1.begin_pos(), r2.begin_pos());
    while p1 != end1 && p2 != end2 {
        core::mem::swap(r1.value_at_mut(&p1), r2.value_at_mut(&p2));
        r1.increment_pos(&mut p1);
        r2.increment_pos(&mut p2);
    }
    p2
}

/// Shuffles the elements uniformly at random (Fisher-Yates).
pub fn shuffle<R, G>(range: &mut R, rng: &mut G)
where
    R: MutableRange + RandomAccessRange,
    G: Rng + ?Sized,
{
    let mut slots = Slots::new(range);
    for i in (1..slots.len()).rev() {
        let j = rng.random_range(0..=i);
        slots.swap(i, j);
    }
}
