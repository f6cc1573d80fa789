//! Partitioning by a predicate.

use crate::algorithm::binary_search::first_failing;
use crate::algorithm::rotate_positions;
use crate::error::RangeError;
use crate::range::{ForwardRange, InputRange, MutableRange, OutputRange};

/// Returns `true` if every element passing `pred` precedes every element
/// failing it.
pub fn is_partitioned<R, P>(range: &R, mut pred: P) -> bool
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end && pred(range.at_pos(&pos)) {
        range.increment_pos(&mut pos);
    }
    while pos != end {
        if pred(range.at_pos(&pos)) {
            return false;
        }
        range.increment_pos(&mut pos);
    }
    true
}

/// Moves the elements passing `pred` in front of the others and returns
/// the position of the first failing element.
///
/// The relative order within each group is not preserved.
pub fn partition<R, P>(range: &mut R, mut pred: P) -> R::Position
where
    R: MutableRange + ForwardRange,
    P: FnMut(&R::Value) -> bool,
{
    let end = range.end_pos();
    let mut split = range.begin_pos();
    while split != end && pred(range.value_at(&split)) {
        range.increment_pos(&mut split);
    }
    if split == end {
        return end;
    }
    let mut pos = split.clone();
    range.increment_pos(&mut pos);
    while pos != end {
        if pred(range.value_at(&pos)) {
            range.swap_at(&split, &pos);
            range.increment_pos(&mut split);
        }
        range.increment_pos(&mut pos);
    }
    split
}

/// [`partition`] preserving the relative order within both groups.
///
/// Runs in O(n log n) swaps without allocating.
pub fn stable_partition<R, P>(range: &mut R, mut pred: P) -> R::Position
where
    R: MutableRange + ForwardRange,
    P: FnMut(&R::Value) -> bool,
{
    let (first, last) = (range.begin_pos(), range.end_pos());
    let len = range.length();
    stable_partition_in(range, first, last, len, &mut pred)
}

fn stable_partition_in<R, P>(
    range: &mut R,
    first: R::Position,
    last: R::Position,
    len: usize,
    pred: &mut P,
) -> R::Position
where
    R: MutableRange + ForwardRange,
    P: FnMut(&R::Value) -> bool,
{
    match len {
        0 => first,
        1 => {
            let mut after = first.clone();
            range.increment_pos(&mut after);
            if pred(range.value_at(&first)) {
                after
            } else {
                first
            }
        }
        _ => {
            let half = len / 2;
            let mut middle = first.clone();
            range.advance_by(&mut middle, half);
            let left = stable_partition_in(range, first, middle.clone(), half, pred);
            let right = stable_partition_in(range, middle.clone(), last, len - half, pred);
            rotate_positions(range, left, middle, right)
        }
    }
}

/// Writes the elements passing `pred` to `out_true` and the others to
/// `out_false`, returning how many went to each.
pub fn partition_copy<R, O1, O2, P>(
    range: &R,
    mut out_true: O1,
    mut out_false: O2,
    mut pred: P,
) -> Result<(usize, usize), RangeError>
where
    R: InputRange,
    O1: OutputRange<R::Item>,
    O2: OutputRange<R::Item>,
    P: FnMut(&R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    let (mut passed, mut failed) = (0, 0);
    while pos != end {
        let item = range.at_pos(&pos);
        if pred(&item) {
            out_true.put(item)?;
            passed += 1;
        } else {
            out_false.put(item)?;
            failed += 1;
        }
        range.increment_pos(&mut pos);
    }
    Ok((passed, failed))
}

/// Position of the first element failing `pred` in a range already
/// partitioned by it. Uses O(log n) predicate calls.
pub fn partition_point<R, P>(range: &R, pred: P) -> R::Position
where
    R: InputRange + ForwardRange,
    P: FnMut(R::Item) -> bool,
{
    first_failing(range, pred)
}
