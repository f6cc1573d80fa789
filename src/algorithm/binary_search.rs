//! Binary search over sorted forward ranges.
//!
//! Each search makes O(log n) comparisons. Stepping between probes costs
//! O(n) on forward-only ranges and O(1) on random-access ones.
//!
//! The `_by` variants take a probe that compares an element against the
//! sought value, returning `Less` for elements ordered before it, the same
//! shape as [`slice::binary_search_by`].

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::range::{ForwardRange, InputRange};

/// First position at which `pred` fails, for a range partitioned by `pred`.
pub(crate) fn first_failing<R, P>(range: &R, mut pred: P) -> R::Position
where
    R: InputRange + ForwardRange,
    P: FnMut(R::Item) -> bool,
{
    let mut first = range.begin_pos();
    let mut len = range.length();
    while len > 0 {
        let half = len / 2;
        let mut middle = first.clone();
        range.advance_by(&mut middle, half);
        if pred(range.at_pos(&middle)) {
            range.increment_pos(&mut middle);
            first = middle;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// First position whose element is not less than `value`.
pub fn lower_bound<R, V>(range: &R, value: &V) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: Ord + ?Sized,
{
    lower_bound_by(range, |item| item.borrow().cmp(value))
}

/// First position whose element the probe doesn't order `Less`.
pub fn lower_bound_by<R, F>(range: &R, mut probe: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item) -> Ordering,
{
    first_failing(range, |item| probe(&item) == Ordering::Less)
}

/// First position whose element is greater than `value`.
pub fn upper_bound<R, V>(range: &R, value: &V) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: Ord + ?Sized,
{
    upper_bound_by(range, |item| item.borrow().cmp(value))
}

/// First position whose element the probe orders `Greater`.
pub fn upper_bound_by<R, F>(range: &R, mut probe: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item) -> Ordering,
{
    first_failing(range, |item| probe(&item) != Ordering::Greater)
}

/// Bounds of the run of elements equal to `value`.
pub fn equal_range<R, V>(range: &R, value: &V) -> (R::Position, R::Position)
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: Ord + ?Sized,
{
    equal_range_by(range, |item| item.borrow().cmp(value))
}

/// Bounds of the run of elements the probe orders `Equal`.
pub fn equal_range_by<R, F>(range: &R, mut probe: F) -> (R::Position, R::Position)
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item) -> Ordering,
{
    let lower = lower_bound_by(range, &mut probe);
    let upper = upper_bound_by(range, probe);
    (lower, upper)
}

/// Returns `true` if the sorted range contains `value`.
pub fn binary_search<R, V>(range: &R, value: &V) -> bool
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: Ord + ?Sized,
{
    binary_search_by(range, |item| item.borrow().cmp(value))
}

/// Returns `true` if the probe orders some element `Equal`.
pub fn binary_search_by<R, F>(range: &R, mut probe: F) -> bool
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item) -> Ordering,
{
    let pos = lower_bound_by(range, &mut probe);
    pos != range.end_pos() && probe(&range.at_pos(&pos)) == Ordering::Equal
}
