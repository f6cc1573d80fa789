use core::cmp::Ordering;

use crate::algorithm::modifying::reverse_positions;
use crate::range::{BidirectionalRange, MutableRange};

/// Rearranges the elements into the next lexicographically greater
/// permutation.
///
/// Returns `false`, leaving the elements sorted ascending, if they already
/// were the greatest permutation.
///
/// # Examples
/// ```
/// use position_range::{algorithm, make_range_mut};
///
/// let mut digits = [1, 2, 3];
/// let mut seen = vec![digits];
/// while algorithm::next_permutation(&mut make_range_mut(&mut digits)) {
///     seen.push(digits);
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[1], [1, 3, 2]);
/// assert_eq!(digits, [1, 2, 3]);
/// ```
pub fn next_permutation<R>(range: &mut R) -> bool
where
    R: MutableRange + BidirectionalRange,
    R::Value: Ord,
{
    next_permutation_by(range, Ord::cmp)
}

/// [`next_permutation`] with a custom ordering.
pub fn next_permutation_by<R, F>(range: &mut R, mut cmp: F) -> bool
where
    R: MutableRange + BidirectionalRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    step_permutation(range, |a, b| cmp(a, b) == Ordering::Less)
}

/// Rearranges the elements into the previous lexicographically smaller
/// permutation.
///
/// Returns `false`, leaving the elements sorted descending, if they already
/// were the smallest permutation.
pub fn prev_permutation<R>(range: &mut R) -> bool
where
    R: MutableRange + BidirectionalRange,
    R::Value: Ord,
{
    prev_permutation_by(range, Ord::cmp)
}

/// [`prev_permutation`] with a custom ordering.
pub fn prev_permutation_by<R, F>(range: &mut R, mut cmp: F) -> bool
where
    R: MutableRange + BidirectionalRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    step_permutation(range, |a, b| cmp(b, a) == Ordering::Less)
}

/// Shared body of both directions; `before(a, b)` is the strict order the
/// permutations are enumerated in.
fn step_permutation<R, F>(range: &mut R, mut before: F) -> bool
where
    R: MutableRange + BidirectionalRange,
    F: FnMut(&R::Value, &R::Value) -> bool,
{
    let (begin, end) = (range.begin_pos(), range.end_pos());
    if begin == end {
        return false;
    }
    let mut i = end.clone();
    range.decrement_pos(&mut i);
    if i == begin {
        return false;
    }

    loop {
        let after = i.clone();
        range.decrement_pos(&mut i);
        if before(range.value_at(&i), range.value_at(&after)) {
            let mut j = end.clone();
            loop {
                range.decrement_pos(&mut j);
                if before(range.value_at(&i), range.value_at(&j)) {
                    break;
                }
            }
            range.swap_at(&i, &j);
            reverse_positions(range, after, end);
            return true;
        }
        if i == begin {
            reverse_positions(range, begin, end);
            return false;
        }
    }
}
