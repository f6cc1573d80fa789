//! Extremes and lexicographical comparison.
//!
//! Scalar `min`/`max` of two values live in [`core::cmp`].

use core::cmp::Ordering;

use crate::range::{ForwardRange, InputRange};

/// Position of the first smallest element, or the end if the range is empty.
pub fn min_element<R>(range: &R) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Ord,
{
    min_element_by(range, Ord::cmp)
}

/// [`min_element`] with a custom ordering.
pub fn min_element_by<R, F>(range: &R, mut cmp: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let end = range.end_pos();
    let mut best = range.begin_pos();
    if best == end {
        return end;
    }
    let mut pos = best.clone();
    range.increment_pos(&mut pos);
    while pos != end {
        if cmp(&range.at_pos(&pos), &range.at_pos(&best)) == Ordering::Less {
            best = pos.clone();
        }
        range.increment_pos(&mut pos);
    }
    best
}

/// Position of the first largest element, or the end if the range is empty.
pub fn max_element<R>(range: &R) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Ord,
{
    max_element_by(range, Ord::cmp)
}

/// [`max_element`] with a custom ordering.
pub fn max_element_by<R, F>(range: &R, mut cmp: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    min_element_by(range, |a, b| cmp(b, a))
}

/// Positions of the first smallest and the last largest element.
///
/// Both are the end if the range is empty.
pub fn minmax_element<R>(range: &R) -> (R::Position, R::Position)
where
    R: InputRange + ForwardRange,
    R::Item: Ord,
{
    minmax_element_by(range, Ord::cmp)
}

/// [`minmax_element`] with a custom ordering.
pub fn minmax_element_by<R, F>(range: &R, mut cmp: F) -> (R::Position, R::Position)
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let end = range.end_pos();
    let mut min = range.begin_pos();
    if min == end {
        return (end.clone(), end);
    }
    let mut max = min.clone();
    let mut pos = min.clone();
    range.increment_pos(&mut pos);
    while pos != end {
        let item = range.at_pos(&pos);
        if cmp(&item, &range.at_pos(&min)) == Ordering::Less {
            min = pos.clone();
        }
        if cmp(&item, &range.at_pos(&max)) != Ordering::Less {
            max = pos.clone();
        }
        range.increment_pos(&mut pos);
    }
    (min, max)
}

/// Returns `true` if `r1` orders before `r2` element by element, a proper
/// prefix ordering before the longer range.
pub fn lexicographical_compare<R1, R2>(r1: &R1, r2: &R2) -> bool
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: Ord,
{
    lexicographical_compare_by(r1, r2, Ord::cmp)
}

/// [`lexicographical_compare`] with a custom ordering.
pub fn lexicographical_compare_by<R1, R2, F>(r1: &R1, r2: &R2, mut cmp: F) -> bool
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    F: FnMut(&R1::Item, &R1::Item) -> Ordering,
{
    let (end1, end2) = (r1.end_pos(), r2.end_pos());
    let (mut p1, mut p2) = (r1.begin_pos(), r2.begin_pos());
    while p1 != end1 {
        if p2 == end2 {
            return false;
        }
        match cmp(&r1.at_pos(&p1), &r2.at_pos(&p2)) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
        r1.increment_pos(&mut p1);
        r2.increment_pos(&mut p2);
    }
    p2 != end2
}
