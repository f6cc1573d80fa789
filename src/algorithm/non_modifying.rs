//! Algorithms that inspect elements without modifying them.

use core::borrow::Borrow;

use crate::range::{ForwardRange, InputRange};

/// Returns `true` if every element passes `pred` (or the range is empty).
pub fn all_of<R, P>(range: &R, mut pred: P) -> bool
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end {
        if !pred(range.at_pos(&pos)) {
            return false;
        }
        range.increment_pos(&mut pos);
    }
    true
}

/// Returns `true` if at least one element passes `pred`.
pub fn any_of<R, P>(range: &R, pred: P) -> bool
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    find_if(range, pred) != range.end_pos()
}

/// Returns `true` if no element passes `pred`.
pub fn none_of<R, P>(range: &R, pred: P) -> bool
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    !any_of(range, pred)
}

/// Calls `f` on every element in order.
pub fn for_each<R, F>(range: &R, mut f: F)
where
    R: InputRange,
    F: FnMut(R::Item),
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end {
        f(range.at_pos(&pos));
        range.increment_pos(&mut pos);
    }
}

/// Position of the first element equal to `value`.
pub fn find<R, V>(range: &R, value: &V) -> R::Position
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    find_if(range, |item| item.borrow() == value)
}

/// Position of the first element passing `pred`.
pub fn find_if<R, P>(range: &R, mut pred: P) -> R::Position
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end && !pred(range.at_pos(&pos)) {
        range.increment_pos(&mut pos);
    }
    pos
}

/// Position of the first element failing `pred`.
pub fn find_if_not<R, P>(range: &R, mut pred: P) -> R::Position
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    find_if(range, |item| !pred(item))
}

/// Start of the last occurrence of `needle` in `haystack`.
///
/// An empty needle is never found and yields `haystack.end_pos()`.
pub fn find_end<R1, R2>(haystack: &R1, needle: &R2) -> R1::Position
where
    R1: InputRange + ForwardRange,
    R2: InputRange + ForwardRange,
    R1::Item: PartialEq<R2::Item>,
{
    find_end_by(haystack, needle, |a, b| a == b)
}

/// [`find_end`] with a custom equality.
pub fn find_end_by<R1, R2, F>(haystack: &R1, needle: &R2, mut eq: F) -> R1::Position
where
    R1: InputRange + ForwardRange,
    R2: InputRange + ForwardRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let end = haystack.end_pos();
    if needle.is_empty() {
        return end;
    }
    let mut found = end.clone();
    let mut from = haystack.begin_pos();
    loop {
        let pos = search_from(haystack, from, needle, &mut eq);
        if pos == end {
            return found;
        }
        from = pos.clone();
        haystack.increment_pos(&mut from);
        found = pos;
    }
}

/// Position of the first element of `range` equal to any element of `set`.
pub fn find_first_of<R1, R2>(range: &R1, set: &R2) -> R1::Position
where
    R1: InputRange,
    R2: InputRange + ForwardRange,
    R1::Item: PartialEq<R2::Item>,
{
    find_first_of_by(range, set, |a, b| a == b)
}

/// [`find_first_of`] with a custom equality.
pub fn find_first_of_by<R1, R2, F>(range: &R1, set: &R2, mut eq: F) -> R1::Position
where
    R1: InputRange,
    R2: InputRange + ForwardRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    while pos != end {
        let item = range.at_pos(&pos);
        if any_of(set, |candidate| eq(&item, &candidate)) {
            break;
        }
        range.increment_pos(&mut pos);
    }
    pos
}

/// Position of the first element equal to its successor.
pub fn adjacent_find<R>(range: &R) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: PartialEq,
{
    adjacent_find_by(range, |a, b| a == b)
}

/// [`adjacent_find`] with a custom equality.
pub fn adjacent_find_by<R, F>(range: &R, mut eq: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let end = range.end_pos();
    let mut pos = range.begin_pos();
    if pos == end {
        return end;
    }
    let mut next = pos.clone();
    range.increment_pos(&mut next);
    while next != end {
        if eq(&range.at_pos(&pos), &range.at_pos(&next)) {
            return pos;
        }
        pos = next.clone();
        range.increment_pos(&mut next);
    }
    end
}

/// Number of elements equal to `value`.
pub fn count<R, V>(range: &R, value: &V) -> usize
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    count_if(range, |item| item.borrow() == value)
}

/// Number of elements passing `pred`.
pub fn count_if<R, P>(range: &R, mut pred: P) -> usize
where
    R: InputRange,
    P: FnMut(R::Item) -> bool,
{
    let mut n = 0;
    for_each(range, |item| {
        if pred(item) {
            n += 1;
        }
    });
    n
}

/// Positions of the first pair of elements that differ.
///
/// Either position may be the end of its range if that range ran out first.
pub fn mismatch<R1, R2>(r1: &R1, r2: &R2) -> (R1::Position, R2::Position)
where
    R1: InputRange,
    R2: InputRange,
    R1::Item: PartialEq<R2::Item>,
{
    mismatch_by(r1, r2, |a, b| a == b)
}

/// [`mismatch`] with a custom equality.
pub fn mismatch_by<R1, R2, F>(r1: &R1, r2: &R2, mut eq: F) -> (R1::Position, R2::Position)
where
    R1: InputRange,
    R2: InputRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let (end1, end2) = (r1.end_pos(), r2.end_pos());
    let (mut p1, mut p2) = (r1.begin_pos(), r2.begin_pos());
    while p1 != end1 && p2 != end2 && eq(&r1.at_pos(&p1), &r2.at_pos(&p2)) {
        r1.increment_pos(&mut p1);
        r2.increment_pos(&mut p2);
    }
    (p1, p2)
}

/// Returns `true` if both ranges have the same length and equal elements.
pub fn equal<R1, R2>(r1: &R1, r2: &R2) -> bool
where
    R1: InputRange,
    R2: InputRange,
    R1::Item: PartialEq<R2::Item>,
{
    equal_by(r1, r2, |a, b| a == b)
}

/// [`equal`] with a custom equality.
pub fn equal_by<R1, R2, F>(r1: &R1, r2: &R2, eq: F) -> bool
where
    R1: InputRange,
    R2: InputRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let (p1, p2) = mismatch_by(r1, r2, eq);
    p1 == r1.end_pos() && p2 == r2.end_pos()
}

/// Returns `true` if `r2` is a rearrangement of `r1`.
pub fn is_permutation<R1, R2>(r1: &R1, r2: &R2) -> bool
where
    R1: InputRange + ForwardRange,
    R2: InputRange<Item = R1::Item> + ForwardRange,
    R1::Item: PartialEq,
{
    is_permutation_by(r1, r2, |a, b| a == b)
}

/// [`is_permutation`] with a custom equivalence.
///
/// Quadratic: every distinct element is counted in both ranges.
pub fn is_permutation_by<R1, R2, F>(r1: &R1, r2: &R2, mut eq: F) -> bool
where
    R1: InputRange + ForwardRange,
    R2: InputRange<Item = R1::Item> + ForwardRange,
    F: FnMut(&R1::Item, &R1::Item) -> bool,
{
    let (p1, p2) = mismatch_by(r1, r2, &mut eq);
    let (end1, end2) = (r1.end_pos(), r2.end_pos());
    if r1.distance_pos(&p1, &end1) != r2.distance_pos(&p2, &end2) {
        return false;
    }

    let mut pos = p1.clone();
    while pos != end1 {
        let item = r1.at_pos(&pos);
        let seen_before = {
            let mut earlier = p1.clone();
            let mut seen = false;
            while earlier != pos {
                if eq(&r1.at_pos(&earlier), &item) {
                    seen = true;
                    break;
                }
                r1.increment_pos(&mut earlier);
            }
            seen
        };
        if !seen_before {
            let in_first = count_from(r1, pos.clone(), |other| eq(&item, other));
            let in_second = count_from(r2, p2.clone(), |other| eq(&item, other));
            if in_first != in_second {
                return false;
            }
        }
        r1.increment_pos(&mut pos);
    }
    true
}

fn count_from<R, F>(range: &R, mut pos: R::Position, mut pred: F) -> usize
where
    R: InputRange,
    F: FnMut(&R::Item) -> bool,
{
    let end = range.end_pos();
    let mut n = 0;
    while pos != end {
        if pred(&range.at_pos(&pos)) {
            n += 1;
        }
        range.increment_pos(&mut pos);
    }
    n
}

/// Start of the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at `haystack.begin_pos()`.
pub fn search<R1, R2>(haystack: &R1, needle: &R2) -> R1::Position
where
    R1: InputRange + ForwardRange,
    R2: InputRange + ForwardRange,
    R1::Item: PartialEq<R2::Item>,
{
    search_by(haystack, needle, |a, b| a == b)
}

/// [`search`] with a custom equality.
pub fn search_by<R1, R2, F>(haystack: &R1, needle: &R2, mut eq: F) -> R1::Position
where
    R1: InputRange + ForwardRange,
    R2: InputRange + ForwardRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    search_from(haystack, haystack.begin_pos(), needle, &mut eq)
}

fn search_from<R1, R2, F>(
    haystack: &R1,
    mut from: R1::Position,
    needle: &R2,
    eq: &mut F,
) -> R1::Position
where
    R1: InputRange + ForwardRange,
    R2: InputRange + ForwardRange,
    F: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let end = haystack.end_pos();
    let needle_end = needle.end_pos();
    loop {
        let mut h = from.clone();
        let mut n = needle.begin_pos();
        loop {
            if n == needle_end {
                return from;
            }
            if h == end {
                return end;
            }
            if !eq(&haystack.at_pos(&h), &needle.at_pos(&n)) {
                break;
            }
            haystack.increment_pos(&mut h);
            needle.increment_pos(&mut n);
        }
        haystack.increment_pos(&mut from);
    }
}

/// Start of the first run of `n` consecutive elements equal to `value`.
///
/// `n == 0` matches at `range.begin_pos()`.
pub fn search_n<R, V>(range: &R, n: usize, value: &V) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    search_n_by(range, n, value, |item, value| item.borrow() == value)
}

/// [`search_n`] with a custom equality.
pub fn search_n_by<R, V, F>(range: &R, n: usize, value: &V, mut eq: F) -> R::Position
where
    R: InputRange + ForwardRange,
    V: ?Sized,
    F: FnMut(&R::Item, &V) -> bool,
{
    let end = range.end_pos();
    let mut start = range.begin_pos();
    if n == 0 {
        return start;
    }
    let mut run = 0;
    let mut pos = start.clone();
    while pos != end {
        if eq(&range.at_pos(&pos), value) {
            if run == 0 {
                start = pos.clone();
            }
            run += 1;
            if run == n {
                return start;
            }
        } else {
            run = 0;
        }
        range.increment_pos(&mut pos);
    }
    end
}
