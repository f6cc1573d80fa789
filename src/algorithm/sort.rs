//! Sorting and order checks.
//!
//! [`sort`] is an introsort: quicksort with median-of-three pivots,
//! switching to heap sort when recursion gets too deep and to insertion sort
//! for short runs. [`stable_sort`] is a top-down merge sort whose merge step
//! rotates blocks in place, trading an extra log factor for needing only
//! swaps. Neither allocates.

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::algorithm::heap::{heap_sort_slots, heapify, sift_down};
use crate::algorithm::Slots;
use crate::range::{ForwardRange, InputRange, MutableRange, RandomAccessRange};

/// Runs at most this long are sorted by insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

#[inline]
fn less<T, F>(cmp: &mut F, a: &T, b: &T) -> bool
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    cmp(a, b) == Ordering::Less
}

/// Sorts the elements in ascending order. Not stable.
pub fn sort<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    sort_by(range, Ord::cmp);
}

/// [`sort`] with a custom ordering.
pub fn sort_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let len = slots.len();
    let depth_limit = 2 * (usize::BITS - len.leading_zeros()) as usize;
    introsort(&mut slots, 0, len, depth_limit, &mut cmp);
}

fn introsort<R, F>(
    slots: &mut Slots<'_, R>,
    mut lo: usize,
    mut hi: usize,
    mut depth: usize,
    cmp: &mut F,
) where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    loop {
        let len = hi - lo;
        if len <= INSERTION_SORT_THRESHOLD {
            insertion_sort(slots, lo, hi, cmp);
            return;
        }
        if depth == 0 {
            tracing::trace!(lo, len, "introsort depth exhausted, falling back to heap sort");
            heapify(slots, lo, len, cmp);
            heap_sort_slots(slots, lo, len, cmp);
            return;
        }
        depth -= 1;

        let pivot = partition_slots(slots, lo, hi, cmp);
        // Recurse into the smaller side to bound stack depth.
        if pivot - lo < hi - pivot {
            introsort(slots, lo, pivot, depth, cmp);
            lo = pivot + 1;
        } else {
            introsort(slots, pivot + 1, hi, depth, cmp);
            hi = pivot;
        }
    }
}

fn insertion_sort<R, F>(slots: &mut Slots<'_, R>, lo: usize, hi: usize, cmp: &mut F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && less(cmp, slots.get(j), slots.get(j - 1)) {
            slots.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Partitions `lo..hi` around a median-of-three pivot and returns the
/// pivot's final index. Requires `hi - lo >= 3`.
fn partition_slots<R, F>(slots: &mut Slots<'_, R>, lo: usize, hi: usize, cmp: &mut F) -> usize
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;
    if less(cmp, slots.get(mid), slots.get(lo)) {
        slots.swap(mid, lo);
    }
    if less(cmp, slots.get(last), slots.get(mid)) {
        slots.swap(last, mid);
        if less(cmp, slots.get(mid), slots.get(lo)) {
            slots.swap(mid, lo);
        }
    }
    // Median now sits at `mid`; park it at `lo` as the pivot.
    slots.swap(lo, mid);

    let mut store = lo;
    for i in lo + 1..hi {
        if less(cmp, slots.get(i), slots.get(lo)) {
            store += 1;
            slots.swap(store, i);
        }
    }
    slots.swap(lo, store);
    store
}

/// Sorts the elements in ascending order, keeping equal elements in their
/// original order.
pub fn stable_sort<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    stable_sort_by(range, Ord::cmp);
}

/// [`stable_sort`] with a custom ordering.
pub fn stable_sort_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let len = slots.len();
    if len > INSERTION_SORT_THRESHOLD {
        tracing::trace!(len, "stable sort merging without a buffer");
    }
    merge_sort(&mut slots, 0, len, &mut cmp);
}

fn merge_sort<R, F>(slots: &mut Slots<'_, R>, lo: usize, hi: usize, cmp: &mut F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    if hi - lo <= INSERTION_SORT_THRESHOLD {
        insertion_sort(slots, lo, hi, cmp);
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(slots, lo, mid, cmp);
    merge_sort(slots, mid, hi, cmp);
    merge_in_place(slots, lo, mid, hi, cmp);
}

/// Stably merges the sorted runs `lo..mid` and `mid..hi` using only swaps.
pub(crate) fn merge_in_place<R, F>(
    slots: &mut Slots<'_, R>,
    lo: usize,
    mid: usize,
    hi: usize,
    cmp: &mut F,
) where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let (len1, len2) = (mid - lo, hi - mid);
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if less(cmp, slots.get(mid), slots.get(lo)) {
            slots.swap(lo, mid);
        }
        return;
    }

    let (cut1, cut2) = if len1 > len2 {
        let cut1 = lo + len1 / 2;
        // First element of the right run not less than the left cut.
        let mut cut2 = mid;
        while cut2 < hi && less(cmp, slots.get(cut2), slots.get(cut1)) {
            cut2 += 1;
        }
        (cut1, cut2)
    } else {
        let cut2 = mid + len2 / 2;
        // First element of the left run greater than the right cut.
        let mut cut1 = lo;
        while cut1 < mid && !less(cmp, slots.get(cut2), slots.get(cut1)) {
            cut1 += 1;
        }
        (cut1, cut2)
    };

    slots.rotate(cut1, mid, cut2);
    let new_mid = cut1 + (cut2 - mid);
    merge_in_place(slots, lo, cut1, new_mid, cmp);
    merge_in_place(slots, new_mid, cut2, hi, cmp);
}

/// Sorts the elements so that those before `middle` are the smallest, in
/// ascending order. The rest are left in unspecified order.
pub fn partial_sort<R>(range: &mut R, middle: R::Position)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    partial_sort_by(range, middle, Ord::cmp);
}

/// [`partial_sort`] with a custom ordering.
pub fn partial_sort_by<R, F>(range: &mut R, middle: R::Position, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let m = slots.index(&middle);
    if m == 0 {
        return;
    }
    heapify(&mut slots, 0, m, &mut cmp);
    for i in m..slots.len() {
        if less(&mut cmp, slots.get(i), slots.get(0)) {
            slots.swap(0, i);
            sift_down(&mut slots, 0, 0, m, &mut cmp);
        }
    }
    heap_sort_slots(&mut slots, 0, m, &mut cmp);
}

/// Copies the smallest elements of `range` into `dest` in ascending order,
/// filling at most all of `dest`, and returns the end of the written part.
pub fn partial_sort_copy<R, D>(range: &R, dest: &mut D) -> D::Position
where
    R: InputRange,
    R::Item: Borrow<D::Value>,
    D: MutableRange + RandomAccessRange,
    D::Value: Ord + Clone,
{
    partial_sort_copy_by(range, dest, Ord::cmp)
}

/// [`partial_sort_copy`] with a custom ordering.
pub fn partial_sort_copy_by<R, D, F>(range: &R, dest: &mut D, mut cmp: F) -> D::Position
where
    R: InputRange,
    R::Item: Borrow<D::Value>,
    D: MutableRange + RandomAccessRange,
    D::Value: Clone,
    F: FnMut(&D::Value, &D::Value) -> Ordering,
{
    let mut slots = Slots::new(dest);
    let capacity = slots.len();
    let end = range.end_pos();
    let mut pos = range.begin_pos();

    let mut filled = 0;
    while filled < capacity && pos != end {
        *slots.get_mut(filled) = range.at_pos(&pos).borrow().clone();
        filled += 1;
        range.increment_pos(&mut pos);
    }

    heapify(&mut slots, 0, filled, &mut cmp);
    while pos != end {
        let item = range.at_pos(&pos);
        if filled > 0 && less(&mut cmp, item.borrow(), slots.get(0)) {
            *slots.get_mut(0) = item.borrow().clone();
            sift_down(&mut slots, 0, 0, filled, &mut cmp);
        }
        range.increment_pos(&mut pos);
    }
    heap_sort_slots(&mut slots, 0, filled, &mut cmp);
    slots.pos(filled)
}

/// Returns `true` if the elements are in ascending order.
pub fn is_sorted<R>(range: &R) -> bool
where
    R: InputRange + ForwardRange,
    R::Item: Ord,
{
    is_sorted_by(range, Ord::cmp)
}

/// [`is_sorted`] with a custom ordering.
pub fn is_sorted_by<R, F>(range: &R, cmp: F) -> bool
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    is_sorted_until_by(range, cmp) == range.end_pos()
}

/// Position of the first element smaller than its predecessor.
pub fn is_sorted_until<R>(range: &R) -> R::Position
where
    R: InputRange + ForwardRange,
    R::Item: Ord,
{
    is_sorted_until_by(range, Ord::cmp)
}

/// [`is_sorted_until`] with a custom ordering.
pub fn is_sorted_until_by<R, F>(range: &R, mut cmp: F) -> R::Position
where
    R: InputRange + ForwardRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let end = range.end_pos();
    let mut prev = range.begin_pos();
    if prev == end {
        return end;
    }
    let mut next = prev.clone();
    range.increment_pos(&mut next);
    while next != end {
        if less(&mut cmp, &range.at_pos(&next), &range.at_pos(&prev)) {
            return next;
        }
        prev = next.clone();
        range.increment_pos(&mut next);
    }
    end
}

/// Places at `nth` the element a full sort would put there, with no larger
/// element before it and no smaller one after.
pub fn nth_element<R>(range: &mut R, nth: R::Position)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    nth_element_by(range, nth, Ord::cmp);
}

/// [`nth_element`] with a custom ordering.
pub fn nth_element_by<R, F>(range: &mut R, nth: R::Position, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let n = slots.index(&nth);
    let (mut lo, mut hi) = (0, slots.len());
    if n >= hi {
        return;
    }
    loop {
        if hi - lo <= INSERTION_SORT_THRESHOLD {
            insertion_sort(&mut slots, lo, hi, &mut cmp);
            return;
        }
        let pivot = partition_slots(&mut slots, lo, hi, &mut cmp);
        match n.cmp(&pivot) {
            Ordering::Equal => return,
            Ordering::Less => hi = pivot,
            Ordering::Greater => lo = pivot + 1,
        }
    }
}
