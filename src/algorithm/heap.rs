//! Binary max-heaps laid out in random-access ranges.
//!
//! The element at index 0 is the largest; the children of index `i` sit at
//! `2i + 1` and `2i + 2`.

use core::cmp::Ordering;

use crate::algorithm::Slots;
use crate::range::{InputRange, MutableRange, RandomAccessRange};

#[inline]
fn less<T, F>(cmp: &mut F, a: &T, b: &T) -> bool
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    cmp(a, b) == Ordering::Less
}

/// Moves the element at `base + node` down until the heap property holds
/// for the heap `base..base + len`.
pub(crate) fn sift_down<R, F>(
    slots: &mut Slots<'_, R>,
    base: usize,
    mut node: usize,
    len: usize,
    cmp: &mut F,
) where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && less(cmp, slots.get(base + child), slots.get(base + child + 1)) {
            child += 1;
        }
        if !less(cmp, slots.get(base + node), slots.get(base + child)) {
            return;
        }
        slots.swap(base + node, base + child);
        node = child;
    }
}

fn sift_up<R, F>(slots: &mut Slots<'_, R>, mut node: usize, cmp: &mut F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    while node > 0 {
        let parent = (node - 1) / 2;
        if !less(cmp, slots.get(parent), slots.get(node)) {
            return;
        }
        slots.swap(parent, node);
        node = parent;
    }
}

pub(crate) fn heapify<R, F>(slots: &mut Slots<'_, R>, base: usize, len: usize, cmp: &mut F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    for node in (0..len / 2).rev() {
        sift_down(slots, base, node, len, cmp);
    }
}

pub(crate) fn heap_sort_slots<R, F>(slots: &mut Slots<'_, R>, base: usize, len: usize, cmp: &mut F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    for end in (1..len).rev() {
        slots.swap(base, base + end);
        sift_down(slots, base, 0, end, cmp);
    }
}

/// Adds the last element to the heap formed by the elements before it.
pub fn push_heap<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    push_heap_by(range, Ord::cmp);
}

/// [`push_heap`] with a custom ordering.
pub fn push_heap_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    if slots.len() > 1 {
        let last = slots.len() - 1;
        sift_up(&mut slots, last, &mut cmp);
    }
}

/// Moves the largest element to the back and restores the heap over the
/// elements before it.
pub fn pop_heap<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    pop_heap_by(range, Ord::cmp);
}

/// [`pop_heap`] with a custom ordering.
pub fn pop_heap_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let len = slots.len();
    if len > 1 {
        slots.swap(0, len - 1);
        sift_down(&mut slots, 0, 0, len - 1, &mut cmp);
    }
}

/// Rearranges the elements into a heap.
pub fn make_heap<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    make_heap_by(range, Ord::cmp);
}

/// [`make_heap`] with a custom ordering.
pub fn make_heap_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let len = slots.len();
    heapify(&mut slots, 0, len, &mut cmp);
}

/// Turns a heap into a sorted range.
pub fn sort_heap<R>(range: &mut R)
where
    R: MutableRange + RandomAccessRange,
    R::Value: Ord,
{
    sort_heap_by(range, Ord::cmp);
}

/// [`sort_heap`] with a custom ordering.
pub fn sort_heap_by<R, F>(range: &mut R, mut cmp: F)
where
    R: MutableRange + RandomAccessRange,
    F: FnMut(&R::Value, &R::Value) -> Ordering,
{
    let mut slots = Slots::new(range);
    let len = slots.len();
    heap_sort_slots(&mut slots, 0, len, &mut cmp);
}

/// Returns `true` if the elements form a heap.
pub fn is_heap<R>(range: &R) -> bool
where
    R: InputRange + RandomAccessRange,
    R::Item: Ord,
{
    is_heap_by(range, Ord::cmp)
}

/// [`is_heap`] with a custom ordering.
pub fn is_heap_by<R, F>(range: &R, cmp: F) -> bool
where
    R: InputRange + RandomAccessRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    is_heap_until_by(range, cmp) == range.end_pos()
}

/// Position of the first element that breaks the heap property.
pub fn is_heap_until<R>(range: &R) -> R::Position
where
    R: InputRange + RandomAccessRange,
    R::Item: Ord,
{
    is_heap_until_by(range, Ord::cmp)
}

/// [`is_heap_until`] with a custom ordering.
pub fn is_heap_until_by<R, F>(range: &R, mut cmp: F) -> R::Position
where
    R: InputRange + RandomAccessRange,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    let len = range.length();
    for child in 1..len {
        let parent = range.at_pos(&range.pos_at((child - 1) / 2));
        let pos = range.pos_at(child);
        if less(&mut cmp, &parent, &range.at_pos(&pos)) {
            return pos;
        }
    }
    range.end_pos()
}
