//! Generic algorithms over ranges.
//!
//! Algorithms state the capabilities they need through trait bounds, so
//! passing a range that is too weak (sorting a forward-only range, reversing
//! a single-pass one) is a compile error rather than a runtime failure.
//!
//! Conventions:
//!
//! - Read-only algorithms borrow the range (`&R`); in-place algorithms take
//!   `&mut R`. Positions they return belong to that range.
//! - "Not found" is reported as the range's `end_pos()`.
//! - Unary predicates over readable ranges take items by value. Predicates
//!   over mutable ranges, and predicates whose item is used afterwards,
//!   take a reference.
//! - Comparators return [`Ordering`](core::cmp::Ordering). Each algorithm
//!   with a default comparison (`Ord`, `PartialEq`) has a `_by` variant.
//! - Algorithms writing to an [`OutputRange`](crate::OutputRange) return the
//!   number of elements written, or the first error reported by the output.
//!
//! ```
//! use position_range::{algorithm, make_range, make_range_mut};
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! algorithm::sort(&mut make_range_mut(&mut data));
//! assert_eq!(data, [1, 2, 3, 5, 8, 9]);
//!
//! let sorted = make_range(&data);
//! assert!(algorithm::binary_search(&sorted, &8));
//! assert_eq!(algorithm::lower_bound(&sorted, &4), 3);
//! ```

use crate::range::{ForwardRange, MutableRange, RandomAccessRange, Range};

pub mod binary_search;
pub mod heap;
pub mod merge;
pub mod min_max;
pub mod modifying;
pub mod non_modifying;
pub mod partition;
pub mod permutation;
pub mod sort;

pub use binary_search::{
    binary_search, binary_search_by, equal_range, equal_range_by, lower_bound, lower_bound_by,
    upper_bound, upper_bound_by,
};
pub use heap::{
    is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap, make_heap_by, pop_heap,
    pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
};
pub use merge::{
    includes, includes_by, inplace_merge, inplace_merge_by, merge, merge_by, set_difference,
    set_difference_by, set_intersection, set_intersection_by, set_symmetric_difference,
    set_symmetric_difference_by, set_union, set_union_by,
};
pub use min_max::{
    lexicographical_compare, lexicographical_compare_by, max_element, max_element_by,
    min_element, min_element_by, minmax_element, minmax_element_by,
};
pub use modifying::{
    copy, copy_if, copy_n, fill, fill_n, generate, generate_n, remove, remove_copy,
    remove_copy_if, remove_if, replace, replace_copy, replace_copy_if, replace_if, reverse,
    reverse_copy, rotate, rotate_copy, shuffle, swap_ranges, transform, transform_binary, unique,
    unique_by, unique_copy, unique_copy_by,
};
pub use non_modifying::{
    adjacent_find, adjacent_find_by, all_of, any_of, count, count_if, equal, equal_by, find,
    find_end, find_end_by, find_first_of, find_first_of_by, find_if, find_if_not, for_each,
    is_permutation, is_permutation_by, mismatch, mismatch_by, none_of, search, search_by,
    search_n, search_n_by,
};
pub use partition::{
    is_partitioned, partition, partition_copy, partition_point, stable_partition,
};
pub use permutation::{
    next_permutation, next_permutation_by, prev_permutation, prev_permutation_by,
};
pub use sort::{
    is_sorted, is_sorted_by, is_sorted_until, is_sorted_until_by, nth_element, nth_element_by,
    partial_sort, partial_sort_by, partial_sort_copy, partial_sort_copy_by, sort, sort_by,
    stable_sort, stable_sort_by,
};

/// Index-based view of a mutable random-access range.
///
/// Index arithmetic reads better than position arithmetic in the
/// quicksort, heap and merge kernels. Index 0 is the range's front.
pub(crate) struct Slots<'r, R: Range> {
    range: &'r mut R,
    base: R::Position,
    len: usize,
}

impl<'r, R: MutableRange + RandomAccessRange> Slots<'r, R> {
    pub(crate) fn new(range: &'r mut R) -> Self {
        let base = range.begin_pos();
        let len = range.length();
        Self { range, base, len }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn pos(&self, index: usize) -> R::Position {
        let mut pos = self.base.clone();
        self.range.advance_by(&mut pos, index);
        pos
    }

    #[inline]
    pub(crate) fn index(&self, pos: &R::Position) -> usize {
        self.range.distance_pos(&self.base, pos)
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> &R::Value {
        self.range.value_at(&self.pos(index))
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> &mut R::Value {
        let pos = self.pos(index);
        self.range.value_at_mut(&pos)
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            let (a, b) = (self.pos(a), self.pos(b));
            self.range.swap_at(&a, &b);
        }
    }

    /// Reverses `lo..hi`.
    pub(crate) fn reverse(&mut self, mut lo: usize, mut hi: usize) {
        while lo + 1 < hi {
            hi -= 1;
            self.swap(lo, hi);
            lo += 1;
        }
    }

    /// Rotates `lo..hi` so that `mid` becomes the first element.
    pub(crate) fn rotate(&mut self, lo: usize, mid: usize, hi: usize) {
        self.reverse(lo, mid);
        self.reverse(mid, hi);
        self.reverse(lo, hi);
    }
}

/// Rotates `first..last` so that `middle` becomes the first element and
/// returns the new position of the element at `first`.
///
/// Works on forward ranges by repeated block swaps.
pub(crate) fn rotate_positions<R: MutableRange + ForwardRange>(
    range: &mut R,
    mut first: R::Position,
    mut middle: R::Position,
    last: R::Position,
) -> R::Position {
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    let mut next = middle.clone();
    loop {
        range.swap_at(&first, &next);
        range.increment_pos(&mut first);
        range.increment_pos(&mut next);
        if next == last {
            break;
        }
        if first == middle {
            middle = next.clone();
        }
    }

    let result = first.clone();
    if first != middle {
        next = middle.clone();
        loop {
            range.swap_at(&first, &next);
            range.increment_pos(&mut first);
            range.increment_pos(&mut next);
            if next == last {
                if first == middle {
                    break;
                }
                next = middle.clone();
            } else if first == middle {
                middle = next.clone();
            }
        }
    }
    result
}
