use core::fmt;

use crate::category::RangeCategory;
use crate::error::RangeError;
use crate::range::{
    BidirectionalRange, ForwardRange, InputRange, MutableRange, OutputRange, RandomAccessRange,
    Range,
};

/// A random-access range over a borrowed slice.
///
/// Positions are indices into the whole slice, not offsets from the current
/// front, so a position taken before narrowing the range stays valid after.
///
/// # Examples
/// ```
/// use position_range::{make_range, InputRange, Range};
///
/// let data = [10, 20, 30];
/// let mut range = make_range(&data);
/// assert_eq!(*range.front(), 10);
/// range.shrink_front();
/// assert_eq!(*range.front(), 20);
/// assert_eq!(range.begin_pos(), 1);
/// ```
pub struct SliceRange<'a, T> {
    slice: &'a [T],
    first: usize,
    last: usize,
}

impl<'a, T> SliceRange<'a, T> {
    /// Creates a range covering the whole slice.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            first: 0,
            last: slice.len(),
        }
    }

    /// Creates a range covering `slice[first..last]`.
    ///
    /// # Panics (debug only)
    /// - If `first` exceeds `last`
    /// - If `last` exceeds the slice length
    #[inline]
    pub fn with_bounds(slice: &'a [T], first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "first must not exceed last");
        debug_assert!(last <= slice.len(), "last exceeds slice length");
        Self { slice, first, last }
    }

    /// The elements currently covered by the range.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.slice[self.first..self.last]
    }
}

impl<T> Clone for SliceRange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceRange<'_, T> {}

impl<'a, T> From<&'a [T]> for SliceRange<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceRange<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceRange")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Range for SliceRange<'_, T> {
    type Position = usize;
    const CATEGORY: RangeCategory = RangeCategory::RandomAccess;

    #[inline]
    fn begin_pos(&self) -> usize {
        self.first
    }

    #[inline]
    fn end_pos(&self) -> usize {
        self.last
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.last, "begin position past the end");
        self.first = pos;
    }

    #[inline]
    fn set_end_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.slice.len(), "end position outside the slice");
        self.last = pos;
    }

    #[inline]
    fn increment_pos(&self, pos: &mut usize) {
        *pos += 1;
    }
}

impl<'a, T> InputRange for SliceRange<'a, T> {
    type Item = &'a T;

    #[inline]
    fn at_pos(&self, pos: &usize) -> &'a T {
        &self.slice[*pos]
    }
}

impl<T> ForwardRange for SliceRange<'_, T> {
    #[inline]
    fn distance_pos(&self, from: &usize, to: &usize) -> usize {
        to - from
    }

    #[inline]
    fn advance_by(&self, pos: &mut usize, n: usize) {
        *pos += n;
    }
}

impl<T> BidirectionalRange for SliceRange<'_, T> {
    #[inline]
    fn decrement_pos(&self, pos: &mut usize) {
        *pos -= 1;
    }

    #[inline]
    fn retreat_by(&self, pos: &mut usize, n: usize) {
        *pos -= n;
    }
}

impl<T> RandomAccessRange for SliceRange<'_, T> {}

/// A random-access range over a mutably borrowed slice.
///
/// Elements are reached through [`MutableRange`], which makes the range
/// suitable for in-place algorithms such as sorting and partitioning. It is
/// also an [`OutputRange`]: each `put` overwrites the front element and drops
/// it from the range.
pub struct SliceRangeMut<'a, T> {
    slice: &'a mut [T],
    first: usize,
    last: usize,
}

impl<'a, T> SliceRangeMut<'a, T> {
    /// Creates a range covering the whole slice.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        let last = slice.len();
        Self {
            slice,
            first: 0,
            last,
        }
    }

    /// Creates a range covering `slice[first..last]`.
    ///
    /// # Panics (debug only)
    /// - If `first` exceeds `last`
    /// - If `last` exceeds the slice length
    #[inline]
    pub fn with_bounds(slice: &'a mut [T], first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "first must not exceed last");
        debug_assert!(last <= slice.len(), "last exceeds slice length");
        Self { slice, first, last }
    }

    /// The elements currently covered by the range.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slice[self.first..self.last]
    }

    /// Mutable access to the elements currently covered by the range.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slice[self.first..self.last]
    }

    /// Read-only view over the same elements.
    #[inline]
    pub fn as_range(&self) -> SliceRange<'_, T> {
        SliceRange::with_bounds(&*self.slice, self.first, self.last)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceRangeMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceRangeMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceRangeMut")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Range for SliceRangeMut<'_, T> {
    type Position = usize;
    const CATEGORY: RangeCategory = RangeCategory::RandomAccess;

    #[inline]
    fn begin_pos(&self) -> usize {
        self.first
    }

    #[inline]
    fn end_pos(&self) -> usize {
        self.last
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.last, "begin position past the end");
        self.first = pos;
    }

    #[inline]
    fn set_end_pos(&mut self, pos: usize) {
        debug_assert!(pos <= self.slice.len(), "end position outside the slice");
        self.last = pos;
    }

    #[inline]
    fn increment_pos(&self, pos: &mut usize) {
        *pos += 1;
    }
}

impl<T> MutableRange for SliceRangeMut<'_, T> {
    type Value = T;

    #[inline]
    fn value_at(&self, pos: &usize) -> &T {
        &self.slice[*pos]
    }

    #[inline]
    fn value_at_mut(&mut self, pos: &usize) -> &mut T {
        &mut self.slice[*pos]
    }

    #[inline]
    fn swap_at(&mut self, a: &usize, b: &usize) {
        self.slice.swap(*a, *b);
    }
}

impl<T> ForwardRange for SliceRangeMut<'_, T> {
    #[inline]
    fn distance_pos(&self, from: &usize, to: &usize) -> usize {
        to - from
    }

    #[inline]
    fn advance_by(&self, pos: &mut usize, n: usize) {
        *pos += n;
    }
}

impl<T> BidirectionalRange for SliceRangeMut<'_, T> {
    #[inline]
    fn decrement_pos(&self, pos: &mut usize) {
        *pos -= 1;
    }

    #[inline]
    fn retreat_by(&self, pos: &mut usize, n: usize) {
        *pos -= n;
    }
}

impl<T> RandomAccessRange for SliceRangeMut<'_, T> {}

impl<T> OutputRange<T> for SliceRangeMut<'_, T> {
    #[inline]
    fn put(&mut self, value: T) -> Result<(), RangeError> {
        if self.first == self.last {
            return Err(RangeError::OutputExhausted);
        }
        self.slice[self.first] = value;
        self.first += 1;
        Ok(())
    }
}

/// Creates a read-only range over a slice (or anything that derefs to one).
#[inline]
pub fn make_range<T>(slice: &[T]) -> SliceRange<'_, T> {
    SliceRange::new(slice)
}

/// Creates a mutable range over a slice (or anything that derefs to one).
#[inline]
pub fn make_range_mut<T>(slice: &mut [T]) -> SliceRangeMut<'_, T> {
    SliceRangeMut::new(slice)
}
