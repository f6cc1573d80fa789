//! Bridges between ranges and standard iterators.
//!
//! - [`IterRange`] turns any iterator into a single-pass range, the way a
//!   stream of characters read from a file is a range you can walk once.
//! - [`RangeIter`] turns any readable range back into an [`Iterator`].

use core::cell::RefCell;
use core::fmt;

use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, InputRange, Range};

struct Cursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    consumed: usize,
}

impl<I: Iterator> Cursor<I> {
    fn position(&self) -> Option<usize> {
        self.current.as_ref().map(|_| self.consumed)
    }

    fn step(&mut self) {
        if self.current.is_some() {
            self.consumed += 1;
            self.current = self.iter.next();
            if self.current.is_none() {
                tracing::trace!(consumed = self.consumed, "single-pass range exhausted");
            }
        }
    }
}

/// A single-pass range draining an iterator.
///
/// Positions are the ordinal of the current element, or `None` once the
/// iterator is exhausted. Stepping a position advances the shared iterator,
/// so only the most recent position is meaningful: this is the weakest range
/// category and algorithms that need to revisit elements reject it at
/// compile time.
///
/// # Examples
/// ```
/// use position_range::{algorithm, IterRange};
///
/// let words = IterRange::new("a bb ccc".split(' '));
/// assert_eq!(algorithm::count_if(&words, |w: &str| w.len() > 1), 2);
/// ```
pub struct IterRange<I: Iterator> {
    cursor: RefCell<Cursor<I>>,
}

impl<I: Iterator> IterRange<I>
where
    I::Item: Clone,
{
    /// Wraps `iter`, pulling its first element.
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        let mut iter = iter.into_iter();
        let current = iter.next();
        Self {
            cursor: RefCell::new(Cursor {
                iter,
                current,
                consumed: 0,
            }),
        }
    }

    /// Number of elements consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor.borrow().consumed
    }
}

impl<I: Iterator> fmt::Debug for IterRange<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.cursor.borrow();
        f.debug_struct("IterRange")
            .field("consumed", &cursor.consumed)
            .field("exhausted", &cursor.current.is_none())
            .finish()
    }
}

impl<I: Iterator> Range for IterRange<I>
where
    I::Item: Clone,
{
    type Position = Option<usize>;
    const CATEGORY: RangeCategory = RangeCategory::SinglePass;

    fn begin_pos(&self) -> Option<usize> {
        self.cursor.borrow().position()
    }

    fn end_pos(&self) -> Option<usize> {
        None
    }

    /// Catches the underlying iterator up with `pos`.
    ///
    /// Positions behind the current one cannot be restored and are ignored.
    fn set_begin_pos(&mut self, pos: Option<usize>) {
        let cursor = self.cursor.get_mut();
        while cursor.current.is_some() && cursor.position() != pos {
            match pos {
                Some(target) if target < cursor.consumed => break,
                _ => cursor.step(),
            }
        }
    }

    /// The end of a single-pass range is wherever the iterator stops.
    fn set_end_pos(&mut self, pos: Option<usize>) {
        debug_assert!(pos.is_none(), "single-pass ranges can't move their end");
    }

    fn increment_pos(&self, pos: &mut Option<usize>) {
        let mut cursor = self.cursor.borrow_mut();
        debug_assert_eq!(*pos, cursor.position(), "stale single-pass position");
        cursor.step();
        *pos = cursor.position();
    }
}

impl<I: Iterator> InputRange for IterRange<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn at_pos(&self, pos: &Option<usize>) -> I::Item {
        let cursor = self.cursor.borrow();
        debug_assert_eq!(*pos, cursor.position(), "stale single-pass position");
        match &cursor.current {
            Some(item) => item.clone(),
            None => panic!("read past the end of a single-pass range"),
        }
    }
}

/// Iterator over the elements of a readable range.
///
/// Created by [`RangeExt::iter`](crate::RangeExt::iter). Each call to `next`
/// reads the front element and shrinks the range; `next_back` does the same
/// at the back of bidirectional ranges.
#[derive(Debug, Clone)]
pub struct RangeIter<R> {
    range: R,
}

impl<R: InputRange> RangeIter<R> {
    /// Wraps `range`.
    #[inline]
    pub fn new(range: R) -> Self {
        Self { range }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn into_range(self) -> R {
        self.range
    }
}

impl<R: InputRange> Iterator for RangeIter<R> {
    type Item = R::Item;

    #[inline]
    fn next(&mut self) -> Option<R::Item> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.range.front();
        self.range.shrink_front();
        Some(item)
    }
}

impl<R: InputRange + BidirectionalRange> DoubleEndedIterator for RangeIter<R> {
    #[inline]
    fn next_back(&mut self) -> Option<R::Item> {
        if self.range.is_empty() {
            return None;
        }
        let mut pos = self.range.end_pos();
        self.range.decrement_pos(&mut pos);
        let item = self.range.at_pos(&pos);
        self.range.set_end_pos(pos);
        Some(item)
    }
}
