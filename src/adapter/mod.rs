//! Lazy views over ranges.
//!
//! Every view wraps another range and recomputes its elements on demand; no
//! element is copied or moved. Views are built either with the
//! [`RangeExt`] methods or with the descriptors of the [`pipe`] module and
//! the `>>` operator:
//!
//! ```
//! use position_range::{make_range, pipe, RangeExt};
//!
//! let data = [3, 1, 4, 1, 5, 9, 2, 6];
//! let odd_squares: Vec<i32> = (make_range(&data)
//!     >> pipe::select_if(|n: &i32| n % 2 == 1)
//!     >> pipe::transform(|n: &i32| n * n))
//! .iter()
//! .collect();
//! assert_eq!(odd_squares, vec![9, 1, 1, 25, 81]);
//!
//! let same = make_range(&data).filter(|n| n % 2 == 1).transform(|n| n * n);
//! assert!(same.iter().eq(odd_squares));
//! ```

use core::borrow::Borrow;

use crate::iter::RangeIter;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, Range};

mod concat;
mod filter;
pub mod ops;
mod partition;
pub mod pipe;
mod reverse;
mod rotate;
mod transform;
mod unique;

pub use concat::ConcatenatedRange;
pub use filter::FilteredRange;
pub use ops::{
    CloneItem, Equal, EqualTo, Not, NotEqualTo, Operation, Predicate, Relation, ReplaceIf,
    ReplaceValue,
};
pub use partition::{PartitionedPos, PartitionedRange};
pub use reverse::ReversedRange;
pub use rotate::{RotatedPos, RotatedRange};
pub use transform::TransformedRange;
pub use unique::UniqueRange;

/// Something that turns a range of type `R` into another range.
///
/// Implemented by the descriptors in [`pipe`]; applied with `>>` or
/// [`RangeExt::pipe`].
pub trait RangeAdapter<R> {
    /// The adapted range.
    type Output;

    /// Applies the adapter to `range`.
    fn adapt(self, range: R) -> Self::Output;
}

/// Adapter constructors available on every range.
///
/// Closure-taking methods require `Fn` since views call their closures
/// through a shared reference, possibly many times per element.
pub trait RangeExt: Range + Sized {
    /// Iterates over the elements.
    #[inline]
    fn iter(self) -> RangeIter<Self>
    where
        Self: InputRange,
    {
        RangeIter::new(self)
    }

    /// Keeps the elements passing `pred`.
    #[inline]
    fn filter<P>(self, pred: P) -> FilteredRange<Self, P>
    where
        Self: InputRange,
        P: Fn(Self::Item) -> bool,
    {
        FilteredRange::new(self, pred)
    }

    /// Keeps the elements equal to `value`.
    #[inline]
    fn select<V>(self, value: V) -> FilteredRange<Self, EqualTo<V>>
    where
        Self: InputRange,
        Self::Item: Borrow<V>,
        V: PartialEq,
    {
        FilteredRange::new(self, EqualTo(value))
    }

    /// Drops the elements equal to `value`.
    #[inline]
    fn remove<V>(self, value: V) -> FilteredRange<Self, NotEqualTo<V>>
    where
        Self: InputRange,
        Self::Item: Borrow<V>,
        V: PartialEq,
    {
        FilteredRange::new(self, NotEqualTo(value))
    }

    /// Drops the elements passing `pred`.
    #[inline]
    fn remove_if<P>(self, pred: P) -> FilteredRange<Self, Not<P>>
    where
        Self: InputRange,
        P: Fn(Self::Item) -> bool,
    {
        FilteredRange::new(self, Not(pred))
    }

    /// Maps every element through `f`.
    #[inline]
    fn transform<F, U>(self, f: F) -> TransformedRange<Self, F>
    where
        Self: InputRange,
        F: Fn(Self::Item) -> U,
    {
        TransformedRange::new(self, f)
    }

    /// Clones borrowed elements.
    #[inline]
    fn cloned<'a, T>(self) -> TransformedRange<Self, CloneItem>
    where
        Self: InputRange<Item = &'a T>,
        T: Clone + 'a,
    {
        TransformedRange::new(self, CloneItem)
    }

    /// Reads `new` wherever the element equals `old`.
    #[inline]
    fn replace<V>(self, old: V, new: V) -> TransformedRange<Self, ReplaceValue<V>>
    where
        Self: InputRange,
        Self::Item: Borrow<V>,
        V: PartialEq + Clone,
    {
        TransformedRange::new(self, ReplaceValue { old, new })
    }

    /// Reads `new` wherever the element passes `pred`.
    #[inline]
    fn replace_if<P, V>(self, pred: P, new: V) -> TransformedRange<Self, ReplaceIf<P, V>>
    where
        Self: InputRange,
        Self::Item: Borrow<V>,
        P: Fn(&V) -> bool,
        V: Clone,
    {
        TransformedRange::new(self, ReplaceIf { pred, new })
    }

    /// Collapses runs of equal elements to their first element.
    #[inline]
    fn unique(self) -> UniqueRange<Self, Equal>
    where
        Self: InputRange,
        Self::Item: PartialEq,
    {
        UniqueRange::new(self, Equal)
    }

    /// Collapses runs of elements related to the run's first element.
    #[inline]
    fn unique_by<Q>(self, relation: Q) -> UniqueRange<Self, Q>
    where
        Self: InputRange,
        Q: Fn(&Self::Item, &Self::Item) -> bool,
    {
        UniqueRange::new(self, relation)
    }

    /// Traverses back to front.
    #[inline]
    fn reversed(self) -> ReversedRange<Self>
    where
        Self: BidirectionalRange,
    {
        ReversedRange::new(self)
    }

    /// Rotates left by `n` elements (right for negative `n`).
    #[inline]
    fn rotated(self, n: isize) -> RotatedRange<Self>
    where
        Self: ForwardRange,
    {
        RotatedRange::new(self, n)
    }

    /// Moves the elements equal to `value` in front of the others.
    #[inline]
    fn gather<V>(self, value: V) -> PartitionedRange<Self, EqualTo<V>>
    where
        Self: InputRange + ForwardRange,
        Self::Item: Borrow<V>,
        V: PartialEq,
    {
        PartitionedRange::new(self, EqualTo(value))
    }

    /// Moves the elements passing `pred` in front of the others.
    #[inline]
    fn gather_if<P>(self, pred: P) -> PartitionedRange<Self, P>
    where
        Self: InputRange + ForwardRange,
        P: Fn(Self::Item) -> bool,
    {
        PartitionedRange::new(self, pred)
    }

    /// Continues with `other` after the last element.
    #[inline]
    fn append<R: Range>(self, other: R) -> ConcatenatedRange<Self, R> {
        ConcatenatedRange::new(self, other)
    }

    /// Starts with `other` before the first element.
    #[inline]
    fn prepend<R: Range>(self, other: R) -> ConcatenatedRange<R, Self> {
        ConcatenatedRange::new(other, self)
    }

    /// Drops up to `n` elements from the front.
    fn trim_front(mut self, n: usize) -> Self {
        let mut pos = self.begin_pos();
        let end = self.end_pos();
        for _ in 0..n {
            if pos == end {
                break;
            }
            self.increment_pos(&mut pos);
        }
        self.set_begin_pos(pos);
        self
    }

    /// Drops up to `n` elements from the back.
    fn trim_back(mut self, n: usize) -> Self
    where
        Self: BidirectionalRange,
    {
        let mut pos = self.end_pos();
        let begin = self.begin_pos();
        for _ in 0..n {
            if pos == begin {
                break;
            }
            self.decrement_pos(&mut pos);
        }
        self.set_end_pos(pos);
        self
    }

    /// Keeps the elements with indices in `n1..n2`, clamped to the range.
    ///
    /// # Panics (debug only)
    /// - If `n1` exceeds `n2`
    fn subrange(mut self, n1: usize, n2: usize) -> Self
    where
        Self: ForwardRange,
    {
        debug_assert!(n1 <= n2, "subrange start must not exceed its end");
        let len = self.length();
        let mut first = self.begin_pos();
        self.advance_by(&mut first, n1.min(len));
        let mut last = first.clone();
        self.advance_by(&mut last, n2.min(len) - n1.min(len));
        self.set_begin_pos(first);
        self.set_end_pos(last);
        self
    }

    /// Applies a [`pipe`] descriptor; the method form of `>>`.
    #[inline]
    fn pipe<A: RangeAdapter<Self>>(self, adapter: A) -> A::Output {
        adapter.adapt(self)
    }
}

impl<R: Range> RangeExt for R {}
