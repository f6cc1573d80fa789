//! Adapter descriptors for the `>>` pipeline syntax.
//!
//! Each function returns a small descriptor that remembers its arguments and
//! builds the corresponding view once it meets a range:
//!
//! ```
//! use position_range::{iota, pipe, ForwardRange, RangeExt};
//!
//! let view = iota(0, 10) >> pipe::rotate(4) >> pipe::trim_back(2);
//! let items: Vec<i32> = view.iter().collect();
//! assert_eq!(items, vec![4, 5, 6, 7, 8, 9, 0, 1]);
//! assert_eq!((iota(0, 10) >> pipe::remove(5)).length(), 9);
//! ```
//!
//! All ranges defined by this crate support `>>`. Other range types can use
//! [`RangeExt::pipe`](crate::RangeExt::pipe) instead.

use core::borrow::Borrow;
use core::ops::Shr;

use super::{
    ConcatenatedRange, Equal, EqualTo, FilteredRange, Not, NotEqualTo, Operation,
    PartitionedRange, Predicate, RangeAdapter, RangeExt, Relation, ReplaceIf as ReplaceIfOp,
    ReplaceValue, ReversedRange, RotatedRange, TransformedRange, UniqueRange,
};
use crate::iota::IotaRange;
use crate::iter::IterRange;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, Range};
use crate::slice::{SliceRange, SliceRangeMut};

/// Descriptor built by [`append`].
#[derive(Debug, Clone)]
pub struct Append<R>(R);

/// Descriptor built by [`prepend`].
#[derive(Debug, Clone)]
pub struct Prepend<R>(R);

/// Descriptor built by [`trim_front`].
#[derive(Debug, Clone, Copy)]
pub struct TrimFront(usize);

/// Descriptor built by [`trim_back`].
#[derive(Debug, Clone, Copy)]
pub struct TrimBack(usize);

/// Descriptor built by [`subrange`].
#[derive(Debug, Clone, Copy)]
pub struct Subrange(usize, usize);

/// Descriptor built by [`remove`].
#[derive(Debug, Clone, Copy)]
pub struct Remove<V>(V);

/// Descriptor built by [`remove_if`].
#[derive(Debug, Clone, Copy)]
pub struct RemoveIf<P>(P);

/// Descriptor built by [`select`].
#[derive(Debug, Clone, Copy)]
pub struct Select<V>(V);

/// Descriptor built by [`select_if`].
#[derive(Debug, Clone, Copy)]
pub struct SelectIf<P>(P);

/// Descriptor built by [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct Transform<F>(F);

/// Descriptor built by [`replace`].
#[derive(Debug, Clone, Copy)]
pub struct Replace<V>(V, V);

/// Descriptor built by [`replace_if`].
#[derive(Debug, Clone, Copy)]
pub struct ReplaceIf<P, V>(P, V);

/// Descriptor built by [`unique`] and [`unique_by`].
#[derive(Debug, Clone, Copy)]
pub struct Unique<Q>(Q);

/// Descriptor built by [`reverse`].
#[derive(Debug, Clone, Copy)]
pub struct Reverse;

/// Descriptor built by [`rotate`].
#[derive(Debug, Clone, Copy)]
pub struct Rotate(isize);

/// Descriptor built by [`gather`].
#[derive(Debug, Clone, Copy)]
pub struct Gather<V>(V);

/// Descriptor built by [`gather_if`].
#[derive(Debug, Clone, Copy)]
pub struct GatherIf<P>(P);

/// Continues with `other` after the last element.
pub fn append<R: Range>(other: R) -> Append<R> {
    Append(other)
}

/// Starts with `other` before the first element.
pub fn prepend<R: Range>(other: R) -> Prepend<R> {
    Prepend(other)
}

/// Drops up to `n` elements from the front.
pub fn trim_front(n: usize) -> TrimFront {
    TrimFront(n)
}

/// Drops up to `n` elements from the back.
pub fn trim_back(n: usize) -> TrimBack {
    TrimBack(n)
}

/// Keeps the elements with indices in `n1..n2`.
pub fn subrange(n1: usize, n2: usize) -> Subrange {
    Subrange(n1, n2)
}

/// Drops the elements equal to `value`.
pub fn remove<V>(value: V) -> Remove<V> {
    Remove(value)
}

/// Drops the elements passing `pred`.
pub fn remove_if<P>(pred: P) -> RemoveIf<P> {
    RemoveIf(pred)
}

/// Keeps the elements equal to `value`.
pub fn select<V>(value: V) -> Select<V> {
    Select(value)
}

/// Keeps the elements passing `pred`.
pub fn select_if<P>(pred: P) -> SelectIf<P> {
    SelectIf(pred)
}

/// Maps every element through `f`.
pub fn transform<F>(f: F) -> Transform<F> {
    Transform(f)
}

/// Reads `new` wherever the element equals `old`.
pub fn replace<V>(old: V, new: V) -> Replace<V> {
    Replace(old, new)
}

/// Reads `new` wherever the element passes `pred`.
pub fn replace_if<P, V>(pred: P, new: V) -> ReplaceIf<P, V> {
    ReplaceIf(pred, new)
}

/// Collapses runs of equal elements.
pub fn unique() -> Unique<Equal> {
    Unique(Equal)
}

/// Collapses runs of elements related to the run's first element.
pub fn unique_by<Q>(relation: Q) -> Unique<Q> {
    Unique(relation)
}

/// Traverses back to front.
pub fn reverse() -> Reverse {
    Reverse
}

/// Rotates left by `n` elements (right for negative `n`).
pub fn rotate(n: isize) -> Rotate {
    Rotate(n)
}

/// Moves the elements equal to `value` in front of the others.
pub fn gather<V>(value: V) -> Gather<V> {
    Gather(value)
}

/// Moves the elements passing `pred` in front of the others.
pub fn gather_if<P>(pred: P) -> GatherIf<P> {
    GatherIf(pred)
}

impl<R: Range, R2: Range> RangeAdapter<R> for Append<R2> {
    type Output = ConcatenatedRange<R, R2>;

    fn adapt(self, range: R) -> Self::Output {
        ConcatenatedRange::new(range, self.0)
    }
}

impl<R: Range, R2: Range> RangeAdapter<R> for Prepend<R2> {
    type Output = ConcatenatedRange<R2, R>;

    fn adapt(self, range: R) -> Self::Output {
        ConcatenatedRange::new(self.0, range)
    }
}

impl<R: Range> RangeAdapter<R> for TrimFront {
    type Output = R;

    fn adapt(self, range: R) -> R {
        range.trim_front(self.0)
    }
}

impl<R: BidirectionalRange> RangeAdapter<R> for TrimBack {
    type Output = R;

    fn adapt(self, range: R) -> R {
        range.trim_back(self.0)
    }
}

impl<R: ForwardRange> RangeAdapter<R> for Subrange {
    type Output = R;

    fn adapt(self, range: R) -> R {
        range.subrange(self.0, self.1)
    }
}

impl<R, V> RangeAdapter<R> for Remove<V>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq,
{
    type Output = FilteredRange<R, NotEqualTo<V>>;

    fn adapt(self, range: R) -> Self::Output {
        FilteredRange::new(range, NotEqualTo(self.0))
    }
}

impl<R: InputRange, P: Predicate<R::Item>> RangeAdapter<R> for RemoveIf<P> {
    type Output = FilteredRange<R, Not<P>>;

    fn adapt(self, range: R) -> Self::Output {
        FilteredRange::new(range, Not(self.0))
    }
}

impl<R, V> RangeAdapter<R> for Select<V>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq,
{
    type Output = FilteredRange<R, EqualTo<V>>;

    fn adapt(self, range: R) -> Self::Output {
        FilteredRange::new(range, EqualTo(self.0))
    }
}

impl<R: InputRange, P: Predicate<R::Item>> RangeAdapter<R> for SelectIf<P> {
    type Output = FilteredRange<R, P>;

    fn adapt(self, range: R) -> Self::Output {
        FilteredRange::new(range, self.0)
    }
}

impl<R: InputRange, F: Operation<R::Item>> RangeAdapter<R> for Transform<F> {
    type Output = TransformedRange<R, F>;

    fn adapt(self, range: R) -> Self::Output {
        TransformedRange::new(range, self.0)
    }
}

impl<R, V> RangeAdapter<R> for Replace<V>
where
    R: InputRange,
    R::Item: Borrow<V>,
    V: PartialEq + Clone,
{
    type Output = TransformedRange<R, ReplaceValue<V>>;

    fn adapt(self, range: R) -> Self::Output {
        TransformedRange::new(
            range,
            ReplaceValue {
                old: self.0,
                new: self.1,
            },
        )
    }
}

impl<R, P, V> RangeAdapter<R> for ReplaceIf<P, V>
where
    R: InputRange,
    R::Item: Borrow<V>,
    P: Fn(&V) -> bool,
    V: Clone,
{
    type Output = TransformedRange<R, ReplaceIfOp<P, V>>;

    fn adapt(self, range: R) -> Self::Output {
        TransformedRange::new(
            range,
            ReplaceIfOp {
                pred: self.0,
                new: self.1,
            },
        )
    }
}

impl<R: InputRange, Q: Relation<R::Item>> RangeAdapter<R> for Unique<Q> {
    type Output = UniqueRange<R, Q>;

    fn adapt(self, range: R) -> Self::Output {
        UniqueRange::new(range, self.0)
    }
}

impl<R: BidirectionalRange> RangeAdapter<R> for Reverse {
    type Output = ReversedRange<R>;

    fn adapt(self, range: R) -> Self::Output {
        ReversedRange::new(range)
    }
}

impl<R: ForwardRange> RangeAdapter<R> for Rotate {
    type Output = RotatedRange<R>;

    fn adapt(self, range: R) -> Self::Output {
        RotatedRange::new(range, self.0)
    }
}

impl<R, V> RangeAdapter<R> for Gather<V>
where
    R: InputRange + ForwardRange,
    R::Item: Borrow<V>,
    V: PartialEq,
{
    type Output = PartitionedRange<R, EqualTo<V>>;

    fn adapt(self, range: R) -> Self::Output {
        PartitionedRange::new(range, EqualTo(self.0))
    }
}

impl<R, P> RangeAdapter<R> for GatherIf<P>
where
    R: InputRange + ForwardRange,
    P: Predicate<R::Item>,
{
    type Output = PartitionedRange<R, P>;

    fn adapt(self, range: R) -> Self::Output {
        PartitionedRange::new(range, self.0)
    }
}

macro_rules! impl_pipeline {
    ($([$($generics:tt)*] $range:ty),* $(,)?) => {
        $(
            impl<$($generics)*, A: RangeAdapter<$range>> Shr<A> for $range {
                type Output = A::Output;

                #[inline]
                fn shr(self, adapter: A) -> A::Output {
                    adapter.adapt(self)
                }
            }
        )*
    };
}

impl_pipeline! {
    ['a, T] SliceRange<'a, T>,
    ['a, T] SliceRangeMut<'a, T>,
    [T] IotaRange<T>,
    [I: Iterator] IterRange<I>,
    [R1: Range, R2: Range] ConcatenatedRange<R1, R2>,
    [R: Range, P] FilteredRange<R, P>,
    [R, F] TransformedRange<R, F>,
    [R, Q] UniqueRange<R, Q>,
    [R] ReversedRange<R>,
    [R: Range] RotatedRange<R>,
    [R: Range, P] PartitionedRange<R, P>,
}
