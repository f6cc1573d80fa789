use core::fmt;

use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingSub};

use crate::category::RangeCategory;
use crate::range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange, Range};

/// A random-access range generating the integers `start..end`.
///
/// Elements are computed from their position, so the range owns nothing and
/// is `Copy`. Positions are the integers themselves.
///
/// Distances and offsets are computed modulo the width of `T`, so a signed
/// range may span more than `T::MAX` values, e.g. `iota(-100i8, 100)`.
///
/// # Type Parameters
/// - `T`: any primitive integer type.
///
/// # Examples
/// ```
/// use position_range::{iota, ForwardRange, RangeExt};
///
/// let evens: Vec<u32> = iota(0u32, 10).filter(|n| n % 2 == 0).iter().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// assert_eq!(iota(-3i64, 3).length(), 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IotaRange<T> {
    start: T,
    end: T,
}

impl<T: PrimInt> IotaRange<T> {
    /// Creates the range `start..end`.
    ///
    /// # Panics (debug only)
    /// - If `start` exceeds `end`
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        debug_assert!(start <= end, "start must not exceed end");
        Self { start, end }
    }

    /// First generated value.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// One past the last generated value.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }
}

impl<T: PrimInt + fmt::Debug> fmt::Debug for IotaRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IotaRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T: PrimInt> Range for IotaRange<T> {
    type Position = T;
    const CATEGORY: RangeCategory = RangeCategory::RandomAccess;

    #[inline]
    fn begin_pos(&self) -> T {
        self.start
    }

    #[inline]
    fn end_pos(&self) -> T {
        self.end
    }

    #[inline]
    fn set_begin_pos(&mut self, pos: T) {
        self.start = pos;
    }

    #[inline]
    fn set_end_pos(&mut self, pos: T) {
        self.end = pos;
    }

    #[inline]
    fn increment_pos(&self, pos: &mut T) {
        *pos = *pos + T::one();
    }
}

impl<T: PrimInt> InputRange for IotaRange<T> {
    type Item = T;

    #[inline]
    fn at_pos(&self, pos: &T) -> T {
        *pos
    }
}

impl<T> ForwardRange for IotaRange<T>
where
    T: PrimInt + WrappingAdd + WrappingSub + AsPrimitive<usize>,
    usize: AsPrimitive<T>,
{
    #[inline]
    fn distance_pos(&self, from: &T, to: &T) -> usize {
        debug_assert!(from <= to, "position not reachable");
        let (to, from): (usize, usize) = (to.as_(), from.as_());
        to.wrapping_sub(from)
    }

    #[inline]
    fn advance_by(&self, pos: &mut T, n: usize) {
        *pos = pos.wrapping_add(&n.as_());
    }
}

impl<T> BidirectionalRange for IotaRange<T>
where
    T: PrimInt + WrappingAdd + WrappingSub + AsPrimitive<usize>,
    usize: AsPrimitive<T>,
{
    #[inline]
    fn decrement_pos(&self, pos: &mut T) {
        *pos = *pos - T::one();
    }

    #[inline]
    fn retreat_by(&self, pos: &mut T, n: usize) {
        *pos = pos.wrapping_sub(&n.as_());
    }
}

impl<T> RandomAccessRange for IotaRange<T>
where
    T: PrimInt + WrappingAdd + WrappingSub + AsPrimitive<usize>,
    usize: AsPrimitive<T>,
{
}

/// Creates the generated range `start..end`.
#[inline]
pub fn iota<T: PrimInt>(start: T, end: T) -> IotaRange<T> {
    IotaRange::new(start, end)
}
