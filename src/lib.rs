#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
//!
//! # Quick Start
//!
//! ```rust
//! use position_range::{algorithm, make_range, make_range_mut, pipe, RangeExt};
//!
//! let mut data = vec![9, 4, 7, 1, 8, 2];
//!
//! // In-place algorithms take mutable ranges.
//! algorithm::sort(&mut make_range_mut(&mut data));
//! assert_eq!(data, [1, 2, 4, 7, 8, 9]);
//!
//! // Read-only algorithms take shared ranges and answer with positions.
//! let range = make_range(&data);
//! assert_eq!(algorithm::find(&range, &7), 3);
//!
//! // Views are lazy and compose, either as methods or with `>>`.
//! let evens: Vec<i32> = (range >> pipe::select_if(|n: &i32| n % 2 == 0))
//!     .cloned()
//!     .iter()
//!     .collect();
//! assert_eq!(evens, vec![2, 4, 8]);
//! ```
//!
//! # Range Categories
//!
//! Every range advertises what its positions can do through
//! [`Range::CATEGORY`], and the capability traits make the same promise to
//! the type checker:
//!
//! ```rust
//! use position_range::{iota, make_range, IterRange, Range, RangeCategory, RangeExt};
//!
//! fn category_of<R: Range>(_: &R) -> RangeCategory {
//!     R::CATEGORY
//! }
//!
//! let data = [1, 2, 3];
//! assert_eq!(category_of(&make_range(&data)), RangeCategory::RandomAccess);
//! assert_eq!(category_of(&iota(0, 3).filter(|n| n % 2 == 0)), RangeCategory::Bidirectional);
//! assert_eq!(category_of(&make_range(&data).unique()), RangeCategory::Forward);
//! assert_eq!(category_of(&IterRange::new(data.iter())), RangeCategory::SinglePass);
//! ```
//!
//! # Positions Stay Valid
//!
//! Narrowing a range never invalidates positions obtained from it, so a
//! position found by one algorithm can bound the input of the next:
//!
//! ```rust
//! use position_range::{algorithm, make_range, range_after, range_before};
//!
//! let data = [3, 1, 4, 1, 5, 9, 2, 6];
//! let range = make_range(&data);
//! let nine = algorithm::find(&range, &9);
//! assert_eq!(range_before(range, nine).as_slice(), &[3, 1, 4, 1, 5]);
//! assert_eq!(range_after(range, nine).as_slice(), &[9, 2, 6]);
//! ```

extern crate alloc;

mod category;
mod error;
mod iota;
mod iter;
mod range;
mod slice;

pub mod adapter;
pub mod algorithm;

pub use adapter::{pipe, RangeAdapter, RangeExt};
pub use category::RangeCategory;
pub use error::RangeError;
pub use iota::{iota, IotaRange};
pub use iter::{IterRange, RangeIter};
pub use range::{
    advance_pos, back, drop_first, drop_last, front, length, range_after, range_before,
    retreat_pos, save, subrange, BidirectionalRange, ForwardRange, InputRange, MutableRange,
    OutputRange, RandomAccessRange, Range,
};
pub use slice::{make_range, make_range_mut, SliceRange, SliceRangeMut};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "tests/range_tests.rs"]
mod range_tests;

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod adapter_tests;

#[cfg(test)]
#[path = "tests/algorithm_tests.rs"]
mod algorithm_tests;

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod sort_tests;
