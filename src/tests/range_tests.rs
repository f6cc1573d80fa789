extern crate alloc;
extern crate std;

use alloc::vec;
use alloc::vec::Vec;
use std::string::ToString;

use crate::fixtures::{bidirectional, forward, items, single_pass, values};
use crate::{
    advance_pos, back, drop_first, drop_last, front, iota, length, make_range, make_range_mut,
    range_after, range_before, retreat_pos, save, subrange, BidirectionalRange, ForwardRange,
    InputRange, IotaRange, IterRange, MutableRange, OutputRange, RandomAccessRange, Range,
    RangeCategory, RangeError, RangeExt, RangeIter, SliceRange,
};

fn category_of<R: Range>(_: &R) -> RangeCategory {
    R::CATEGORY
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_category_ordering() {
    use RangeCategory::*;

    assert!(RandomAccess.satisfies(Bidirectional));
    assert!(Bidirectional.satisfies(Forward));
    assert!(Forward.satisfies(SinglePass));
    assert!(!SinglePass.satisfies(Forward));
    assert!(Output.satisfies(Output));
    assert!(!Output.satisfies(SinglePass));
    assert!(!SinglePass.satisfies(Output));

    assert_eq!(RandomAccess.common(Forward), Forward);
    assert_eq!(SinglePass.common(Bidirectional), SinglePass);
    assert_eq!(Output.common(RandomAccess), Output);
    assert!(!Output.is_traversable());
    assert!(Forward.is_traversable());
}

#[test]
fn test_category_display() {
    assert_eq!(RangeCategory::RandomAccess.to_string(), "random-access");
    assert_eq!(RangeCategory::SinglePass.to_string(), "single-pass");
    assert_eq!(RangeCategory::Output.to_string(), "output");
}

#[test]
fn test_concrete_range_categories() {
    let data = [1, 2, 3];
    let mut owned = [1, 2, 3];
    assert_eq!(category_of(&make_range(&data)), RangeCategory::RandomAccess);
    assert_eq!(category_of(&make_range_mut(&mut owned)), RangeCategory::RandomAccess);
    assert_eq!(category_of(&iota(0u8, 3)), RangeCategory::RandomAccess);
    assert_eq!(category_of(&single_pass(&data)), RangeCategory::SinglePass);
    assert_eq!(category_of(&forward(&data)), RangeCategory::Forward);
    assert_eq!(category_of(&bidirectional(&data)), RangeCategory::Bidirectional);
}

// =============================================================================
// Slice Ranges
// =============================================================================

#[test]
fn test_slice_range_positions_are_absolute() {
    let data = [10, 20, 30, 40, 50];
    let mut range = make_range(&data);
    let third = range.pos_at(2);
    range.shrink_front();
    range.shrink_back();

    assert_eq!(range.as_slice(), &[20, 30, 40]);
    assert_eq!(*range.at_pos(&third), 30);
    assert_eq!(range.index_of(&third), 1);
    assert_eq!(range.length(), 3);
}

#[test]
fn test_slice_range_with_bounds() {
    let data = [1, 2, 3, 4, 5, 6];
    let range = SliceRange::with_bounds(&data, 2, 5);
    assert_eq!(values(range), vec![3, 4, 5]);
    assert_eq!(range.begin_pos(), 2);
    assert_eq!(range.end_pos(), 5);
}

#[test]
fn test_slice_range_offsets() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let range = make_range(&data);
    let mut pos = range.pos_at(3);
    range.offset_pos(&mut pos, 4);
    assert_eq!(pos, 7);
    range.offset_pos(&mut pos, -6);
    assert_eq!(pos, 1);
    assert_eq!(range.distance_pos(&1, &6), 5);
}

#[test]
fn test_slice_range_mut_edits_in_place() {
    let mut data = [1, 2, 3];
    let mut range = make_range_mut(&mut data);
    *range.value_at_mut(&1) *= 10;
    range.swap_at(&0, &2);
    assert_eq!(range.as_slice(), &[3, 20, 1]);
    assert_eq!(values(range.as_range()), vec![3, 20, 1]);
    assert_eq!(data, [3, 20, 1]);
}

#[test]
fn test_slice_range_mut_as_output() {
    let mut data = [0; 3];
    let mut out = make_range_mut(&mut data);
    assert_eq!(out.put(7), Ok(()));
    assert_eq!(out.put(8), Ok(()));
    assert_eq!(out.put(9), Ok(()));
    assert_eq!(out.put(10), Err(RangeError::OutputExhausted));
    assert_eq!(data, [7, 8, 9]);
}

#[test]
fn test_vec_as_output() {
    let mut sink = Vec::new();
    sink.put(1).unwrap();
    (&mut sink).put(2).unwrap();
    assert_eq!(sink, vec![1, 2]);
}

#[test]
fn test_empty_slice_range() {
    let data: [i32; 0] = [];
    let range = make_range(&data);
    assert!(range.is_empty());
    assert_eq!(range.length(), 0);
    assert_eq!(range.iter().count(), 0);
}

// =============================================================================
// Position Protocol Free Functions
// =============================================================================

#[test]
fn test_front_and_back() {
    let data = [4, 5, 6];
    assert_eq!(*front(&make_range(&data)), 4);
    assert_eq!(*back(&make_range(&data)), 6);
    assert_eq!(*back(&bidirectional(&data)), 6);
    assert_eq!(front(&iota(3, 9)), 3);
    assert_eq!(back(&iota(3, 9)), 8);
}

#[test]
fn test_drop_first_and_last() {
    let data = [1, 2, 3, 4, 5];
    let mut range = make_range(&data);
    drop_first(&mut range, 2).unwrap();
    assert_eq!(range.as_slice(), &[3, 4, 5]);
    drop_last(&mut range, 1).unwrap();
    assert_eq!(range.as_slice(), &[3, 4]);

    let err = drop_first(&mut range, 3).unwrap_err();
    assert_eq!(
        err,
        RangeError::OutOfBounds {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(range.as_slice(), &[3, 4], "failed drop must not modify the range");

    assert!(drop_last(&mut range, 5).is_err());
    assert_eq!(range.as_slice(), &[3, 4]);
}

#[test]
fn test_trim_front_on_single_pass() {
    let data = [1, 2, 3, 4];
    let range = single_pass(&data).trim_front(3);
    assert_eq!(*range.front(), 4);
    assert_eq!(range.consumed(), 3);

    let range = single_pass(&data).trim_front(10);
    assert!(range.is_empty());
}

#[test]
fn test_failed_drop_first_keeps_forward_range() {
    let data = [1, 2, 3];
    let mut range = forward(&data);
    assert_eq!(
        drop_first(&mut range, 5),
        Err(RangeError::OutOfBounds {
            requested: 5,
            available: 3
        })
    );
    assert_eq!(values(range), vec![1, 2, 3]);

    drop_first(&mut range, 1).unwrap();
    assert_eq!(values(range), vec![2, 3]);
}

#[test]
fn test_drop_first_with_huge_count_is_out_of_bounds() {
    let data = [1, 2, 3];
    let mut range = make_range(&data);
    assert_eq!(
        drop_first(&mut range, usize::MAX),
        Err(RangeError::OutOfBounds {
            requested: usize::MAX,
            available: 3
        })
    );
    assert_eq!(range.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_advance_pos_rejects_negative_steps() {
    let data = [1, 2, 3];
    let range = forward(&data);
    let mut pos = range.begin_pos();
    assert_eq!(advance_pos(&range, &mut pos, 2), Ok(()));
    assert_eq!(pos, 2);
    assert_eq!(
        advance_pos(&range, &mut pos, -1),
        Err(RangeError::BackwardAdvance)
    );
    assert_eq!(pos, 2);
    assert_eq!(
        advance_pos(&range, &mut pos, 5),
        Err(RangeError::OutOfBounds {
            requested: 5,
            available: 1
        })
    );
    assert_eq!(pos, range.end_pos());
}

#[test]
fn test_retreat_pos() {
    let data = [1, 2, 3, 4];
    let range = bidirectional(&data);
    let mut pos = range.end_pos();
    assert_eq!(retreat_pos(&range, &mut pos, 3), Ok(()));
    assert_eq!(*range.at_pos(&pos), 2);
    assert!(retreat_pos(&range, &mut pos, 2).is_err());
    assert_eq!(pos, range.begin_pos());
}

#[test]
fn test_length_counts_on_forward_ranges() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(length(&forward(&data)), 7);
    assert_eq!(length(&make_range(&data)), 7);
    assert_eq!(length(&iota(-3i64, 3)), 6);
}

#[test]
fn test_range_before_after_and_subrange() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let range = forward(&data);
    let mut pos = range.begin_pos();
    range.advance_by(&mut pos, 4);

    assert_eq!(values(range_before(range, pos)), vec![0, 1, 2, 3]);
    assert_eq!(values(range_after(range, pos)), vec![4, 5, 6, 7, 8, 9]);
    assert_eq!(values(subrange(range, 2, 5)), vec![2, 3, 4]);
}

#[test]
fn test_save_gives_an_independent_copy() {
    let data = [1, 2, 3];
    let mut range = forward(&data);
    let saved = save(&range);
    range.shrink_front();
    assert_eq!(values(range), vec![2, 3]);
    assert_eq!(values(saved), vec![1, 2, 3]);
}

// =============================================================================
// Iota
// =============================================================================

#[test]
fn test_iota_generates_values() {
    assert_eq!(items(iota(0, 5)), vec![0, 1, 2, 3, 4]);
    assert_eq!(items(iota(-2i16, 1)), vec![-2, -1, 0]);
    assert!(iota(7u64, 7).is_empty());
}

#[test]
fn test_iota_random_access() {
    let range: IotaRange<u32> = iota(100, 200);
    assert_eq!(range.length(), 100);
    assert_eq!(range.pos_at(42), 142);
    assert_eq!(range.index_of(&150), 50);
    let mut pos = range.end_pos();
    range.retreat_by(&mut pos, 10);
    assert_eq!(range.at_pos(&pos), 190);
    assert_eq!(range.start(), 100);
    assert_eq!(range.end(), 200);
}

#[test]
fn test_iota_wider_than_signed_max() {
    let range = iota(-100i8, 100);
    assert_eq!(length(&range), 200);
    assert_eq!(range.pos_at(150), 50);
    assert_eq!(range.index_of(&99), 199);

    let mut pos = range.end_pos();
    range.retreat_by(&mut pos, 200);
    assert_eq!(pos, -100);

    let full = iota(i8::MIN, i8::MAX);
    assert_eq!(length(&full), 255);
    assert_eq!(full.pos_at(255), i8::MAX);
    assert_eq!(length(&iota(i32::MIN, i32::MAX)), u32::MAX as usize);

    assert_eq!(items(range.subrange(190, 200)), (90i8..100).collect::<Vec<_>>());
    let rotated = items(range.rotated(150));
    assert_eq!(rotated.len(), 200);
    assert_eq!(rotated[0], 50);
    assert_eq!(rotated[199], 49);
}

// =============================================================================
// Single-pass Ranges
// =============================================================================

#[test]
fn test_iter_range_walks_once() {
    let range = IterRange::new(vec![1, 2, 3]);
    let mut pos = range.begin_pos();
    assert_eq!(pos, Some(0));
    assert_eq!(range.at_pos(&pos), 1);
    range.increment_pos(&mut pos);
    assert_eq!(range.at_pos(&pos), 2);
    assert_eq!(range.consumed(), 1);
    range.increment_pos(&mut pos);
    range.increment_pos(&mut pos);
    assert_eq!(pos, None);
    assert_eq!(pos, range.end_pos());
    assert!(range.is_empty());
}

#[test]
fn test_iter_range_set_begin_catches_up() {
    let mut range = IterRange::new(0..10);
    range.set_begin_pos(Some(4));
    assert_eq!(range.front(), 4);
    // Positions behind the cursor can't be restored.
    range.set_begin_pos(Some(1));
    assert_eq!(range.front(), 4);
    range.set_begin_pos(None);
    assert!(range.is_empty());
    assert_eq!(range.consumed(), 10);
}

#[test]
fn test_empty_iter_range() {
    let range = IterRange::new(core::iter::empty::<u8>());
    assert!(range.is_empty());
    assert_eq!(range.iter().count(), 0);
}

// =============================================================================
// Range Iterators
// =============================================================================

#[test]
fn test_range_iter_both_ends() {
    let data = [1, 2, 3, 4, 5];
    let mut iter = RangeIter::new(make_range(&data));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.into_range().as_slice(), &[2, 3]);
}

#[test]
fn test_range_iter_over_bidirectional_fixture() {
    let data = [1, 2, 3];
    let reversed: Vec<i32> = bidirectional(&data).iter().rev().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[test]
fn test_range_iter_over_single_pass() {
    let words = IterRange::new("one two three".split(' '));
    let lengths: Vec<usize> = words.iter().map(str::len).collect();
    assert_eq!(lengths, vec![3, 3, 5]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_error_messages() {
    assert_eq!(
        RangeError::BackwardAdvance.to_string(),
        "can't advance a position by a negative amount"
    );
    assert_eq!(
        RangeError::OutOfBounds {
            requested: 4,
            available: 1
        }
        .to_string(),
        "requested 4 steps but only 1 are available"
    );
    assert_eq!(
        RangeError::OutputExhausted.to_string(),
        "output range is exhausted"
    );
}
