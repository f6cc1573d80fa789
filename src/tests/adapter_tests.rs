extern crate alloc;
extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use crate::adapter::{RotatedPos, UniqueRange};
use crate::fixtures::{self, items, values};
use crate::{
    algorithm, iota, make_range, make_range_mut, pipe, BidirectionalRange, ForwardRange,
    InputRange, IterRange, RandomAccessRange, Range, RangeCategory, RangeExt,
};

static DIGITS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

fn category_of<R: Range>(_: &R) -> RangeCategory {
    R::CATEGORY
}

/// Runs a generic test body once per traversal tier, each in its own test.
macro_rules! for_tiers {
    ($body:ident, $data:expr, [$($tier:ident),* $(,)?]) => {
        mod $body {
            $(
                #[test]
                fn $tier() {
                    super::$body(crate::fixtures::$tier(&$data));
                }
            )*
        }
    };
}

// =============================================================================
// Concatenation
// =============================================================================

fn prepend_test<R: InputRange<Item = &'static i32>>(range: R) {
    static PREV: [i32; 10] = [-10, -9, -8, -7, -6, -5, -4, -3, -2, -1];
    let concat = range.pipe(pipe::prepend(make_range(&PREV)));
    assert_eq!(values(concat), (-10..10).collect::<Vec<_>>());
}
for_tiers!(prepend_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn append_test<R: InputRange<Item = &'static i32>>(range: R) {
    static NEXT: [i32; 10] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19];
    let concat = range.pipe(pipe::append(make_range(&NEXT)));
    assert_eq!(values(concat), (0..20).collect::<Vec<_>>());
}
for_tiers!(append_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

#[test]
fn test_concat_category_is_the_weaker_part() {
    let head = make_range(&DIGITS);
    assert_eq!(
        category_of(&head.append(make_range(&DIGITS))),
        RangeCategory::RandomAccess
    );
    assert_eq!(
        category_of(&head.append(fixtures::forward(&DIGITS))),
        RangeCategory::Forward
    );
    assert_eq!(
        category_of(&fixtures::single_pass(&DIGITS).append(head)),
        RangeCategory::SinglePass
    );
}

#[test]
fn test_concat_random_access() {
    let joined = iota(0, 3).append(iota(10, 12));
    assert_eq!(joined.length(), 5);
    assert_eq!(joined.at_pos(&joined.pos_at(3)), 10);
    assert_eq!(joined.at_pos(&joined.pos_at(1)), 1);
    assert_eq!(joined.index_of(&joined.pos_at(4)), 4);

    let mut pos = joined.end_pos();
    joined.retreat_by(&mut pos, 4);
    assert_eq!(joined.at_pos(&pos), 1);
    assert_eq!(items(joined.reversed()), vec![11, 10, 2, 1, 0]);
}

#[test]
fn test_concat_with_empty_parts() {
    let empty: [i32; 0] = [];
    assert_eq!(values(make_range(&empty).append(make_range(&DIGITS))), DIGITS.to_vec());
    assert_eq!(values(make_range(&DIGITS).append(make_range(&empty))), DIGITS.to_vec());
    assert!(make_range(&empty).append(make_range(&empty)).is_empty());
}

// =============================================================================
// Trimming
// =============================================================================

fn trim_front_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::trim_front(3));
    assert_eq!(values(range), (3..10).collect::<Vec<_>>());
}
for_tiers!(trim_front_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn trim_back_test<R: InputRange<Item = &'static i32> + BidirectionalRange>(range: R) {
    let range = range.pipe(pipe::trim_back(3));
    assert_eq!(values(range), (0..7).collect::<Vec<_>>());
}
for_tiers!(trim_back_test, super::DIGITS, [bidirectional, random_access]);

fn subrange_test<R: InputRange<Item = &'static i32> + ForwardRange>(range: R) {
    let range = range.pipe(pipe::subrange(3, 7));
    assert_eq!(values(range), vec![3, 4, 5, 6]);
}
for_tiers!(subrange_test, super::DIGITS, [forward, bidirectional, random_access]);

#[test]
fn test_trimming_saturates() {
    let range = make_range(&DIGITS);
    assert!(range.trim_front(20).is_empty());
    assert!(range.trim_back(11).is_empty());
    assert_eq!(range.subrange(8, 20).as_slice(), &[8, 9]);
    assert!(range.subrange(12, 20).is_empty());
    let trimmed = range >> pipe::trim_front(2) >> pipe::trim_back(2);
    assert_eq!(trimmed.as_slice(), &[2, 3, 4, 5, 6, 7]);
}

// =============================================================================
// Filtering
// =============================================================================

fn remove_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::remove(5));
    assert_eq!(values(range), vec![0, 1, 2, 3, 4, 6, 7, 8, 9]);
}
for_tiers!(remove_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn remove_if_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.remove_if(|n| n & 1 != 0);
    assert_eq!(values(range), vec![0, 2, 4, 6, 8]);
}
for_tiers!(remove_if_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn select_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::select(5));
    let mut pos = range.begin_pos();
    assert_eq!(*range.at_pos(&pos), 5);
    range.increment_pos(&mut pos);
    assert!(pos == range.end_pos());
}
for_tiers!(select_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn select_if_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::select_if(|n: &i32| n & 1 == 0));
    assert_eq!(values(range), vec![0, 2, 4, 6, 8]);
}
for_tiers!(select_if_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

#[test]
fn test_filter_walks_backward() {
    let evens = make_range(&DIGITS).filter(|n| *n % 2 == 0);
    assert_eq!(category_of(&evens), RangeCategory::Bidirectional);
    assert_eq!(values(evens.clone().reversed()), vec![8, 6, 4, 2, 0]);
    assert_eq!(values(evens.trim_back(2)), vec![0, 2, 4]);
}

#[test]
fn test_filter_without_matches() {
    let none = make_range(&DIGITS).select(42);
    assert!(none.is_empty());
    assert_eq!(none.length(), 0);
}

#[test]
fn test_filter_consumes_single_pass_lazily() {
    let source = IterRange::new(1..=100);
    let mut big = source.filter(|n| n > 97);
    assert_eq!(big.front(), 98);
    big.shrink_front();
    assert_eq!(big.front(), 99);
}

// =============================================================================
// Transformation
// =============================================================================

fn transform_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::transform(|n: &i32| n + 1));
    assert_eq!(items(range), (1..11).collect::<Vec<_>>());
}
for_tiers!(transform_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn replace_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::replace(5, 10));
    assert_eq!(items(range), vec![0, 1, 2, 3, 4, 10, 6, 7, 8, 9]);
}
for_tiers!(replace_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

fn replace_if_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.replace_if(|n: &i32| n & 1 == 0, 0);
    assert_eq!(items(range), vec![0, 1, 0, 3, 0, 5, 0, 7, 0, 9]);
}
for_tiers!(replace_if_test, super::DIGITS, [single_pass, forward, bidirectional, random_access]);

#[test]
fn test_transform_keeps_random_access() {
    let squares = iota(0u64, 1000).transform(|n| n * n);
    assert_eq!(category_of(&squares), RangeCategory::RandomAccess);
    assert_eq!(squares.at_pos(&squares.pos_at(999)), 998_001);
    assert_eq!(squares.length(), 1000);
}

#[test]
fn test_cloned_and_replace_on_generated_values() {
    let owned: Vec<i32> = make_range(&DIGITS).cloned().subrange(0, 3).iter().collect();
    assert_eq!(owned, vec![0, 1, 2]);
    assert_eq!(items(iota(0, 5).replace(2, -2)), vec![0, 1, -2, 3, 4]);
}

// =============================================================================
// Unique
// =============================================================================

static RUNS: [i32; 10] = [0, 1, 1, 2, 2, 2, 3, 3, 3, 3];
static PARITY_RUNS: [i32; 10] = [0, 2, 1, 3, 4, 6, 5, 7, 8, 10];

fn unique_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.pipe(pipe::unique());
    assert_eq!(values(range), vec![0, 1, 2, 3]);
}
for_tiers!(unique_test, super::RUNS, [single_pass, forward, bidirectional, random_access]);

fn unique_by_test<R: InputRange<Item = &'static i32>>(range: R) {
    let range = range.unique_by(|a, b| (**a & 1) == (**b & 1));
    assert_eq!(values(range), vec![0, 1, 4, 5, 8]);
}
for_tiers!(
    unique_by_test,
    super::PARITY_RUNS,
    [single_pass, forward, bidirectional, random_access]
);

#[test]
fn test_unique_compares_with_run_head() {
    // Every neighbour is within 1, but the run head 0 is not within 1 of 2.
    let data = [0, 1, 2, 3, 4];
    let view: UniqueRange<_, _> =
        make_range(&data).unique_by(|a: &&i32, b: &&i32| (**a - **b).abs() <= 1);
    assert_eq!(values(view), vec![0, 2, 4]);
    assert_eq!(category_of(&make_range(&data).unique()), RangeCategory::Forward);
}

// =============================================================================
// Reverse
// =============================================================================

fn reverse_test<R: InputRange<Item = &'static i32> + BidirectionalRange>(range: R) {
    let range = range.pipe(pipe::reverse());
    assert_eq!(values(range), vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}
for_tiers!(reverse_test, super::DIGITS, [bidirectional, random_access]);

#[test]
fn test_reverse_twice_is_identity() {
    let back_again = make_range(&DIGITS) >> pipe::reverse() >> pipe::reverse();
    assert_eq!(values(back_again), DIGITS.to_vec());
}

#[test]
fn test_reverse_random_access() {
    let reversed = make_range(&DIGITS).reversed();
    assert_eq!(category_of(&reversed), RangeCategory::RandomAccess);
    assert_eq!(*reversed.at_pos(&reversed.pos_at(2)), 7);
    assert_eq!(reversed.index_of(&reversed.pos_at(6)), 6);
    assert_eq!(values(reversed.subrange(1, 4)), vec![8, 7, 6]);
}

#[test]
fn test_sorting_through_a_reversed_view() {
    let mut data = vec![3, 9, 1, 7, 5];
    algorithm::sort(&mut make_range_mut(&mut data).reversed());
    assert_eq!(data, vec![9, 7, 5, 3, 1]);
}

// =============================================================================
// Rotate
// =============================================================================

fn rotate_test<R: InputRange<Item = &'static i32> + ForwardRange>(range: R) {
    let range = range.pipe(pipe::rotate(4));
    assert_eq!(values(range), vec![4, 5, 6, 7, 8, 9, 0, 1, 2, 3]);
}
for_tiers!(rotate_test, super::DIGITS, [forward, bidirectional, random_access]);

#[test]
fn test_rotate_normalizes_amount() {
    let range = make_range(&DIGITS);
    assert_eq!(values(range.rotated(-3)), vec![7, 8, 9, 0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(values(range.rotated(14)), values(range.rotated(4)));
    assert_eq!(values(range.rotated(0)), DIGITS.to_vec());
    assert_eq!(values(range.rotated(10)), DIGITS.to_vec());
}

#[test]
fn test_rotate_empty_range() {
    let empty: [i32; 0] = [];
    let rotated = make_range(&empty).rotated(3);
    assert!(rotated.is_empty());
    assert_eq!(rotated.length(), 0);
}

#[test]
fn test_rotate_random_access() {
    let rotated = iota(0, 10).rotated(4);
    assert_eq!(category_of(&rotated), RangeCategory::RandomAccess);
    assert_eq!(rotated.length(), 10);
    assert_eq!(rotated.at_pos(&rotated.pos_at(7)), 1);
    assert_eq!(
        rotated.pos_at(6),
        RotatedPos {
            pos: 0,
            wrapped: true
        }
    );
    let mut pos = rotated.end_pos();
    rotated.retreat_by(&mut pos, 5);
    assert_eq!(rotated.at_pos(&pos), 9);
    rotated.decrement_pos(&mut pos);
    assert_eq!(rotated.at_pos(&pos), 8);
    assert_eq!(items(rotated.reversed()), vec![3, 2, 1, 0, 9, 8, 7, 6, 5, 4]);
}

// =============================================================================
// Gather (partition view)
// =============================================================================

fn gather_test<R: InputRange<Item = &'static i32> + ForwardRange>(range: R) {
    let range = range.pipe(pipe::gather(5));
    assert_eq!(values(range), vec![5, 0, 1, 2, 3, 4, 6, 7, 8, 9]);
}
for_tiers!(gather_test, super::DIGITS, [forward, bidirectional, random_access]);

fn gather_if_test<R: InputRange<Item = &'static i32> + ForwardRange>(range: R) {
    let range = range.pipe(pipe::gather_if(|n: &i32| n & 1 == 0));
    assert_eq!(values(range), vec![0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
}
for_tiers!(gather_if_test, super::DIGITS, [forward, bidirectional, random_access]);

#[test]
fn test_gather_edge_cases() {
    let range = make_range(&DIGITS);
    assert_eq!(values(range.gather(42)), DIGITS.to_vec());
    assert_eq!(values(range.gather_if(|_| true)), DIGITS.to_vec());
    assert_eq!(range.gather_if(|n| *n > 6).length(), 10);
    assert_eq!(category_of(&range.gather(1)), RangeCategory::Forward);

    let empty: [i32; 0] = [];
    assert!(make_range(&empty).gather(1).is_empty());
}

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn test_pipeline_on_generated_range() {
    let view = iota(0, 20)
        >> pipe::select_if(|n: i32| n % 3 == 0)
        >> pipe::transform(|n: i32| n * 2)
        >> pipe::trim_front(1);
    assert_eq!(items(view), vec![6, 12, 18, 24, 30, 36]);
}

#[test]
fn test_pipeline_matches_methods() {
    let piped = make_range(&DIGITS)
        >> pipe::remove(3)
        >> pipe::replace(4, 40)
        >> pipe::append(iota(100, 102));
    let chained = make_range(&DIGITS)
        .remove(3)
        .replace(4, 40)
        .append(iota(100, 102));
    assert_eq!(items(piped), items(chained));
}

#[test]
fn test_pipe_method_on_fixture() {
    let view = fixtures::forward(&DIGITS)
        .pipe(pipe::rotate(8))
        .pipe(pipe::subrange(0, 4));
    assert_eq!(values(view), vec![8, 9, 0, 1]);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_twice_is_identity(v in prop::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(values(make_range(&v).reversed().reversed()), v.clone());
        }

        #[test]
        fn reverse_matches_iterator_rev(v in prop::collection::vec(any::<i32>(), 0..64)) {
            let expected: Vec<i32> = v.iter().rev().copied().collect();
            prop_assert_eq!(values(make_range(&v).reversed()), expected);
        }

        #[test]
        fn rotating_back_is_identity(
            v in prop::collection::vec(any::<i32>(), 0..64),
            n in 0usize..128,
        ) {
            let len = v.len();
            let back = if len == 0 { 0 } else { len - n % len };
            let round_trip = make_range(&v).rotated(n as isize).rotated(back as isize);
            prop_assert_eq!(values(round_trip), v.clone());
        }

        #[test]
        fn filter_of_filter_is_conjunction(
            v in prop::collection::vec(-100i32..100, 0..64),
            m in 1i32..5,
        ) {
            let nested = values(make_range(&v).filter(|n| *n % 2 == 0).filter(|n| *n % m == 0));
            let combined = values(make_range(&v).filter(|n| *n % 2 == 0 && *n % m == 0));
            prop_assert_eq!(nested, combined);
        }

        #[test]
        fn transform_is_element_wise(v in prop::collection::vec(-1000i32..1000, 0..64)) {
            let mapped = items(make_range(&v).transform(|n| n * 3 - 1));
            let expected: Vec<i32> = v.iter().map(|n| n * 3 - 1).collect();
            prop_assert_eq!(mapped, expected);
        }

        #[test]
        fn gather_is_a_stable_partition(v in prop::collection::vec(0i32..10, 0..64)) {
            let gathered = values(make_range(&v).gather_if(|n| *n < 5));
            let mut expected: Vec<i32> = v.iter().copied().filter(|n| *n < 5).collect();
            expected.extend(v.iter().copied().filter(|n| *n >= 5));
            prop_assert_eq!(gathered, expected);
        }
    }
}
