extern crate alloc;
extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::sort::INSERTION_SORT_THRESHOLD;
use crate::fixtures::forward;
use crate::{algorithm, iota, make_range, make_range_mut, RangeExt, SliceRangeMut};

fn shuffled(len: usize, seed: u64) -> Vec<i32> {
    let mut data: Vec<i32> = (0..len as i32).collect();
    algorithm::shuffle(&mut make_range_mut(&mut data), &mut SmallRng::seed_from_u64(seed));
    data
}

fn random_values(len: usize, max: i32, seed: u64) -> Vec<i32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..max)).collect()
}

// =============================================================================
// Unstable Sort
// =============================================================================

#[test]
fn test_sort_small_inputs() {
    let mut data = [5, 3, 8, 1, 9, 2];
    algorithm::sort(&mut make_range_mut(&mut data));
    assert_eq!(data, [1, 2, 3, 5, 8, 9]);

    let mut empty: [i32; 0] = [];
    algorithm::sort(&mut make_range_mut(&mut empty));
    let mut one = [4];
    algorithm::sort(&mut make_range_mut(&mut one));
    assert_eq!(one, [4]);
}

#[test]
fn test_sort_above_insertion_threshold() {
    for len in [INSERTION_SORT_THRESHOLD + 1, 100, 1000] {
        let mut data = shuffled(len, len as u64);
        algorithm::sort(&mut make_range_mut(&mut data));
        assert_eq!(data, (0..len as i32).collect::<Vec<_>>(), "len {len}");
    }
}

#[test]
fn test_sort_presorted_and_reversed() {
    let mut ascending: Vec<i32> = (0..500).collect();
    algorithm::sort(&mut make_range_mut(&mut ascending));
    assert!(algorithm::is_sorted(&make_range(&ascending)));

    let mut descending: Vec<i32> = (0..500).rev().collect();
    algorithm::sort(&mut make_range_mut(&mut descending));
    assert_eq!(descending, ascending);
}

#[test]
fn test_sort_many_duplicates() {
    let mut data = random_values(700, 4, 11);
    let mut expected = data.clone();
    expected.sort_unstable();
    algorithm::sort(&mut make_range_mut(&mut data));
    assert_eq!(data, expected);

    let mut same = vec![7; 300];
    algorithm::sort(&mut make_range_mut(&mut same));
    assert!(same.iter().all(|n| *n == 7));
}

#[test]
fn test_sort_by_descending() {
    let mut data = shuffled(64, 3);
    algorithm::sort_by(&mut make_range_mut(&mut data), |a, b| b.cmp(a));
    assert_eq!(data, (0..64).rev().collect::<Vec<_>>());
}

#[test]
fn test_sort_only_touches_the_range() {
    let mut data = [9, 8, 7, 6, 5, 4, 3, 2];
    algorithm::sort(&mut SliceRangeMut::with_bounds(&mut data, 2, 6));
    assert_eq!(data, [9, 8, 4, 5, 6, 7, 3, 2]);
}

#[test]
fn test_sort_through_a_reversed_view() {
    let mut data = shuffled(40, 5);
    algorithm::sort(&mut make_range_mut(&mut data).reversed());
    assert_eq!(data, (0..40).rev().collect::<Vec<_>>());
}

// =============================================================================
// Stable Sort
// =============================================================================

#[test]
fn test_stable_sort_keeps_equal_keys_in_order() {
    let keys = random_values(200, 5, 17);
    let mut pairs: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();
    algorithm::stable_sort_by(&mut make_range_mut(&mut pairs), |a, b| a.0.cmp(&b.0));

    for window in pairs.windows(2) {
        let ((k1, i1), (k2, i2)) = (window[0], window[1]);
        assert!(k1 < k2 || (k1 == k2 && i1 < i2), "{:?} before {:?}", window[0], window[1]);
    }
}

#[test]
fn test_stable_sort_plain_values() {
    let mut data = shuffled(333, 23);
    algorithm::stable_sort(&mut make_range_mut(&mut data));
    assert_eq!(data, (0..333).collect::<Vec<_>>());

    let mut short = [3, 1, 2];
    algorithm::stable_sort(&mut make_range_mut(&mut short));
    assert_eq!(short, [1, 2, 3]);
}

// =============================================================================
// Partial Sorts and Selection
// =============================================================================

#[test]
fn test_partial_sort() {
    let mut data = shuffled(50, 29);
    algorithm::partial_sort(&mut make_range_mut(&mut data), 5);
    assert_eq!(&data[..5], &[0, 1, 2, 3, 4]);
    let mut rest = data[5..].to_vec();
    rest.sort_unstable();
    assert_eq!(rest, (5..50).collect::<Vec<_>>());

    let mut untouched = [3, 1, 2];
    algorithm::partial_sort(&mut make_range_mut(&mut untouched), 0);
    assert_eq!(untouched, [3, 1, 2]);

    let mut full = [3, 1, 2];
    algorithm::partial_sort(&mut make_range_mut(&mut full), 3);
    assert_eq!(full, [1, 2, 3]);
}

#[test]
fn test_partial_sort_by_descending() {
    let mut data = shuffled(30, 31);
    algorithm::partial_sort_by(&mut make_range_mut(&mut data), 3, |a, b| b.cmp(a));
    assert_eq!(&data[..3], &[29, 28, 27]);
}

#[test]
fn test_partial_sort_copy_into_smaller_destination() {
    let source = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
    let mut dest = [0; 4];
    let end = algorithm::partial_sort_copy(&make_range(&source), &mut make_range_mut(&mut dest));
    assert_eq!(end, 4);
    assert_eq!(dest, [1, 1, 2, 3]);
}

#[test]
fn test_partial_sort_copy_into_larger_destination() {
    let mut dest = [-1; 6];
    let end = algorithm::partial_sort_copy(&iota(0, 4).reversed(), &mut make_range_mut(&mut dest));
    assert_eq!(end, 4);
    assert_eq!(dest, [0, 1, 2, 3, -1, -1]);

    let mut empty: [i32; 0] = [];
    assert_eq!(
        algorithm::partial_sort_copy(&iota(0, 4), &mut make_range_mut(&mut empty)),
        0
    );
}

#[test]
fn test_partial_sort_copy_by_descending() {
    let mut dest = [0; 3];
    let end = algorithm::partial_sort_copy_by(
        &iota(0, 10),
        &mut make_range_mut(&mut dest),
        |a: &i32, b: &i32| b.cmp(a),
    );
    assert_eq!(end, 3);
    assert_eq!(dest, [9, 8, 7]);
}

#[test]
fn test_nth_element() {
    let mut data = shuffled(100, 37);
    algorithm::nth_element(&mut make_range_mut(&mut data), 37);
    assert_eq!(data[37], 37);
    assert!(data[..37].iter().all(|n| *n < 37));
    assert!(data[38..].iter().all(|n| *n > 37));

    let mut small = [5, 1, 4];
    algorithm::nth_element(&mut make_range_mut(&mut small), 0);
    assert_eq!(small[0], 1);

    let mut past_end = [2, 1];
    algorithm::nth_element(&mut make_range_mut(&mut past_end), 2);
    assert_eq!(past_end, [2, 1]);
}

#[test]
fn test_nth_element_by_descending() {
    let mut data = shuffled(80, 41);
    algorithm::nth_element_by(&mut make_range_mut(&mut data), 0, |a, b| b.cmp(a));
    assert_eq!(data[0], 79);
}

// =============================================================================
// Order Checks and In-place Merge
// =============================================================================

#[test]
fn test_is_sorted_until() {
    let data = [1, 2, 2, 5, 3, 6];
    assert_eq!(algorithm::is_sorted_until(&forward(&data)), 4);
    assert!(!algorithm::is_sorted(&forward(&data)));
    assert!(algorithm::is_sorted(&forward(&data[..4])));
    assert!(algorithm::is_sorted(&make_range(&data[..0])));
    assert!(algorithm::is_sorted(&iota(-3, 3)));

    assert!(algorithm::is_sorted_by(&iota(0, 5).reversed(), |a, b| b.cmp(a)));
    assert_eq!(algorithm::is_sorted_until_by(&make_range(&[3, 2, 4]), |a, b| b.cmp(a)), 2);
}

#[test]
fn test_inplace_merge_large_runs() {
    let mut data: Vec<i32> = (0..200).filter(|n| n % 3 == 0).collect();
    let middle = data.len();
    data.extend((0..200).filter(|n| n % 3 != 0));
    algorithm::inplace_merge(&mut make_range_mut(&mut data), middle);
    assert_eq!(data, (0..200).collect::<Vec<_>>());
}

// =============================================================================
// Property Tests
// =============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sort_matches_std(v in prop::collection::vec(any::<i32>(), 0..300)) {
            let mut expected = v.clone();
            expected.sort_unstable();
            let mut data = v;
            algorithm::sort(&mut make_range_mut(&mut data));
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn stable_sort_matches_std(v in prop::collection::vec((0u8..8, any::<u16>()), 0..300)) {
            let mut expected = v.clone();
            expected.sort_by_key(|pair| pair.0);
            let mut data = v;
            algorithm::stable_sort_by(&mut make_range_mut(&mut data), |a, b| a.0.cmp(&b.0));
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn stable_partition_matches_filter(v in prop::collection::vec(0i32..100, 0..100)) {
            let mut expected: Vec<i32> = v.iter().copied().filter(|n| n % 2 == 0).collect();
            let split = expected.len();
            expected.extend(v.iter().copied().filter(|n| n % 2 != 0));

            let mut data = v;
            let pos = algorithm::stable_partition(
                &mut crate::fixtures::forward_mut(&mut data),
                |n| n % 2 == 0,
            );
            prop_assert_eq!(pos, split);
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn nth_element_selects_the_nth_smallest(
            v in prop::collection::vec(any::<i16>(), 1..200),
            pick in any::<prop::sample::Index>(),
        ) {
            let n = pick.index(v.len());
            let mut sorted = v.clone();
            sorted.sort_unstable();

            let mut data = v;
            algorithm::nth_element(&mut make_range_mut(&mut data), n);
            prop_assert_eq!(data[n], sorted[n]);
            prop_assert!(data[..n].iter().all(|x| *x <= data[n]));
            prop_assert!(data[n + 1..].iter().all(|x| *x >= data[n]));
        }

        #[test]
        fn partial_sort_prefix_is_sorted_prefix(
            v in prop::collection::vec(any::<i32>(), 0..200),
            pick in any::<prop::sample::Index>(),
        ) {
            let m = pick.index(v.len() + 1);
            let mut sorted = v.clone();
            sorted.sort_unstable();

            let mut data = v;
            algorithm::partial_sort(&mut make_range_mut(&mut data), m);
            prop_assert_eq!(&data[..m], &sorted[..m]);
        }

        #[test]
        fn inplace_merge_of_sorted_halves_sorts(
            left in prop::collection::vec(0i32..50, 0..100),
            right in prop::collection::vec(0i32..50, 0..100),
        ) {
            let (mut left, mut right) = (left, right);
            left.sort_unstable();
            right.sort_unstable();
            let middle = left.len();
            let mut data = left;
            data.extend(right);
            let mut expected = data.clone();
            expected.sort();

            algorithm::inplace_merge(&mut make_range_mut(&mut data), middle);
            prop_assert_eq!(data, expected);
        }
    }
}
