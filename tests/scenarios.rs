//! Fixed scenarios: the sparse walk-through, bounds, and tabulated cases

use segbitset::{SegBitSet, SegBitSetError};
use test_case::test_case;

mod common;
use common::{chained_ones, visited_ones};

#[test]
fn sparse_walkthrough_of_sixteen_bits() {
    let mut bits = SegBitSet::<16>::new();
    assert!(bits.none());

    for pos in [1, 3, 9] {
        bits.insert(pos).expect("position in range");
    }

    assert_eq!(bits.count(), 3);
    assert_eq!(bits.first(), Some(1));
    assert_eq!(bits.next(1), Some(3));
    assert_eq!(bits.next(3), Some(9));
    assert_eq!(bits.next(9), None);
    assert!(bits.any());
    assert!(!bits.all());

    bits.flip_all();
    assert_eq!(bits.count(), 13);
    assert!(!bits.test(1).unwrap());
    assert!(bits.test(2).unwrap());
    assert!(bits.check_invariant());
}

#[test]
fn demo_positions_in_a_large_bitset() {
    const SIZE: usize = 1024 * 100;
    let bits: SegBitSet<SIZE> = [1, 20, 31, 1341].into_iter().collect();

    assert!(bits[1]);
    assert!(!bits[0]);
    assert_eq!(chained_ones(&bits), vec![1, 20, 31, 1341]);
    assert_eq!(visited_ones(&bits), vec![1, 20, 31, 1341]);
    assert_eq!(bits.next(1341), None);
}

#[test]
fn bounds_are_enforced() {
    const SIZE: usize = 10;
    let mut bits = SegBitSet::<SIZE>::new();

    assert!(bits.test(SIZE - 1).is_ok());
    assert!(matches!(
        bits.test(SIZE),
        Err(SegBitSetError::OutOfRange { op: "test", pos: 10, size: 10 })
    ));
    assert!(matches!(
        bits.set(SIZE, true),
        Err(SegBitSetError::OutOfRange { op: "set", .. })
    ));
    assert!(bits.reset(SIZE).is_err());
    assert!(bits.flip(SIZE).is_err());
    assert!(bits.bit_mut(SIZE).is_err());
    assert!(bits.none());
}

#[test]
#[should_panic(expected = "position 10 out of range")]
fn indexing_past_the_end_panics() {
    let bits = SegBitSet::<10>::new();
    let _ = bits[10];
}

#[test]
fn error_messages_name_the_operation() {
    let err = SegBitSet::<4>::new().test(9).unwrap_err();
    assert_eq!(err.to_string(), "test: position 9 out of range for bitset of size 4");
}

#[test_case(&[] ; "empty")]
#[test_case(&[0] ; "first position only")]
#[test_case(&[31] ; "last position only")]
#[test_case(&[0, 31] ; "both ends")]
#[test_case(&[5, 6, 7, 8] ; "adjacent run")]
#[test_case(&[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29, 31] ; "every other bit")]
fn traversal_orders_agree(ones: &[usize]) {
    let bits: SegBitSet<32> = ones.iter().copied().collect();
    assert_eq!(chained_ones(&bits), ones);
    assert_eq!(visited_ones(&bits), ones);
    assert_eq!(bits.iter().collect::<Vec<_>>(), ones);
    assert_eq!(bits.count(), ones.len());
    assert_eq!(bits.first(), ones.first().copied());
}

#[test_case(&[1, 2], &[2, 3], &[2], &[1, 2, 3], &[1, 3] ; "overlapping")]
#[test_case(&[], &[4], &[], &[4], &[4] ; "empty receiver")]
#[test_case(&[4], &[], &[], &[4], &[4] ; "empty operand")]
#[test_case(&[0, 7], &[0, 7], &[0, 7], &[0, 7], &[] ; "identical")]
fn combination_table(left: &[usize], right: &[usize], and: &[usize], or: &[usize], xor: &[usize]) {
    let a: SegBitSet<8> = left.iter().copied().collect();
    let b: SegBitSet<8> = right.iter().copied().collect();

    let mut result = a.clone();
    result &= &b;
    assert_eq!(result.iter().collect::<Vec<_>>(), and);

    let mut result = a.clone();
    result |= &b;
    assert_eq!(result.iter().collect::<Vec<_>>(), or);

    let mut result = a.clone();
    result ^= &b;
    assert_eq!(result.iter().collect::<Vec<_>>(), xor);
    assert!(result.check_invariant());
}

#[test]
fn reset_all_after_dense_fill() {
    let mut bits = SegBitSet::<50>::new();
    bits.set_all();
    assert!(bits.all());
    bits.reset(25).unwrap();
    assert!(!bits.all());
    assert_eq!(bits.count(), 49);

    bits.reset_all();
    assert!(bits.none());
    assert_eq!(bits.first(), None);
    assert!(bits.check_invariant());
}

#[test]
fn handle_writes_are_visible_to_queries() {
    let mut bits = SegBitSet::<20>::new();
    bits.bit_mut(12).unwrap().set(true);
    assert_eq!(bits.first(), Some(12));

    let mut handle = bits.bit_mut(12).unwrap();
    assert!(!handle.flip());
    assert!(bits.none());
}

#[test]
fn equality_ignores_history() {
    let mut a = SegBitSet::<30>::new();
    a.insert(4).unwrap().insert(20).unwrap().flip(20).unwrap();

    let mut b = SegBitSet::<30>::new();
    b.set_all().reset_all().insert(4).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, !&b);
}
