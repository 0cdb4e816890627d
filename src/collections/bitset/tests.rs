#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_set_and_get() {
    let mut bits = BitSet::new(130);
    assert_eq!(bits.len(), 130);
    assert_eq!(bits.count_ones(), 0, "A new BitSet should have no bits set.");

    for pos in [0, 1, 63, 64, 65, 127, 128, 129] {
        bits.set(pos, true);
    }
    for pos in 0..130 {
        assert_eq!(
            bits.get(pos),
            [0, 1, 63, 64, 65, 127, 128, 129].contains(&pos),
            "Bit {pos} should only be set if it was set explicitly."
        );
    }
    assert_eq!(bits.count_ones(), 8);

    bits.set(64, false);
    assert!(!bits.get(64), "Unsetting a bit should clear it.");
    assert!(bits.get(63) && bits.get(65), "Unsetting a bit shouldn't touch its neighbours.");

    bits.clear();
    assert_eq!(bits.count_ones(), 0);
}

#[test]
fn test_out_of_bounds() {
    let mut bits = BitSet::new(10);
    assert_eq!(bits.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));
    assert!(bits.try_set(11, true).is_err());

    assert_panics!({
        BitSet::new(3).get(3)
    });

    let empty = BitSet::new(0);
    assert!(empty.is_empty());
    assert!(empty.try_get(0).is_err());
}

#[test]
fn test_debug() {
    let mut bits = BitSet::new(5);
    bits.set(1, true);
    bits.set(4, true);
    assert_eq!(format!("{bits:?}"), "BitSet(01001)");
}
