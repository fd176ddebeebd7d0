//! The digit-reduction law.

use serde::{Deserialize, Serialize};

/// Returns true for the master numbers 11, 22 and 33.
pub fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit by repeated digit sums, stopping at a master number.
///
/// `reduce(29) == 11` (2+9), `reduce(38) == 11` (3+8), `reduce(1990) == 1`.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Reduce to a single digit with no master-number exemption.
pub fn reduce_plain(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// A reduced number together with the sum it came from.
///
/// The unreduced sum is what karmic debt detection looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduced {
    /// The sum before reduction.
    pub unreduced: u32,
    /// The reduced value.
    pub reduced: u32,
}

impl Reduced {
    /// Reduce a raw sum.
    pub fn from_sum(sum: u32) -> Self {
        Self {
            unreduced: sum,
            reduced: reduce(sum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_digits_are_fixed() {
        for n in 0..=9 {
            assert_eq!(reduce(n), n);
        }
    }

    #[test]
    fn master_numbers_are_preserved() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
        assert_eq!(reduce(29), 11);
        assert_eq!(reduce(49), 4);
    }

    #[test]
    fn intermediate_masters_stop_reduction() {
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(499), 22);
        assert_eq!(reduce(6999), 33);
        assert_eq!(reduce(299), 2);
    }

    #[test]
    fn ordinary_reductions() {
        assert_eq!(reduce(30), 3);
        assert_eq!(reduce(19), 1);
        assert_eq!(reduce(1990), 1);
        assert_eq!(reduce(44), 8);
    }

    #[test]
    fn plain_reduction_ignores_masters() {
        assert_eq!(reduce_plain(11), 2);
        assert_eq!(reduce_plain(29), 2);
        assert_eq!(reduce_plain(2024), 8);
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(15), 6);
    }

    #[test]
    fn reduced_keeps_the_raw_sum() {
        let r = Reduced::from_sum(16);
        assert_eq!(r.unreduced, 16);
        assert_eq!(r.reduced, 7);
    }

    proptest! {
        #[test]
        fn reduce_is_idempotent(n in any::<u32>()) {
            prop_assert_eq!(reduce(reduce(n)), reduce(n));
        }

        #[test]
        fn reduce_lands_on_a_valid_number(n in any::<u32>()) {
            let r = reduce(n);
            prop_assert!(r <= 9 || is_master(r));
        }

        #[test]
        fn plain_reduction_matches_digital_root(n in 1u32..1_000_000) {
            prop_assert_eq!(reduce_plain(n), 1 + (n - 1) % 9);
        }
    }
}
