//! Fisher–Yates shuffle driven by the seeded generator.

use crate::prng::SeededRng;

/// Shuffle `items` in place.
///
/// Walks `i` from the last index down to 1 and swaps with `j = next_int(0, i + 1)`.
/// The number of generator calls is `len - 1`, which later orientation rolls
/// depend on.
pub fn shuffle<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = SeededRng::new(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn consumes_len_minus_one_values() {
        let mut rng = SeededRng::new(5);
        let mut items: Vec<u32> = (0..10).collect();
        shuffle(&mut items, &mut rng);

        let mut reference = SeededRng::new(5);
        for _ in 0..9 {
            reference.next_float();
        }
        assert_eq!(rng.state(), reference.state());
    }

    #[test]
    fn seed_zero_two_items() {
        // First float for seed 0 is ~0.236, so j = floor(0.236 * 2) = 0 and the pair swaps.
        let mut rng = SeededRng::new(0);
        let mut items = vec!['a', 'b'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec!['b', 'a']);
    }

    proptest! {
        #[test]
        fn output_is_a_permutation(seed in any::<i32>(), len in 0usize..90) {
            let mut rng = SeededRng::new(seed);
            let mut items: Vec<usize> = (0..len).collect();
            shuffle(&mut items, &mut rng);
            prop_assert_eq!(items.len(), len);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        }

        #[test]
        fn same_seed_same_order(seed in any::<i32>()) {
            let mut a: Vec<u8> = (0..78).collect();
            let mut b = a.clone();
            shuffle(&mut a, &mut SeededRng::new(seed));
            shuffle(&mut b, &mut SeededRng::new(seed));
            prop_assert_eq!(a, b);
        }
    }
}
