//! Fisher–Yates shuffling.
mod rng;

pub use rng::{PcgRng, RngOracle};

/// Shuffles `items` in place.
///
/// For `i` from `len - 1` down to `1`, draws `j` uniformly from `0..=i` and
/// swaps positions `i` and `j`. With a uniform source every permutation is
/// equally likely.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl RngOracle) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut impl RngOracle) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn output_is_a_permutation() {
        let input: Vec<u32> = (0..10).collect();
        let mut rng = PcgRng::new(99);
        for _ in 0..100 {
            let mut output = shuffled(&input, &mut rng);
            assert_eq!(output.len(), input.len());
            output.sort_unstable();
            assert_eq!(output, input);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec!['a', 'b', 'c', 'd'];
        let _ = shuffled(&input, &mut PcgRng::new(3));
        assert_eq!(input, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let input: Vec<u32> = (0..10).collect();
        let a = shuffled(&input, &mut PcgRng::new(2024));
        let b = shuffled(&input, &mut PcgRng::new(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut PcgRng::new(0));
        let mut one = [5];
        fisher_yates(&mut one, &mut PcgRng::new(0));
        assert_eq!(one, [5]);
    }

    #[test]
    fn all_permutations_of_three_are_roughly_equally_likely() {
        const RUNS: usize = 60_000;
        let mut rng = PcgRng::new(0xC0FFEE);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..RUNS {
            *counts.entry(shuffled(&[0u8, 1, 2], &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = RUNS / 6;
        for (perm, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 10,
                "permutation {perm:?} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn each_element_lands_in_first_slot_uniformly() {
        const RUNS: usize = 50_000;
        let input: Vec<usize> = (0..10).collect();
        let mut rng = PcgRng::new(17);
        let mut first = [0usize; 10];
        for _ in 0..RUNS {
            first[shuffled(&input, &mut rng)[0]] += 1;
        }
        let expected = RUNS / 10;
        for (element, count) in first.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 8,
                "element {element} first {count} times, expected about {expected}"
            );
        }
    }
}
