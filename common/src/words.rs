//! Word selection: a non-repeating, shuffled subset of the vocabulary.
//!
//! # Algorithm
//!
//! Selection sampling (Knuth's algorithm S) walks the candidates once and
//! keeps candidate `i` with probability `remaining_to_pick / remaining_candidates`.
//! This always yields exactly `count` indices in ascending order, each
//! index equally likely to be chosen. A Fisher-Yates shuffle then makes the
//! presentation order independent of vocabulary order.
//!
//! ```text
//! vocabulary: [a, b, c, d, e]   count = 3
//! sampled:    [0, 2, 3]         (ascending)
//! shuffled:   [3, 0, 2]         (presentation order)
//! ```

use heapless::Vec;

use crate::config::NUM_WORD_SLOTS;
use crate::rng::RandomSource;

/// Indices into the vocabulary, in presentation order.
pub type WordSelection = Vec<usize, NUM_WORD_SLOTS>;

/// Choose `count` distinct indices into `vocabulary` in random order.
///
/// # Panics
///
/// Panics if `count` exceeds the vocabulary length or the capacity `N`.
pub fn select_words<T, R, const N: usize>(
    rng: &mut R,
    vocabulary: &[T],
    count: usize,
) -> Vec<usize, N>
where
    R: RandomSource + ?Sized,
{
    assert!(count <= vocabulary.len(), "cannot pick {count} of {} words", vocabulary.len());
    assert!(count <= N, "selection capacity {N} is below {count}");

    let mut picked: Vec<usize, N> = Vec::new();
    let mut remaining_to_pick = count;
    let mut remaining_candidates = vocabulary.len();

    for index in 0..vocabulary.len() {
        if remaining_to_pick == 0 {
            break;
        }
        if (rng.next_uint(remaining_candidates as u32) as usize) < remaining_to_pick {
            // Capacity was checked above
            picked.push(index).ok();
            remaining_to_pick -= 1;
            log::debug!("index chosen: {index}");
        }
        remaining_candidates -= 1;
    }

    shuffle(rng, &mut picked);
    picked
}

/// Uniform in-place shuffle (Durstenfeld's Fisher-Yates).
pub fn shuffle<T, R>(
    rng: &mut R,
    items: &mut [T],
) where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_uint(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;
    use crate::vocabulary::WORDS;

    const SMALL: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn assert_valid(
        selection: &[usize],
        len: usize,
        count: usize,
    ) {
        assert_eq!(selection.len(), count);
        for (i, a) in selection.iter().enumerate() {
            assert!(*a < len, "index {a} out of range");
            assert!(!selection[i + 1..].contains(a), "index {a} repeated");
        }
    }

    #[test]
    fn test_small_vocabulary_ten_thousand_trials() {
        let mut rng = SeededRng::from_seed(3);
        for _ in 0..10_000 {
            let picked: Vec<usize, 3> = select_words(&mut rng, &SMALL, 3);
            assert_valid(&picked, SMALL.len(), 3);
        }
    }

    #[test]
    fn test_full_vocabulary_selection() {
        let mut rng = SeededRng::from_seed(11);
        for _ in 0..1_000 {
            let picked: WordSelection = select_words(&mut rng, WORDS, NUM_WORD_SLOTS);
            assert_valid(&picked, WORDS.len(), NUM_WORD_SLOTS);
        }
    }

    #[test]
    fn test_pick_everything() {
        let mut rng = SeededRng::from_seed(5);
        let mut picked: Vec<usize, 5> = select_words(&mut rng, &SMALL, 5);
        picked.sort_unstable();
        assert_eq!(picked.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pick_nothing() {
        let mut rng = SeededRng::from_seed(5);
        let picked: Vec<usize, 5> = select_words(&mut rng, &SMALL, 0);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_selection_frequency_is_uniform() {
        let mut rng = SeededRng::from_seed(1234);
        let trials = 10_000;
        let mut hits = [0u32; 5];
        for _ in 0..trials {
            let picked: Vec<usize, 3> = select_words(&mut rng, &SMALL, 3);
            for &index in picked.iter() {
                hits[index] += 1;
            }
        }
        // Expected frequency k/n = 0.6 per index
        for (index, count) in hits.iter().enumerate() {
            let freq = *count as f32 / trials as f32;
            assert!((freq - 0.6).abs() < 0.03, "index {index} frequency {freq}");
        }
    }

    #[test]
    fn test_presentation_order_is_shuffled() {
        // Without the shuffle the first slot could never hold index 4
        let mut rng = SeededRng::from_seed(77);
        let mut first_slot = [0u32; 5];
        for _ in 0..5_000 {
            let picked: Vec<usize, 3> = select_words(&mut rng, &SMALL, 3);
            first_slot[picked[0]] += 1;
        }
        assert!(first_slot.iter().all(|&c| c > 0), "first slot counts {first_slot:?}");
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SeededRng::from_seed(8);
        let mut items = [10, 20, 30, 40, 50, 60];
        shuffle(&mut rng, &mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = SeededRng::from_seed(8);
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut one = [9];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, [9]);
    }

    #[test]
    #[should_panic(expected = "cannot pick")]
    fn test_count_above_vocabulary_panics() {
        let mut rng = SeededRng::from_seed(0);
        let _: Vec<usize, 8> = select_words(&mut rng, &SMALL, 6);
    }
}
