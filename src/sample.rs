use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `count` distinct elements uniformly without replacement.
///
/// Shuffles a copy of the whole collection (Fisher-Yates) and keeps the
/// first `count` entries. `count` is clamped to the collection length and
/// the input is left untouched.
pub fn sample<T: Clone, R: Rng + ?Sized>(collection: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let count = count.min(collection.len());
    let mut shuffled = collection.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Uniform single pick. `None` for an empty collection.
pub fn random_element<T: Clone, R: Rng + ?Sized>(collection: &[T], rng: &mut R) -> Option<T> {
    collection.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_clamps_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let xs = vec![1, 2, 3];
        assert_eq!(sample(&xs, 10, &mut rng).len(), 3);
        assert!(sample(&xs, 0, &mut rng).is_empty());
        assert!(sample::<i32, _>(&[], 4, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let xs: Vec<u32> = (0..20).collect();
        let a = sample(&xs, 7, &mut ChaCha8Rng::seed_from_u64(42));
        let b = sample(&xs, 7, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_roughly_uniform() {
        // Each of 5 elements should be picked first about 1/5 of the time
        let xs = ["a", "b", "c", "d", "e"];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut firsts = [0usize; 5];
        let trials = 20_000;
        for _ in 0..trials {
            let picked = sample(&xs, 1, &mut rng)[0];
            let idx = xs.iter().position(|&x| x == picked).unwrap();
            firsts[idx] += 1;
        }
        for count in firsts {
            let freq = count as f64 / trials as f64;
            assert!((freq - 0.2).abs() < 0.02, "frequency {freq} too far from 0.2");
        }
    }

    #[test]
    fn test_random_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(random_element::<u8, _>(&[], &mut rng), None);
        assert_eq!(random_element(&["only"], &mut rng), Some("only"));

        let choices = ["Around the Clock", "501"];
        for _ in 0..50 {
            let picked = random_element(&choices, &mut rng).unwrap();
            assert!(choices.contains(&picked));
        }
    }

    proptest! {
        #[test]
        fn prop_sample_distinct_members(
            xs in prop::collection::hash_set(0u32..1000, 0..40),
            k in 0usize..60,
            seed in any::<u64>(),
        ) {
            let xs: Vec<u32> = xs.into_iter().collect();
            let before = xs.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let drawn = sample(&xs, k, &mut rng);

            prop_assert_eq!(drawn.len(), k.min(xs.len()));
            let unique: HashSet<_> = drawn.iter().collect();
            prop_assert_eq!(unique.len(), drawn.len());
            prop_assert!(drawn.iter().all(|x| xs.contains(x)));
            prop_assert_eq!(xs, before);
        }
    }
}
