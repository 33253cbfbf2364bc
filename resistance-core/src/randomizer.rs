//! Randomized ordering of a collection.
//!
//! Callers depend on the [`Randomizer`] trait so tests can substitute a
//! deterministic ordering. The production implementation, [`SecureRandomizer`],
//! draws every sort key from the operating system CSPRNG: role secrecy depends
//! on nobody being able to predict the order.

use rand::rngs::OsRng;
use rand::RngCore;

/// Produces a permutation of `items`: every element exactly once, nothing
/// added or dropped.
pub trait Randomizer<T> {
    fn randomize<'a>(&self, items: &'a [T]) -> Vec<&'a T>;
}

impl<T, R> Randomizer<T> for &R
where
    R: Randomizer<T> + ?Sized,
{
    fn randomize<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        (**self).randomize(items)
    }
}

/// Assigns each element an independent 64-bit key from [`OsRng`] and sorts by
/// key. No generator state outlives a call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandomizer;

impl<T> Randomizer<T> for SecureRandomizer {
    fn randomize<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut rng = OsRng;
        let mut keyed: Vec<(u64, &'a T)> =
            items.iter().map(|item| (rng.next_u64(), item)).collect();

        keyed.sort_unstable_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::CryptoRng;
    use std::collections::HashSet;

    fn assert_crypto_rng<R: RngCore + CryptoRng>(_rng: &R) {}

    #[test]
    fn test_key_source_is_cryptographic() {
        assert_crypto_rng(&OsRng);
    }

    #[test]
    fn test_randomize_returns_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let shuffled = SecureRandomizer.randomize(&items);

        assert_eq!(shuffled.len(), items.len());

        let mut sorted: Vec<u32> = shuffled.into_iter().copied().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_randomize_keeps_duplicates() {
        let items = vec![1, 1, 2];
        let shuffled = SecureRandomizer.randomize(&items);

        assert_eq!(shuffled.iter().filter(|item| ***item == 1).count(), 2);
        assert_eq!(shuffled.len(), 3);
    }

    #[test]
    fn test_randomize_empty_and_single() {
        let empty: Vec<u8> = Vec::new();
        assert!(SecureRandomizer.randomize(&empty).is_empty());

        let single = vec![42];
        assert_eq!(SecureRandomizer.randomize(&single), vec![&42]);
    }

    #[test]
    fn test_randomize_varies_between_calls() {
        let items: Vec<u32> = (0..8).collect();
        let orderings: HashSet<Vec<u32>> = (0..100)
            .map(|_| SecureRandomizer.randomize(&items).into_iter().copied().collect())
            .collect();

        assert!(orderings.len() > 1, "100 shuffles of 8 items all matched");
    }

    fn first_of<R: Randomizer<i32>>(randomizer: R, items: &[i32]) -> Option<i32> {
        randomizer.randomize(items).first().copied().copied()
    }

    #[test]
    fn test_randomizer_through_reference() {
        let counting = doubles::CountingRandomizer::new(doubles::ReversingRandomizer);
        let items = vec![1, 2, 3];

        assert_eq!(first_of(&counting, &items), Some(3));
        assert_eq!(first_of(&counting, &items), Some(3));
        assert_eq!(counting.calls(), 2);
    }
}
