//! Seeded 32-bit generator for schedule shuffles.
//!
//! Mulberry32: one `u32` of state, advanced by a Weyl increment and mixed
//! with two multiply-xorshift rounds.

use rand::{Error, RngCore, SeedableRng};

/// Mulberry32 pseudo-random generator.
///
/// # Examples
///
/// ```
/// use metrodle::daily::Mulberry32;
/// use rand::RngCore;
///
/// let mut a = Mulberry32::new(12345);
/// let mut b = Mulberry32::new(12345);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform float in `[0, 1)` with 32 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Fisher-Yates shuffle in place, walking from the back.
    ///
    /// Each step picks `j = floor(next_f64() * (i + 1))`, so a given seed
    /// always produces the same permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64) as usize;
            items.swap(i, j.min(i));
        }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn known_sequence() {
        // Reference values for seed 0.
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
        assert_eq!(rng.next_u32(), 958_946_056);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(12345);
        let mut b = Mulberry32::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(12345);
        let mut b = Mulberry32::new(12346);
        let sa: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn floats_in_unit_interval() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = Mulberry32::new(99);
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn shuffle_matches_reference_permutation() {
        let mut rng = Mulberry32::new(12345);
        let mut items: Vec<u32> = (0..10).collect();
        rng.shuffle(&mut items);
        assert_eq!(items, vec![6, 4, 8, 0, 1, 7, 5, 3, 2, 9]);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = Mulberry32::new(1);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        let mut one = vec![1];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn works_as_rand_rng() {
        let mut rng = Mulberry32::from_seed(42u32.to_le_bytes());
        for _ in 0..100 {
            let n = rng.gen_range(0..10);
            assert!(n < 10);
        }
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
    }
}
