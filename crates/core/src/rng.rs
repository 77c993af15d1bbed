//! RNG module - injectable randomness for shaking the board
//!
//! Board generation never touches global random state. Everything random
//! flows through a [`RandomSource`], so tests can pin a seed (or script the
//! draws entirely) and get the same board every time.
//!
//! Also provides a simple LCG, [`SimpleRng`], as the default source.

/// Source of uniform draws used to shuffle dice and pick faces.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `[0, max)`. Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; feeding it back into [`SimpleRng::new`]
    /// continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, then repeats the last one.
    struct Scripted {
        draws: Vec<u32>,
        at: usize,
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.draws[self.at.min(self.draws.len() - 1)];
            self.at += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(6) < 6);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<usize> = (0..16).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_scripted_source_drives_shuffle() {
        // Every draw is 0: each step swaps slot i with slot 0.
        let mut rng = Scripted {
            draws: vec![0],
            at: 0,
        };
        let mut values = [0, 1, 2, 3];
        rng.shuffle(&mut values);
        assert_eq!(values, [1, 2, 3, 0]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = SimpleRng::new(5);
        let expected = SimpleRng::new(5).next_u32();
        let mut by_ref = &mut rng;
        assert_eq!(RandomSource::next_u32(&mut by_ref), expected);
    }
}
