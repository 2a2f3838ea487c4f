//! Deterministic seeded random number generation
//!
//! Mulberry32: a 32-bit PRNG with one word of state. Scene seeds are shared
//! as plain numbers, so the exact output sequence is a public contract and
//! the mixing function must not change. Every generator call constructs its
//! own instance from the caller's seed; instances are never shared.

/// Deterministic pseudo-random stream of `f32` values in `[0, 1)`.
///
/// Two generators built from the same seed produce identical sequences,
/// which is what makes a scene reproducible from its seed alone.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    ///
    /// One Mulberry32 step: add the odd increment, then two
    /// xor-shift/multiply avalanche rounds. The division runs in f64 so all
    /// 2^32 outputs land in `[0, 1)` before narrowing.
    #[inline]
    pub fn next(&mut self) -> f32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        ((t ^ (t >> 14)) as f64 / 4_294_967_296.0) as f32
    }

    /// Next value in `[-0.5, 0.5)`, the usual jitter form.
    #[inline]
    pub fn next_centered(&mut self) -> f32 {
        self.next() - 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(0xDEAD_BEEF);
        let mut b = SeededRng::new(0xDEAD_BEEF);
        for _ in 0..1000 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let same = (0..100).filter(|_| a.next() == b.next()).count();
        assert!(same < 100, "distinct seeds should not track each other");
    }

    #[test]
    fn test_output_range() {
        let mut rng = SeededRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_reference_sequence() {
        // First draws of the published Mulberry32 stream for fixed seeds.
        let cases: [(u32, [f32; 4]); 2] = [
            (1, [0.62707394, 0.00273572, 0.52744704, 0.98105097]),
            (42, [0.60110375, 0.44829056, 0.85246579, 0.66973404]),
        ];
        for (seed, expected) in cases {
            let mut rng = SeededRng::new(seed);
            for (i, want) in expected.into_iter().enumerate() {
                let got = rng.next();
                assert!(
                    (got - want).abs() < 1e-6,
                    "seed {seed} draw {i}: got {got}, want {want}"
                );
            }
        }
    }

    #[test]
    fn test_centered_range() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let v = rng.next_centered();
            assert!((-0.5..0.5).contains(&v));
        }
    }
}
