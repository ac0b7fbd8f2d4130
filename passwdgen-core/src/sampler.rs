//! Unbiased ranged sampling on top of an [`Engine`].
//!
//! Raw engine words are masked to 31 bits and then reduced with rejection
//! sampling: any raw value at or above the largest multiple of `n` that fits
//! below [`RMAX`] is discarded and redrawn, so every residue is equally likely.

use crate::engine::Engine;

/// Largest raw value the sampler works with (31 bits).
pub const RMAX: u32 = 0x7FFF_FFFF;

/// Returns the next raw engine output masked to `[0, RMAX]`.
#[inline]
pub fn next_raw<E: Engine + ?Sized>(engine: &mut E) -> u32 {
    (engine.next_u64() & RMAX as u64) as u32
}

/// Returns an integer uniformly distributed over `[0, n)`.
///
/// # Panics
///
/// Panics if `n` is `0` or greater than [`RMAX`]. Callers validate their
/// configuration first, so reaching this is a bug in the caller.
pub fn uniform_int<E: Engine + ?Sized>(engine: &mut E, n: u32) -> u32 {
    assert!(n > 0 && n <= RMAX, "uniform_int: n must be in [1, RMAX], got {n}");

    let limit = RMAX - (RMAX % n);

    loop {
        let raw = next_raw(engine);
        if raw < limit {
            return raw % n;
        }
    }
}

/// Returns a uniformly chosen element of `items`.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn pick<E: Engine + ?Sized, T: Copy>(engine: &mut E, items: &[T]) -> T {
    let n = u32::try_from(items.len()).unwrap_or(u32::MAX);
    items[uniform_int(engine, n) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Xoshiro256PlusPlus;
    use crate::testing::Scripted;

    fn chi_square(counts: &[u64], expected: f64) -> f64 {
        counts.iter().map(|&c| (c as f64 - expected).powi(2) / expected).sum()
    }

    fn assert_uniform(n: u32, trials: u64, critical: f64) {
        let mut engine = Xoshiro256PlusPlus::from_seed(0x5EED);
        let mut counts = vec![0u64; n as usize];
        for _ in 0..trials {
            counts[uniform_int(&mut engine, n) as usize] += 1;
        }
        let chi = chi_square(&counts, trials as f64 / n as f64);
        assert!(chi < critical, "n={n}: chi-square {chi} exceeds {critical}");
    }

    // Critical values are for p = 0.001 at n - 1 degrees of freedom.

    #[test]
    fn test_uniform_two() {
        assert_uniform(2, 100_000, 10.83);
    }

    #[test]
    fn test_uniform_three() {
        assert_uniform(3, 100_000, 13.82);
    }

    #[test]
    fn test_uniform_seven() {
        assert_uniform(7, 140_000, 22.46);
    }

    #[test]
    fn test_uniform_hundred() {
        assert_uniform(100, 200_000, 148.2);
    }

    #[test]
    fn test_uniform_two_billion_bucketed() {
        let n = 2_000_000_000u32;
        let mut engine = Xoshiro256PlusPlus::from_seed(0x5EED);
        let mut buckets = [0u64; 16];
        for _ in 0..160_000 {
            let v = uniform_int(&mut engine, n) as u64;
            assert!(v < n as u64);
            buckets[(v * 16 / n as u64) as usize] += 1;
        }
        let chi = chi_square(&buckets, 10_000.0);
        assert!(chi < 37.7, "chi-square {chi} exceeds 37.7");
    }

    #[test]
    fn test_uniform_one_is_always_zero() {
        let mut engine = Xoshiro256PlusPlus::from_seed(3);
        for _ in 0..10_000 {
            assert_eq!(uniform_int(&mut engine, 1), 0);
        }
    }

    #[test]
    fn test_known_sequence() {
        let mut engine = Xoshiro256PlusPlus::from_seed(7);
        let draws: Vec<u32> = (0..8).map(|_| uniform_int(&mut engine, 100)).collect();
        assert_eq!(draws, [4, 35, 11, 60, 36, 63, 40, 64]);
    }

    #[test]
    fn test_raw_is_masked_to_31_bits() {
        let mut engine = Scripted::new(vec![u64::MAX]);
        assert_eq!(next_raw(&mut engine), RMAX);
    }

    #[test]
    fn test_values_at_limit_are_redrawn() {
        // n = 3: limit = RMAX - 1, so RMAX and RMAX - 1 are both rejected.
        let mut engine = Scripted::new(vec![RMAX as u64, (RMAX - 1) as u64, 0xFFFF_FFFF_0000_0005]);
        assert_eq!(uniform_int(&mut engine, 3), 2);
        assert_eq!(engine.draws(), 3);
    }

    #[test]
    fn test_pick_uses_uniform_index() {
        let mut engine = Scripted::new(vec![4]);
        assert_eq!(pick(&mut engine, &['a', 'b', 'c']), 'b');
    }

    #[test]
    #[should_panic(expected = "n must be in [1, RMAX]")]
    fn test_zero_range_panics() {
        let mut engine = Xoshiro256PlusPlus::from_seed(1);
        uniform_int(&mut engine, 0);
    }

    #[test]
    #[should_panic]
    fn test_pick_empty_panics() {
        let mut engine = Xoshiro256PlusPlus::from_seed(1);
        let empty: [char; 0] = [];
        pick(&mut engine, &empty);
    }
}
