//! 64-bit rotation used by the engine's output scrambler and its seeding step.

/// Rotates `x` left by `k` bits.
///
/// `k` must be in `1..64`; the engine only ever uses 17, 23 and 45.
#[inline(always)]
pub const fn rotate_left64(x: u64, k: u32) -> u64 {
    debug_assert!(k > 0 && k < 64);
    (x << k) | (x >> (64 - k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_wraps_high_bits() {
        assert_eq!(rotate_left64(0x8000_0000_0000_0000, 1), 1);
        assert_eq!(rotate_left64(0xF000_0000_0000_000F, 4), 0x0000_0000_0000_00FF);
    }

    #[test]
    fn test_rotate_matches_core_intrinsic() {
        let samples = [0u64, 1, 0xDEAD_BEEF_CAFE_F00D, u64::MAX, 0x0123_4567_89AB_CDEF];
        for x in samples {
            for k in [17, 23, 45] {
                assert_eq!(rotate_left64(x, k), x.rotate_left(k));
            }
        }
    }

    #[test]
    fn test_rotate_full_circle() {
        let x = 0x0123_4567_89AB_CDEF;
        assert_eq!(rotate_left64(rotate_left64(x, 17), 47), x);
    }
}
