//! In-place reordering of a finished password.
//!
//! Every position swaps with an index drawn from the whole buffer; a draw
//! that lands on the position itself is bumped to the next index instead of
//! redrawn. The resulting permutations are NOT uniformly distributed (unlike
//! a Fisher-Yates shuffle, which draws from `[i, L)`). Passwords depend on
//! this exact procedure, so it must not be swapped for a textbook shuffle.

use crate::engine::Engine;
use crate::sampler::uniform_int;

/// Permutes `buf` in place. Buffers shorter than two are left untouched.
pub fn permute<E: Engine + ?Sized, T>(engine: &mut E, buf: &mut [T]) {
    let len = buf.len();
    if len < 2 {
        return;
    }
    let n = u32::try_from(len).unwrap_or(u32::MAX);

    for i in 0..len {
        let mut j = uniform_int(engine, n) as usize;
        if j == i {
            j = (j + 1) % len;
        }
        buf.swap(i, j);
    }
}
