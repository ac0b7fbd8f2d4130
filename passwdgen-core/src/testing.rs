//! Deterministic engines for unit tests.

use crate::engine::Engine;

/// Replays a fixed script of raw words, cycling when exhausted.
pub(crate) struct Scripted {
    words: Vec<u64>,
    pos: usize,
}

impl Scripted {
    pub(crate) fn new(words: Vec<u64>) -> Self {
        assert!(!words.is_empty());
        Self { words, pos: 0 }
    }

    /// Number of words handed out so far.
    pub(crate) fn draws(&self) -> usize {
        self.pos
    }
}

impl Engine for Scripted {
    fn seed(&mut self, _seed: u32) {
        self.pos = 0;
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }
}

/// Wraps another engine and counts its draws.
pub(crate) struct Counting<E> {
    pub(crate) inner: E,
    pub(crate) draws: usize,
}

impl<E: Engine> Counting<E> {
    pub(crate) fn new(inner: E) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<E: Engine> Engine for Counting<E> {
    fn seed(&mut self, seed: u32) {
        self.inner.seed(seed);
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }
}
