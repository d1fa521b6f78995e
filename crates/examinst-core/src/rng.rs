//! Deterministic sequence generator.
//!
//! SplitMix64 (<https://prng.di.unimi.it/splitmix64.c>). The algorithm lives
//! in-tree so that a seed replays the same shuffles on every platform and
//! every release; instances handed out months apart must still match.

/// SplitMix64 increment (golden ratio).
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX2: u64 = 0x94D0_49BB_1331_11EB;

/// A seeded generator owned by a single materialization call.
#[derive(Debug, Clone)]
pub struct SeedSequence {
    state: u64,
}

impl SeedSequence {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX2);
        z ^ (z >> 31)
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// Outputs below `2^64 mod bound` are rejected so every residue is equally
    /// likely. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "bound must be non-zero");
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Fisher–Yates over `n` positions, reporting each swap through `swap`.
    ///
    /// For `i` from `n - 1` down to `1`, draws `j` in `[0, i]` and calls
    /// `swap(i, j)`. Sequences of length 0 or 1 consume no draws.
    pub fn shuffle(&mut self, n: usize, mut swap: impl FnMut(usize, usize)) {
        for i in (1..n).rev() {
            let j = self.below(i as u64 + 1) as usize;
            swap(i, j);
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        self.shuffle(items.len(), |i, j| items.swap(i, j));
    }
}
