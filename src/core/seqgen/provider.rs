use std::collections::VecDeque;

use crate::Mwc256;

/// Source of test sequences for the sort drivers. Keeps randomness out of
/// the sorting code itself so drivers can be exercised with canned input.
pub trait SequenceProvider {
    fn next_sequence(&mut self) -> Vec<i32>;
}

/// Provider that draws fresh random integer arrays of a fixed length, with
/// values in an inclusive [low, high] range. Requires low <= high; callers
/// validate user-supplied bounds before constructing one.
pub struct RandomProvider {
    rng: Mwc256,
    len: usize,
    low: i32,
    high: i32,
}

impl RandomProvider {
    /// A provider seeded from the system entropy source.
    pub fn new(len: usize, low: i32, high: i32) -> Self {
        Self::with_seed(rand::random(), len, low, high)
    }

    /// A provider whose output is reproducible from the given seed.
    pub fn with_seed(seed: u32, len: usize, low: i32, high: i32) -> Self {
        Self {
            rng: Mwc256::with_seed(seed),
            len,
            low,
            high,
        }
    }
}

impl SequenceProvider for RandomProvider {
    fn next_sequence(&mut self) -> Vec<i32> {
        (0..self.len)
            .map(|_| self.rng.int_range(self.low, self.high))
            .collect()
    }
}

/// Provider that replays canned sequences, then empty ones. For tests.
pub struct FixedProvider {
    sequences: VecDeque<Vec<i32>>,
}

impl FixedProvider {
    pub fn new(sequences: Vec<Vec<i32>>) -> Self {
        Self {
            sequences: sequences.into(),
        }
    }
}

impl SequenceProvider for FixedProvider {
    fn next_sequence(&mut self) -> Vec<i32> {
        self.sequences.pop_front().unwrap_or_default()
    }
}
