//! Random source abstraction for the progress simulation
//!
//! The engine only ever needs "next float in [0,1)". Keeping that behind a
//! trait lets production use the thread rng while tests supply fixed
//! sequences and assert exact progress values.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the thread-local rng
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.random()
    }
}

/// Deterministic source yielding a fixed sequence, cycling when exhausted.
///
/// An empty sequence yields 0.0 forever.
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
