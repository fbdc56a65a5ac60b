use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness in `[0, 1)`.
///
/// The series generator takes this as an explicit dependency instead of
/// reaching for an ambient global, so callers can seed or script it.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// Thread-local RNG, the default production source.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn next_uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source seeded from a `u64`, for reproducible series.
#[derive(Debug)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl UniformSource for SeededSource {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Scripted source that cycles through a fixed list of values.
///
/// An empty list behaves as a constant midpoint source.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source that always draws the midpoint, yielding zero noise.
    pub fn midpoint() -> Self {
        Self::new(vec![0.5])
    }
}

impl UniformSource for FixedSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
