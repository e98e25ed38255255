//! Random tie-breaking sources.

use super::super::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Picks one of several equally good candidates.
pub trait Chooser: Send {
    /// Returns one element of `candidates`, which is never empty.
    fn choose(&mut self, candidates: &[Position]) -> Position;
}

/// Uniform choice backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    /// Seeds from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChooser<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Chooser for RandomChooser<R> {
    fn choose(&mut self, candidates: &[Position]) -> Position {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}

/// Always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl Chooser for FirstChooser {
    fn choose(&mut self, candidates: &[Position]) -> Position {
        candidates[0]
    }
}
