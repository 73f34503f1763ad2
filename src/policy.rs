use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::environment::Movement;

/// Picks the next move among the currently legal ones.
pub trait Policy {
    /// Returns `None` only when `candidates` is empty.
    fn choose_one(&mut self, candidates: &[Movement]) -> Option<Movement>;
}

/// Uniform choice over the candidates.
pub struct RandomPolicy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPolicy<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_thread_rng() -> Result<Self, rand::Error> {
        Ok(Self::new(StdRng::from_rng(thread_rng())?))
    }
}

impl<R: Rng> Policy for RandomPolicy<R> {
    fn choose_one(&mut self, candidates: &[Movement]) -> Option<Movement> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always takes the first candidate in catalog order.
#[derive(Debug, Default)]
pub struct FirstPolicy;

impl Policy for FirstPolicy {
    fn choose_one(&mut self, candidates: &[Movement]) -> Option<Movement> {
        candidates.first().copied()
    }
}

/// Replays a fixed list of moves regardless of the candidates, then falls
/// back to the first candidate.
///
/// A scripted move may be illegal; the agent rejects it when applied.
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    script: VecDeque<Movement>,
}

impl ScriptedPolicy {
    pub fn new<I: IntoIterator<Item = Movement>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Policy for ScriptedPolicy {
    fn choose_one(&mut self, candidates: &[Movement]) -> Option<Movement> {
        if candidates.is_empty() {
            return None;
        }
        self.script.pop_front().or_else(|| candidates.first().copied())
    }
}
