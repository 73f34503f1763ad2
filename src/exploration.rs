use crate::agent::Agent;
use crate::environment::{Movement, Pos};
use crate::error::Result;
use crate::policy::Policy;
use crate::report::StepObserver;

/// One applied move, numbered from 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub movement: Movement,
    pub position: Pos,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub final_position: Pos,
    pub visited: usize,
}

/// Drives an [`Agent`] with a [`Policy`] until no legal move is left.
pub struct Exploration<'a, P: Policy> {
    agent: Agent<'a>,
    policy: P,
    steps: usize,
}

impl<'a, P: Policy> Exploration<'a, P> {
    pub fn new(agent: Agent<'a>, policy: P) -> Self {
        Self {
            agent,
            policy,
            steps: 0,
        }
    }

    pub fn agent(&self) -> &Agent<'a> {
        &self.agent
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Applies one policy-chosen move, or returns `None` in the terminal
    /// state.
    pub fn step(&mut self) -> Result<Option<Step>> {
        let candidates = self.agent.legal_moves();
        tracing::debug!("Legal moves at {}: {:?}", self.agent.position(), candidates);
        let movement = match self.policy.choose_one(&candidates) {
            Some(movement) => movement,
            None => return Ok(None),
        };
        let position = self.agent.apply(movement)?;
        self.steps += 1;
        Ok(Some(Step {
            index: self.steps,
            movement,
            position,
        }))
    }

    pub fn run<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<Summary> {
        while let Some(step) = self.step()? {
            observer.observe(&step, &self.agent)?;
        }
        let summary = self.summary();
        tracing::info!(
            "Exploration finished after {} steps at {}, {} cells visited",
            summary.steps,
            summary.final_position,
            summary.visited
        );
        Ok(summary)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            steps: self.steps,
            final_position: self.agent.position(),
            visited: self.agent.visited().len(),
        }
    }
}
