use super::moves::MoveGenerator;
use super::state::Solution;
use crate::core::energy::unfavorable_contacts;
use crate::core::models::chain::Chain;
use rand::RngCore;
use tracing::{debug, trace};

/// Outcome of one optimization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The candidate scored strictly below the committed energy and was
    /// committed.
    Accepted { energy: u32 },
    /// The candidate was structurally valid but not strictly improving; the
    /// committed chain is unchanged.
    Rejected { candidate_energy: u32 },
    /// No structurally valid candidate was found within the retry cap. No
    /// step was consumed.
    Exhausted { attempts: usize },
}

/// The greedy local-search state machine.
///
/// Owns the single committed chain and its cached energy for the duration of
/// a run. Each [`step`](Descent::step) performs one propose-evaluate-decide
/// cycle: structurally invalid proposals are retried without consuming the
/// step, a valid candidate always consumes it, and only strictly improving
/// candidates are committed. Between steps the committed chain can be
/// observed read-only; both structural invariants hold at every observation
/// point.
pub struct Descent<G, R> {
    chain: Chain,
    generator: G,
    rng: R,
    energy: u32,
    retry_limit: usize,
    steps_taken: u64,
    accepted_moves: u64,
}

impl<G: MoveGenerator, R: RngCore> Descent<G, R> {
    pub fn new(chain: Chain, generator: G, rng: R, retry_limit: usize) -> Self {
        let energy = unfavorable_contacts(chain.positions(), chain.tags());
        Self {
            chain,
            generator,
            rng,
            energy,
            retry_limit,
            steps_taken: 0,
            accepted_moves: 0,
        }
    }

    /// Runs one optimization step.
    pub fn step(&mut self) -> StepOutcome {
        for attempt in 1..=self.retry_limit {
            let Some(candidate) = self.generator.propose(&self.chain, &mut self.rng) else {
                trace!(attempt, "proposal structurally invalid, retrying");
                continue;
            };

            let candidate_energy = unfavorable_contacts(&candidate, self.chain.tags());
            self.steps_taken += 1;

            if candidate_energy < self.energy {
                self.chain.replace_positions(candidate);
                self.energy = candidate_energy;
                self.accepted_moves += 1;
                debug!(
                    step = self.steps_taken,
                    energy = candidate_energy,
                    "accepted improving move"
                );
                return StepOutcome::Accepted {
                    energy: candidate_energy,
                };
            }
            return StepOutcome::Rejected { candidate_energy };
        }

        StepOutcome::Exhausted {
            attempts: self.retry_limit,
        }
    }

    /// The committed chain. Safe to snapshot between steps.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The committed chain's cached energy.
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Valid-candidate evaluations performed so far.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Improving moves committed so far.
    pub fn accepted_moves(&self) -> u64 {
        self.accepted_moves
    }

    pub fn into_solution(self) -> Solution {
        Solution {
            energy: self.energy,
            chain: self.chain,
        }
    }
}
