use crate::core::models::chain::Chain;
use crate::engine::config::FoldConfig;
use crate::engine::descent::{Descent, StepOutcome};
use crate::engine::error::EngineError;
use crate::engine::moves::{MoveGenerator, SegmentRegrowth};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{Solution, Termination};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument, warn};

/// The reported result of a folding run.
#[derive(Debug, Clone)]
pub struct FoldResult {
    /// The validated input conformation and its energy.
    pub initial: Solution,
    /// The final committed conformation; with strictly-improving acceptance
    /// this is also the best conformation seen.
    pub best: Solution,
    /// Valid-candidate evaluations performed.
    pub steps_completed: u64,
    /// Improving moves committed.
    pub accepted_moves: u64,
    /// Committed energy after each evaluated step.
    pub energy_trace: Vec<u32>,
    pub termination: Termination,
}

/// Runs a greedy folding simulation with the default move strategy.
pub fn run(
    initial: &Chain,
    config: &FoldConfig,
    reporter: &ProgressReporter,
) -> Result<FoldResult, EngineError> {
    run_with(initial, config, SegmentRegrowth, reporter)
}

/// Runs a greedy folding simulation with an injected move strategy.
#[instrument(skip_all, name = "fold_workflow")]
pub fn run_with<G: MoveGenerator>(
    initial: &Chain,
    config: &FoldConfig,
    generator: G,
    reporter: &ProgressReporter,
) -> Result<FoldResult, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Validation" });
    initial.validate()?;
    reporter.report(Progress::PhaseFinish);

    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut descent = Descent::new(initial.clone(), generator, rng, config.retry_limit);

    let initial_solution = Solution {
        energy: descent.energy(),
        chain: initial.clone(),
    };
    info!(
        residues = initial.len(),
        energy = initial_solution.energy,
        steps = config.steps,
        "starting greedy descent"
    );

    reporter.report(Progress::PhaseStart {
        name: "Greedy Descent",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.steps,
    });

    let mut energy_trace = Vec::with_capacity(config.steps as usize);
    let mut termination = Termination::StepBudgetExhausted;

    while descent.steps_taken() < config.steps {
        match descent.step() {
            StepOutcome::Accepted { energy } => {
                reporter.report(Progress::Improvement {
                    step: descent.steps_taken(),
                    energy,
                });
            }
            StepOutcome::Rejected { .. } => {}
            StepOutcome::Exhausted { attempts } => {
                warn!(
                    steps = descent.steps_taken(),
                    attempts, "no valid proposal within the retry cap, stopping early"
                );
                termination = Termination::ProposalsExhausted {
                    steps: descent.steps_taken(),
                    attempts,
                };
                break;
            }
        }
        energy_trace.push(descent.energy());
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let steps_completed = descent.steps_taken();
    let accepted_moves = descent.accepted_moves();
    let best = descent.into_solution();
    info!(
        initial_energy = initial_solution.energy,
        final_energy = best.energy,
        steps = steps_completed,
        accepted = accepted_moves,
        "descent finished"
    );

    Ok(FoldResult {
        initial: initial_solution,
        best,
        steps_completed,
        accepted_moves,
        energy_trace,
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::lattice::LatticePoint;
    use crate::engine::config::FoldConfigBuilder;
    use rand::RngCore;
    use std::sync::Mutex;

    struct AlwaysInvalid;

    impl MoveGenerator for AlwaysInvalid {
        fn propose(&self, _chain: &Chain, _rng: &mut dyn RngCore) -> Option<Vec<LatticePoint>> {
            None
        }
    }

    fn straight_chain(sequence: &str) -> Chain {
        Chain::extended(crate::core::models::residue::parse_sequence(sequence).unwrap()).unwrap()
    }

    fn config(steps: u64, seed: u64) -> FoldConfig {
        FoldConfigBuilder::new()
            .steps(steps)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn zero_step_budget_returns_the_initial_chain_unchanged() {
        let chain = straight_chain("HPPPPH");
        let result = run(&chain, &config(0, 1), &ProgressReporter::new()).unwrap();

        assert_eq!(result.best.chain, chain);
        assert_eq!(result.best.energy, result.initial.energy);
        assert_eq!(result.steps_completed, 0);
        assert_eq!(result.accepted_moves, 0);
        assert!(result.energy_trace.is_empty());
        assert_eq!(result.termination, Termination::StepBudgetExhausted);
    }

    #[test]
    fn committed_energy_trace_is_monotonically_non_increasing() {
        let chain = straight_chain("HPHPPHPHHP");
        let result = run(&chain, &config(500, 7), &ProgressReporter::new()).unwrap();

        assert!(result.energy_trace.windows(2).all(|w| w[1] <= w[0]));
        assert!(result.energy_trace[0] <= result.initial.energy);
        assert_eq!(result.energy_trace.last(), Some(&result.best.energy));
        assert!(result.best.energy <= result.initial.energy);
        assert!(result.best.chain.validate().is_ok());
    }

    #[test]
    fn runs_are_reproducible_under_a_fixed_seed() {
        let chain = straight_chain("HPHPPHHP");
        let first = run(&chain, &config(300, 42), &ProgressReporter::new()).unwrap();
        let second = run(&chain, &config(300, 42), &ProgressReporter::new()).unwrap();

        assert_eq!(first.best.energy, second.best.energy);
        assert_eq!(first.best.chain, second.best.chain);
        assert_eq!(first.energy_trace, second.energy_trace);
    }

    #[test]
    fn proposal_exhaustion_is_surfaced_as_a_distinct_termination() {
        let chain = straight_chain("HPPH");
        let config = FoldConfigBuilder::new()
            .steps(50)
            .seed(3)
            .retry_limit(8)
            .build()
            .unwrap();
        let result = run_with(&chain, &config, AlwaysInvalid, &ProgressReporter::new()).unwrap();

        assert_eq!(
            result.termination,
            Termination::ProposalsExhausted {
                steps: 0,
                attempts: 8
            }
        );
        assert_eq!(result.steps_completed, 0);
        assert_eq!(result.best.chain, chain);
    }

    #[test]
    fn improvements_are_reported_with_step_and_energy() {
        let chain = straight_chain("HPPPPH");
        let events: Mutex<Vec<(u64, u32)>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Improvement { step, energy } = event {
                events.lock().unwrap().push((step, energy));
            }
        }));

        let result = run(&chain, &config(400, 11), &reporter).unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();

        assert_eq!(events.len() as u64, result.accepted_moves);
        if let Some(&(_, last_energy)) = events.last() {
            assert_eq!(last_energy, result.best.energy);
        }
        // Reported energies mirror the accept-only descent: strictly decreasing.
        assert!(events.windows(2).all(|w| w[1].1 < w[0].1));
    }

    #[test]
    fn snapshot_evaluation_after_the_run_matches_the_reported_energy() {
        let chain = straight_chain("HPHPPH");
        let result = run(&chain, &config(200, 5), &ProgressReporter::new()).unwrap();
        let recomputed = crate::core::energy::unfavorable_contacts(
            result.best.chain.positions(),
            result.best.chain.tags(),
        );
        assert_eq!(recomputed, result.best.energy);
    }
}
