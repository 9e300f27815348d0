use crate::core::models::chain::Chain;

/// A committed conformation together with its unfavorable-contact count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub energy: u32,
    pub chain: Chain,
}

/// Why a folding run ended.
///
/// Proposal exhaustion is a distinguishable outcome rather than silent
/// convergence: the run still reports its best-known solution, but the caller
/// can tell it did not spend the full step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every step in the budget was proposed and evaluated.
    StepBudgetExhausted,
    /// The move generator produced no structurally valid candidate within
    /// `attempts` tries; the run stopped early after `steps` completed steps.
    ProposalsExhausted { steps: u64, attempts: usize },
}
