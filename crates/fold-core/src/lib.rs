//! # hpfold
//!
//! A library for folding simplified 2-D lattice proteins in the HP model:
//! a chain of hydrophobic (H) and polar (P) residues confined to integer grid
//! points, driven toward low-energy conformations by greedy local search on
//! an unfavorable-contact count.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (lattice geometry, residues, the self-avoiding [`core::models::chain::Chain`])
//!   and the pure contact-energy function.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the
//!   optimization process. It includes the injectable move-generation strategy
//!   ([`engine::moves::MoveGenerator`]), the greedy-descent state machine
//!   ([`engine::descent::Descent`]), and the configuration, error, and
//!   progress-reporting plumbing around them.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute a complete
//!   folding run from a validated initial chain to a final reported energy.

pub mod core;
pub mod engine;
pub mod workflows;
