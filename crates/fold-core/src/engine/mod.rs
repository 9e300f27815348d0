//! # Engine Module
//!
//! The stateful optimization layer: everything that turns the stateless
//! models of [`core`](crate::core) into a running greedy-descent fold.
//!
//! - **Configuration** ([`config`]) - Step budget, proposal retry cap, RNG seed
//! - **Move Generation** ([`moves`]) - The injectable lattice-move strategy
//! - **Descent** ([`descent`]) - The propose/evaluate/decide state machine
//! - **State** ([`state`]) - Committed solutions and run-termination outcomes
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod descent;
pub mod error;
pub mod moves;
pub mod progress;
pub mod state;
