//! # Workflows Module
//!
//! The public, user-facing layer. A workflow ties the engine and core
//! together to execute one complete procedure; [`fold`] runs a full greedy
//! folding simulation from a validated initial chain to a reported result.

pub mod fold;
