//! # Core Module
//!
//! The stateless foundation of the library: lattice geometry, the residue and
//! chain data models with their structural invariants, and the pure
//! contact-energy function.
//!
//! Nothing in this module holds optimization state. The [`engine`](crate::engine)
//! layer builds the folding loop on top of these primitives.

pub mod energy;
pub mod models;
