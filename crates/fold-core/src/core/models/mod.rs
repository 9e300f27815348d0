//! # Core Models Module
//!
//! Data structures representing an HP-model lattice protein.
//!
//! - [`lattice`] - Integer grid points and the four lattice directions
//! - [`residue`] - Hydrophobicity tags and the per-residue view
//! - [`chain`] - The ordered, self-avoiding, bond-connected residue chain

pub mod chain;
pub mod lattice;
pub mod residue;
