//! # Energy Module
//!
//! The pure HP-model contact-energy function.
//!
//! The energy of a conformation is the number of unfavorable contacts summed
//! over all hydrophobic residues: for each H residue, each of its four
//! lattice-adjacent cells scores 1 unless it is occupied by another
//! hydrophobic residue. A polar neighbor counts as unfavorable whether or not
//! it is sequence-bonded to the residue under examination, and an empty cell
//! counts as contact with water.

use super::models::lattice::{Direction, LatticePoint};
use super::models::residue::Hydrophobicity;
use std::collections::HashMap;

/// Counts the unfavorable contacts of a conformation.
///
/// Pure and deterministic: no inputs are mutated and equal inputs always
/// yield equal counts. The conformation is assumed to be bond-valid and
/// self-avoiding; that precondition is the caller's contract, not checked
/// here.
///
/// # Panics
///
/// Panics if `positions` and `tags` differ in length. A mismatched candidate
/// is a programming error, never a recoverable condition.
pub fn unfavorable_contacts(positions: &[LatticePoint], tags: &[Hydrophobicity]) -> u32 {
    assert_eq!(
        positions.len(),
        tags.len(),
        "candidate position array does not match the chain's residue count"
    );

    let occupancy: HashMap<LatticePoint, usize> = positions
        .iter()
        .enumerate()
        .map(|(index, &position)| (position, index))
        .collect();

    let mut energy = 0;
    for (index, tag) in tags.iter().enumerate() {
        if !tag.is_hydrophobic() {
            continue;
        }
        for dir in Direction::ALL {
            let cell = dir.step(positions[index]);
            match occupancy.get(&cell) {
                // Another hydrophobic residue: a favorable H-H contact.
                Some(&neighbor) if tags[neighbor].is_hydrophobic() => {}
                // A polar residue (bonded or not) or water.
                _ => energy += 1,
            }
        }
    }
    energy
}
