use crate::core::models::chain::{Chain, positions_are_distinct};
use crate::core::models::lattice::{Direction, LatticePoint};
use rand::{Rng, RngCore};

/// A strategy that proposes one randomized local deformation of a chain.
///
/// Implementations must keep every bond at Manhattan distance 1 and must
/// return `None` (with the source chain untouched) when no structurally
/// valid candidate was found this attempt. Candidates that violate
/// self-avoidance must be rejected rather than returned.
pub trait MoveGenerator {
    fn propose(&self, chain: &Chain, rng: &mut dyn RngCore) -> Option<Vec<LatticePoint>>;
}

/// Re-grows one arm of the chain in random lattice directions.
///
/// A pivot residue is chosen uniformly at random and the segment from the
/// pivot to the nearer chain end is rebuilt link by link: each successive
/// residue is placed one lattice step off its predecessor's new position,
/// starting from a random direction and rotating through all four before
/// declaring the placement a dead end.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentRegrowth;

impl MoveGenerator for SegmentRegrowth {
    fn propose(&self, chain: &Chain, rng: &mut dyn RngCore) -> Option<Vec<LatticePoint>> {
        let n = chain.len();
        let mut candidate = chain.positions().to_vec();
        let pivot = rng.gen_range(0..n);

        // Regrow toward whichever chain end is nearer to the pivot.
        let order: Vec<usize> = if pivot >= n / 2 {
            (pivot..n).collect()
        } else {
            (0..=pivot).rev().collect()
        };

        for pair in order.windows(2) {
            let (anchor, moved) = (pair[0], pair[1]);
            let spin = rng.gen_range(0..4u8);

            let mut placed = false;
            for turn in 0..4u8 {
                let dir = Direction::North.rotated(spin + turn);
                let cell = dir.step(candidate[anchor]);
                // The scan covers both not-yet-moved old positions and the
                // already re-grown part of the arm.
                if !candidate.contains(&cell) {
                    candidate[moved] = cell;
                    placed = true;
                    break;
                }
            }
            if !placed {
                return None;
            }
        }

        if !positions_are_distinct(&candidate) {
            return None;
        }
        Some(candidate)
    }
}
