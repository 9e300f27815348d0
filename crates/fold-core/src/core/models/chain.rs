use super::lattice::{Direction, LatticePoint, manhattan_distance};
use super::residue::{Hydrophobicity, Residue};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChainError {
    #[error("A chain must contain at least one residue")]
    Empty,

    #[error("Tag and position counts differ: {tags} tags, {positions} positions")]
    LengthMismatch { tags: usize, positions: usize },

    #[error("Residues {index} and {next} are not lattice-adjacent", next = index + 1)]
    BrokenBond { index: usize },

    #[error("Residues {first} and {second} occupy the same lattice point")]
    Overlap { first: usize, second: usize },

    #[error("A path of {residues} residues takes {expected} directions, got {directions}", expected = residues - 1)]
    PathLength { residues: usize, directions: usize },
}

/// An ordered chain of residues on the 2-D lattice.
///
/// Two structural invariants hold for every committed `Chain`:
///
/// - **Bond invariant**: consecutive residues sit on lattice-adjacent points
///   (Manhattan distance exactly 1).
/// - **Self-avoidance invariant**: all residue positions are pairwise
///   distinct.
///
/// The hydrophobicity tags are fixed at construction; only the position array
/// changes over the chain's lifetime, and it is replaced wholesale when the
/// optimizer commits an accepted candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    tags: Vec<Hydrophobicity>,
    positions: Vec<LatticePoint>,
}

impl Chain {
    /// Creates a chain from tags and positions, checking both structural
    /// invariants.
    pub fn new(
        tags: Vec<Hydrophobicity>,
        positions: Vec<LatticePoint>,
    ) -> Result<Self, ChainError> {
        if tags.is_empty() {
            return Err(ChainError::Empty);
        }
        if tags.len() != positions.len() {
            return Err(ChainError::LengthMismatch {
                tags: tags.len(),
                positions: positions.len(),
            });
        }
        validate_geometry(&positions)?;
        Ok(Self { tags, positions })
    }

    /// Creates a straight chain along the +x axis starting at the origin.
    pub fn extended(tags: Vec<Hydrophobicity>) -> Result<Self, ChainError> {
        let positions = (0..tags.len() as i32)
            .map(|x| LatticePoint::new(x, 0))
            .collect();
        Self::new(tags, positions)
    }

    /// Creates a chain from a starting point at the origin and one lattice
    /// direction per bond.
    pub fn from_directions(
        tags: Vec<Hydrophobicity>,
        directions: &[Direction],
    ) -> Result<Self, ChainError> {
        if tags.is_empty() {
            return Err(ChainError::Empty);
        }
        if directions.len() != tags.len() - 1 {
            return Err(ChainError::PathLength {
                residues: tags.len(),
                directions: directions.len(),
            });
        }

        let mut positions = Vec::with_capacity(tags.len());
        let mut at = LatticePoint::origin();
        positions.push(at);
        for &dir in directions {
            at = dir.step(at);
            positions.push(at);
        }
        Self::new(tags, positions)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[Hydrophobicity] {
        &self.tags
    }

    pub fn positions(&self) -> &[LatticePoint] {
        &self.positions
    }

    pub fn residue(&self, index: usize) -> Option<Residue> {
        Some(Residue {
            index,
            hydrophobicity: *self.tags.get(index)?,
            position: *self.positions.get(index)?,
        })
    }

    pub fn residues(&self) -> impl Iterator<Item = Residue> + '_ {
        self.tags
            .iter()
            .zip(&self.positions)
            .enumerate()
            .map(|(index, (&hydrophobicity, &position))| Residue {
                index,
                hydrophobicity,
                position,
            })
    }

    /// Re-checks both structural invariants on the current position array.
    ///
    /// Construction already guarantees them; callers that receive a chain as
    /// a precondition can use this to fail fast.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.tags.is_empty() {
            return Err(ChainError::Empty);
        }
        if self.tags.len() != self.positions.len() {
            return Err(ChainError::LengthMismatch {
                tags: self.tags.len(),
                positions: self.positions.len(),
            });
        }
        validate_geometry(&self.positions)
    }

    /// Commits a validated candidate position array.
    ///
    /// The caller (the descent loop) is responsible for having checked the
    /// candidate's structural validity before committing it.
    pub(crate) fn replace_positions(&mut self, positions: Vec<LatticePoint>) {
        debug_assert_eq!(positions.len(), self.tags.len());
        debug_assert!(positions_are_distinct(&positions));
        self.positions = positions;
    }
}

fn validate_geometry(positions: &[LatticePoint]) -> Result<(), ChainError> {
    for (index, pair) in positions.windows(2).enumerate() {
        if manhattan_distance(pair[0], pair[1]) != 1 {
            return Err(ChainError::BrokenBond { index });
        }
    }

    let mut seen: HashMap<LatticePoint, usize> = HashMap::with_capacity(positions.len());
    for (index, &position) in positions.iter().enumerate() {
        if let Some(&first) = seen.get(&position) {
            return Err(ChainError::Overlap {
                first,
                second: index,
            });
        }
        seen.insert(position, index);
    }
    Ok(())
}

/// Checks the self-avoidance invariant alone, without the bond checks.
pub(crate) fn positions_are_distinct(positions: &[LatticePoint]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(positions.len());
    positions.iter().all(|&p| seen.insert(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::parse_sequence;

    fn tags(sequence: &str) -> Vec<Hydrophobicity> {
        parse_sequence(sequence).unwrap()
    }

    #[test]
    fn new_accepts_a_valid_bent_chain() {
        let positions = vec![
            LatticePoint::new(0, 0),
            LatticePoint::new(1, 0),
            LatticePoint::new(1, 1),
        ];
        let chain = Chain::new(tags("HPH"), positions.clone()).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.positions(), positions.as_slice());
        assert!(chain.validate().is_ok());
    }

    #[test]
    fn new_rejects_an_empty_chain() {
        assert_eq!(Chain::new(vec![], vec![]), Err(ChainError::Empty));
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let result = Chain::new(tags("HP"), vec![LatticePoint::origin()]);
        assert_eq!(
            result,
            Err(ChainError::LengthMismatch {
                tags: 2,
                positions: 1
            })
        );
    }

    #[test]
    fn new_rejects_a_diagonal_bond() {
        let positions = vec![LatticePoint::new(0, 0), LatticePoint::new(1, 1)];
        assert_eq!(
            Chain::new(tags("HP"), positions),
            Err(ChainError::BrokenBond { index: 0 })
        );
    }

    #[test]
    fn new_rejects_a_self_intersection() {
        // A square walk that returns to its starting point.
        let positions = vec![
            LatticePoint::new(0, 0),
            LatticePoint::new(1, 0),
            LatticePoint::new(1, 1),
            LatticePoint::new(0, 1),
            LatticePoint::new(0, 0),
        ];
        assert_eq!(
            Chain::new(tags("HPPPH"), positions),
            Err(ChainError::Overlap {
                first: 0,
                second: 4
            })
        );
    }

    #[test]
    fn extended_lays_residues_along_the_x_axis() {
        let chain = Chain::extended(tags("HPPH")).unwrap();
        let expected: Vec<_> = (0..4).map(|x| LatticePoint::new(x, 0)).collect();
        assert_eq!(chain.positions(), expected.as_slice());
    }

    #[test]
    fn from_directions_builds_the_walked_path() {
        let chain = Chain::from_directions(
            tags("HPPH"),
            &[Direction::East, Direction::North, Direction::West],
        )
        .unwrap();
        assert_eq!(
            chain.positions(),
            &[
                LatticePoint::new(0, 0),
                LatticePoint::new(1, 0),
                LatticePoint::new(1, 1),
                LatticePoint::new(0, 1),
            ]
        );
    }

    #[test]
    fn from_directions_rejects_a_wrong_direction_count() {
        let result = Chain::from_directions(tags("HPH"), &[Direction::East]);
        assert_eq!(
            result,
            Err(ChainError::PathLength {
                residues: 3,
                directions: 1
            })
        );
    }

    #[test]
    fn from_directions_rejects_a_path_that_revisits_a_point() {
        let result =
            Chain::from_directions(tags("HP"), &[Direction::East, Direction::West])
                .err();
        // Three residues would be needed for two directions.
        assert_eq!(
            result,
            Some(ChainError::PathLength {
                residues: 2,
                directions: 2
            })
        );

        let result = Chain::from_directions(
            tags("HPP"),
            &[Direction::East, Direction::West],
        );
        assert_eq!(
            result,
            Err(ChainError::Overlap {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn residues_iterator_yields_index_tag_and_position() {
        let chain = Chain::extended(tags("HP")).unwrap();
        let residues: Vec<_> = chain.residues().collect();
        assert_eq!(
            residues,
            vec![
                Residue {
                    index: 0,
                    hydrophobicity: Hydrophobicity::Hydrophobic,
                    position: LatticePoint::new(0, 0),
                },
                Residue {
                    index: 1,
                    hydrophobicity: Hydrophobicity::Polar,
                    position: LatticePoint::new(1, 0),
                },
            ]
        );
        assert_eq!(chain.residue(1), Some(residues[1]));
        assert_eq!(chain.residue(2), None);
    }

    #[test]
    fn single_residue_chain_is_valid() {
        let chain = Chain::new(tags("H"), vec![LatticePoint::origin()]).unwrap();
        assert_eq!(chain.len(), 1);
        assert!(chain.validate().is_ok());
    }

    #[test]
    fn positions_are_distinct_detects_duplicates() {
        let distinct = vec![LatticePoint::new(0, 0), LatticePoint::new(1, 0)];
        let duplicated = vec![LatticePoint::new(0, 0), LatticePoint::new(0, 0)];
        assert!(positions_are_distinct(&distinct));
        assert!(!positions_are_distinct(&duplicated));
    }
}
