use super::lattice::LatticePoint;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two residue classes of the HP model.
///
/// The tag is assigned at chain construction and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hydrophobicity {
    Hydrophobic,
    Polar,
}

impl Hydrophobicity {
    pub fn is_hydrophobic(self) -> bool {
        self == Hydrophobicity::Hydrophobic
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid hydrophobicity character (expected H or P)")]
pub struct ParseHydrophobicityError;

impl FromStr for Hydrophobicity {
    type Err = ParseHydrophobicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(Hydrophobicity::Hydrophobic),
            "P" | "p" => Ok(Hydrophobicity::Polar),
            _ => Err(ParseHydrophobicityError),
        }
    }
}

impl fmt::Display for Hydrophobicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Hydrophobicity::Hydrophobic => 'H',
                Hydrophobicity::Polar => 'P',
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid sequence character '{found}' at position {position} (expected H or P)")]
pub struct ParseSequenceError {
    pub position: usize,
    pub found: char,
}

/// Parses a residue sequence such as `"HPPHHP"` into hydrophobicity tags.
pub fn parse_sequence(s: &str) -> Result<Vec<Hydrophobicity>, ParseSequenceError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c.to_ascii_uppercase() {
            'H' => Ok(Hydrophobicity::Hydrophobic),
            'P' => Ok(Hydrophobicity::Polar),
            _ => Err(ParseSequenceError { position, found: c }),
        })
        .collect()
}

/// A read-only view of one residue of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residue {
    /// Index of the residue along the chain, `0..N-1`.
    pub index: usize,
    pub hydrophobicity: Hydrophobicity,
    pub position: LatticePoint,
}
