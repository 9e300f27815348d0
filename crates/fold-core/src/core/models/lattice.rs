use nalgebra::{Point2, Vector2};
use std::fmt;
use thiserror::Error;

/// A residue position on the 2-D integer lattice.
pub type LatticePoint = Point2<i32>;

/// One of the four nearest-neighbor directions on the square lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The unit lattice vector for this direction.
    pub fn offset(self) -> Vector2<i32> {
        match self {
            Direction::North => Vector2::new(0, 1),
            Direction::East => Vector2::new(1, 0),
            Direction::South => Vector2::new(0, -1),
            Direction::West => Vector2::new(-1, 0),
        }
    }

    /// The lattice point one unit away from `from` in this direction.
    pub fn step(self, from: LatticePoint) -> LatticePoint {
        from + self.offset()
    }

    /// This direction rotated clockwise by `quarter_turns` quarter turns.
    pub fn rotated(self, quarter_turns: u8) -> Direction {
        let index = match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        };
        Direction::ALL[(index + quarter_turns as usize) % 4]
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid direction character '{found}' at position {position} (expected N, E, S, or W)")]
pub struct ParsePathError {
    pub position: usize,
    pub found: char,
}

/// Parses a bond path such as `"EENW"` into lattice directions.
pub fn parse_path(s: &str) -> Result<Vec<Direction>, ParsePathError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| {
            Direction::from_char(c).ok_or(ParsePathError { position, found: c })
        })
        .collect()
}

/// The Manhattan (taxicab) distance between two lattice points.
///
/// Consecutive residues of a valid chain are at distance exactly 1.
pub fn manhattan_distance(a: LatticePoint, b: LatticePoint) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
