use super::tile::Tile;
use crate::grid::{Multiplier, Square};

/// Content of a square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Empty,
    Occupied(Tile),
}

impl Default for Occupant {
    fn default() -> Self {
        Occupant::Empty
    }
}

/// A square on the board: its occupant, hazard lock and multipliers.
///
/// The hazard lock is independent of the occupant: it blocks new placements on the
/// square but says nothing about a tile that is already there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) occupant: Occupant,
    pub(crate) hazard_locked: bool,
    pub(crate) letter_multiplier: Multiplier,
    pub(crate) word_multiplier: Multiplier,
}

impl Cell {
    /// An empty cell without bonus
    pub const EMPTY: Self = Cell {
        occupant: Occupant::Empty,
        hazard_locked: false,
        letter_multiplier: Multiplier::Single,
        word_multiplier: Multiplier::Single,
    };

    /// Create an empty cell with the multipliers of a grid square.
    pub fn from_square(square: Square) -> Cell {
        Cell {
            letter_multiplier: square.letter_multiplier(),
            word_multiplier: square.word_multiplier(),
            ..Cell::EMPTY
        }
    }

    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// Check if the cell holds a tile, committed or speculative.
    pub fn has_tile(&self) -> bool {
        self.tile().is_some()
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        match self.occupant {
            Occupant::Empty => None,
            Occupant::Occupied(tile) => Some(tile),
        }
    }

    /// Get the contained tile if it was committed in an earlier move.
    pub fn committed_tile(&self) -> Option<Tile> {
        self.tile().filter(Tile::is_committed)
    }

    pub fn is_hazard_locked(&self) -> bool {
        self.hazard_locked
    }

    pub fn letter_multiplier(&self) -> Multiplier {
        self.letter_multiplier
    }

    pub fn word_multiplier(&self) -> Multiplier {
        self.word_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_square() {
        let cell = Cell::from_square(Square::WordBonus(Multiplier::Triple));
        assert_eq!(cell.word_multiplier(), Multiplier::Triple);
        assert_eq!(cell.letter_multiplier(), Multiplier::Single);
        assert!(!cell.has_tile());
    }

    #[test]
    fn test_committed_tile() {
        let mut cell = Cell::EMPTY;
        cell.occupant = Occupant::Occupied(Tile::new('x', 8));
        assert!(cell.has_tile());
        assert_eq!(cell.committed_tile(), None);
        cell.occupant = Occupant::Occupied(Tile::committed('x', 8));
        assert_eq!(cell.committed_tile(), Some(Tile::committed('x', 8)));
    }
}
