use std::fmt;

/// A letter tile with its point value.
///
/// A tile is speculative (`committed == false`) while it is only placed for the
/// current move, and becomes committed once the move is locked into the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    letter: char,
    points: u32,
    committed: bool,
}

impl Tile {
    /// Create a new speculative tile.
    /// ## Example
    /// ```
    /// use lexigrid::Tile;
    /// let tile = Tile::new('q', 10);
    /// assert!(!tile.is_committed());
    /// ```
    pub fn new(letter: char, points: u32) -> Tile {
        Tile {
            letter,
            points,
            committed: false,
        }
    }

    /// Create a tile that is already locked into the board.
    pub fn committed(letter: char, points: u32) -> Tile {
        Tile {
            committed: true,
            ..Tile::new(letter, points)
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Return the committed version of this tile.
    pub fn into_committed(self) -> Tile {
        Tile {
            committed: true,
            ..self
        }
    }

    /// Check if both tiles show the same letter and value, regardless of commit state.
    pub fn same_face(&self, other: &Tile) -> bool {
        self.letter == other.letter && self.points == other.points
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.committed {
            write!(f, "{}", self.letter)
        } else {
            write!(f, "{}", self.letter.to_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit() {
        let tile = Tile::new('a', 1);
        let locked = tile.into_committed();
        assert!(locked.is_committed());
        assert_ne!(tile, locked);
        assert!(tile.same_face(&locked));
        assert!(!tile.same_face(&Tile::new('a', 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new('e', 1).to_string(), "E");
        assert_eq!(Tile::committed('e', 1).to_string(), "e");
    }
}
