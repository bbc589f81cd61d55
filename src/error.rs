use crate::Pos;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned while building a board or writing tiles into it
pub enum Error {
    /// A grid needs at least one row and one column
    #[error("Invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Error parsing board state from strings
    #[error("Invalid number of rows {found} (expect {expected})")]
    InvalidRowCount { found: usize, expected: usize },

    /// Every row on the board needs the same number of cells
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Error parsing bonus square
    #[error("Invalid grid bonus square: \"{0}\"")]
    GridParseError(String),

    /// Letter is not part of the tileset
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// A move needs at least one tile
    #[error("No tiles placed")]
    EmptyPlacement,

    /// Two tiles of one move target the same cell
    #[error("Two tiles placed at {pos}")]
    DuplicatePlacement { pos: Pos },

    /// Attempt to place a tile outside the board
    #[error("Position {pos} is outside the board")]
    OutOfBounds { pos: Pos },

    /// Attempt to place a tile on a hazard locked cell
    #[error("Cell {pos} is locked")]
    HazardLocked { pos: Pos },

    /// Attempt to place a tile where a speculative tile is already waiting
    #[error("Attempt to replace tile at {pos}")]
    TileReplaceError { pos: Pos },

    /// Attempt to place the tile that is already committed at a cell
    #[error("Tile at {pos} is already on the board")]
    AlreadyOnBoard { pos: Pos },
}

/// Reasons a placement is geometrically illegal.
///
/// These are the expected outcome of an illegal move, not internal errors.
/// Validating the same unchanged input again gives the same error.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// A tile is placed on a cell holding a different committed tile
    #[error("Cell {pos} already holds a different tile")]
    Overwrite { pos: Pos },

    /// The tiles do not share a row or a column
    #[error("Tiles are not in a straight line")]
    NotStraightLine,

    /// An empty cell lies between two placed tiles
    #[error("Gap inside word at {pos}")]
    GapInsideWord { pos: Pos },

    /// The first move does not cover the start square
    #[error("First move must use the center square")]
    NotConnectedToCenter,

    /// No placed tile touches a tile already on the board
    #[error("Move is not connected to the tiles on the board")]
    NotConnectedToBoard,

    /// The placement does not form any word
    #[error("No word formed")]
    NoWordFormed,
}
