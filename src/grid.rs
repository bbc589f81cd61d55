use crate::{Error, Pos};
use std::fmt;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3l -- -- -- 3w -- -- 2l",
    "-- 2l -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "-- -- -- 3l -- -- -- 2w",
    "3w -- -- -- 2w -- 2l --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- 2l -- -- --",
    "2l -- -- 2w -- -- -- ss",
];

/// Scoring factor of a letter or word bonus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::Single
    }
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }
}

/// A square of the board layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Square {
    NoBonus,
    Start,
    LetterBonus(Multiplier),
    WordBonus(Multiplier),
}

use Square::{LetterBonus, NoBonus, Start, WordBonus};

impl Square {
    pub fn letter_multiplier(self) -> Multiplier {
        match self {
            LetterBonus(m) => m,
            _ => Multiplier::Single,
        }
    }

    pub fn word_multiplier(self) -> Multiplier {
        match self {
            WordBonus(m) => m,
            _ => Multiplier::Single,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus | LetterBonus(Multiplier::Single) | WordBonus(Multiplier::Single) => {
                write!(f, "--")
            }
            Start => write!(f, "ss"),
            LetterBonus(m) => write!(f, "{}l", m.factor()),
            WordBonus(m) => write!(f, "{}w", m.factor()),
        }
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(Multiplier::Double)),
            "3l" => Ok(LetterBonus(Multiplier::Triple)),
            "2w" => Ok(WordBonus(Multiplier::Double)),
            "3w" => Ok(WordBonus(Multiplier::Triple)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// Board layout of `rows` x `cols` (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The "start" square must be used in the first move of a game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// Create the default wordfeud layout of 15x15 squares.
    /// ## Example
    /// ```
    /// # use lexigrid::{Grid, Pos};
    /// let grid = Grid::default();
    /// assert_eq!(grid.start(), Pos::new(7, 7));
    /// println!("{}", grid);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a grid of `rows` x `cols` squares without bonus, with the start
    /// square in the middle.
    /// ## Errors
    /// If `rows` or `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, Error> {
        let mut grid = Grid::empty(rows, cols)?;
        let center = Pos::new(rows / 2, cols / 2);
        grid[center] = Start;
        Ok(grid)
    }

    fn empty(rows: usize, cols: usize) -> Result<Grid, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            squares: vec![NoBonus; rows * cols],
        })
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut squares = vec![NoBonus; N * N];
        for (i, row) in qb.iter().enumerate() {
            for (j, s) in row.split(' ').enumerate() {
                // the quarter board is a constant that is known to parse
                let val = s.parse().unwrap_or(NoBonus);
                squares[i * N + j] = val;
                squares[(N - i - 1) * N + j] = val;
                squares[i * N + N - j - 1] = val;
                squares[(N - i - 1) * N + N - j - 1] = val;
            }
        }
        Grid {
            rows: N,
            cols: N,
            squares,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the square at `pos`, or None if outside the grid.
    pub fn get(&self, pos: Pos) -> Option<Square> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self[pos])
        } else {
            None
        }
    }

    /// The start square: the first square marked `ss`, or the geometric center
    /// when the layout marks none.
    pub fn start(&self) -> Pos {
        self.squares
            .iter()
            .position(|&square| square == Start)
            .map_or(Pos::new(self.rows / 2, self.cols / 2), |i| {
                Pos::new(i / self.cols, i % self.cols)
            })
    }

    /// Get grid squares as a vec of strings, one per row
    pub fn to_strings(&self) -> Vec<String> {
        self.squares
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(Square::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Each row consists of the squares joined by spaces, and all rows must have the same length.
    ///
    /// ## Errors
    /// If `grid` has no rows, the rows have different lengths, or elements can not be parsed as a `Square`.
    /// ## Examples
    /// ```
    /// # use lexigrid::{Grid, Error, Pos};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 2l",
    ///     "-- ss --",
    ///     "2l -- 3w",
    /// ])?;
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.start(), Pos::new(1, 1));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let cols = grid
            .first()
            .map_or(0, |row| row.as_ref().split(' ').count());
        let mut board = Grid::empty(grid.len(), cols)?;
        for (i, row) in grid.iter().enumerate() {
            let row: Vec<&str> = row.as_ref().split(' ').collect();
            if row.len() != cols {
                return Err(Error::InvalidRowLength(row.join(" "), row.len(), cols));
            }
            for (j, &square) in row.iter().enumerate() {
                board[Pos::new(i, j)] = square.parse()?;
            }
        }
        Ok(board)
    }
}

impl std::ops::Index<Pos> for Grid {
    type Output = Square;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.squares[pos.row * self.cols + pos.col]
    }
}

impl std::ops::IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.squares[pos.row * self.cols + pos.col]
    }
}

#[cfg(test)]
mod tests {
    pub use super::*;

    #[test]
    fn test_grid_from_array() -> Result<(), Error> {
        let grid = Grid::default();
        let grid_as_strings = grid.to_strings();
        assert_eq!(grid_as_strings.len(), 15);
        assert_eq!(Grid::from_strings(&grid_as_strings)?, grid);
        Ok(())
    }

    #[test]
    fn test_default_layout() {
        let grid = Grid::default();
        assert_eq!(grid[Pos::new(0, 0)], LetterBonus(Multiplier::Triple));
        assert_eq!(grid[Pos::new(14, 10)], WordBonus(Multiplier::Triple));
        assert_eq!(grid[Pos::new(7, 7)], Start);
        assert_eq!(grid.get(Pos::new(15, 0)), None);
    }

    #[test]
    fn test_new() -> Result<(), Error> {
        let grid = Grid::new(5, 9)?;
        assert_eq!(grid.start(), Pos::new(2, 4));
        assert!(Grid::new(0, 9).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Grid::from_strings(&["-- xx"]),
            Err(Error::GridParseError(s)) if s == "xx"
        ));
        assert!(matches!(
            Grid::from_strings(&["-- --", "--"]),
            Err(Error::InvalidRowLength(_, 1, 2))
        ));
        let empty: &[&str] = &[];
        assert!(Grid::from_strings(empty).is_err());
    }
}
