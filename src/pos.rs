use std::fmt;
use tinyvec::ArrayVec;

/// Row/column coordinate of a square on the board. `(0, 0)` is the top left square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

/// Direction in which a word is read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left to right, along a row.
    Horizontal,
    /// Top to bottom, along a column.
    Vertical,
}

impl Axis {
    /// The crossing axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Pos {
        Pos { row, col }
    }

    /// The coordinate that changes when moving along `axis`.
    pub fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// The coordinate that stays fixed when moving along `axis`.
    pub fn across(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.row,
            Axis::Vertical => self.col,
        }
    }

    /// Return the position at coordinate `i` along `axis`, keeping the other coordinate.
    pub fn with_along(self, axis: Axis, i: usize) -> Pos {
        match axis {
            Axis::Horizontal => Pos::new(self.row, i),
            Axis::Vertical => Pos::new(i, self.col),
        }
    }

    /// Step one square back along `axis`, or None at the top/left border.
    pub fn prev(self, axis: Axis) -> Option<Pos> {
        let i = self.along(axis).checked_sub(1)?;
        Some(self.with_along(axis, i))
    }

    /// Step one square forward along `axis`, or None past a board of `rows` x `cols`.
    pub fn next(self, axis: Axis, rows: usize, cols: usize) -> Option<Pos> {
        let pos = self.with_along(axis, self.along(axis) + 1);
        if pos.row < rows && pos.col < cols {
            Some(pos)
        } else {
            None
        }
    }

    /// The up to 4 orthogonal neighbours inside a board of `rows` x `cols`.
    pub fn neighbours(self, rows: usize, cols: usize) -> ArrayVec<[Pos; 4]> {
        let mut res = ArrayVec::new();
        for &axis in &[Axis::Horizontal, Axis::Vertical] {
            if let Some(pos) = self.prev(axis) {
                res.push(pos);
            }
            if let Some(pos) = self.next(axis, rows, cols) {
                res.push(pos);
            }
        }
        res
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
