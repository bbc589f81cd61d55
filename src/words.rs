use crate::{Axis, BoardGrid, Pos};
use std::cmp::Ordering;
use std::fmt;

/// A maximal run of occupied cells along one axis.
///
/// The orientation follows from `start` and `end`; a word of one letter has `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSpan {
    word: String,
    start: Pos,
    end: Pos,
}

impl WordSpan {
    /// ## Panics
    /// If `start` and `end` share neither row nor column.
    pub fn new(word: String, start: Pos, end: Pos) -> WordSpan {
        assert!(
            start.row == end.row || start.col == end.col,
            "word span {}..{} is not a straight line",
            start,
            end
        );
        WordSpan { word, start, end }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    /// Number of cells covered by the span.
    pub fn len(&self) -> usize {
        let rows = distance(self.start.row, self.end.row);
        let cols = distance(self.start.col, self.end.col);
        1 + rows.max(cols)
    }

    /// A span always covers at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The reading direction, or None for a single letter.
    pub fn axis(&self) -> Option<Axis> {
        if self.start.row != self.end.row {
            Some(Axis::Vertical)
        } else if self.start.col != self.end.col {
            Some(Axis::Horizontal)
        } else {
            None
        }
    }

    /// The covered cells, from `start` to `end` inclusive.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (start, end) = (self.start, self.end);
        (0..self.len()).map(move |i| {
            Pos::new(
                offset(start.row, end.row, i),
                offset(start.col, end.col, i),
            )
        })
    }
}

fn distance(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Step `i` squares from `from` in the direction of `to`.
fn offset(from: usize, to: usize, i: usize) -> usize {
    match to.cmp(&from) {
        Ordering::Greater => from + i,
        Ordering::Less => from - i,
        Ordering::Equal => from,
    }
}

impl fmt::Display for WordSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" {}..{}", self.word, self.start, self.end)
    }
}

/// Find the word through `start` along `axis`.
///
/// Walks contiguous occupied cells (committed or speculative) in both directions,
/// and returns the span from the first to the last of them. A lone occupied cell
/// gives a span of one letter. Returns None if `start` itself is empty.
/// ## Examples
/// ```
/// # use lexigrid::{extract, Axis, Board, Error, Pos};
/// let board = Board::default()
///     .with_grid_from_strings(&["-- -- -- --", "-- ss -- --"])?
///     .with_state_from_strings(&[".rat", "...."])?;
/// let span = extract(&board, Pos::new(0, 2), Axis::Horizontal).unwrap();
/// assert_eq!(span.word(), "rat");
/// assert_eq!(span.start(), Pos::new(0, 1));
/// assert_eq!(extract(&board, Pos::new(1, 2), Axis::Vertical), None);
/// # Ok::<(), Error>(())
/// ```
pub fn extract<G: BoardGrid + ?Sized>(grid: &G, start: Pos, axis: Axis) -> Option<WordSpan> {
    if !grid.is_occupied(start) {
        return None;
    }
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut first = start;
    while let Some(pos) = first.prev(axis).filter(|&pos| grid.is_occupied(pos)) {
        first = pos;
    }
    let mut last = start;
    while let Some(pos) = last
        .next(axis, rows, cols)
        .filter(|&pos| grid.is_occupied(pos))
    {
        last = pos;
    }
    let word = (first.along(axis)..=last.along(axis))
        .map(|i| {
            let pos = first.with_along(axis, i);
            grid.tile_at(pos)
                .unwrap_or_else(|| panic!("empty cell {} inside word walk", pos))
                .letter()
        })
        .collect::<String>();
    Some(WordSpan::new(word, first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Error, Grid, PlacementSet};

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "h......", //
        "e..dog.", //
        "y......", //
        ".......", //
        "...b...", //
        "...e...", //
        "...e...", //
    ];

    fn board() -> Result<Board> {
        Board::default()
            .with_grid(Grid::new(7, 7)?)
            .with_state_from_strings(TEST_STATE)
    }

    #[test]
    fn test_extract_both_directions() -> Result<()> {
        let board = board()?;
        for col in 3..6 {
            let span = extract(&board, Pos::new(1, col), Axis::Horizontal);
            assert_eq!(
                span,
                Some(WordSpan::new(String::from("dog"), Pos::new(1, 3), Pos::new(1, 5)))
            );
        }
        let span = extract(&board, Pos::new(5, 3), Axis::Vertical).unwrap();
        assert_eq!(span.word(), "bee");
        assert_eq!(span.axis(), Some(Axis::Vertical));
        assert_eq!((span.start(), span.end()), (Pos::new(4, 3), Pos::new(6, 3)));
        Ok(())
    }

    #[test]
    fn test_extract_at_border() -> Result<()> {
        let board = board()?;
        let span = extract(&board, Pos::new(0, 0), Axis::Vertical).unwrap();
        assert_eq!(span.word(), "hey");
        Ok(())
    }

    #[test]
    fn test_single_letter() -> Result<()> {
        let board = board()?;
        let span = extract(&board, Pos::new(1, 4), Axis::Vertical).unwrap();
        assert_eq!(span.word(), "o");
        assert_eq!(span.len(), 1);
        assert_eq!(span.axis(), None);
        assert_eq!(extract(&board, Pos::new(3, 3), Axis::Vertical), None);
        Ok(())
    }

    #[test]
    fn test_extract_includes_speculative() -> Result<()> {
        let mut board = board()?;
        let placements = board.placements_for_word("s", Pos::new(1, 6), Axis::Horizontal)?;
        board.place(&placements)?;
        let span = extract(&board, Pos::new(1, 6), Axis::Horizontal).unwrap();
        assert_eq!(span.word(), "dogs");
        Ok(())
    }

    #[test]
    fn test_extension_contains_previous_word() -> Result<()> {
        let mut board = board()?;
        let before = extract(&board, Pos::new(5, 3), Axis::Vertical).unwrap();
        let placements: PlacementSet =
            board.placements_for_word("n", Pos::new(3, 3), Axis::Vertical)?;
        board.place(&placements)?;
        let after = extract(&board, Pos::new(5, 3), Axis::Vertical).unwrap();
        assert_eq!(after.word(), "nbee");
        let offset = before.start().row - after.start().row;
        assert_eq!(&after.word()[offset..offset + before.len()], before.word());
        Ok(())
    }

    #[test]
    fn test_positions() {
        let span = WordSpan::new(String::from("bee"), Pos::new(4, 3), Pos::new(6, 3));
        let positions = span.positions().collect::<Vec<_>>();
        assert_eq!(positions, vec![Pos::new(4, 3), Pos::new(5, 3), Pos::new(6, 3)]);
        let reversed = WordSpan::new(String::from("ab"), Pos::new(0, 5), Pos::new(0, 4));
        assert_eq!(
            reversed.positions().collect::<Vec<_>>(),
            vec![Pos::new(0, 5), Pos::new(0, 4)]
        );
    }

    /// A grid that reports every cell as occupied but holds no tiles.
    struct Inconsistent(Board);

    impl BoardGrid for Inconsistent {
        fn rows(&self) -> usize {
            self.0.rows()
        }

        fn cols(&self) -> usize {
            self.0.cols()
        }

        fn center(&self) -> Pos {
            self.0.center()
        }

        fn cell_at(&self, pos: Pos) -> Option<&Cell> {
            self.0.cell_at(pos)
        }

        fn is_occupied(&self, pos: Pos) -> bool {
            pos.row < self.rows() && pos.col < self.cols()
        }
    }

    #[test]
    #[should_panic(expected = "empty cell (0, 0) inside word walk")]
    fn test_extract_inconsistent_grid() {
        let grid = Inconsistent(Board::default().with_grid(Grid::new(3, 3).unwrap()));
        extract(&grid, Pos::new(0, 1), Axis::Horizontal);
    }

    #[test]
    #[should_panic(expected = "is not a straight line")]
    fn test_diagonal_span() {
        WordSpan::new(String::from("ab"), Pos::new(0, 0), Pos::new(1, 1));
    }
}
