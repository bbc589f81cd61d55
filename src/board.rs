use crate::grid::{Grid, Multiplier};
use crate::tiles::{Cell, Occupant, Tile};
use crate::tilesets::{Language, TileSet};
use crate::validate::{Placement, PlacementSet};
use crate::{Axis, Error, Pos};
use std::convert::TryFrom;
use std::fmt;

/// Read access to the cells of a board.
///
/// The move validator, word extractor and score calculator only see a board
/// through this trait, and never modify it.
pub trait BoardGrid {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// The square that the first move of a game must cover.
    fn center(&self) -> Pos;

    /// Return the cell at `pos`, or None if outside the board.
    fn cell_at(&self, pos: Pos) -> Option<&Cell>;

    /// Return the tile at `pos`, or None for an empty cell or a position outside the board.
    fn tile_at(&self, pos: Pos) -> Option<Tile> {
        self.cell_at(pos).and_then(Cell::tile)
    }

    /// Check if cell at `pos` holds a tile, committed or speculative.
    fn is_occupied(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_some()
    }

    /// True if no cell holds a committed tile yet.
    fn is_first_move(&self) -> bool {
        let (rows, cols) = (self.rows(), self.cols());
        !(0..rows)
            .flat_map(|row| (0..cols).map(move |col| Pos::new(row, col)))
            .any(|pos| self.cell_at(pos).and_then(Cell::committed_tile).is_some())
    }
}

/// Display the board state as one line per row.
/// Empty squares show as ".", locked empty squares as "#".
/// Committed tiles are lowercase, speculative tiles uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .chunks(self.cols())
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.occupant() {
                        Occupant::Occupied(tile) => tile.to_string(),
                        Occupant::Empty if cell.is_hazard_locked() => String::from("#"),
                        Occupant::Empty => String::from("."),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Language::EN)
    }
}

/// Represents the state of a board.
/// * A grid of squares with possible letter/word bonus,
/// * The point values of the letters for the language used,
/// * The cells with their tiles, hazard locks and current multipliers.
///
/// Besides giving read access through [`BoardGrid`], the board is the placement
/// controller of a move: speculative tiles are written with [`place`](Board::place),
/// and either locked with [`commit`](Board::commit) or taken back with
/// [`rollback`](Board::rollback).
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    tileset: TileSet,
    cells: Vec<Cell>,
    /// Number of cells holding a committed tile.
    committed: usize,
}

impl BoardGrid for Board {
    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn center(&self) -> Pos {
        self.grid.start()
    }

    fn cell_at(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    fn is_first_move(&self) -> bool {
        self.committed == 0
    }
}

impl Board {
    /// Create a new empty board, with the default 15x15 grid.
    /// The [`language`](crate::Language) specifies the point values of the letters.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use lexigrid::{Board, BoardGrid, Language};
    ///
    /// let board = Board::new(Language::NL);
    /// assert!(board.is_first_move());
    ///```
    /// Additional builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_grid`](Board::with_grid)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    #[must_use]
    pub fn new(language: Language) -> Board {
        Board::from_parts(Grid::default(), TileSet::new(language))
    }

    fn from_parts(grid: Grid, tileset: TileSet) -> Board {
        let cells = Board::empty_cells(&grid);
        Board {
            grid,
            tileset,
            cells,
            committed: 0,
        }
    }

    fn empty_cells(grid: &Grid) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                cells.push(Cell::from_square(grid[Pos::new(row, col)]));
            }
        }
        cells
    }

    /// Use `grid` as board layout, and return the modified board.
    /// All cells are reset to the multipliers of the new grid; tiles and locks are removed.
    #[must_use]
    pub fn with_grid(self, grid: Grid) -> Board {
        Board::from_parts(grid, self.tileset)
    }

    /// Set board layout from string representation, see [`Grid::from_strings`].
    /// ## Errors
    /// If the grid cannot be parsed.
    pub fn with_grid_from_strings<S: AsRef<str>>(self, grid: &[S]) -> Result<Board, Error> {
        Ok(self.with_grid(Grid::from_strings(grid)?))
    }

    /// Set the committed tiles from a list of strings, one string per row and one
    /// character per column. `.` or ` ` is an empty cell, a letter is a committed tile.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains letters outside the tileset.
    ///
    /// ## Examples
    /// ```
    /// use lexigrid::{Board, BoardGrid, Error, Pos};
    /// let board = Board::default()
    ///     .with_grid_from_strings(&["-- -- --", "-- ss --", "-- -- --"])?
    ///     .with_state_from_strings(&["...", "cat", "..."])?;
    /// assert!(board.is_occupied(Pos::new(1, 2)));
    /// assert!(!board.is_first_move());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != self.rows() {
            return Err(Error::InvalidRowCount {
                found: rows.len(),
                expected: self.rows(),
            });
        }
        let mut occupants = Vec::with_capacity(self.cells.len());
        for row in rows {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != self.cols() {
                return Err(Error::InvalidRowLength(String::from(row), len, self.cols()));
            }
            for ch in row.chars() {
                let occupant = match ch {
                    '.' | ' ' => Occupant::Empty,
                    _ => Occupant::Occupied(self.tileset.tile(ch)?.into_committed()),
                };
                occupants.push(occupant);
            }
        }
        self.committed = occupants
            .iter()
            .filter(|occupant| **occupant != Occupant::Empty)
            .count();
        for (cell, occupant) in self.cells.iter_mut().zip(occupants) {
            cell.occupant = occupant;
        }
        Ok(())
    }

    /// Set board state from list of strings, see [`set_state_from_strings`](Board::set_state_from_strings).
    /// ## Errors
    /// If the list of strings cannot be parsed as board state.
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return tileset
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row < self.rows() && pos.col < self.cols() {
            Some(pos.row * self.cols() + pos.col)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: Pos) -> Result<&mut Cell, Error> {
        let i = self.index(pos).ok_or(Error::OutOfBounds { pos })?;
        Ok(&mut self.cells[i])
    }

    /// Create the placements to play `word` from `start` in direction `axis`.
    /// Letters of `word` that are already committed at their position are not included.
    /// ## Errors
    /// - If `word` contains letters outside the tileset.
    /// - If the word does not fit on the board.
    /// - If all letters are already on the board.
    /// ## Examples
    /// ```
    /// # use lexigrid::{Axis, Board, Error, Pos};
    /// let board = Board::default();
    /// let placements = board.placements_for_word("rust", Pos::new(7, 7), Axis::Horizontal)?;
    /// assert_eq!(placements.len(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn placements_for_word(
        &self,
        word: &str,
        start: Pos,
        axis: Axis,
    ) -> Result<PlacementSet, Error> {
        let mut placements = Vec::new();
        for (i, tile) in self.tileset.tiles(word)?.into_iter().enumerate() {
            let pos = start.with_along(axis, start.along(axis) + i);
            let cell = self.cell_at(pos).ok_or(Error::OutOfBounds { pos })?;
            match cell.committed_tile() {
                Some(on_board) if on_board.letter() == tile.letter() => {}
                _ => placements.push(Placement::new(tile, pos)),
            }
        }
        PlacementSet::try_from(placements)
    }

    /// Write the tiles of `placements` speculatively into the board.
    ///
    /// A cell that already holds a different committed tile keeps it; the validator
    /// reports that placement as an [`Overwrite`](crate::MoveError::Overwrite).
    /// Nothing is written if an error is returned.
    /// ## Errors
    /// - If a position is outside the board.
    /// - If a cell is hazard locked.
    /// - If a cell already holds a speculative tile.
    /// - If a cell already holds the same tile, committed. Such a tile is not placed
    ///   by the move; leave it out, as [`placements_for_word`](Board::placements_for_word) does.
    pub fn place(&mut self, placements: &PlacementSet) -> Result<(), Error> {
        for placement in placements.iter() {
            let pos = placement.pos();
            let cell = self.cell_at(pos).ok_or(Error::OutOfBounds { pos })?;
            if cell.is_hazard_locked() {
                return Err(Error::HazardLocked { pos });
            }
            if let Occupant::Occupied(tile) = cell.occupant() {
                if !tile.is_committed() {
                    return Err(Error::TileReplaceError { pos });
                }
                if tile.same_face(&placement.tile()) {
                    return Err(Error::AlreadyOnBoard { pos });
                }
            }
        }
        for placement in placements.iter() {
            let tile = placement.tile();
            let cell = self.cell_mut(placement.pos())?;
            if cell.occupant == Occupant::Empty {
                cell.occupant = Occupant::Occupied(Tile::new(tile.letter(), tile.points()));
            }
        }
        Ok(())
    }

    /// Lock the speculative tiles of `placements` into the board.
    /// Cells committed in earlier moves are left untouched.
    pub fn commit(&mut self, placements: &PlacementSet) {
        for placement in placements.iter() {
            if let Some(i) = self.index(placement.pos()) {
                if let Occupant::Occupied(tile) = self.cells[i].occupant {
                    if !tile.is_committed() {
                        self.cells[i].occupant = Occupant::Occupied(tile.into_committed());
                        self.committed += 1;
                    }
                }
            }
        }
    }

    /// Remove the speculative tiles of `placements` from the board, and return them
    /// so they can go back to the player.
    pub fn rollback(&mut self, placements: &PlacementSet) -> Vec<Tile> {
        let mut removed = Vec::new();
        for placement in placements.iter() {
            if let Ok(cell) = self.cell_mut(placement.pos()) {
                if let Occupant::Occupied(tile) = cell.occupant {
                    if !tile.is_committed() {
                        cell.occupant = Occupant::Empty;
                        removed.push(tile);
                    }
                }
            }
        }
        removed
    }

    /// Remove all tiles from the board. Locks and multipliers are kept.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = Occupant::Empty;
        }
        self.committed = 0;
    }

    /// Block or unblock placements on the cell at `pos`.
    /// ## Errors
    /// If `pos` is outside the board.
    pub fn set_hazard_lock(&mut self, pos: Pos, locked: bool) -> Result<(), Error> {
        self.cell_mut(pos)?.hazard_locked = locked;
        Ok(())
    }

    /// Temporarily replace the multipliers of the cell at `pos`.
    /// ## Errors
    /// If `pos` is outside the board.
    pub fn override_multipliers(
        &mut self,
        pos: Pos,
        letter: Multiplier,
        word: Multiplier,
    ) -> Result<(), Error> {
        let cell = self.cell_mut(pos)?;
        cell.letter_multiplier = letter;
        cell.word_multiplier = word;
        Ok(())
    }

    /// Restore the multipliers of all cells to the values of the grid.
    pub fn reset_multipliers(&mut self) {
        let grid = &self.grid;
        for (cell, base) in self.cells.iter_mut().zip(Board::empty_cells(grid)) {
            cell.letter_multiplier = base.letter_multiplier;
            cell.word_multiplier = base.word_multiplier;
        }
    }
}
