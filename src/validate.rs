use crate::words::{extract, WordSpan};
use crate::{Axis, BoardGrid, Cell, Error, MoveError, Pos, Tile};
use std::collections::HashSet;
use std::convert::TryFrom;
use std::slice::Iter;
use tracing::{debug, instrument, trace};

/// A tile proposed for a cell in the current move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    tile: Tile,
    pos: Pos,
}

impl Placement {
    pub fn new(tile: Tile, pos: Pos) -> Placement {
        Placement { tile, pos }
    }

    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
}

/// The non-empty list of placements of one move, each on a different cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlacementSet(Vec<Placement>);

impl PlacementSet {
    /// ## Errors
    /// If `placements` is empty or two placements target the same cell.
    pub fn new(placements: Vec<Placement>) -> Result<PlacementSet, Error> {
        if placements.is_empty() {
            return Err(Error::EmptyPlacement);
        }
        let mut seen = HashSet::new();
        for placement in &placements {
            if !seen.insert(placement.pos) {
                return Err(Error::DuplicatePlacement { pos: placement.pos });
            }
        }
        Ok(PlacementSet(placements))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A placement set is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Iter<Placement> {
        self.0.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.0.iter().map(Placement::pos)
    }
}

impl TryFrom<Vec<Placement>> for PlacementSet {
    type Error = Error;
    fn try_from(placements: Vec<Placement>) -> Result<Self, Self::Error> {
        PlacementSet::new(placements)
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Placement;
    type IntoIter = Iter<'a, Placement>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check that the `placements`, already written speculatively into `grid`, form a legal
/// move, and return all word spans formed by it.
///
/// The checks run in this order: overwrite of a committed tile, straight line,
/// gaps between the placed tiles, connection to the start square (first move) or to
/// the committed tiles (later moves). For a single tile the words in both directions
/// are collected; for more tiles the word along the line plus the crossing word
/// through every placed tile. The spans are ordered by their start cell, row by row.
///
/// Spans of a single letter are returned too, and a span that is reached twice is
/// returned twice. Deciding which spans are real words is up to a
/// [`Dictionary`](crate::Dictionary).
///
/// `grid` must not change between placing the tiles and calling this function.
/// ## Errors
/// The [`MoveError`] describing the first rule the placement breaks.
#[instrument(level = "debug", skip_all, fields(tiles = placements.len()))]
pub fn validate<G: BoardGrid + ?Sized>(
    placements: &PlacementSet,
    grid: &G,
) -> Result<Vec<WordSpan>, MoveError> {
    match find_words(placements, grid) {
        Ok(spans) => {
            trace!(words = spans.len(), "placement is legal");
            Ok(spans)
        }
        Err(err) => {
            debug!(%err, "placement rejected");
            Err(err)
        }
    }
}

fn find_words<G: BoardGrid + ?Sized>(
    placements: &PlacementSet,
    grid: &G,
) -> Result<Vec<WordSpan>, MoveError> {
    let first_move = grid.is_first_move();
    check_overwrite(placements, grid)?;
    let axis = line_axis(placements)?;

    let mut ordered = placements.positions().collect::<Vec<_>>();
    if let Some(axis) = axis {
        ordered.sort_by_key(|pos| pos.along(axis));
        check_gaps(&ordered, axis, grid)?;
    }
    check_connected(&ordered, first_move, grid)?;

    let mut spans = Vec::new();
    match axis {
        None => {
            spans.extend(extract(grid, ordered[0], Axis::Horizontal));
            spans.extend(extract(grid, ordered[0], Axis::Vertical));
        }
        Some(axis) => {
            spans.extend(extract(grid, ordered[0], axis));
            for &pos in &ordered {
                spans.extend(extract(grid, pos, axis.cross()));
            }
        }
    }
    if spans.is_empty() {
        return Err(MoveError::NoWordFormed);
    }
    // stable: equal spans stay in extraction order
    spans.sort_by_key(WordSpan::start);
    Ok(spans)
}

fn check_overwrite<G: BoardGrid + ?Sized>(
    placements: &PlacementSet,
    grid: &G,
) -> Result<(), MoveError> {
    for placement in placements {
        let on_board = grid.cell_at(placement.pos).and_then(Cell::committed_tile);
        if let Some(tile) = on_board {
            if !tile.same_face(&placement.tile) {
                return Err(MoveError::Overwrite { pos: placement.pos });
            }
        }
    }
    Ok(())
}

/// The shared axis of the placements, or None for a single tile.
fn line_axis(placements: &PlacementSet) -> Result<Option<Axis>, MoveError> {
    let positions = placements.positions().collect::<Vec<_>>();
    let first = positions[0];
    if positions.len() == 1 {
        Ok(None)
    } else if positions.iter().all(|pos| pos.row == first.row) {
        Ok(Some(Axis::Horizontal))
    } else if positions.iter().all(|pos| pos.col == first.col) {
        Ok(Some(Axis::Vertical))
    } else {
        Err(MoveError::NotStraightLine)
    }
}

/// Every cell between two consecutive placed tiles must hold a committed tile.
fn check_gaps<G: BoardGrid + ?Sized>(
    ordered: &[Pos],
    axis: Axis,
    grid: &G,
) -> Result<(), MoveError> {
    for pair in ordered.windows(2) {
        let (from, to) = (pair[0].along(axis), pair[1].along(axis));
        for i in from + 1..to {
            let pos = pair[0].with_along(axis, i);
            if grid.cell_at(pos).and_then(Cell::committed_tile).is_none() {
                return Err(MoveError::GapInsideWord { pos });
            }
        }
    }
    Ok(())
}

fn check_connected<G: BoardGrid + ?Sized>(
    ordered: &[Pos],
    first_move: bool,
    grid: &G,
) -> Result<(), MoveError> {
    if first_move {
        if ordered.contains(&grid.center()) {
            return Ok(());
        }
        return Err(MoveError::NotConnectedToCenter);
    }
    let (rows, cols) = (grid.rows(), grid.cols());
    let connected = ordered.iter().any(|pos| {
        pos.neighbours(rows, cols)
            .into_iter()
            .any(|n| grid.cell_at(n).and_then(Cell::committed_tile).is_some())
    });
    if connected {
        Ok(())
    } else {
        Err(MoveError::NotConnectedToBoard)
    }
}
