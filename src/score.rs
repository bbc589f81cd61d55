use crate::tiles::Occupant;
use crate::{BoardGrid, WordSpan};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

/// Calculate the score of the word covered by `span`.
///
/// Every letter counts its own points times the letter multiplier of its cell, and
/// the letter sum is multiplied once by the product of all word multipliers on the span.
/// The arithmetic saturates: a score that does not fit in a `u32` is `u32::MAX`.
/// ## Panics
/// If a cell of `span` is empty or outside the board: the span does not belong to
/// the current state of `grid`.
/// ## Examples
/// ```
/// # use lexigrid::{score, Board, Error, Pos, WordSpan};
/// let board = Board::default()
///     .with_grid_from_strings(&["-- -- --", "2l ss 3w"])?
///     .with_state_from_strings(&["...", "cat"])?;
/// let span = WordSpan::new(String::from("cat"), Pos::new(1, 0), Pos::new(1, 2));
/// // (2 x 4 + 1 + 1) x 3
/// assert_eq!(score(&span, &board), 30);
/// # Ok::<(), Error>(())
/// ```
pub fn score<G: BoardGrid + ?Sized>(span: &WordSpan, grid: &G) -> u32 {
    let mut letter_total: u32 = 0;
    let mut word_multiplier: u32 = 1;
    for pos in span.positions() {
        let cell = grid
            .cell_at(pos)
            .unwrap_or_else(|| panic!("word span {} leaves the board at {}", span, pos));
        let tile = match cell.occupant() {
            Occupant::Occupied(tile) => tile,
            Occupant::Empty => panic!("word span {} crosses empty cell {}", span, pos),
        };
        let letter_points = tile.points().saturating_mul(cell.letter_multiplier().factor());
        letter_total = letter_total.saturating_add(letter_points);
        word_multiplier = word_multiplier.saturating_mul(cell.word_multiplier().factor());
    }
    let points = letter_total.saturating_mul(word_multiplier);
    trace!(word = span.word(), points, "scored word");
    points
}

/// Calculate the score of each span, in the same order.
#[cfg(not(feature = "rayon"))]
pub fn score_all<G: BoardGrid + ?Sized>(spans: &[WordSpan], grid: &G) -> Vec<u32> {
    spans.iter().map(|span| score(span, grid)).collect()
}

/// Calculate the score of each span, in the same order.
#[cfg(feature = "rayon")]
pub fn score_all<G: BoardGrid + Sync + ?Sized>(spans: &[WordSpan], grid: &G) -> Vec<u32> {
    spans.par_iter().map(|span| score(span, grid)).collect()
}
