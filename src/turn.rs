//! Playing a move: placing the tiles, validating, consulting the dictionary, scoring,
//! and committing or rolling back.
use crate::score::score_all;
use crate::validate::{validate, PlacementSet};
use crate::words::WordSpan;
use crate::{Board, Dictionary, Error, MoveError};
use thiserror::Error;
use tracing::debug;

/// A word formed by a move, with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredWord {
    pub span: WordSpan,
    pub score: u32,
}

/// Result of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Played {
    /// The words accepted by the dictionary, in board order.
    pub words: Vec<ScoredWord>,
    /// The spans the dictionary did not accept. They are not scored.
    pub rejected: Vec<WordSpan>,
    /// Sum of the scores of `words`, saturating at `u32::MAX`.
    pub score: u32,
}

#[derive(Error, Debug)]
/// Reasons a move was not played. The board is left as it was before the move.
pub enum PlayError {
    /// The tiles could not be written into the board
    #[error(transparent)]
    Placement(#[from] Error),

    /// The placement breaks a rule of the board geometry
    #[error(transparent)]
    Illegal(#[from] MoveError),

    /// None of the formed words is in the dictionary
    #[error("No valid word in {words:?}")]
    NoValidWord { words: Vec<String> },
}

fn scored(spans: Vec<WordSpan>, board: &Board) -> Vec<ScoredWord> {
    let scores = score_all(&spans, board);
    spans
        .into_iter()
        .zip(scores)
        .map(|(span, score)| ScoredWord { span, score })
        .collect()
}

impl Board {
    /// Calculate the words and scores a move would give, without playing it.
    /// The board is unchanged afterwards, so repeated calls give the same result.
    /// ## Errors
    /// If the tiles cannot be placed, or the placement is illegal.
    /// ## Examples
    /// ```
    /// # use lexigrid::{Axis, Board, Pos, PlayError};
    /// let mut board = Board::default();
    /// let placements = board.placements_for_word("wordfeud", Pos::new(7, 7), Axis::Horizontal)?;
    /// let words = board.evaluate(&placements)?;
    /// assert_eq!(words[0].span.word(), "wordfeud");
    /// // the f is on a 2x word bonus, the last d on a 2x letter bonus
    /// assert_eq!(words[0].score, 38);
    /// # Ok::<(), PlayError>(())
    /// ```
    pub fn evaluate(&mut self, placements: &PlacementSet) -> Result<Vec<ScoredWord>, PlayError> {
        self.place(placements)?;
        let words = match validate(placements, &*self) {
            Ok(spans) => Ok(scored(spans, self)),
            Err(err) => Err(err),
        };
        self.rollback(placements);
        Ok(words?)
    }

    /// Play a move: write the tiles, check the placement, keep the words accepted by
    /// `dictionary`, score them, and lock the tiles into the board.
    ///
    /// Spans the dictionary rejects are returned unscored in [`Played::rejected`]; the
    /// move fails only if no span is accepted. On failure the placed tiles are removed again.
    /// ## Errors
    /// If the tiles cannot be placed, the placement is illegal, or no word is accepted.
    /// ## Examples
    /// ```
    /// # use lexigrid::{Axis, Board, Pos, PlayError};
    /// use std::collections::HashSet;
    /// let dictionary: HashSet<String> = ["cat", "cats"].iter().map(|s| s.to_string()).collect();
    /// let mut board = Board::default();
    /// let placements = board.placements_for_word("cat", Pos::new(7, 6), Axis::Horizontal)?;
    /// assert_eq!(board.play(&placements, &dictionary)?.score, 6);
    /// let placements = board.placements_for_word("cats", Pos::new(7, 6), Axis::Horizontal)?;
    /// assert_eq!(placements.len(), 1);
    /// assert_eq!(board.play(&placements, &dictionary)?.score, 7);
    /// # Ok::<(), PlayError>(())
    /// ```
    pub fn play<D: Dictionary + ?Sized>(
        &mut self,
        placements: &PlacementSet,
        dictionary: &D,
    ) -> Result<Played, PlayError> {
        self.place(placements)?;
        let spans = match validate(placements, &*self) {
            Ok(spans) => spans,
            Err(err) => {
                self.rollback(placements);
                return Err(err.into());
            }
        };
        let (accepted, rejected): (Vec<WordSpan>, Vec<WordSpan>) = spans
            .into_iter()
            .partition(|span| dictionary.is_word_valid(span.word()));
        if accepted.is_empty() {
            self.rollback(placements);
            let words = rejected
                .into_iter()
                .map(|span| String::from(span.word()))
                .collect::<Vec<_>>();
            debug!(?words, "no valid word, move rolled back");
            return Err(PlayError::NoValidWord { words });
        }
        let words = scored(accepted, self);
        let score = words
            .iter()
            .fold(0u32, |total, word| total.saturating_add(word.score));
        self.commit(placements);
        debug!(score, words = words.len(), "move committed");
        Ok(Played {
            words,
            rejected,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, BoardGrid, Grid, Placement, Pos, Tile};
    use std::collections::HashSet;

    type Result<T> = std::result::Result<T, PlayError>;

    fn dictionary(words: &[&str]) -> HashSet<String> {
        words.iter().map(|&word| String::from(word)).collect()
    }

    fn board() -> std::result::Result<Board, Error> {
        Board::default().with_grid(Grid::new(7, 7)?).with_state_from_strings(&[
            ".......", ".......", ".......", "..cat..", ".......", ".......", ".......",
        ])
    }

    #[test]
    fn test_play_commits() -> Result<()> {
        let mut board = board()?;
        let placements = board.placements_for_word("cats", Pos::new(3, 2), Axis::Horizontal)?;
        let played = board.play(&placements, &dictionary(&["cats"]))?;
        assert_eq!(played.score, 7);
        assert_eq!(played.words.len(), 1);
        assert_eq!(played.rejected.len(), 1);
        assert_eq!(played.rejected[0].word(), "s");
        assert_eq!(board.tile_at(Pos::new(3, 5)), Some(Tile::committed('s', 1)));
        Ok(())
    }

    #[test]
    fn test_play_illegal_rolls_back() -> Result<()> {
        let mut board = board()?;
        let placements = board.placements_for_word("ox", Pos::new(0, 0), Axis::Horizontal)?;
        let res = board.play(&placements, &dictionary(&["ox"]));
        assert!(matches!(
            res,
            Err(PlayError::Illegal(MoveError::NotConnectedToBoard))
        ));
        assert!(!board.is_occupied(Pos::new(0, 0)));
        Ok(())
    }

    #[test]
    fn test_play_no_valid_word() -> Result<()> {
        let mut board = board()?;
        let placements = board.placements_for_word("catz", Pos::new(3, 2), Axis::Horizontal)?;
        let res = board.play(&placements, &dictionary(&["cats"]));
        match res {
            Err(PlayError::NoValidWord { words }) => assert_eq!(words, vec!["catz", "z"]),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!board.is_occupied(Pos::new(3, 5)));
        Ok(())
    }

    #[test]
    fn test_play_hazard_locked() -> Result<()> {
        let mut board = board()?;
        board.set_hazard_lock(Pos::new(3, 5), true)?;
        let placements = board.placements_for_word("cats", Pos::new(3, 2), Axis::Horizontal)?;
        let res = board.play(&placements, &dictionary(&["cats"]));
        assert!(matches!(
            res,
            Err(PlayError::Placement(Error::HazardLocked { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_play_tile_already_on_board() -> Result<()> {
        let mut board = board()?;
        let before = board.to_string();
        let tile = Tile::new('a', 1);
        let placements = PlacementSet::new(vec![Placement::new(tile, Pos::new(3, 3))])?;
        let res = board.play(&placements, &dictionary(&["cat", "a"]));
        assert!(matches!(
            res,
            Err(PlayError::Placement(Error::AlreadyOnBoard { pos })) if pos == Pos::new(3, 3)
        ));
        assert_eq!(board.to_string(), before);
        Ok(())
    }

    #[test]
    fn test_tiles_on_board_or_returned() -> Result<()> {
        let mut board = board()?;
        let before = board.to_string();
        // "d" on the committed "a", "o" below it
        let placements = PlacementSet::new(vec![
            Placement::new(Tile::new('d', 2), Pos::new(3, 3)),
            Placement::new(Tile::new('o', 1), Pos::new(4, 3)),
        ])?;
        board.place(&placements)?;
        assert_eq!(board.rollback(&placements), vec![Tile::new('o', 1)]);
        assert_eq!(board.tile_at(Pos::new(3, 3)), Some(Tile::committed('a', 1)));
        let res = board.play(&placements, &dictionary(&["do", "o", "ao"]));
        assert!(matches!(
            res,
            Err(PlayError::Illegal(MoveError::Overwrite { pos })) if pos == Pos::new(3, 3)
        ));
        assert_eq!(board.to_string(), before);

        let placements = PlacementSet::new(vec![
            Placement::new(Tile::new('a', 1), Pos::new(4, 4)),
            Placement::new(Tile::new('x', 8), Pos::new(5, 4)),
        ])?;
        board.play(&placements, &dictionary(&["tax"]))?;
        for placement in &placements {
            let committed = placement.tile().into_committed();
            assert_eq!(board.tile_at(placement.pos()), Some(committed));
        }
        assert!(board.rollback(&placements).is_empty());
        Ok(())
    }

    #[test]
    fn test_long_word_on_word_bonuses() -> Result<()> {
        let row = vec!["3w"; 21].join(" ");
        let mut board = Board::default().with_grid_from_strings(&[row])?;
        let word = "a".repeat(21);
        let placements = board.placements_for_word(&word, Pos::new(0, 0), Axis::Horizontal)?;
        let played = board.play(&placements, &dictionary(&[word.as_str()]))?;
        assert_eq!(played.words.len(), 1);
        assert_eq!(played.score, u32::MAX);
        Ok(())
    }

    #[test]
    fn test_evaluate_is_idempotent() -> Result<()> {
        let mut board = board()?;
        let placements = board.placements_for_word("tax", Pos::new(3, 4), Axis::Vertical)?;
        let first = board.evaluate(&placements)?;
        let second = board.evaluate(&placements)?;
        assert_eq!(first, second);
        assert_eq!(first[0].span.word(), "tax");
        assert_eq!(first[0].score, 1 + 1 + 8);
        assert!(!board.is_occupied(Pos::new(4, 4)));
        Ok(())
    }

    #[test]
    fn test_duplicate_spans_count_twice() -> Result<()> {
        let mut board = Board::default().with_grid(Grid::new(7, 7)?);
        let placements = board.placements_for_word("a", Pos::new(3, 3), Axis::Horizontal)?;
        let played = board.play(&placements, &dictionary(&["a"]))?;
        assert_eq!(played.words.len(), 2);
        assert_eq!(played.score, 2);
        Ok(())
    }
}
