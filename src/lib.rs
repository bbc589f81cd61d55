//! Move validation and scoring for grid based word games.
//! <br>
//! This crate decides whether a set of letter tiles placed on a board forms a legal move,
//! which words the move forms, and what those words score on a board with letter and
//! word bonus squares.
//!
//! # How to use `lexigrid`
//! Start by creating a board, optionally with your own layout of bonus squares and with
//! tiles already on it. A move is a [`PlacementSet`]: the tiles and the cells they go to.
//! The move is written speculatively into the board, checked with [`validate`], and then
//! either committed or rolled back. [`Board::play`] does all of this in one step, using a
//! [`Dictionary`] to decide which of the formed words count.
//!
//! The crate does not contain a wordlist: any [`Dictionary`] implementation can be used.
//!
//! # Basic usage
//!  ```
//! # use lexigrid::{Axis, Board, Pos, PlayError};
//! use std::collections::HashSet;
//! let dictionary: HashSet<String> = ["rust", "rusts"].iter().map(|s| s.to_string()).collect();
//! let mut board = Board::default();
//! let placements = board.placements_for_word("rust", Pos::new(7, 7), Axis::Horizontal)?;
//! let played = board.play(&placements, &dictionary)?;
//! for word in &played.words {
//!     println!("{} {}", word.span, word.score);
//! }
//! println!("{}", board);
//! # Ok::<(), PlayError>(())
//! ```
//!
//! # Lower level
//! The same steps by hand, without dictionary:
//! ```
//! # use lexigrid::{score, validate, Axis, Board, Pos, PlayError};
//! let mut board = Board::default();
//! let placements = board.placements_for_word("rust", Pos::new(7, 7), Axis::Horizontal)?;
//! board.place(&placements)?;
//! match validate(&placements, &board) {
//!     Ok(spans) => {
//!         assert_eq!(spans[0].word(), "rust");
//!         assert_eq!(score(&spans[0], &board), 5);
//!         board.commit(&placements);
//!     }
//!     Err(_) => {
//!         board.rollback(&placements);
//!     }
//! }
//! # Ok::<(), PlayError>(())
//! ```
mod board;
mod dictionary;
mod error;
mod grid;
mod pos;
mod score;
mod tiles;
mod tilesets;
mod turn;
mod validate;
mod words;

pub use crate::board::{Board, BoardGrid};
pub use crate::dictionary::Dictionary;
pub use crate::error::{Error, MoveError};
pub use crate::grid::{Grid, Multiplier, Square};
pub use crate::pos::{Axis, Pos};
pub use crate::score::{score, score_all};
pub use crate::tiles::{Cell, Occupant, Tile};
pub use crate::tilesets::{Language, TileSet};
pub use crate::turn::{PlayError, Played, ScoredWord};
pub use crate::validate::{validate, Placement, PlacementSet};
pub use crate::words::{extract, WordSpan};
