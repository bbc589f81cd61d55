//! Basic types for working with letter tiles and the board squares holding them.
mod cell;
mod tile;

pub use cell::{Cell, Occupant};
pub use tile::Tile;
