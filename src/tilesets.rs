use crate::{Error, Tile};

/// These languages are supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English
    EN,
    /// Dutch
    NL,
}

/// letter, points
type TileInfo = (char, u32);

#[rustfmt::skip]
const EN: &[TileInfo] = &[
    ('a', 1), ('b', 4), ('c', 4), ('d', 2), ('e', 1), ('f', 4), ('g', 3), ('h', 4), ('i', 1),
    ('j', 10), ('k', 5), ('l', 1), ('m', 3), ('n', 1), ('o', 1), ('p', 4), ('q', 10), ('r', 1),
    ('s', 1), ('t', 1), ('u', 2), ('v', 4), ('w', 4), ('x', 8), ('y', 4), ('z', 10),
];

#[rustfmt::skip]
const NL: &[TileInfo] = &[
    ('a', 1), ('b', 4), ('c', 5), ('d', 2), ('e', 1), ('f', 4), ('g', 3), ('h', 4), ('i', 2),
    ('j', 4), ('k', 3), ('l', 3), ('m', 3), ('n', 1), ('o', 1), ('p', 4), ('q', 10), ('r', 2),
    ('s', 2), ('t', 2), ('u', 2), ('v', 4), ('w', 5), ('x', 8), ('y', 8), ('z', 5),
];

/// Point values of the letters for a supported language. The values are specified on the
/// [Wordfeud.com website](https://wordfeud.com/wf/help/)
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    tiles: &'static [TileInfo],
}

impl TileSet {
    /// Return a new `TileSet` for language.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::EN => EN,
            Language::NL => NL,
        };
        TileSet { language, tiles }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the points for `letter` (case insensitive), or None if not in the tileset
    pub fn points(&self, letter: char) -> Option<u32> {
        let letter = letter.to_lowercase().next()?;
        self.tiles
            .iter()
            .find(|&&(l, _)| l == letter)
            .map(|&(_, points)| points)
    }

    /// Create a speculative tile for `letter`, stored in lowercase.
    /// ## Errors
    /// If `letter` is not in the tileset.
    pub fn tile(&self, letter: char) -> Result<Tile, Error> {
        let points = self.points(letter).ok_or(Error::InvalidLetter(letter))?;
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        Ok(Tile::new(letter, points))
    }

    /// Create speculative tiles for every letter in `word`.
    /// ## Errors
    /// If one of the letters is not in the tileset.
    pub fn tiles(&self, word: &str) -> Result<Vec<Tile>, Error> {
        word.chars().map(|letter| self.tile(letter)).collect()
    }
}
