use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Decides which of the extracted words count for the game.
///
/// The move validator never asks a dictionary; it is consulted afterwards, see
/// [`Board::play`](crate::Board::play).
pub trait Dictionary {
    fn is_word_valid(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn is_word_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn is_word_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_word_valid(&self, word: &str) -> bool {
        (**self).is_word_valid(word)
    }
}
