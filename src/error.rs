//! Errors raised by tries which only accept a fixed alphabet.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    #[error("character {character:?} at position {position} is outside the alphabet")]
    InvalidCharacter { character: char, position: usize },

    #[error("alphabet range {first:?}..={last:?} is empty")]
    InvalidAlphabet { first: char, last: char },
}
