//! A trie restricted to a known, contiguous alphabet.
//!
//! Every node holds one child slot per letter of the alphabet, so a step
//! down the tree is an array index rather than a search. That costs memory
//! for sparse nodes. Words containing a character outside the alphabet are
//! rejected with [`TrieError::InvalidCharacter`] before the trie is touched.
//!
//! ```
//! use trie_kit::alphabet::{Alphabet, AlphabetTrie};
//! use trie_kit::error::TrieError;
//!
//! let mut trie = AlphabetTrie::new(Alphabet::LOWERCASE);
//! assert_eq!(trie.insert("apple"), Ok(true));
//! assert_eq!(trie.contains("apple"), Ok(true));
//! assert_eq!(
//!     trie.insert("Apple"),
//!     Err(TrieError::InvalidCharacter { character: 'A', position: 0 })
//! );
//! ```

use tracing::{debug, trace};

use crate::error::TrieError;

/// An inclusive, contiguous range of characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    /// `a` to `z`.
    pub const LOWERCASE: Alphabet = Alphabet {
        first: 'a',
        last: 'z',
    };

    /// `0` to `9`.
    pub const DIGITS: Alphabet = Alphabet {
        first: '0',
        last: '9',
    };

    pub fn new(first: char, last: char) -> Result<Self, TrieError> {
        if first > last {
            return Err(TrieError::InvalidAlphabet { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> char {
        self.first
    }

    pub fn last(&self) -> char {
        self.last
    }

    /// Number of child slots each node needs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.last as usize - self.first as usize + 1
    }

    /// Slot of `c`, if it belongs to the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        (self.first..=self.last)
            .contains(&c)
            .then(|| c as usize - self.first as usize)
    }

    fn indices(&self, word: &str) -> Result<Vec<usize>, TrieError> {
        word.chars()
            .enumerate()
            .map(|(position, character)| {
                self.index_of(character).ok_or_else(|| {
                    debug!(%character, position, "rejected character outside alphabet");
                    TrieError::InvalidCharacter {
                        character,
                        position,
                    }
                })
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Node {
    children: Box<[Option<Node>]>,
    terminated: bool,
}

impl Node {
    fn new(width: usize) -> Self {
        Self {
            children: (0..width).map(|_| None).collect(),
            terminated: false,
        }
    }

    fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }
}

/// A trie of words over a fixed [`Alphabet`].
#[derive(Clone, Debug, PartialEq)]
pub struct AlphabetTrie {
    alphabet: Alphabet,
    root: Node,
    count: usize,
}

impl AlphabetTrie {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            root: Node::new(alphabet.len()),
            count: 0,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert `word`. Returns true if it was not already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        let indices = self.alphabet.indices(word)?;
        let width = self.alphabet.len();
        let mut node = &mut self.root;
        for idx in indices {
            node = node.children[idx].get_or_insert_with(|| Node::new(width));
        }
        if node.terminated {
            return Ok(false);
        }
        node.terminated = true;
        self.count += 1;
        trace!(word, "inserted word");
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> Result<bool, TrieError> {
        let indices = self.alphabet.indices(word)?;
        Ok(self.find_node(&indices).map_or(false, |n| n.terminated))
    }

    pub fn contains_prefix(&self, prefix: &str) -> Result<bool, TrieError> {
        let indices = self.alphabet.indices(prefix)?;
        Ok(self.find_node(&indices).is_some())
    }

    /// Remove `word`. Returns true if it was present.
    pub fn remove(&mut self, word: &str) -> Result<bool, TrieError> {
        let indices = self.alphabet.indices(word)?;

        let mut node = &self.root;
        let mut cut = 0;
        for (depth, &idx) in indices.iter().enumerate() {
            if node.terminated || node.child_count() > 1 {
                cut = depth;
            }
            node = match node.children[idx].as_ref() {
                Some(child) => child,
                None => return Ok(false),
            };
        }
        if !node.terminated {
            return Ok(false);
        }
        let prune = !indices.is_empty() && node.child_count() == 0;

        // When pruning, the terminal node goes away with the detached branch.
        let stop = if prune { cut } else { indices.len() };
        let mut node = &mut self.root;
        for &idx in &indices[..stop] {
            node = match node.children[idx].as_mut() {
                Some(child) => child,
                None => return Ok(false),
            };
        }
        if prune {
            node.children[indices[cut]] = None;
            trace!(word, cut, "pruned word");
        } else {
            node.terminated = false;
        }
        self.count -= 1;
        Ok(true)
    }

    fn find_node(&self, indices: &[usize]) -> Option<&Node> {
        let mut node = &self.root;
        for &idx in indices {
            node = node.children[idx].as_ref()?;
        }
        Some(node)
    }
}
