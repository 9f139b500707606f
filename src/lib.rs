//! Provides prefix trees (tries) for storing keys composed of sequences of
//! atoms. A key may have an associated value.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait and values the
//! [`crate::trie::TrieValue`] trait. Keys are passed as anything which
//! implements `IntoIterator<Item = A>`, so the same trie can store the
//! chars of a String, grapheme clusters, words, or numbers.
//!
//! Every tree shares the same contract: insert, contains, contains_prefix
//! and remove. They differ in how they spend memory:
//!
//! * [`crate::trie::Trie`]: one node per atom.
//! * [`crate::radix::RadixTrie`]: chains of non-branching nodes are
//!   compressed into edges labelled with several atoms.
//! * [`crate::wildcard::WildcardTrie`]: a Trie which can also be searched
//!   with patterns containing a wildcard atom.
//! * [`crate::alphabet::AlphabetTrie`]: a trie of words over a fixed
//!   alphabet, using arrays of child slots and rejecting other characters.
//! * [`crate::shared::SharedTrie`]: a Trie behind a single reader/writer
//!   lock, for sharing between threads.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * radix : [`crate::radix`]
//! * wildcard : [`crate::wildcard`]
//! * iterator : [`crate::iterator`]
//!
//! Searching for or removing a key which was never inserted is not an
//! error: the answer is simply `false`.

#[cfg(feature = "serde")]
extern crate serde_crate;

mod children;

pub mod alphabet;
pub mod error;
pub mod iterator;
pub mod radix;
pub mod shared;
pub mod trie;
pub mod wildcard;
