//! Child mapping shared by the node based tries.
//!
//! Entries are kept sorted by atom so that lookups are a binary search and
//! iteration visits children in ascending order.

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::trie::TrieAtom;

/// Maps an atom to the child node which owns it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Children<A, N> {
    entries: Vec<(A, N)>,
}

impl<A, N> Default for Children<A, N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A: TrieAtom, N> Children<A, N> {
    /// Index of `atom` if present, otherwise the slot where it belongs.
    pub(crate) fn position(&self, atom: &A) -> Result<usize, usize> {
        self.entries.binary_search_by(|(a, _)| a.cmp(atom))
    }

    pub(crate) fn get(&self, atom: &A) -> Option<&N> {
        self.position(atom).ok().map(|idx| &self.entries[idx].1)
    }

    pub(crate) fn get_mut(&mut self, atom: &A) -> Option<&mut N> {
        match self.position(atom) {
            Ok(idx) => Some(&mut self.entries[idx].1),
            Err(_) => None,
        }
    }

    pub(crate) fn at(&self, idx: usize) -> &N {
        &self.entries[idx].1
    }

    pub(crate) fn at_mut(&mut self, idx: usize) -> &mut N {
        &mut self.entries[idx].1
    }

    /// Insert at a slot previously returned as `Err` by [`Children::position`].
    pub(crate) fn insert_at(&mut self, idx: usize, atom: A, node: N) -> &mut N {
        self.entries.insert(idx, (atom, node));
        &mut self.entries[idx].1
    }

    pub(crate) fn insert(&mut self, atom: A, node: N) -> Option<N> {
        match self.position(&atom) {
            Ok(idx) => Some(std::mem::replace(&mut self.entries[idx].1, node)),
            Err(idx) => {
                self.entries.insert(idx, (atom, node));
                None
            }
        }
    }

    pub(crate) fn remove(&mut self, atom: &A) -> Option<N> {
        self.position(atom)
            .ok()
            .map(|idx| self.entries.remove(idx).1)
    }

    /// Detach the single child, if there is exactly one.
    pub(crate) fn take_only(&mut self) -> Option<(A, N)> {
        if self.entries.len() == 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, (A, N)> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A, N> IntoIterator for Children<A, N> {
    type Item = (A, N);
    type IntoIter = std::vec::IntoIter<(A, N)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_entries_sorted() {
        let mut children: Children<char, usize> = Children::default();
        for (i, c) in "zebra".chars().enumerate() {
            children.insert(c, i);
        }
        let atoms: String = children.iter().map(|(a, _)| *a).collect();
        assert_eq!("aberz", atoms);
    }

    #[test]
    fn it_replaces_existing_entry() {
        let mut children: Children<char, usize> = Children::default();
        assert_eq!(children.insert('a', 1), None);
        assert_eq!(children.insert('a', 2), Some(1));
        assert_eq!(children.len(), 1);
        assert_eq!(children.get(&'a'), Some(&2));
    }

    #[test]
    fn it_inserts_at_reported_slot() {
        let mut children: Children<char, usize> = Children::default();
        children.insert('a', 0);
        children.insert('c', 2);
        let slot = children.position(&'b').unwrap_err();
        *children.insert_at(slot, 'b', 0) += 1;
        assert_eq!(children.at(1), &1);
        assert_eq!(children.position(&'c'), Ok(2));
    }

    #[test]
    fn it_removes_and_takes_only_child() {
        let mut children: Children<char, usize> = Children::default();
        children.insert('x', 1);
        children.insert('y', 2);
        assert!(children.take_only().is_none());
        assert_eq!(children.remove(&'x'), Some(1));
        assert_eq!(children.remove(&'x'), None);
        assert_eq!(children.take_only(), Some(('y', 2)));
        assert!(children.is_empty());
    }
}
