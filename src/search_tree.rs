//! A stateful, set-like wrapper around the persistent [`Tree`]. Where
//! the tree hands back a new version on every change, a [`SearchTree`]
//! holds a single root and swaps it for the new version on `insert` and
//! `remove`, giving the familiar mutate-in-place interface.
//!
//! # Examples
//!
//! ```
//! use treepq::SearchTree;
//!
//! let mut tree: SearchTree<i32> = vec![3, 1, 2].into_iter().collect();
//!
//! assert!(tree.contains(&2));
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//!
//! let values: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(values, vec![1, 3]);
//! ```

use std::cmp;
use std::iter::FromIterator;

use crate::tree::{Iter, Tree};

/// An ordered container of distinct values, backed by one root of the
/// persistent search tree. Inserting a value that is already present is
/// a no-op.
pub struct SearchTree<T> {
    root: Tree<T>,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a `SearchTree` is cheap: the roots share every node until one
/// of the copies diverges through `insert` or `remove`. No `T: Clone`
/// bound is needed.
impl<T> Clone for SearchTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

/// Wraps a tree produced by the core operations without re-inserting its
/// values one at a time.
impl<T> From<Tree<T>> for SearchTree<T> {
    fn from(root: Tree<T>) -> Self {
        Self { root }
    }
}

/// Builds the tree by inserting the elements one at a time in sequence
/// order, so construction from `n` elements costs `O(n)` times the
/// average height: `O(n lg n)` expected for random input and `O(n^2)`
/// for sorted input, since nothing rebalances.
impl<T: cmp::Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = Self::new();
        for value in items {
            tree.insert(value);
        }
        tree
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> SearchTree<T> {
    /// Generates a new, empty `SearchTree`.
    pub fn new() -> Self {
        Self { root: Tree::new() }
    }

    /// Tests whether the given value is in this tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.root.contains(value)
    }

    /// Inserts the given value, replacing the held root with the root of
    /// the new tree version. Inserting an existing value changes
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepq::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.iter().count(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        self.root = self.root.insert(value);
    }

    /// Removes the given value if it is present.
    pub fn remove(&mut self, value: &T)
    where
        T: cmp::Ord,
    {
        self.root = self.root.remove(value);
    }

    /// Visits the stored values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.root.iter()
    }

    /// Returns true if this tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub(crate) fn root(&self) -> &Tree<T> {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Tree<T> {
        &mut self.root
    }
}
