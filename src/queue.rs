//! A priority queue derived from the [`SearchTree`]: because in-order
//! iteration of a search tree is ascending, the smallest value is simply
//! the leftmost node, and extracting it is a read followed by a removal.
//!
//! # Examples
//!
//! ```
//! use treepq::{PriorityQueue, QueueError};
//!
//! let mut queue: PriorityQueue<i32> = vec![3, 1, 2].into_iter().collect();
//!
//! assert_eq!(queue.min(), Ok(&1));
//! assert_eq!(queue.extract_min(), Ok(1));
//! assert_eq!(queue.extract_min(), Ok(2));
//! assert_eq!(queue.extract_min(), Ok(3));
//! assert_eq!(queue.extract_min(), Err(QueueError::Empty));
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;

use crate::search_tree::SearchTree;
use crate::tree::{Iter, Tree};

/// Error type for queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no values, so there is no minimum to read.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "the queue holds no values"),
        }
    }
}

impl std::error::Error for QueueError {}

/// A priority queue implemented using a search tree. It behaves exactly
/// like a [`SearchTree`] - every container operation is available and
/// delegates to one - with "read the minimum" and "extract the minimum"
/// layered on top.
pub struct PriorityQueue<T> {
    tree: SearchTree<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a `PriorityQueue` is cheap for the same reason cloning a
/// [`SearchTree`] is: the copies share nodes until they diverge.
impl<T> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

/// Wraps a tree produced by the core operations without re-inserting.
impl<T> From<Tree<T>> for PriorityQueue<T> {
    fn from(root: Tree<T>) -> Self {
        Self {
            tree: SearchTree::from(root),
        }
    }
}

impl<T: cmp::Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            tree: items.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PriorityQueue<T> {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self {
            tree: SearchTree::new(),
        }
    }

    /// Tests whether the given value is in this queue.
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.tree.contains(value)
    }

    /// Inserts the given value. Inserting an existing value changes
    /// nothing.
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        self.tree.insert(value);
    }

    /// Removes the given value if it is present.
    pub fn remove(&mut self, value: &T)
    where
        T: cmp::Ord,
    {
        self.tree.remove(value);
    }

    /// Visits the queued values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Returns true if this queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the smallest value, or [`QueueError::Empty`] if there is
    /// none.
    pub fn min(&self) -> Result<&T, QueueError> {
        self.tree.root().leftmost().ok_or(QueueError::Empty)
    }

    /// Removes the smallest value and returns it. Costs `O(height)` per
    /// call, so draining a queue of `n` values costs the same in total
    /// as constructing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepq::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<i32> = vec![2, 1].into_iter().collect();
    ///
    /// assert_eq!(queue.extract_min(), Ok(1));
    /// assert!(queue.extract_min().is_ok());
    /// assert!(queue.extract_min().is_err());
    /// ```
    pub fn extract_min(&mut self) -> Result<T, QueueError>
    where
        T: cmp::Ord + Clone,
    {
        let minimum = self.min()?.clone();
        self.tree.remove(&minimum);
        Ok(minimum)
    }

    pub(crate) fn root(&self) -> &Tree<T> {
        self.tree.root()
    }

    pub(crate) fn root_mut(&mut self) -> &mut Tree<T> {
        self.tree.root_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_of_empty_queue() {
        let queue: PriorityQueue<i32> = PriorityQueue::new();
        assert_eq!(queue.min(), Err(QueueError::Empty));
    }

    #[test]
    fn test_min_does_not_remove() {
        let queue: PriorityQueue<i32> = vec![2, 1, 3].into_iter().collect();

        assert_eq!(queue.min(), Ok(&1));
        assert_eq!(queue.min(), Ok(&1));
        assert_eq!(queue.iter().count(), 3);
    }

    #[test]
    fn test_drain_in_order() {
        let mut queue: PriorityQueue<i32> = vec![3, 1, 4, 1, 5].into_iter().collect();

        let mut drained = Vec::new();
        while let Ok(value) = queue.extract_min() {
            drained.push(value);
        }

        assert_eq!(drained, vec![1, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_error_is_displayable() {
        let message = QueueError::Empty.to_string();
        assert!(message.contains("no values"));
    }
}
