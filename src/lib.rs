//! This crate implements an ordered container and a priority queue on
//! top of an unbalanced Binary Search Tree (BST), plus several
//! algorithms for merging two priority queues.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree
//!    have a value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree
//!    have a value greater than its own value.
//!
//! Searching for a value then takes `O(height)`, and visiting the left
//! subtree, then the subtree root, then the right subtree yields the
//! values in ascending order. That sorted iteration is what turns the
//! tree into a priority queue for free: the minimum is simply the
//! leftmost node.
//!
//! The tree here stores each distinct value at most once - inserting a
//! value that is already present is a no-op - and it does not rebalance
//! itself, so the height is only `O(lg N)` for luckily-ordered input
//! and degrades to `O(N)` for sorted input. Insertion and removal
//! recurse along the search path, which means a maximally skewed tree
//! can consume call stack proportional to its size.
//!
//! ## Persistence
//!
//! The tree core is persistent: [`tree::Tree::insert`] and
//! [`tree::Tree::remove`] return a new tree sharing every untouched
//! subtree with the old one, which makes cloning a container a cheap
//! reference-count bump. The [`SearchTree`] and [`PriorityQueue`]
//! wrappers hold one root each and swap it on mutation.
//!
//! ## Merging
//!
//! The [`merge`] module offers four merge strategies: a general one and
//! one requiring the queues' value ranges to be disjoint, each in a
//! destructive and a persistent flavor. Note that
//! [`merge::special_merge`] is the one operation that rewrites tree
//! links in place; see its documentation before mixing it with
//! snapshots.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod merge;
pub mod queue;
pub mod search_tree;
pub mod sort;
pub mod tree;

#[cfg(test)]
mod test;

// Re-export the container types for convenience
pub use queue::{PriorityQueue, QueueError};
pub use search_tree::SearchTree;
