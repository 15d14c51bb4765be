//! Sorting by way of the containers: insert everything, then read it
//! back out in order. Both helpers deduplicate - the output is the
//! ascending sequence of *distinct* values, not a permutation of the
//! input.

use std::cmp;

use crate::queue::PriorityQueue;
use crate::search_tree::SearchTree;

/// Sorts the elements of `items` using a search tree: insert them all,
/// then run through the tree in order.
///
/// # Examples
///
/// ```
/// use treepq::sort::st_sort;
///
/// assert_eq!(st_sort(vec![3, 1, 4, 1, 5]), vec![1, 3, 4, 5]);
/// ```
pub fn st_sort<T, I>(items: I) -> Vec<T>
where
    T: cmp::Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let tree: SearchTree<T> = items.into_iter().collect();
    tree.iter().cloned().collect()
}

/// Sorts the elements of `items` using a priority queue: insert them
/// all, then extract one minimal element at a time. Produces the same
/// output as [`st_sort`]; the merge algorithms build on this
/// queue-draining form.
///
/// # Examples
///
/// ```
/// use treepq::sort::pq_sort;
///
/// assert_eq!(pq_sort(vec![3, 1, 4, 1, 5]), vec![1, 3, 4, 5]);
/// ```
pub fn pq_sort<T, I>(items: I) -> Vec<T>
where
    T: cmp::Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut queue: PriorityQueue<T> = items.into_iter().collect();

    let mut sorted = Vec::new();
    while let Ok(value) = queue.extract_min() {
        sorted.push(value);
    }
    sorted
}
