//! Four ways of merging two priority queues, trading off mutation
//! against non-mutation and general inputs against a disjoint-range
//! precondition.
//!
//! The `_persistent` variants only read their operands and return a new
//! queue; the other two drain the second queue into the first. One
//! caveat deserves calling out here rather than in a footnote:
//! [`special_merge`] rewrites the first queue's tree links in place
//! instead of going through the persistent insert path, so it is the one
//! operation in this crate after which snapshots taken from the first
//! queue are no longer guaranteed to share structure with it. If you
//! rely on cheap snapshots, use the persistent variants.

use std::cmp;

use crate::queue::PriorityQueue;
use crate::sort::pq_sort;
use crate::tree::Tree;

/// Merges `y` into `x` by repeatedly extracting the minimum of `y` and
/// inserting it into `x`. Afterwards `x` holds the set union of both
/// queues' values (duplicates across the two collapse) and `y` is
/// empty. Costs `O(|y| lg(|x| + |y|))`.
///
/// # Examples
///
/// ```
/// use treepq::PriorityQueue;
/// use treepq::merge::general_merge;
///
/// let mut x: PriorityQueue<i32> = (0..5).collect();
/// let mut y: PriorityQueue<i32> = (5..10).collect();
///
/// general_merge(&mut x, &mut y);
///
/// assert!(x.iter().eq((0..10).collect::<Vec<_>>().iter()));
/// assert!(y.is_empty());
/// ```
pub fn general_merge<T>(x: &mut PriorityQueue<T>, y: &mut PriorityQueue<T>)
where
    T: cmp::Ord + Clone,
{
    while let Ok(value) = y.extract_min() {
        x.insert(value);
    }
}

/// Merges `x` and `y` into a new priority queue, leaving both operands
/// untouched. The operands' sorted value sequences are produced by
/// [`pq_sort`] over copies built by iterating them, merged with a linear
/// two-pointer pass, and the result queue is rebuilt from the merged
/// sequence by sequential insertion.
///
/// When the two sequence heads compare equal, the head of `y`'s
/// sequence is taken first. Duplicates across `x` and `y` collapse to a
/// single value when the result is rebuilt, so the tie-break only
/// affects transient ordering.
pub fn general_merge_persistent<T>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) -> PriorityQueue<T>
where
    T: cmp::Ord + Clone,
{
    let xs = pq_sort(x.iter().cloned());
    let ys = pq_sort(y.iter().cloned());

    merge_ascending(xs, ys).into_iter().collect()
}

/// Merges two ascending sequences. On equal heads the second sequence's
/// head is appended first.
fn merge_ascending<T: cmp::Ord>(xs: Vec<T>, ys: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(xs.len() + ys.len());
    let mut xs = xs.into_iter().peekable();
    let mut ys = ys.into_iter().peekable();

    while let (Some(a), Some(b)) = (xs.peek(), ys.peek()) {
        if a < b {
            merged.extend(xs.next());
        } else {
            merged.extend(ys.next());
        }
    }
    merged.extend(xs);
    merged.extend(ys);
    merged
}

/// Merges `y` into `x`, requiring that every value in `x` is strictly
/// less than every value in `y`. Because the ranges are disjoint, the
/// drained values of `y` belong wholly to the right of `x`'s rightmost
/// node, and the merge attaches them there as a chain of right
/// children - no comparisons needed, `O(|y|)` attachment work.
///
/// Unlike every other tree operation in this crate, this one mutates
/// `x`'s internal links in place instead of path copying, so it makes
/// no sharing guarantee to prior snapshots of `x`. See the
/// [module documentation](self) for the trade-off.
///
/// # Panics
///
/// Panics if either queue is empty or if `x`'s maximum is not strictly
/// less than `y`'s minimum. The precondition is a hard contract: the
/// merge performs no comparisons of its own, so violating it silently
/// would produce an incorrectly ordered tree.
///
/// # Examples
///
/// ```
/// use treepq::PriorityQueue;
/// use treepq::merge::special_merge;
///
/// let mut x: PriorityQueue<i32> = (0..5).collect();
/// let mut y: PriorityQueue<i32> = (5..10).collect();
///
/// special_merge(&mut x, &mut y);
///
/// assert!(x.iter().eq((0..10).collect::<Vec<_>>().iter()));
/// assert!(y.is_empty());
/// ```
pub fn special_merge<T>(x: &mut PriorityQueue<T>, y: &mut PriorityQueue<T>)
where
    T: cmp::Ord + Clone,
{
    assert_split(x, y);

    let mut drained = Vec::new();
    while let Ok(value) = y.extract_min() {
        drained.push(value);
    }
    x.root_mut().append_rightmost(Tree::right_spine(drained));
}

/// Merges `x` and `y` into a new priority queue under the same
/// precondition as [`special_merge`], leaving both operands untouched.
/// The disjoint ranges mean the two ascending sequences concatenate
/// directly, with no element-wise comparison.
///
/// # Panics
///
/// Panics if either queue is empty or if `x`'s maximum is not strictly
/// less than `y`'s minimum.
pub fn special_merge_persistent<T>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) -> PriorityQueue<T>
where
    T: cmp::Ord + Clone,
{
    assert_split(x, y);

    let mut values = pq_sort(x.iter().cloned());
    values.extend(pq_sort(y.iter().cloned()));
    values.into_iter().collect()
}

/// Checks the range precondition shared by the special merges.
fn assert_split<T: cmp::Ord>(x: &PriorityQueue<T>, y: &PriorityQueue<T>) {
    let (largest_x, smallest_y) = match (x.root().rightmost(), y.root().leftmost()) {
        (Some(largest), Some(smallest)) => (largest, smallest),
        _ => panic!("special merge requires two non-empty queues"),
    };
    assert!(
        largest_x < smallest_y,
        "special merge requires every value in the first queue to be less \
         than every value in the second"
    );
}
