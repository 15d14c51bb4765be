use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use treepq::merge::{
    general_merge, general_merge_persistent, special_merge, special_merge_persistent,
};
use treepq::{PriorityQueue, SearchTree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Without any
/// self-balancing the result is a right spine of maximal height.
fn get_unbalanced_tree(num_levels: usize) -> SearchTree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting values in an order that keeps the tree
/// balanced even though nothing rebalances.
fn get_balanced_tree(num_levels: usize) -> SearchTree<i32> {
    let xs: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    let mut order = Vec::with_capacity(xs.len());
    balanced_order(&xs, &mut order);
    order.into_iter().collect()
}

/// Recursive helper for [`get_balanced_tree`]: midpoint first, then both halves.
fn balanced_order(xs: &[i32], order: &mut Vec<i32>) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        order.push(xs[mid]);
        balanced_order(&xs[..mid], order);
        balanced_order(&xs[mid + 1..], order);
    }
}

fn balanced_queue(values: std::ops::Range<i32>) -> PriorityQueue<i32> {
    let xs: Vec<i32> = values.collect();
    let mut order = Vec::with_capacity(xs.len());
    balanced_order(&xs, &mut order);
    order.into_iter().collect()
}

/// Helper to bench a function on a search tree.
/// It creates a group for the given name and closure and runs tests for
/// various sizes and shapes of trees before finishing the group. The
/// mutating actions work on a clone, which only costs a refcount bump.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&SearchTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = (num_nodes_in_full_tree(num_levels) - 1) as i32;
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| f(&tree, black_box(largest_element_in_tree)))
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        let mut tree = tree.clone();
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        let mut tree = tree.clone();
        tree.insert(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
}

/// Merge two disjoint-range queues with each of the four strategies.
pub fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for num_levels in [7, 11] {
        let n = num_nodes_in_full_tree(num_levels) as i32;
        let x = balanced_queue(0..n);
        let y = balanced_queue(n..2 * n);

        group.bench_function(BenchmarkId::new("general", n), |b| {
            b.iter(|| {
                let mut x = x.clone();
                let mut y = y.clone();
                general_merge(&mut x, &mut y);
            })
        });
        group.bench_function(BenchmarkId::new("general-persistent", n), |b| {
            b.iter(|| general_merge_persistent(&x, &y))
        });
        group.bench_function(BenchmarkId::new("special", n), |b| {
            b.iter(|| {
                let mut x = x.clone();
                let mut y = y.clone();
                special_merge(&mut x, &mut y);
            })
        });
        group.bench_function(BenchmarkId::new("special-persistent", n), |b| {
            b.iter(|| special_merge_persistent(&x, &y))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark, merge_benchmark);
criterion_main!(benches);
