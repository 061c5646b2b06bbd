//! Out of place three-way quicksort.
//!
//! Every level allocates new buckets, this trades memory for the simplest possible partition.

use std::cmp::Ordering;

sort_impl!("quicksort", quicksort);

/// Returns a sorted copy of `v`, `v` itself is not modified.
pub fn quicksort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let pivot = &v[v.len() / 2];

    let mut lt = Vec::new();
    let mut eq = Vec::new();
    let mut gt = Vec::new();

    for elem in v {
        match elem.cmp(pivot) {
            Ordering::Less => lt.push(elem.clone()),
            Ordering::Equal => eq.push(elem.clone()),
            Ordering::Greater => gt.push(elem.clone()),
        }
    }

    let mut sorted = quicksort(&lt);
    sorted.extend(eq);
    sorted.extend(quicksort(&gt));

    sorted
}
