//! Order-statistic helpers for median splits.
//!
//! The triangulator never fully sorts its working set; it only needs the
//! median element in place, with smaller elements to the left and larger to
//! the right under the axis comparator. Quickselect over a single-pivot
//! partition does that in expected linear time. The pivot is the middle
//! element, which degrades to quadratic on adversarial sequences;
//! median-of-array inputs are not adversarial, so that risk is accepted.

/// Partitions `items` around the value at `pivot_idx` and returns the
/// pivot's final index.
///
/// After the call every element left of the returned index satisfies
/// `less(element, pivot)` and no element right of it does. `less` must be a
/// strict ordering (irreflexive and transitive).
///
/// # Panics
///
/// Panics if `items` is empty or `pivot_idx` is out of bounds.
pub fn partition<T, F>(items: &mut [T], pivot_idx: usize, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let r = items.len() - 1;
    items.swap(pivot_idx, r);

    let mut j = 0;
    for i in 0..r {
        if less(&items[i], &items[r]) {
            items.swap(i, j);
            j += 1;
        }
    }
    items.swap(r, j);

    j
}

/// Reorders `items` so the `k`-th smallest element under `less` lands at
/// index `k`, with smaller elements before it and larger after.
///
/// Expected linear time via quickselect with middle-element pivots.
///
/// # Panics
///
/// Panics if `items` is empty or `k` is out of bounds.
pub fn select_nth<T, F>(items: &mut [T], k: usize, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(k < items.len());

    let mut l = 0;
    let mut r = items.len() - 1;
    while l < r {
        let j = l + partition(&mut items[l..=r], (r - l) / 2, &mut less);
        if j == k {
            break;
        } else if j > k {
            r = j - 1;
        } else {
            l = j + 1;
        }
    }
}
