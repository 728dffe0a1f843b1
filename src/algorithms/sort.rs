//! Comparison-based sorting routines.
//!
//! Both sorts are stable, ascending, and generic over any `Ord` element
//! type. They mutate their input slice in place; callers that need the
//! unsorted original must copy it first.

/// Sorts a slice in place using insertion sort.
///
/// For each position `i` from 1 to `len - 1`, shifts larger preceding
/// elements rightward until the insertion point for element `i` is found.
/// Stable. O(n²) comparisons in the worst and average case.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts a slice in place using top-down merge sort.
///
/// Recursively splits the range at its midpoint, sorts each half, then
/// merges the sorted halves through temporary buffers. Stable. O(n log n)
/// comparisons.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1);
    }
}

/// Sorts the inclusive range `[lo, hi]` of `data`.
fn sort_range<T: Ord + Clone>(data: &mut [T], lo: usize, hi: usize) {
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        sort_range(data, lo, mid);
        sort_range(data, mid + 1, hi);
        merge(data, lo, mid, hi);
    }
}

/// Merges the sorted runs `[lo, mid]` and `[mid + 1, hi]` back into `data`.
fn merge<T: Ord + Clone>(data: &mut [T], lo: usize, mid: usize, hi: usize) {
    let left: Vec<T> = data[lo..=mid].to_vec();
    let right: Vec<T> = data[mid + 1..=hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;

    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements in left-to-right order.
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        data[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        data[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}
