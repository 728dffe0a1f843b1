//! Sequence search routines.

use std::cmp::Ordering;

/// Searches for `target` by scanning from index 0 forward.
///
/// Returns the first index whose value equals `target`, or `None` if no
/// element matches. O(n).
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|value| value == target)
}

/// Searches an ascending-sorted slice for `target` by midpoint probing.
///
/// `data` must be sorted ascending; the result is unspecified otherwise.
/// Returns the index of a matching element, or `None` if the target is
/// absent. O(log n).
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    binary_search_probed(data, target).0
}

/// [`binary_search`] variant that also reports the number of midpoint
/// probes performed.
///
/// A search over `n` elements probes at most ⌈log₂(n + 1)⌉ times.
pub fn binary_search_probed<T: Ord>(data: &[T], target: &T) -> (Option<usize>, u32) {
    let mut lo = 0;
    let mut hi = data.len();
    let mut probes = 0;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        probes += 1;
        match data[mid].cmp(target) {
            Ordering::Equal => return (Some(mid), probes),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    (None, probes)
}
