//! Benchmark input data generation.
//!
//! Produces the integer sequences the suite feeds to the sort and search
//! routines: uniformly shuffled permutations of `0..n`, plus a target
//! value guaranteed to be absent from any of them.

use rand::Rng;

/// Search target absent from every generated permutation.
///
/// Permutations contain only the values `0..n`, so a negative target is
/// never found and searches against it always walk their full probe path.
pub const ABSENT_TARGET: i32 = -1;

/// Returns a uniformly random permutation of the integers `0..len`.
///
/// Each value in `[0, len)` appears exactly once. A `len` of zero yields
/// an empty vector. `len` must fit in `i32`.
pub fn random_permutation<R: Rng>(rng: &mut R, len: usize) -> Vec<i32> {
    let mut values: Vec<i32> = (0..len as i32).collect();
    shuffle(rng, &mut values);
    values
}

/// Shuffles a slice in place with a Fisher-Yates pass.
pub fn shuffle<T, R: Rng>(rng: &mut R, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}
