//! # Algorithm Set
//!
//! The four routines measured by the benchmark suite: two stable
//! comparison sorts and two sequence searches. All are stateless free
//! functions, generic over the element type; each call is independent
//! and synchronous.
//!
//! Preconditions (such as [`binary_search`] requiring sorted input) are
//! documented on the individual functions and deliberately not verified
//! at runtime, so measurements reflect only the algorithm itself.

mod search;
mod sort;

pub use search::{binary_search, binary_search_probed, linear_search};
pub use sort::{insertion_sort, merge_sort};
