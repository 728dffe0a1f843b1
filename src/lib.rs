//! # algobench
//!
//! A wall-clock benchmark suite for classic sorting and searching
//! algorithms: insertion sort, merge sort, linear search, and binary
//! search, timed across a ladder of input sizes.
//!
//! ## Features
//!
//! - Generic timing harness with per-repetition input cloning
//! - Entropy-seeded permutation inputs, fresh for every run
//! - CSV streamed to stdout, with JSON and summary-table alternatives
//! - TOML configuration with validation; defaults match the legacy run
//!
//! ## Architecture
//!
//! [`runner::BenchRunner`] drives the suite: it draws inputs from
//! [`dataset`], times each routine from [`algorithms`] through
//! [`harness::Harness`], and renders results via [`report::BenchReport`].
//! Everything is single-threaded and synchronous; a full run is one pass
//! over the configured sizes.

pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod harness;
pub mod report;
pub mod runner;
