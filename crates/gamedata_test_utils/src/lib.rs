//! # Game Data Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Minimal valid records for every document kind
//! - Temporary on-disk data directories
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod data_dir;
pub mod fixtures;

/// Re-export proptest for convenience.
pub use proptest;
