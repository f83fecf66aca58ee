//! # Game Data Tools
//!
//! Command-line tools for checking the content database:
//! - `validate-data`: schema, uniqueness and weapon cross-reference checks
//! - `report-missing-sprites`: portrait and sprite existence audit

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod audit;
pub mod cli;
pub mod config;
pub mod loader;
pub mod report;
