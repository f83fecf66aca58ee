//! # Game Data Core
//!
//! Static integrity rules for the game's content database.
//!
//! This crate contains **only** pure logic:
//! - No file IO
//! - No process exit handling
//! - No fail-fast: every rule violation becomes a [`defect::Defect`]
//!
//! ## Crate Structure
//!
//! - [`document`] - The four document kinds and their file names
//! - [`record`] - Tri-state field access over loosely typed JSON records
//! - [`rules`] - Declarative rule tables and allow-lists
//! - [`validate`] - Schema, uniqueness and cross-reference checks
//! - [`defect`] - Accumulated validation output

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod defect;
pub mod document;
pub mod error;
pub mod record;
pub mod rules;
pub mod validate;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::defect::{Defect, DefectLog};
    pub use crate::document::DocumentKind;
    pub use crate::error::{DataError, Result};
    pub use crate::record::{Field, FieldState, RecordView, ValueKind};
    pub use crate::validate::{check_unique_ids, validate_document, WeaponIds};
}
