//! # fest-core
//!
//! Error types and shared definitions for the festivos workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Calendar year. Signed so that out-of-range inputs surface as date
/// errors instead of being unrepresentable.
pub type Year = i32;

pub use errors::{Error, Result};
