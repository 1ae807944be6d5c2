//! # fest-time
//!
//! Date, weekday, and Gregorian-computus types for the festivos workspace.
//!
//! Everything here is pure computation over values; there is no I/O and no
//! shared state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Date of Easter (Gregorian computus).
pub mod easter;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{easter_sunday, palm_sunday};
pub use weekday::Weekday;
