//! # festivos
//!
//! Recurring-holiday resolution: the Gregorian computus, calendar-shift
//! rules, and rule-driven holiday catalogues.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fest-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! festivos = "0.1"
//! ```
//!
//! ```rust
//! use festivos::resolver::catalogue::colombia_store;
//! use festivos::resolver::HolidayResolver;
//! use festivos::time::Date;
//!
//! let resolver = HolidayResolver::new(colombia_store());
//! let viernes_santo = Date::from_ymd(2025, 4, 18).unwrap();
//! assert!(resolver.is_holiday(viernes_santo).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared definitions.
pub use fest_core as core;

/// Date, weekday, and computus types.
pub use fest_time as time;

/// Holiday rules, rule store, and the resolver.
pub use fest_resolver as resolver;

// Flat re-exports of the types most callers touch.
pub use fest_core::{Error, Result, Year};
pub use fest_resolver::{
    resolve_rule, HolidayResolver, HolidayRule, HolidayRuleStore, MemoryStore, ResolvedHoliday,
    RuleType,
};
pub use fest_time::{easter_sunday, palm_sunday, Date, Weekday};
