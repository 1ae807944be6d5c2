//! # fest-resolver
//!
//! Holiday rule records, the rule-store capability, and the resolver that
//! turns rules into concrete dates.
//!
//! The resolver is pure over its inputs; everything stateful lives behind
//! the [`HolidayRuleStore`] trait so that persistence can be swapped
//! without touching the date logic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Built-in holiday catalogues.
pub mod catalogue;

/// Rule resolution and membership queries.
pub mod resolver;

/// Holiday rule records and rule types.
pub mod rule;

/// Rule-store capability and the in-memory store.
pub mod store;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use resolver::{resolve_rule, HolidayResolver, ResolvedHoliday};
pub use rule::{HolidayRule, RuleType};
pub use store::{HolidayRuleStore, MemoryStore};
