//! Resolution of holiday rules to concrete dates.
//!
//! [`resolve_rule`] is the core: a pure dispatch over the four rule types
//! combining the computus with the calendar-shift rules. The
//! [`HolidayResolver`] layers year resolution and membership queries on
//! top of an injected [`HolidayRuleStore`], and passes its CRUD surface
//! through for callers that manage the catalogue.

use crate::rule::{HolidayRule, RuleType};
use crate::store::HolidayRuleStore;
use fest_core::errors::{Error, Result};
use fest_core::{ensure, Year};
use fest_time::date::days_in_month;
use fest_time::easter::easter_sunday;
use fest_time::Date;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A holiday rule resolved against a concrete year.
///
/// Derived, never persisted; recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedHoliday {
    /// The concrete calendar date.
    pub date: Date,
    /// The rule's display label.
    pub name: String,
}

/// The fixed (month, day) of a rule in `year`, validated here rather than
/// at store-read time.
fn fixed_date(year: Year, rule: &HolidayRule) -> Result<Date> {
    ensure!(
        (1..=12).contains(&rule.month),
        "rule '{}': month {} out of range [1, 12]",
        rule.name,
        rule.month
    );
    ensure!(
        rule.day >= 1 && rule.day <= days_in_month(year, rule.month),
        "rule '{}': day {} out of range for month {} of {year}",
        rule.name,
        rule.day,
        rule.month
    );
    Date::from_ymd(year, rule.month, rule.day)
}

/// Resolve a single rule against a year.
///
/// Pure over its inputs; resolving the same (year, rule) pair twice gives
/// identical results. A `kind` outside the four known rule types is an
/// explicit [`Error::Validation`], never a silent omission.
pub fn resolve_rule(year: Year, rule: &HolidayRule) -> Result<ResolvedHoliday> {
    let kind = RuleType::from_id(rule.kind).ok_or_else(|| {
        Error::Validation(format!(
            "unsupported rule type {} for rule '{}'",
            rule.kind, rule.name
        ))
    })?;
    let date = match kind {
        RuleType::Fixed => fixed_date(year, rule)?,
        RuleType::FixedMovedToMonday => fixed_date(year, rule)?.next_monday()?,
        RuleType::EasterRelative => easter_sunday(year)?.add_days(rule.easter_offset_days)?,
        RuleType::EasterRelativeMovedToMonday => easter_sunday(year)?
            .add_days(rule.easter_offset_days)?
            .next_monday()?,
    };
    Ok(ResolvedHoliday {
        date,
        name: rule.name.clone(),
    })
}

/// Answers holiday queries over the rules held by a store.
///
/// The resolver itself is stateless between calls; each query takes one
/// `get_all` snapshot and computes from it, so concurrent resolvers over
/// the same store are independent.
#[derive(Debug, Clone)]
pub struct HolidayResolver<S> {
    store: S,
}

impl<S: HolidayRuleStore> HolidayResolver<S> {
    /// Create a resolver over the given rule store.
    pub fn new(store: S) -> Self {
        HolidayResolver { store }
    }

    /// Resolve every stored rule for `year`.
    ///
    /// Rules resolve independently and come back in the store's iteration
    /// order; no deduplication, no sorting by date.
    pub fn resolve_year(&self, year: Year) -> Result<Vec<ResolvedHoliday>> {
        let rules = self.store.get_all()?;
        let mut resolved = Vec::with_capacity(rules.len());
        for rule in &rules {
            resolved.push(resolve_rule(year, rule)?);
        }
        Ok(resolved)
    }

    /// Whether `date` is a holiday under the stored rules.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        let holidays = self.resolve_year(date.year())?;
        Ok(holidays.iter().any(|h| h.date == date))
    }

    // ── CRUD passthrough to the store ─────────────────────────────────────

    /// Every stored rule.
    pub fn rules(&self) -> Result<Vec<HolidayRule>> {
        self.store.get_all()
    }

    /// Look up a rule by id.
    pub fn rule(&self, id: i32) -> Result<Option<HolidayRule>> {
        self.store.get(id)
    }

    /// Rules whose name contains `text`.
    pub fn search(&self, text: &str) -> Result<Vec<HolidayRule>> {
        self.store.search(text)
    }

    /// Add a rule to the catalogue.
    pub fn insert(&mut self, rule: HolidayRule) -> Result<HolidayRule> {
        self.store.insert(rule)
    }

    /// Replace a stored rule.
    pub fn update(&mut self, rule: HolidayRule) -> Result<Option<HolidayRule>> {
        self.store.update(rule)
    }

    /// Remove a rule from the catalogue.
    pub fn delete(&mut self, id: i32) -> Result<bool> {
        self.store.delete(id)
    }
}
