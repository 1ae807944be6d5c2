//! Holiday rule records and the closed set of rule types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a recurring holiday maps onto a concrete date in a given year.
///
/// A closed set; dispatch is a plain `match`. The discriminants are the
/// ids the rule store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum RuleType {
    /// Same calendar day every year.
    Fixed = 1,
    /// Fixed day, then moved to the next Monday.
    FixedMovedToMonday = 2,
    /// A signed day offset from Easter Sunday.
    EasterRelative = 3,
    /// Offset from Easter Sunday, then moved to the next Monday.
    EasterRelativeMovedToMonday = 4,
}

impl RuleType {
    /// Map a persisted rule-type id to its variant.
    ///
    /// Returns `None` for ids outside 1–4; the resolver turns that into an
    /// explicit validation failure rather than skipping the rule.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(RuleType::Fixed),
            2 => Some(RuleType::FixedMovedToMonday),
            3 => Some(RuleType::EasterRelative),
            4 => Some(RuleType::EasterRelativeMovedToMonday),
            _ => None,
        }
    }

    /// Return the persisted rule-type id.
    pub fn id(&self) -> i32 {
        *self as i32
    }

    /// Whether this rule type reads the `day` / `month` fields.
    pub fn uses_fixed_date(&self) -> bool {
        matches!(self, RuleType::Fixed | RuleType::FixedMovedToMonday)
    }
}

/// A recurring holiday definition, as persisted by the rule store.
///
/// `day` and `month` are meaningful only for the fixed-date rule types and
/// are conventionally zero otherwise; `easter_offset_days` is meaningful
/// only for the Easter-relative types. `kind` carries the raw persisted
/// rule-type id — the store hands records out as stored, and validation
/// happens at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HolidayRule {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display label, e.g. `"Santos Reyes"`.
    pub name: String,
    /// Day of the month (1–31) for fixed-date rules, 0 otherwise.
    pub day: u8,
    /// Month (1–12) for fixed-date rules, 0 otherwise.
    pub month: u8,
    /// Persisted rule-type id (see [`RuleType::from_id`]).
    pub kind: i32,
    /// Signed day offset from Easter Sunday for Easter-relative rules.
    pub easter_offset_days: i32,
}

impl HolidayRule {
    /// A fixed-date rule (`kind` 1).
    pub fn fixed(name: impl Into<String>, month: u8, day: u8) -> Self {
        HolidayRule {
            id: 0,
            name: name.into(),
            day,
            month,
            kind: RuleType::Fixed.id(),
            easter_offset_days: 0,
        }
    }

    /// A fixed-date rule moved to the next Monday (`kind` 2).
    pub fn fixed_moved_to_monday(name: impl Into<String>, month: u8, day: u8) -> Self {
        HolidayRule {
            kind: RuleType::FixedMovedToMonday.id(),
            ..Self::fixed(name, month, day)
        }
    }

    /// An Easter-relative rule (`kind` 3).
    pub fn easter_relative(name: impl Into<String>, offset_days: i32) -> Self {
        HolidayRule {
            id: 0,
            name: name.into(),
            day: 0,
            month: 0,
            kind: RuleType::EasterRelative.id(),
            easter_offset_days: offset_days,
        }
    }

    /// An Easter-relative rule moved to the next Monday (`kind` 4).
    pub fn easter_relative_moved_to_monday(name: impl Into<String>, offset_days: i32) -> Self {
        HolidayRule {
            kind: RuleType::EasterRelativeMovedToMonday.id(),
            ..Self::easter_relative(name, offset_days)
        }
    }

    /// Same rule with the given store id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}
