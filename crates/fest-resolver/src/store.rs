//! The rule-store capability and an in-memory implementation.
//!
//! The resolver only ever reads (`get_all`); the rest of the surface is
//! the CRUD boundary exposed upward to whatever persistence sits behind
//! it. Implementations signal infrastructure failures with
//! [`Error::Dependency`](fest_core::Error::Dependency), which the resolver
//! propagates unchanged.

use crate::rule::HolidayRule;
use fest_core::errors::Result;

/// Read/write store of holiday rule records.
///
/// Each call returns a single atomic snapshot; consistency across calls is
/// the store's concern, not the resolver's.
pub trait HolidayRuleStore {
    /// Return every rule, in the store's own iteration order. An empty
    /// store yields an empty vector, not an error.
    fn get_all(&self) -> Result<Vec<HolidayRule>>;

    /// Look up a rule by id.
    fn get(&self, id: i32) -> Result<Option<HolidayRule>>;

    /// Return rules whose name contains `text` (case-insensitive).
    fn search(&self, text: &str) -> Result<Vec<HolidayRule>>;

    /// Insert a rule, assigning it a fresh id. Returns the stored record.
    fn insert(&mut self, rule: HolidayRule) -> Result<HolidayRule>;

    /// Replace the rule with the same id. Returns the stored record, or
    /// `None` if no such rule exists.
    fn update(&mut self, rule: HolidayRule) -> Result<Option<HolidayRule>>;

    /// Delete a rule by id. Returns whether anything was deleted.
    fn delete(&mut self, id: i32) -> Result<bool>;
}

/// A `Vec`-backed rule store.
///
/// Serves tests and standalone catalogues; there is no persistence behind
/// it, so its operations never fail.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    rules: Vec<HolidayRule>,
    next_id: i32,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore {
            rules: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with the given rules, assigning ids in order.
    pub fn with_rules(rules: impl IntoIterator<Item = HolidayRule>) -> Self {
        let mut store = Self::new();
        for rule in rules {
            // Vec-backed insert cannot fail
            let _ = store.insert(rule);
        }
        store
    }

    /// Number of stored rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the store holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl HolidayRuleStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<HolidayRule>> {
        Ok(self.rules.clone())
    }

    fn get(&self, id: i32) -> Result<Option<HolidayRule>> {
        Ok(self.rules.iter().find(|r| r.id == id).cloned())
    }

    fn search(&self, text: &str) -> Result<Vec<HolidayRule>> {
        let needle = text.to_lowercase();
        Ok(self
            .rules
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn insert(&mut self, mut rule: HolidayRule) -> Result<HolidayRule> {
        rule.id = self.next_id;
        self.next_id += 1;
        self.rules.push(rule.clone());
        Ok(rule)
    }

    fn update(&mut self, rule: HolidayRule) -> Result<Option<HolidayRule>> {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(slot) => {
                *slot = rule.clone();
                Ok(Some(rule))
            }
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: i32) -> Result<bool> {
        let before = self.rules.len();
        self.rules.retain(|r| r.id != id);
        Ok(self.rules.len() != before)
    }
}
