use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Metadata attached to a single property or statement definition.
///
/// `canonical` and `alias` are filled in while indexing; every other key the
/// definition carried (a `unit` hint, for instance) is kept in `extra` and
/// serialized back at the same level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Options {
    /// Shorthand that originally defined this entry
    #[serde(default)]
    pub canonical: String,
    /// Seeds for fuzzy expansion, in insertion order
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a pass-through key such as `unit`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Seed an extra alias ahead of the ones computed during indexing.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.push(alias.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A CSS-property-like shorthand: `pad` -> `padding`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    pub options: Arc<Options>,
}

/// A canned `property: value` pair: `m0a` -> `margin: 0 auto`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementEntry {
    pub property: String,
    pub value: String,
    pub options: Arc<Options>,
}

/// Value stored under a key of a shorthand table.
///
/// `Blocked` marks a key that must never resolve. It is distinct from the key
/// being absent, which leaves the caller free to try other matching.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot<T> {
    Entry(Arc<T>),
    Blocked,
}

// Manual impl: cloning a slot only bumps the refcount, so `T` needs no `Clone`.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match self {
            Slot::Entry(entry) => Slot::Entry(Arc::clone(entry)),
            Slot::Blocked => Slot::Blocked,
        }
    }
}

impl<T> Slot<T> {
    pub fn entry(&self) -> Option<&T> {
        match self {
            Slot::Entry(entry) => Some(entry.as_ref()),
            Slot::Blocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Slot::Blocked)
    }

    /// True when both slots hold the same allocation.
    pub fn same_entry(&self, other: &Slot<T>) -> bool {
        match (self, other) {
            (Slot::Entry(a), Slot::Entry(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Shorthand table keyed by abbreviation
pub type Table<T> = FxHashMap<String, Slot<T>>;

/// Result of an exact-key lookup against one table
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    /// Key is known and deliberately resolves to nothing; stop matching.
    Blocked,
    /// Key is unknown; other heuristics may still apply.
    Absent,
}

impl<T> Clone for Lookup<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<'_, T> {}

impl<'a, T> Lookup<'a, T> {
    pub(crate) fn from_slot(slot: Option<&'a Slot<T>>) -> Self {
        match slot {
            Some(Slot::Entry(entry)) => Lookup::Found(entry.as_ref()),
            Some(Slot::Blocked) => Lookup::Blocked,
            None => Lookup::Absent,
        }
    }

    pub fn found(self) -> Option<&'a T> {
        match self {
            Lookup::Found(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Lookup::Blocked)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }
}

/// Configuration for the index builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Reject empty and duplicate shorthands before building
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_validate() -> bool {
    true
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            validate: default_validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_flatten_roundtrip() {
        let json = r#"{"unit": "px", "alias": ["pd"]}"#;
        let options: Options = serde_json::from_str(json).unwrap();

        assert_eq!(options.canonical, "");
        assert_eq!(options.alias, vec!["pd".to_string()]);
        assert_eq!(options.get("unit"), Some(&json!("px")));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"canonical": "", "alias": ["pd"], "unit": "px"}));
    }

    #[test]
    fn test_slot_clone_shares_entry() {
        let slot = Slot::Entry(Arc::new(PropertyEntry {
            name: "padding".to_string(),
            options: Arc::new(Options::new()),
        }));
        let copy = slot.clone();

        assert!(slot.same_entry(&copy));
        assert!(!Slot::<PropertyEntry>::Blocked.same_entry(&Slot::Blocked));
    }

    #[test]
    fn test_lookup_from_slot() {
        let slot: Slot<PropertyEntry> = Slot::Blocked;
        assert!(Lookup::from_slot(Some(&slot)).is_blocked());
        assert!(Lookup::<PropertyEntry>::from_slot(None).is_absent());
    }

    #[test]
    fn test_index_config_defaults() {
        let config: IndexConfig = serde_json::from_str("{}").unwrap();
        assert!(config.validate);
    }
}
