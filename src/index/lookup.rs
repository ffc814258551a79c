use crate::index::types::{Lookup, Options, PropertyEntry, StatementEntry, Table};
use crate::utils::is_tag;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Abbreviation index: exact and fuzzy shorthand keys for properties and
/// statements, plus options by full property name.
///
/// Built once with [`Index::build`] or [`IndexBuilder`](super::IndexBuilder)
/// and read-only afterwards, so it can be shared across threads freely.
#[derive(Debug, Default, Clone)]
pub struct Index {
    pub(crate) properties: Table<PropertyEntry>,
    pub(crate) full_properties: FxHashMap<String, Arc<Options>>,
    pub(crate) statements: Table<StatementEntry>,
}

/// Where a key resolved when checking both tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution<'a> {
    Property(&'a PropertyEntry),
    Statement(&'a StatementEntry),
    Blocked,
    Absent,
}

impl Index {
    /// Look up a shorthand or fuzzy key in the property table
    pub fn property(&self, key: &str) -> Lookup<'_, PropertyEntry> {
        Lookup::from_slot(self.properties.get(key))
    }

    /// Look up a shorthand or fuzzy key in the statement table
    pub fn statement(&self, key: &str) -> Lookup<'_, StatementEntry> {
        Lookup::from_slot(self.statements.get(key))
    }

    /// Options of a property by its full name (`padding`, not `pad`)
    pub fn full_property(&self, name: &str) -> Option<&Options> {
        self.full_properties.get(name).map(|options| options.as_ref())
    }

    /// Check the property table, then the statement table.
    ///
    /// A blocked key in either table ends the search; an absent one falls
    /// through to the next table.
    pub fn resolve(&self, key: &str) -> Resolution<'_> {
        match self.property(key) {
            Lookup::Found(entry) => return Resolution::Property(entry),
            Lookup::Blocked => return Resolution::Blocked,
            Lookup::Absent => {}
        }

        match self.statement(key) {
            Lookup::Found(entry) => Resolution::Statement(entry),
            Lookup::Blocked => Resolution::Blocked,
            Lookup::Absent => Resolution::Absent,
        }
    }

    /// Whether `token` is one of the markup tags blocked in both tables
    pub fn is_tag(token: &str) -> bool {
        is_tag(token)
    }

    pub fn properties(&self) -> &Table<PropertyEntry> {
        &self.properties
    }

    pub fn full_properties(&self) -> &FxHashMap<String, Arc<Options>> {
        &self.full_properties
    }

    pub fn statements(&self) -> &Table<StatementEntry> {
        &self.statements
    }
}
