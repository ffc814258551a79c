use crate::index::lookup::Index;
use crate::index::types::{Options, PropertyEntry, Slot, StatementEntry, Table};
use serde::Serialize;
use std::sync::Arc;

/// Key counts for one shorthand table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Keys equal to the shorthand that defined their entry
    pub primary: usize,
    /// Keys that reach an entry through an alias prefix
    pub fuzzy: usize,
    pub blocked: usize,
}

impl TableStats {
    pub fn total(&self) -> usize {
        self.primary + self.fuzzy + self.blocked
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub properties: TableStats,
    pub statements: TableStats,
    pub full_properties: usize,
}

impl IndexStats {
    pub fn total_keys(&self) -> usize {
        self.properties.total() + self.statements.total() + self.full_properties
    }
}

trait HasOptions {
    fn options(&self) -> &Arc<Options>;
}

impl HasOptions for PropertyEntry {
    fn options(&self) -> &Arc<Options> {
        &self.options
    }
}

impl HasOptions for StatementEntry {
    fn options(&self) -> &Arc<Options> {
        &self.options
    }
}

fn table_stats<T: HasOptions>(table: &Table<T>) -> TableStats {
    let mut stats = TableStats::default();
    for (key, slot) in table {
        match slot {
            Slot::Entry(entry) if entry.options().canonical == *key => stats.primary += 1,
            Slot::Entry(_) => stats.fuzzy += 1,
            Slot::Blocked => stats.blocked += 1,
        }
    }
    stats
}

impl Index {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            properties: table_stats(&self.properties),
            statements: table_stats(&self.statements),
            full_properties: self.full_properties.len(),
        }
    }
}
