use crate::definitions::{DefinitionError, Definitions, PropertyDef, StatementDef};
use crate::index::lookup::Index;
use crate::index::types::{IndexConfig, Options, PropertyEntry, Slot, StatementEntry, Table};
use crate::utils::{TAGS, fuzzify, update_aliases};
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds an [`Index`] from a definitions bundle, optionally validating the
/// bundle first.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn build(&self, defs: Definitions) -> Result<Index, DefinitionError> {
        if self.config.validate {
            defs.validate()?;
        }
        Ok(Index::build(defs))
    }
}

impl Index {
    /// Index a bundle without validating it.
    ///
    /// Passes run in a fixed order: primary shorthands for both tables, then
    /// fuzzy keys (properties, then statements), then tag removal. A shorthand
    /// declared twice keeps its last definition.
    pub fn build(defs: Definitions) -> Index {
        let Definitions {
            properties,
            statements,
        } = defs;
        let mut index = Index::default();

        // Pass 1: property shorthands and full names
        let mut property_seeds = Vec::with_capacity(properties.len());
        for PropertyDef {
            short,
            name,
            mut options,
        } in properties
        {
            options.canonical = short.clone();
            update_aliases(&short, Some(&name), &mut options);
            trace!(short = %short, name = %name, aliases = ?options.alias, "indexing property");

            let options = Arc::new(options);
            index
                .full_properties
                .insert(name.clone(), Arc::clone(&options));
            let entry = PropertyEntry {
                name,
                options: Arc::clone(&options),
            };
            index
                .properties
                .insert(short.clone(), Slot::Entry(Arc::new(entry)));
            property_seeds.push((short, options));
        }

        // Pass 2: statement shorthands
        let mut statement_seeds = Vec::with_capacity(statements.len());
        for StatementDef {
            short,
            property,
            value,
            mut options,
        } in statements
        {
            options.canonical = short.clone();
            update_aliases(&short, None, &mut options);
            trace!(short = %short, property = %property, value = %value, "indexing statement");

            let options = Arc::new(options);
            let entry = StatementEntry {
                property,
                value,
                options: Arc::clone(&options),
            };
            index
                .statements
                .insert(short.clone(), Slot::Entry(Arc::new(entry)));
            statement_seeds.push((short, options));
        }

        // Passes 3 and 4: fuzzy keys, in bundle order
        let fuzzy_properties: usize = property_seeds
            .iter()
            .map(|(short, options)| apply_fuzzies(&mut index.properties, short, options))
            .sum();
        let fuzzy_statements: usize = statement_seeds
            .iter()
            .map(|(short, options)| apply_fuzzies(&mut index.statements, short, options))
            .sum();

        // Pass 5
        index.remove_tags();

        debug!(
            properties = property_seeds.len(),
            statements = statement_seeds.len(),
            full_properties = index.full_properties.len(),
            fuzzy_properties,
            fuzzy_statements,
            blocked = TAGS.len(),
            "index built"
        );

        index
    }

    /// Block every markup tag name in both shorthand tables, replacing
    /// whatever an earlier pass stored there.
    pub(crate) fn remove_tags(&mut self) {
        for tag in TAGS {
            self.statements.insert(tag.to_string(), Slot::Blocked);
            self.properties.insert(tag.to_string(), Slot::Blocked);
        }
    }
}

/// Register every prefix of every alias in `options` as a key pointing at the
/// entry `short` already resolves to. Existing keys are left alone, so the
/// definition indexed first owns a shared prefix.
///
/// Returns the number of keys added. A no-op when `short` has no slot or
/// there are no aliases.
pub fn apply_fuzzies<T>(table: &mut Table<T>, short: &str, options: &Options) -> usize {
    let Some(slot) = table.get(short).cloned() else {
        return 0;
    };

    let mut added = 0;
    for alias in &options.alias {
        for key in fuzzify(alias) {
            if !table.contains_key(key) {
                table.insert(key.to_string(), slot.clone());
                added += 1;
            }
        }
    }
    added
}
