//! Definition bundles fed to the index builder.
//!
//! A bundle is two ordered lists: property definitions (`pad` -> `padding`)
//! and statement definitions (`m0a` -> `margin: 0 auto`). Order matters, since
//! earlier definitions claim shared fuzzy prefixes first.
//!
//! Bundles can be built in code or read from JSON. Each definition accepts
//! either object form or the positional form:
//!
//! ```json
//! {
//!   "properties": [["pad", "padding", {"unit": "px"}], ["bg", "background"]],
//!   "statements": [{"short": "m0a", "property": "margin", "value": "0 auto"}]
//! }
//! ```

use crate::index::types::Options;
use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// `(shorthand, full property name, options)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub short: String,
    pub name: String,
    #[serde(default)]
    pub options: Options,
}

impl PropertyDef {
    pub fn new(short: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            name: name.into(),
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// `(shorthand, property name, literal value, options)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementDef {
    pub short: String,
    pub property: String,
    pub value: String,
    #[serde(default)]
    pub options: Options,
}

impl StatementDef {
    pub fn new(
        short: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            short: short.into(),
            property: property.into(),
            value: value.into(),
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub statements: Vec<StatementDef>,
}

/// Which table of the bundle a definition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Property,
    Statement,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionKind::Property => f.write_str("property"),
            DefinitionKind::Statement => f.write_str("statement"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("{kind} definition #{position} has an empty shorthand")]
    EmptyShorthand {
        kind: DefinitionKind,
        position: usize,
    },

    #[error("{kind} shorthand '{short}' is defined twice (#{first} and #{second})")]
    DuplicateShorthand {
        kind: DefinitionKind,
        short: String,
        first: usize,
        second: usize,
    },
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, def: PropertyDef) -> Self {
        self.properties.push(def);
        self
    }

    pub fn statement(mut self, def: StatementDef) -> Self {
        self.statements.push(def);
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len() + self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.statements.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse definitions")
    }

    /// Load a JSON bundle from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read definitions from {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid definitions file {}", path.display()))
    }

    /// Reject bundles the builder would index ambiguously: empty shorthands,
    /// and a shorthand declared more than once within the same table.
    ///
    /// Sharing a shorthand between a property and a statement is fine; they
    /// live in separate tables.
    pub fn validate(&self) -> std::result::Result<(), DefinitionError> {
        check_shorthands(
            DefinitionKind::Property,
            self.properties.iter().map(|def| def.short.as_str()),
        )?;
        check_shorthands(
            DefinitionKind::Statement,
            self.statements.iter().map(|def| def.short.as_str()),
        )
    }
}

fn check_shorthands<'a>(
    kind: DefinitionKind,
    shorts: impl Iterator<Item = &'a str>,
) -> std::result::Result<(), DefinitionError> {
    let mut seen: AHashMap<&str, usize> = AHashMap::new();

    for (position, short) in shorts.enumerate() {
        if short.is_empty() {
            return Err(DefinitionError::EmptyShorthand { kind, position });
        }

        if let Some(&first) = seen.get(short) {
            return Err(DefinitionError::DuplicateShorthand {
                kind,
                short: short.to_string(),
                first,
                second: position,
            });
        }
        seen.insert(short, position);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_and_object_forms() {
        let json = r#"{
            "properties": [
                ["pad", "padding", {"unit": "px"}],
                ["bg", "background"],
                {"short": "c", "name": "color"}
            ],
            "statements": [
                ["m0a", "margin", "0 auto", {}],
                {"short": "dib", "property": "display", "value": "inline-block"}
            ]
        }"#;
        let defs = Definitions::from_json_str(json).unwrap();

        assert_eq!(defs.len(), 5);
        assert_eq!(defs.properties[0].short, "pad");
        assert_eq!(defs.properties[0].options.get("unit"), Some(&json!("px")));
        assert_eq!(defs.properties[1].options, Options::default());
        assert_eq!(defs.properties[2].name, "color");
        assert_eq!(defs.statements[0].value, "0 auto");
        assert_eq!(defs.statements[1].property, "display");
    }

    #[test]
    fn test_missing_tables_default_empty() {
        let defs = Definitions::from_json_str("{}").unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Definitions::from_json_str(r#"{"properties": [["pad"]]}"#).is_err());
    }

    #[test]
    fn test_validate_accepts_distinct_shorthands() {
        let defs = Definitions::new()
            .property(PropertyDef::new("m", "margin"))
            .statement(StatementDef::new("m", "margin", "0"));
        assert_eq!(defs.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let defs = Definitions::new()
            .property(PropertyDef::new("bg", "background"))
            .property(PropertyDef::new("c", "color"))
            .property(PropertyDef::new("bg", "background-color"));

        let err = defs.validate().unwrap_err();
        assert_eq!(
            err,
            DefinitionError::DuplicateShorthand {
                kind: DefinitionKind::Property,
                short: "bg".to_string(),
                first: 0,
                second: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "property shorthand 'bg' is defined twice (#0 and #2)"
        );
    }

    #[test]
    fn test_validate_rejects_empty_shorthand() {
        let defs = Definitions::new().statement(StatementDef::new("", "margin", "0"));
        assert_eq!(
            defs.validate(),
            Err(DefinitionError::EmptyShorthand {
                kind: DefinitionKind::Statement,
                position: 0,
            })
        );
    }
}
