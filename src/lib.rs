//! # shorthand-index
//!
//! Builds the lookup tables behind CSS abbreviation expansion: typing `bg`
//! should find the property `background`, typing `m0a` the statement
//! `margin: 0 auto;`, and any prefix of a known name (`backg`, `marg`)
//! should find the same entry without colliding with markup tag names.
//!
//! ## Architecture
//!
//! - [`definitions`] - Definition bundles, JSON loading, validation
//! - [`index`] - Index building, lookup, statistics
//! - [`output`] - Terminal rendering for the CLI
//! - [`utils`] - Alias computation, fuzzy prefixes, config loading
//!
//! ## Quick Start
//!
//! ```
//! use shorthand_index::definitions::{Definitions, PropertyDef, StatementDef};
//! use shorthand_index::index::{Index, Lookup};
//!
//! let defs = Definitions::new()
//!     .property(PropertyDef::new("bg", "background"))
//!     .statement(StatementDef::new("m0a", "margin", "0 auto"));
//! let index = Index::build(defs);
//!
//! assert_eq!(index.property("backg").found().unwrap().name, "background");
//! assert_eq!(index.statement("m0a").found().unwrap().value, "0 auto");
//!
//! // Tag names never expand
//! assert!(matches!(index.property("b"), Lookup::Blocked));
//! ```
//!
//! ## Index layout
//!
//! Three tables are produced:
//!
//! 1. **properties** - shorthand or fuzzy key -> `(name, options)`
//! 2. **full_properties** - full property name -> options
//! 3. **statements** - shorthand or fuzzy key -> `(property, value, options)`
//!
//! Fuzzy keys only fill gaps, so a definition earlier in the bundle owns any
//! prefix it shares with a later one. Tag names are blocked last and win over
//! everything.

pub mod definitions;
pub mod index;
pub mod output;
pub mod utils;

pub use definitions::{DefinitionError, Definitions, PropertyDef, StatementDef};
pub use index::{Index, IndexBuilder, IndexConfig, Lookup, Options, Slot};
