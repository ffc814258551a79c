//! Utility functions shared by the index builder and the CLI.
//!
//! ## Modules
//!
//! - [`aliases`] - Alias computation and the markup tag denylist
//! - [`fuzzy`] - Prefix generation for fuzzy keys
//! - [`app_data`] - Config file location and loading
//!
//! ```no_run
//! use shorthand_index::utils::fuzzify;
//!
//! let keys: Vec<&str> = fuzzify("border").collect();
//! // Returns: ["b", "bo", "bor", "bord", "borde", "border"]
//! ```

pub mod aliases;
pub mod app_data;
pub mod fuzzy;

pub use aliases::*;
pub use app_data::*;
pub use fuzzy::*;
