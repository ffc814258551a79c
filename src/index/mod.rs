pub mod build;
pub mod lookup;
pub mod stats;
pub mod types;

pub use build::{IndexBuilder, apply_fuzzies};
pub use lookup::{Index, Resolution};
pub use stats::{IndexStats, TableStats};
pub use types::*;
