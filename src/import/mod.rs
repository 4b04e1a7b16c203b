pub mod parser;
pub mod pipeline;
pub mod roles;

pub use pipeline::{ImportOutcome, RowError, run_import};
pub use roles::ImportKind;
