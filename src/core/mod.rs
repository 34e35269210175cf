//! Core event analysis engine.
//!
//! The scan runs as a single pass:
//!
//! 1. **Collection** (`file_scanner`): walk the scan roots and drop excluded paths.
//! 2. **Extraction** (`lexer`, `extract`, `plugin`): per file, classify lines,
//!    extract partial event records and resolve the owning plugin. Files are
//!    independent, so this phase runs in parallel.
//! 3. **Merge** (`registry`): fold per-file results into one [`EventRegistry`]
//!    in sorted file order, so last-write-wins is reproducible.
//!
//! [`EventRegistry`]: registry::EventRegistry

pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod lexer;
pub mod plugin;
pub mod registry;

pub use context::{ScanContext, scan_files};
