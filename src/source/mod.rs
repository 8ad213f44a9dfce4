//! Source table subsystem.
//!
//! # Data Flow
//! ```text
//! urls.csv
//!     → loader.rs (csv reader, comment lines skipped)
//!     → per-row validation (two non-empty columns)
//!     → Vec<Record> (all-or-nothing)
//! ```

pub mod loader;
pub mod record;

pub use loader::{load_records, RecordReader, SourceError};
pub use record::Record;
