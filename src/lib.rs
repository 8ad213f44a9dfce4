//! Redirect-based availability watcher library.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod poller;
pub mod probe;
pub mod source;

pub use config::WatchConfig;
pub use lifecycle::Pollers;
pub use source::Record;
