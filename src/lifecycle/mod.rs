//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load source → Spawn one poller per record → Wait on all pollers
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bad source starts nothing
//! - A failing poller ends alone; the others keep running

pub mod startup;

pub use startup::{launch, spawn_pollers, Pollers};
