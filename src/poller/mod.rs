//! Per-record polling subsystem.
//!
//! # Data Flow
//! ```text
//! task.rs:
//!     validate URL
//!     → loop { probe → state.rs observe → report → wait }
//!
//! state.rs:
//!     Unknown → Available | Unavailable
//!     Available ←→ Unavailable
//!     Self-transitions produce nothing
//! ```
//!
//! # Design Decisions
//! - Each task owns its tracker; nothing is shared between tasks
//! - A task ends only on error

pub mod state;
pub mod task;

pub use state::{Availability, StatusChange, StatusTracker};
pub use task::{log_change, PollError, PollTask};
