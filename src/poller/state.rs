//! Availability state machine.
//!
//! # States
//! - Unknown: nothing observed yet
//! - Available / Unavailable: result of the latest probe
//!
//! # State Transitions
//! ```text
//! Unknown → x:          Initial
//! a → b (a != b):       Transition, with time held in a
//! a → a:                nothing
//! ```

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

use crate::source::Record;

/// Last known availability of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

/// A reportable change in availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// First observation after start.
    Initial { available: bool },
    /// Flip from the previous observation.
    Transition { available: bool, held: Duration },
}

impl StatusChange {
    pub fn is_available(&self) -> bool {
        match *self {
            StatusChange::Initial { available } | StatusChange::Transition { available, .. } => {
                available
            }
        }
    }

    /// Human-readable log line for `record`.
    pub fn message<'a>(&'a self, record: &'a Record) -> ChangeMessage<'a> {
        ChangeMessage { change: self, record }
    }
}

/// Display adapter produced by [`StatusChange::message`].
pub struct ChangeMessage<'a> {
    change: &'a StatusChange,
    record: &'a Record,
}

impl fmt::Display for ChangeMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Record { tag, url } = self.record;
        match *self.change {
            StatusChange::Initial { available: true } => write!(f, "{tag} is available! {url}"),
            StatusChange::Initial { available: false } => write!(f, "{tag} is unavailable."),
            StatusChange::Transition { available: true, held } => {
                write!(f, "{tag} is now available after {}ms! {url}", held.as_millis())
            }
            StatusChange::Transition { available: false, held } => write!(
                f,
                "{tag} is no longer available. Was available for {}ms.",
                held.as_millis()
            ),
        }
    }
}

/// Tracks the previous status of one record.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    last: Availability,
    last_change: Instant,
}

impl StatusTracker {
    pub fn new(started_at: Instant) -> Self {
        Self {
            last: Availability::Unknown,
            last_change: started_at,
        }
    }

    pub fn current(&self) -> Availability {
        self.last
    }

    /// Record a probe result taken at `now`.
    ///
    /// Returns the change to report, or `None` when the status is unchanged.
    pub fn observe(&mut self, available: bool, now: Instant) -> Option<StatusChange> {
        let next = Availability::from(available);
        let change = match self.last {
            prev if prev == next => return None,
            Availability::Unknown => StatusChange::Initial { available },
            _ => StatusChange::Transition {
                available,
                held: now.saturating_duration_since(self.last_change),
            },
        };

        self.last = next;
        self.last_change = now;
        Some(change)
    }
}
