//! A single monitored entry.

use std::fmt;

/// One tag/URL pair drawn from the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Human label used in log lines.
    pub tag: String,
    /// Code URL to poll.
    pub url: String,
}

impl Record {
    pub fn new(tag: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag, self.url)
    }
}
