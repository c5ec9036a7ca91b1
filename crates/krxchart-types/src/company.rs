//! Listed-company roster entries.

use serde::{Deserialize, Serialize};

use crate::Ticker;

/// One row of the listed-company roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company display name, exactly as published (e.g., "삼성전자").
    pub name: String,
    /// Exchange ticker code.
    pub code: Ticker,
}

impl CompanyRecord {
    /// Creates a new roster entry.
    #[must_use]
    pub fn new(name: impl Into<String>, code: Ticker) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}

impl std::fmt::Display for CompanyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
