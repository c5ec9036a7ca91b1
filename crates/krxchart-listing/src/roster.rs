//! In-memory view of the listed-company roster.

use krxchart_types::CompanyRecord;

/// The listed-company roster, in the order it was published.
#[derive(Debug, Clone, Default)]
pub struct CompanyRoster {
    records: Vec<CompanyRecord>,
}

impl CompanyRoster {
    /// Wraps an already-fetched list of records.
    #[must_use]
    pub const fn new(records: Vec<CompanyRecord>) -> Self {
        Self { records }
    }

    /// Returns every record whose name equals `name` exactly.
    ///
    /// The comparison is case- and whitespace-sensitive. Matches keep
    /// roster order.
    pub fn matches<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a CompanyRecord> {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// Returns the first record whose name equals `name` exactly.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Searches names and codes by substring (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&CompanyRecord> {
        let pattern = pattern.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&pattern) || r.code.as_str().contains(&pattern)
            })
            .collect()
    }

    /// Returns all records as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.records.iter()
    }

    /// Returns the total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CompanyRecord>> for CompanyRoster {
    fn from(records: Vec<CompanyRecord>) -> Self {
        Self::new(records)
    }
}
