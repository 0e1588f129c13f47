use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::canonical_key;

// ---------------------------------------------------------------------
// Reputation table: a priori verdicts keyed by normalized domain.
// ---------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationEntry {
    pub verdict: String,
    pub label: String,
}

impl ReputationEntry {
    pub fn new(verdict: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            verdict: verdict.into(),
            label: label.into(),
        }
    }
}

/// Read-only mapping supplied at startup, looked up with the output of
/// [`crate::normalize`].
///
/// Keys pass through [`canonical_key`] on every way in (`with`, `collect`,
/// deserialize), so `Bücher.example`, `bücher.example` and
/// `xn--bcher-kva.example` are the same entry, as are `x.example:80` and
/// `x.example`. Keys must already be `www.`-stripped.
///
/// Deserializes from a plain JSON object: `{"domain": {"verdict": .., "label": ..}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, ReputationEntry>")]
pub struct ReputationTable {
    entries: HashMap<String, ReputationEntry>,
}

impl ReputationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for tests and fixtures.
    pub fn with(mut self, domain: impl Into<String>, entry: ReputationEntry) -> Self {
        self.entries.insert(canonical_key(&domain.into()), entry);
        self
    }

    pub fn get(&self, domain: &str) -> Option<&ReputationEntry> {
        self.entries.get(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ReputationEntry)> for ReputationTable {
    fn from_iter<I: IntoIterator<Item = (String, ReputationEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(domain, entry)| (canonical_key(&domain), entry))
                .collect(),
        }
    }
}

impl From<HashMap<String, ReputationEntry>> for ReputationTable {
    fn from(entries: HashMap<String, ReputationEntry>) -> Self {
        entries.into_iter().collect()
    }
}
