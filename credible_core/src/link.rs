use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    /// Hostname as seen by the client. Accepted for wire compatibility but
    /// never consulted: the domain is always recomputed from `url`.
    #[serde(default)]
    pub domain: String,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Link {
            url: url.into(),
            domain: String::new(),
        }
    }
}

/// One batch of links plus the search query they were found under.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityRequest {
    pub links: Vec<Link>,
    #[serde(default)]
    pub query: Option<String>,
}

impl CredibilityRequest {
    pub fn new(links: Vec<Link>) -> Self {
        CredibilityRequest { links, query: None }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// The query to send to the fact-check source, if one was supplied and is non-empty.
    pub fn fact_check_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// Per-link result. `domain` serializes as `null` when the URL had no usable host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub url: String,
    pub domain: Option<String>,
    pub verdict: String,
    pub label: String,
}
