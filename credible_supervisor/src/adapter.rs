//! Fact-check adapter: turn the external claim-search API into a batch-wide
//! `FactCheckOutcome`.
//!
//! Every way the call can come back empty-handed is a variant of [`Unavailable`].
//! The supervisor collapses those into "no signal"; nothing here is ever
//! surfaced to the caller of a credibility check.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use credible_core::{CheckCfg, FactCheckOutcome};

/// Why a fact-check lookup produced no outcome.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("fact checking is disabled")]
    Disabled,
    #[error("no query to check")]
    EmptyQuery,
    #[error("no claims found for query")]
    NoClaims,
    #[error("fact-check request timed out")]
    Timeout,
    #[error("fact-check API returned status {0}")]
    Status(u16),
    #[error("fact-check request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed fact-check response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for Unavailable {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Unavailable::Timeout
        } else {
            Unavailable::Transport(e)
        }
    }
}

/// Trait: look up the first fact-check for a query.
///
/// Implementations make at most one outbound call and never retry.
#[async_trait]
pub trait FactCheckSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<FactCheckOutcome, Unavailable>;
}

/// Source used when no API key is configured. Always `Disabled`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFactCheck;

#[async_trait]
impl FactCheckSource for NoFactCheck {
    async fn search(&self, _query: &str) -> Result<FactCheckOutcome, Unavailable> {
        Err(Unavailable::Disabled)
    }
}

// ---------------------------------------------------------------------
// Google Fact Check Tools `claims:search`
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Option<Vec<Claim>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claim {
    #[serde(default)]
    claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimReview {
    #[serde(default)]
    textual_rating: Option<String>,
    #[serde(default)]
    publisher: Option<Publisher>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    #[serde(default)]
    name: Option<String>,
}

impl ClaimSearchResponse {
    /// First review of the first claim, in the order the API returned them.
    fn first_outcome(&self) -> Result<FactCheckOutcome, Unavailable> {
        let claim = self
            .claims
            .as_deref()
            .and_then(|c| c.first())
            .ok_or(Unavailable::NoClaims)?;
        let review = claim
            .claim_review
            .first()
            .ok_or_else(|| Unavailable::Malformed("claim has no claimReview".to_string()))?;
        let publisher = review
            .publisher
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .ok_or_else(|| Unavailable::Malformed("claimReview has no publisher.name".to_string()))?;

        Ok(FactCheckOutcome::from_review(
            review.textual_rating.as_deref(),
            publisher,
        ))
    }
}

/// Client for the Google Fact Check Tools API.
#[derive(Clone, Debug)]
pub struct GoogleFactCheck {
    client: Client,
    endpoint: String,
    api_key: String,
    page_size: u32,
}

impl GoogleFactCheck {
    /// The request timeout comes from `cfg.timeout` and bounds the whole call,
    /// body included.
    pub fn new(api_key: impl Into<String>, cfg: &CheckCfg) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("credible/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            api_key: api_key.into(),
            page_size: cfg.page_size,
        })
    }
}

#[async_trait]
impl FactCheckSource for GoogleFactCheck {
    async fn search(&self, query: &str) -> Result<FactCheckOutcome, Unavailable> {
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("key", self.api_key.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Unavailable::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: ClaimSearchResponse =
            serde_json::from_slice(&body).map_err(|e| Unavailable::Malformed(e.to_string()))?;
        parsed.first_outcome()
    }
}
