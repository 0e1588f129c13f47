//! Credibility supervisor.
//!
//! Orchestration layer around `credible_core`:
//! - owns the read-only reputation table and the check cfg
//! - asks the fact-check source at most once per batch
//! - runs the core resolver over every link
//!
//! Holds no per-request state, so one instance can serve concurrent batches
//! behind an `Arc`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use credible_core::{
    resolve_tiered, CheckCfg, CredibilityRequest, FactCheckOutcome, ReputationTable, Tier,
    VerdictRecord,
};

use crate::adapter::{FactCheckSource, NoFactCheck, Unavailable};

/// How many records each priority tier produced for one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub fact_check: usize,
    pub reputation: usize,
    pub unassessed: usize,
}

impl TierCounts {
    pub fn tally<'a, I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = &'a Tier>,
    {
        let mut counts = TierCounts::default();
        for tier in tiers {
            match tier {
                Tier::FactCheck => counts.fact_check += 1,
                Tier::Reputation => counts.reputation += 1,
                Tier::Unassessed => counts.unassessed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.fact_check + self.reputation + self.unassessed
    }
}

pub struct CredibilitySupervisor {
    cfg: CheckCfg,
    table: Arc<ReputationTable>,
    source: Arc<dyn FactCheckSource>,
}

impl std::fmt::Debug for CredibilitySupervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredibilitySupervisor")
            .field("cfg", &self.cfg)
            .field("reputation_entries", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl CredibilitySupervisor {
    pub fn new(cfg: CheckCfg, table: Arc<ReputationTable>, source: Arc<dyn FactCheckSource>) -> Self {
        Self { cfg, table, source }
    }

    /// Reputation-only supervisor: fact checking disabled regardless of `cfg`.
    pub fn offline(table: Arc<ReputationTable>) -> Self {
        let cfg = CheckCfg {
            fact_check_enabled: false,
            ..CheckCfg::default()
        };
        Self::new(cfg, table, Arc::new(NoFactCheck))
    }

    pub fn cfg(&self) -> &CheckCfg {
        &self.cfg
    }

    pub fn table(&self) -> &ReputationTable {
        &self.table
    }

    /// Raw fact-check result for a batch, keeping the reason when there is none.
    pub async fn fact_check(&self, request: &CredibilityRequest) -> Result<FactCheckOutcome, Unavailable> {
        if !self.cfg.fact_check_enabled {
            return Err(Unavailable::Disabled);
        }
        let query = request.fact_check_query().ok_or(Unavailable::EmptyQuery)?;
        self.source.search(query).await
    }

    /// Best-effort lookup: every failure collapses to `None` and is only logged.
    pub async fn lookup(&self, request: &CredibilityRequest) -> Option<FactCheckOutcome> {
        match self.fact_check(request).await {
            Ok(outcome) => {
                info!(verdict = %outcome.verdict, label = %outcome.label, "fact-check match found");
                Some(outcome)
            }
            Err(Unavailable::NoClaims) => {
                info!("no fact-check found for this query");
                None
            }
            Err(reason @ (Unavailable::Disabled | Unavailable::EmptyQuery)) => {
                debug!(%reason, "fact-check skipped");
                None
            }
            Err(Unavailable::Status(code)) => {
                warn!(status = code, "fact-check API error; check API access/billing");
                None
            }
            Err(err) => {
                warn!(error = %err, "could not process fact-check response");
                None
            }
        }
    }

    /// Resolve a batch and report which tier decided each record.
    pub async fn check_with_counts(&self, request: &CredibilityRequest) -> (Vec<VerdictRecord>, TierCounts) {
        debug!(query = ?request.query, "credibility check received");

        // Must settle before any link is resolved: it decides the tier for all of them.
        let fact_check = self.lookup(request).await;

        info!(links = request.links.len(), "applying checks");
        let resolved = resolve_tiered(request, fact_check.as_ref(), &self.table);
        let counts = TierCounts::tally(resolved.iter().map(|(tier, _)| tier));
        info!(
            fact_check = counts.fact_check,
            reputation = counts.reputation,
            unassessed = counts.unassessed,
            "all checks complete"
        );

        let records = resolved.into_iter().map(|(_, record)| record).collect();
        (records, counts)
    }

    /// One verdict per link, in input order. Never fails.
    pub async fn check(&self, request: &CredibilityRequest) -> Vec<VerdictRecord> {
        self.check_with_counts(request).await.0
    }
}
