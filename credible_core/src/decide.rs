//credible_core/decide.rs

use crate::{domain::normalize, evidence::FactCheckOutcome, link::{CredibilityRequest, Link, VerdictRecord}, reputation::ReputationTable};

pub const UNASSESSED_VERDICT: &str = "Unassessed";
pub const UNASSESSED_LABEL: &str = "No Fact Check Found";

/// Which signal decided a link: the batch fact-check, the domain table, or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    FactCheck,
    Reputation,
    Unassessed,
}

/// Fixed precedence: fact-check > domain reputation > default.
pub fn resolve_link(
    link: &Link,
    fact_check: Option<&FactCheckOutcome>,
    table: &ReputationTable,
) -> (Tier, VerdictRecord) {
    let domain = normalize(&link.url);

    let (tier, verdict, label) = if let Some(fc) = fact_check {
        (Tier::FactCheck, fc.verdict.clone(), fc.label.clone())
    } else if let Some(entry) = domain.as_deref().and_then(|d| table.get(d)) {
        (Tier::Reputation, entry.verdict.clone(), entry.label.clone())
    } else {
        (Tier::Unassessed, UNASSESSED_VERDICT.to_string(), UNASSESSED_LABEL.to_string())
    };

    let record = VerdictRecord {
        url: link.url.clone(),
        domain,
        verdict,
        label,
    };
    (tier, record)
}

/// Resolve every link, in input order, keeping the deciding tier alongside each record.
pub fn resolve_tiered(
    request: &CredibilityRequest,
    fact_check: Option<&FactCheckOutcome>,
    table: &ReputationTable,
) -> Vec<(Tier, VerdictRecord)> {
    request
        .links
        .iter()
        .map(|link| resolve_link(link, fact_check, table))
        .collect()
}

/// One record per link, same order as `request.links`. Never fails.
pub fn resolve(
    request: &CredibilityRequest,
    fact_check: Option<&FactCheckOutcome>,
    table: &ReputationTable,
) -> Vec<VerdictRecord> {
    resolve_tiered(request, fact_check, table)
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}
