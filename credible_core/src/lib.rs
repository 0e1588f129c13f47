pub mod domain;
pub mod reputation;

pub mod link;
pub mod evidence;
pub mod cfg;
pub mod decide;

pub use domain::{normalize, canonical_key};
pub use reputation::{ReputationEntry, ReputationTable};

pub use link::{Link, CredibilityRequest, VerdictRecord};
pub use evidence::{FactCheckOutcome, DEFAULT_RATING};
pub use cfg::{CheckCfg, usable_api_key, PLACEHOLDER_API_KEY, DEFAULT_FACT_CHECK_URL};
pub use decide::{Tier, resolve_link, resolve_tiered, resolve, UNASSESSED_VERDICT, UNASSESSED_LABEL};
