//! credible_supervisor
//!
//! Request-facing orchestration layer for `credible_core`.
//!
//! Responsibilities:
//! - talk to the external fact-check API (one call per batch, bounded timeout)
//! - collapse every fact-check failure into "no signal"
//! - invoke the core verdict resolver
//!
//! Non-goals:
//! - no HTTP serving (see `credible_server`)
//! - no caching across requests
//! - no verdict policy (lives in core)

pub mod adapter;
pub mod supervisor;

pub use adapter::{
    FactCheckSource,
    GoogleFactCheck,
    NoFactCheck,
    Unavailable,
};

pub use supervisor::{
    CredibilitySupervisor,
    TierCounts,
};
