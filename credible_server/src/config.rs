//! Process configuration: environment variables (optionally from `.env`),
//! read once at startup.

use std::fmt;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use credible_core::{usable_api_key, CheckCfg, ReputationTable};
use credible_supervisor::{CredibilitySupervisor, FactCheckSource, GoogleFactCheck, NoFactCheck};

pub const API_KEY_VAR: &str = "GOOGLE_FACT_CHECK_API_KEY";
pub const FACT_CHECK_URL_VAR: &str = "FACT_CHECK_URL";
pub const FACT_CHECK_TIMEOUT_VAR: &str = "FACT_CHECK_TIMEOUT_MS";
pub const LISTEN_ADDR_VAR: &str = "CREDIBLE_LISTEN_ADDR";
pub const REPUTATION_PATH_VAR: &str = "CREDIBLE_REPUTATION_PATH";
pub const ALLOWED_ORIGINS_VAR: &str = "CREDIBLE_ALLOWED_ORIGINS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Origins the browser extension and the search pages it runs on call from.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://127.0.0.1:8000",
    "http://localhost:8000",
    "https://www.google.com",
    "https://*.google.com",
    "chrome-extension://*",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CREDIBLE_LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid FACT_CHECK_TIMEOUT_MS {value:?}: expected a positive number of milliseconds")]
    Timeout { value: String },
    #[error("cannot read reputation table {}: {source}", .path.display())]
    ReputationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse reputation table {}: {source}", .path.display())]
    ReputationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot build fact-check client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    /// Only set when the configured key is usable; see [`usable_api_key`].
    pub api_key: Option<String>,
    pub check: CheckCfg,
    /// JSON object `{domain: {verdict, label}}`. `None` means an empty table.
    pub reputation_path: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("listen_addr", &self.listen_addr)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("check", &self.check)
            .field("reputation_path", &self.reputation_path)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let raw_addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::ListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let raw_key = get(API_KEY_VAR);
        let api_key = usable_api_key(raw_key.as_deref()).map(str::to_string);

        let mut check = CheckCfg::for_api_key(api_key.as_deref());
        if let Some(url) = get(FACT_CHECK_URL_VAR) {
            check.endpoint = url.trim().to_string();
        }
        if let Some(raw) = get(FACT_CHECK_TIMEOUT_VAR) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::Timeout { value: raw.clone() })?;
            check.timeout = Duration::from_millis(ms);
        }

        let allowed_origins = match get(ALLOWED_ORIGINS_VAR) {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            listen_addr,
            api_key,
            check,
            reputation_path: get(REPUTATION_PATH_VAR).map(PathBuf::from),
            allowed_origins,
        })
    }

    pub fn load_reputation(&self) -> Result<ReputationTable, ConfigError> {
        let Some(path) = &self.reputation_path else {
            return Ok(ReputationTable::new());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReputationRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::ReputationParse {
            path: path.clone(),
            source,
        })
    }

    /// Wire the supervisor: reputation table from disk, Google client only when enabled.
    pub fn build_supervisor(&self) -> Result<CredibilitySupervisor, ConfigError> {
        let table = Arc::new(self.load_reputation()?);
        let source: Arc<dyn FactCheckSource> = match (&self.api_key, self.check.fact_check_enabled) {
            (Some(key), true) => Arc::new(GoogleFactCheck::new(key.clone(), &self.check)?),
            _ => Arc::new(NoFactCheck),
        };
        Ok(CredibilitySupervisor::new(self.check.clone(), table, source))
    }
}
