use std::time::Duration;

/// Placeholder value shipped in sample `.env` files. Treated exactly like a missing key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_FALLBACK_KEY";

pub const DEFAULT_FACT_CHECK_URL: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";

#[derive(Clone, Debug)]
pub struct CheckCfg {
    /// Decided once at startup; per-request code never looks at the key itself.
    pub fact_check_enabled: bool,
    pub endpoint: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for CheckCfg {
    fn default() -> Self {
        Self {
            fact_check_enabled: false,
            endpoint: DEFAULT_FACT_CHECK_URL.to_string(),
            page_size: 1,
            timeout: Duration::from_secs(5),
        }
    }
}

impl CheckCfg {
    /// Default cfg with the enabled flag derived from the configured API key.
    pub fn for_api_key(api_key: Option<&str>) -> Self {
        Self {
            fact_check_enabled: usable_api_key(api_key).is_some(),
            ..Self::default()
        }
    }
}

/// Trimmed key if it can be sent upstream; `None` for blank, redacted or placeholder keys.
///
/// A key containing `...` is a redacted copy pasted from a dashboard or doc
/// (`AIza...`) and is rejected on purpose, same as the placeholder.
pub fn usable_api_key(raw: Option<&str>) -> Option<&str> {
    let key = raw?.trim();
    if key.is_empty() || key == PLACEHOLDER_API_KEY || key.contains("...") {
        return None;
    }
    Some(key)
}
