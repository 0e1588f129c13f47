//! Cross-origin policy for the browser extension.
//!
//! Allowed origins are exact strings or simple globs where `*` matches any
//! run of characters (`https://*.google.com`, `chrome-extension://*`).

use std::sync::Arc;

use axum::http::{request::Parts, HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    let segments: Vec<&str> = pattern.split('*').collect();
    match segments.as_slice() {
        [] => false,
        [exact] => *exact == origin,
        [first, middle @ .., last] => {
            let Some(mut rest) = origin.strip_prefix(first) else {
                return false;
            };
            for seg in middle {
                match rest.find(seg) {
                    Some(i) => rest = &rest[i + seg.len()..],
                    None => return false,
                }
            }
            rest.ends_with(last)
        }
    }
}

/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of answering with `*`.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let patterns: Arc<Vec<String>> = Arc::new(allowed_origins.to_vec());

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| patterns.iter().any(|p| origin_matches(p, o)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
