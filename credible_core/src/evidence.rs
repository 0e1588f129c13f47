use serde::{Deserialize, Serialize};

/// Rating used when a review carries no `textualRating`.
pub const DEFAULT_RATING: &str = "RATED";

/// Batch-wide signal from the external fact-check source.
///
/// Built from the first review of the first claim returned for the query;
/// every link in the batch receives the same outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckOutcome {
    pub verdict: String,
    pub label: String,
}

impl FactCheckOutcome {
    pub fn from_review(textual_rating: Option<&str>, publisher: &str) -> Self {
        let rating = textual_rating.unwrap_or(DEFAULT_RATING);
        FactCheckOutcome {
            verdict: format!("Fact Checked CLAIM: {rating}"),
            label: format!("CLAIM RATED {} by {publisher}", rating.to_uppercase()),
        }
    }
}
