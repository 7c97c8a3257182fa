use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Market sentiment a news item carries for the funds it mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Lowest and highest impact score a news item may carry.
pub const IMPACT_RANGE: std::ops::RangeInclusive<i8> = -5..=5;

/// A news headline with its estimated impact on related funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: NaiveDate,
    pub sentiment: Sentiment,

    /// Estimated impact on holdings, -5..=5
    pub impact: i8,

    pub summary: String,

    /// Ids of the funds this item affects
    #[serde(default)]
    pub related_funds: Vec<String>,
}

impl NewsItem {
    #[must_use]
    pub fn affects(&self, fund_id: &str) -> bool {
        self.related_funds.iter().any(|id| id == fund_id)
    }
}
