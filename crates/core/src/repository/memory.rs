use std::collections::HashSet;

use tracing::debug;

use crate::errors::CoreError;
use crate::models::fund::Fund;
use crate::models::news::{NewsItem, IMPACT_RANGE};

use super::catalog::{reference_funds, reference_news};
use super::traits::FundRepository;

/// Immutable in-memory catalog. Built once, read everywhere.
#[derive(Debug, Clone)]
pub struct InMemoryFundRepository {
    funds: Vec<Fund>,
    news: Vec<NewsItem>,
}

impl InMemoryFundRepository {
    /// Build a repository from already-constructed records.
    ///
    /// Rejects duplicate fund ids and news impacts outside -5..=5.
    pub fn new(funds: Vec<Fund>, news: Vec<NewsItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for fund in &funds {
            if !seen.insert(fund.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate fund id '{}'",
                    fund.id
                )));
            }
        }
        if let Some(item) = news.iter().find(|n| !IMPACT_RANGE.contains(&n.impact)) {
            return Err(CoreError::ValidationError(format!(
                "News item '{}' has impact {} outside -5..=5",
                item.id, item.impact
            )));
        }

        debug!(funds = funds.len(), news = news.len(), "Fund repository built");
        Ok(Self { funds, news })
    }

    /// The seeded four-fund catalog with its sample news feed.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            funds: reference_funds(),
            news: reference_news(),
        }
    }

    /// Build a repository from JSON arrays of funds and news items.
    pub fn from_json(funds_json: &str, news_json: &str) -> Result<Self, CoreError> {
        let funds: Vec<Fund> = serde_json::from_str(funds_json)?;
        let news: Vec<NewsItem> = serde_json::from_str(news_json)?;
        Self::new(funds, news)
    }
}

impl Default for InMemoryFundRepository {
    fn default() -> Self {
        Self::reference()
    }
}

impl FundRepository for InMemoryFundRepository {
    fn name(&self) -> &str {
        "InMemory"
    }

    fn funds(&self) -> &[Fund] {
        &self.funds
    }

    fn news(&self) -> &[NewsItem] {
        &self.news
    }
}
