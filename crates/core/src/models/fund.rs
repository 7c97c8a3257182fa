use serde::{Deserialize, Serialize};

/// Percentage price changes of a fund over the standard reporting periods.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FundChanges {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// One of a fund's top holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    /// Share of the fund, in percent
    pub weight: f64,
    /// Daily change of the holding, in percent
    pub change: f64,
}

/// A labelled percentage in a sector or geographic breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(alias = "sector", alias = "region")]
    pub label: String,
    pub percentage: f64,
}

impl Allocation {
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }
}

/// An investment fund held in the portfolio.
///
/// Funds are static catalog data: created once when the repository is built
/// and never mutated afterwards. `investment` is the principal, denominated
/// in `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Stable slug, used for lookups (e.g., "franklin-technology")
    pub id: String,

    pub isin: String,

    /// Full display name (e.g., "Franklin Technology Fund")
    pub name: String,

    /// Current net asset value per share
    #[serde(rename = "currentNAV")]
    pub current_nav: f64,

    /// ISO currency code the NAV and investment are quoted in
    pub currency: String,

    pub changes: FundChanges,

    /// Principal invested, same currency as the NAV
    pub investment: f64,

    #[serde(default)]
    pub top_holdings: Vec<Holding>,

    #[serde(default)]
    pub sector_allocation: Vec<Allocation>,

    #[serde(default)]
    pub geographic_exposure: Vec<Allocation>,
}

impl Fund {
    /// Sum of a breakdown's percentages. Expected to be about 100 but never enforced.
    #[must_use]
    pub fn breakdown_total(breakdown: &[Allocation]) -> f64 {
        breakdown.iter().map(|a| a.percentage).sum()
    }

    /// Name shortened to its first two words, used as a chart legend label.
    #[must_use]
    pub fn short_name(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
