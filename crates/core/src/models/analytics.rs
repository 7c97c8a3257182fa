use serde::{Deserialize, Serialize};

/// Return figures for a single fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundReturns {
    pub fund_id: String,

    /// Principal invested, in the fund's currency
    pub investment: f64,

    /// Investment scaled by the fund's yearly change
    pub current_value: f64,

    /// Absolute gain/loss: current_value - investment
    pub profit: f64,

    /// Percentage return: (profit / investment) * 100
    pub profit_percentage: f64,
}

/// Portfolio-wide totals, derived on demand from the full fund list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub total_investment: f64,
    pub total_current_value: f64,
    pub total_profit: f64,
    pub total_profit_percentage: f64,
}

/// One slice of an allocation pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub value: f64,
    /// Share of the pie, in percent (0 when the total is zero)
    pub percentage: f64,
}
