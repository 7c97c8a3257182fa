use crate::models::analytics::FundReturns;
use crate::models::fund::Fund;

/// Computes a fund's current value and profit from its yearly change.
///
/// Current value scales the original investment by the yearly percentage
/// change only. The NAV does not enter the formula: units bought
/// (`investment / nav`) times the current NAV cancels out, so it is left out.
///
/// Pure business logic, no I/O. A zero investment yields a NaN or infinite
/// percentage; catalogs are expected never to carry one.
pub struct ReturnService;

impl ReturnService {
    pub fn new() -> Self {
        Self
    }

    /// `investment * (1 + yearly / 100)`
    #[must_use]
    pub fn current_value(&self, fund: &Fund) -> f64 {
        fund.investment * (1.0 + fund.changes.yearly / 100.0)
    }

    #[must_use]
    pub fn profit(&self, fund: &Fund) -> f64 {
        self.current_value(fund) - fund.investment
    }

    #[must_use]
    pub fn profit_percentage(&self, fund: &Fund) -> f64 {
        self.profit(fund) / fund.investment * 100.0
    }

    /// All return figures for one fund.
    #[must_use]
    pub fn fund_returns(&self, fund: &Fund) -> FundReturns {
        let current_value = self.current_value(fund);
        let profit = current_value - fund.investment;
        FundReturns {
            fund_id: fund.id.clone(),
            investment: fund.investment,
            current_value,
            profit,
            profit_percentage: profit / fund.investment * 100.0,
        }
    }
}

impl Default for ReturnService {
    fn default() -> Self {
        Self::new()
    }
}
