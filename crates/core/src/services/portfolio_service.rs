use crate::models::analytics::{AllocationSlice, PortfolioTotals};
use crate::models::fund::Fund;

use super::return_service::ReturnService;

/// Aggregates per-fund figures into portfolio totals.
///
/// Recomputed on every call: the fund list is small and static, so there
/// is nothing worth caching.
pub struct PortfolioService {
    return_service: ReturnService,
}

impl PortfolioService {
    pub fn new() -> Self {
        Self {
            return_service: ReturnService::new(),
        }
    }

    #[must_use]
    pub fn total_investment(&self, funds: &[Fund]) -> f64 {
        funds.iter().map(|f| f.investment).sum()
    }

    #[must_use]
    pub fn total_current_value(&self, funds: &[Fund]) -> f64 {
        funds
            .iter()
            .map(|f| self.return_service.current_value(f))
            .sum()
    }

    /// Totals across all funds.
    ///
    /// The percentage divides by the total investment, so an empty catalog
    /// gives NaN, the same as a single fund with zero investment.
    #[must_use]
    pub fn totals(&self, funds: &[Fund]) -> PortfolioTotals {
        let total_investment = self.total_investment(funds);
        let total_current_value = self.total_current_value(funds);
        let total_profit = total_current_value - total_investment;

        PortfolioTotals {
            total_investment,
            total_current_value,
            total_profit,
            total_profit_percentage: total_profit / total_investment * 100.0,
        }
    }

    /// Share of the total investment held in each fund, in catalog order.
    /// Labels are the funds' short names.
    #[must_use]
    pub fn allocation(&self, funds: &[Fund]) -> Vec<AllocationSlice> {
        let total = self.total_investment(funds);
        funds
            .iter()
            .map(|f| AllocationSlice {
                label: f.short_name(),
                value: f.investment,
                percentage: if total > 0.0 {
                    f.investment / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
