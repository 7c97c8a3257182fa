use crate::models::fund::Fund;
use crate::models::news::NewsItem;

/// Data-access abstraction over the fund catalog and its news feed.
///
/// Services never reach for a global fund list. The facade is handed a
/// repository and passes slices of it down, so tests and hosts can swap
/// in their own catalog without touching the computation code.
pub trait FundRepository: Send + Sync {
    /// Human-readable name of this repository (for logs).
    fn name(&self) -> &str;

    /// All funds, in catalog order.
    fn funds(&self) -> &[Fund];

    /// All news items, in storage order.
    fn news(&self) -> &[NewsItem];

    /// Look up a fund by its id.
    fn find_fund(&self, id: &str) -> Option<&Fund> {
        self.funds().iter().find(|f| f.id == id)
    }
}
