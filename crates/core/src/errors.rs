use thiserror::Error;

/// Unified error type for the entire fund-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lookup ──────────────────────────────────────────────────────
    #[error("Fund not found: {0}")]
    FundNotFound(String),

    // ── Configuration / Input ───────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// `true` if this error means the requested fund does not exist.
    /// Presentation layers use this to show a "not found" view instead of failing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::FundNotFound(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
