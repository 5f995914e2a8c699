//! Cost Explorer error types.

use thiserror::Error;

/// Errors that can occur fetching or shaping a cost report.
#[derive(Debug, Error)]
pub enum CostError {
    /// SDK or transport failure reaching Cost Explorer (includes rejected
    /// AWS credentials).
    #[error("cost explorer request failed: {0}")]
    Request(String),

    /// The response arrived but lacked a shape the report relies on.
    #[error("cost explorer response missing data: {0}")]
    MissingData(String),
}

/// Convenience alias for cost-fetch results.
pub type CostResult<T> = Result<T, CostError>;
