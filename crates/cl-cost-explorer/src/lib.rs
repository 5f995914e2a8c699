//! AWS Cost Explorer fetch for CostLens.
//!
//! Consumes a validated `StructuredQuery`, the only shape this crate
//! accepts, and returns a cost report keyed by time period.

pub mod client;
pub mod error;
pub mod report;

pub use client::CostClient;
pub use error::{CostError, CostResult};
pub use report::{CostPeriod, CostReport, METRIC};
