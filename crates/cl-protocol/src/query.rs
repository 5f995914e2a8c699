use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Sentinel service name meaning "no service filter".
pub const ALL_SERVICES: &str = "ALL";

/// Time-bucketing resolution of a cost report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Granularity {
    Daily,
    Monthly,
    Hourly,
}

impl Granularity {
    /// Canonical wire form expected by the cost-reporting API.
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Daily => "DAILY",
            Granularity::Monthly => "MONTHLY",
            Granularity::Hourly => "HOURLY",
        }
    }

    /// Parse a model-produced granularity value.
    ///
    /// Trims whitespace and upper-cases before matching. Anything outside the
    /// fixed set is a contract violation; the caller is told which value was
    /// offending instead of receiving a silent default.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_uppercase().as_str() {
            "DAILY" => Ok(Granularity::Daily),
            "MONTHLY" => Ok(Granularity::Monthly),
            "HOURLY" => Ok(Granularity::Hourly),
            _ => Err(ValidationError::InvalidGranularity {
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, validated representation of a user's cost question: the only
/// shape the cost-reporting fetch ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredQuery {
    /// `"ALL"` or a cloud-service display name in title case
    /// (e.g. "Amazon Elastic Compute Cloud").
    pub service: String,
    /// Inclusive range start, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub start_date: String,
    /// Range end, same format as `start_date`. Never before `start_date`.
    pub end_date: String,
    /// Report resolution.
    pub granularity: Granularity,
}

impl StructuredQuery {
    /// True when the query spans all services and no SERVICE filter applies.
    pub fn is_all_services(&self) -> bool {
        self.service == ALL_SERVICES
    }
}
