//! Result validation and normalization for model responses.
//!
//! Runs once per invocation against whatever text a backend produced. The
//! stripping, parsing, and contract checks all live here so the per-provider
//! transports never touch JSON or the enumeration.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::{ValidationError, ValidationResult};
use crate::query::{Granularity, StructuredQuery};

/// Raw model output before contract checks. Every field is optional so a
/// missing key is reported by name instead of failing the whole parse.
#[derive(Debug, Deserialize)]
struct RawQuery {
    service: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    granularity: Option<String>,
}

/// Strip Markdown code-fence wrapping from model output.
///
/// Handles a leading fence with or without a `json` language tag and a
/// trailing fence. Idempotent: already-clean text comes back unchanged.
pub fn strip_code_fences(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
        if let Some(tag) = cleaned.get(..4) {
            if tag.eq_ignore_ascii_case("json") {
                cleaned = &cleaned[4..];
            }
        }
        cleaned = cleaned.trim_start();
    }

    if let Some(rest) = cleaned.trim_end().strip_suffix("```") {
        cleaned = rest;
    }

    cleaned.trim()
}

/// Validate a raw model response against the structured-query contract.
///
/// Enforces presence of all four fields, membership of `granularity` in the
/// fixed enumeration, and `start_date <= end_date`. Regardless of which
/// backend produced the text, a violation surfaces as a typed error and the
/// query is never partially populated.
pub fn validate(raw: &str) -> ValidationResult<StructuredQuery> {
    let cleaned = strip_code_fences(raw);

    let parsed: RawQuery =
        serde_json::from_str(cleaned).map_err(|_| ValidationError::MalformedResponse {
            text: cleaned.to_string(),
        })?;

    let service = require_field("service", parsed.service)?;
    let start_date = require_field("start_date", parsed.start_date)?;
    let end_date = require_field("end_date", parsed.end_date)?;
    let granularity = require_field("granularity", parsed.granularity)?;
    let granularity = Granularity::parse(&granularity)?;

    let start = parse_point("start_date", &start_date)?;
    let end = parse_point("end_date", &end_date)?;
    if start > end {
        return Err(ValidationError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok(StructuredQuery {
        service,
        start_date,
        end_date,
        granularity,
    })
}

fn require_field(field: &'static str, value: Option<String>) -> ValidationResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Parse a date field as `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
fn parse_point(field: &'static str, value: &str) -> ValidationResult<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
