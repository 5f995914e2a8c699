//! Cost report shapes and rendering.

use std::fmt::Write;

use aws_sdk_costexplorer::types::ResultByTime;

use cl_protocol::ALL_SERVICES;

use crate::error::{CostError, CostResult};

/// Metric requested from Cost Explorer and read back out of each period.
pub const METRIC: &str = "UnblendedCost";

/// One time bucket of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct CostPeriod {
    pub start: String,
    pub end: String,
    pub amount: String,
    pub unit: String,
    /// Set by the billing backend while the period is still settling.
    pub estimated: bool,
}

/// Cost report keyed by time period, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostReport {
    pub periods: Vec<CostPeriod>,
}

impl CostReport {
    /// Convert raw SDK results into the report shape.
    ///
    /// Shape gaps (a result without a time period or without the requested
    /// metric) are `MissingData` errors rather than silently dropped rows.
    pub fn from_results(results: &[ResultByTime]) -> CostResult<Self> {
        let mut periods = Vec::with_capacity(results.len());
        for result in results {
            let interval = result
                .time_period()
                .ok_or_else(|| CostError::MissingData("result without a time period".into()))?;
            let metric = result
                .total()
                .and_then(|total| total.get(METRIC))
                .ok_or_else(|| CostError::MissingData(format!("result without a {METRIC} total")))?;
            let amount = metric
                .amount()
                .ok_or_else(|| CostError::MissingData("metric without an amount".into()))?;

            periods.push(CostPeriod {
                start: interval.start().to_string(),
                end: interval.end().to_string(),
                amount: amount.to_string(),
                unit: metric.unit().unwrap_or("USD").to_string(),
                estimated: result.estimated(),
            });
        }
        Ok(Self { periods })
    }

    /// Sum of all parseable period amounts, with the report's currency unit.
    pub fn total(&self) -> Option<(f64, &str)> {
        let first = self.periods.first()?;
        let sum = self
            .periods
            .iter()
            .filter_map(|p| p.amount.parse::<f64>().ok())
            .sum();
        Some((sum, first.unit.as_str()))
    }

    /// Whether any period is still an estimate.
    pub fn has_estimates(&self) -> bool {
        self.periods.iter().any(|p| p.estimated)
    }

    /// Human-readable summary table for stdout.
    pub fn render(&self, service: &str) -> String {
        let label = if service == ALL_SERVICES {
            "all services"
        } else {
            service
        };

        let mut out = String::new();
        let _ = writeln!(out, "Cost summary for {label}");

        if self.periods.is_empty() {
            let _ = writeln!(out, "  no cost data for this period");
            return out;
        }

        for p in &self.periods {
            let marker = if p.estimated { " (estimated)" } else { "" };
            let _ = writeln!(
                out,
                "  {} .. {}  {} {}{}",
                p.start, p.end, p.amount, p.unit, marker
            );
        }

        if let Some((total, unit)) = self.total() {
            let _ = writeln!(out, "  total: {total:.2} {unit}");
        }

        out
    }
}
