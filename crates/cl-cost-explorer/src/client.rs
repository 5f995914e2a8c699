//! Cost Explorer client wrapper.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_costexplorer::Client;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity as CeGranularity,
};

use cl_protocol::{Granularity, StructuredQuery};

use crate::error::{CostError, CostResult};
use crate::report::{CostReport, METRIC};

/// Thin wrapper over the Cost Explorer SDK client.
pub struct CostClient {
    client: Client,
}

impl CostClient {
    /// Build from the default AWS credential/config chain, with an optional
    /// region override (the CLI's persisted default region).
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Wrap an already-built SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the cost report described by an already-validated query.
    ///
    /// Single call, no pagination or retries.
    pub async fn fetch(&self, query: &StructuredQuery) -> CostResult<CostReport> {
        let time_period = DateInterval::builder()
            .start(&query.start_date)
            .end(&query.end_date)
            .build()
            .map_err(|e| CostError::Request(e.to_string()))?;

        tracing::debug!(
            service = %query.service,
            start_date = %query.start_date,
            end_date = %query.end_date,
            granularity = %query.granularity,
            "fetching cost and usage"
        );

        let output = self
            .client
            .get_cost_and_usage()
            .time_period(time_period)
            .granularity(sdk_granularity(query.granularity))
            .metrics(METRIC)
            .set_filter(service_filter(query))
            .send()
            .await
            .map_err(|e| CostError::Request(format!("{}", DisplayErrorContext(&e))))?;

        CostReport::from_results(output.results_by_time())
    }
}

/// Map the contract granularity onto the SDK enum.
fn sdk_granularity(granularity: Granularity) -> CeGranularity {
    match granularity {
        Granularity::Daily => CeGranularity::Daily,
        Granularity::Monthly => CeGranularity::Monthly,
        Granularity::Hourly => CeGranularity::Hourly,
    }
}

/// SERVICE dimension filter for the query, or none for the "ALL" sentinel.
fn service_filter(query: &StructuredQuery) -> Option<Expression> {
    if query.is_all_services() {
        return None;
    }
    Some(
        Expression::builder()
            .dimensions(
                DimensionValues::builder()
                    .key(Dimension::Service)
                    .values(&query.service)
                    .build(),
            )
            .build(),
    )
}
