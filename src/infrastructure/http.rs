use crate::domain::{
    errors::{AppError, FetchResult},
    logging::{LogComponent, get_logger},
    plan_data::{DataVolume, PackagePrice, PlanPoint, PlanSelector, PlanSeries, UnitPrice},
};
use crate::log_warn;
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

/// POST body for the roamplan API: the selected operator/series pairs
#[derive(Debug, Serialize)]
pub struct PlanQueryRequest<'a> {
    pub queries: &'a [PlanSelector],
}

/// One remote plan record: parallel arrays of breakpoints and prices
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecordDto {
    pub operator: String,
    pub series: String,
    #[serde(default)]
    pub data_volume: Vec<f64>,
    #[serde(default)]
    pub unit_price: Vec<Option<f64>>,
    #[serde(default)]
    pub package_price: Option<Vec<Option<f64>>>,
}

impl PlanRecordDto {
    /// Pair up the parallel arrays into a plan series. Records whose price
    /// array does not line up with the breakpoint array are unusable; a
    /// package array that does not line up is dropped on its own.
    pub fn into_series(self) -> Option<PlanSeries> {
        if self.unit_price.len() != self.data_volume.len() {
            log_warn!(
                LogComponent::Infrastructure("RoamPlanHttpClient"),
                "Skipping record {} - {}: {} breakpoints but {} unit prices",
                self.operator,
                self.series,
                self.data_volume.len(),
                self.unit_price.len()
            );
            return None;
        }

        let package_prices = match self.package_price {
            Some(prices) if prices.len() == self.data_volume.len() => prices,
            Some(_) => {
                log_warn!(
                    LogComponent::Infrastructure("RoamPlanHttpClient"),
                    "Record {} - {}: package price array length mismatch, ignoring it",
                    self.operator,
                    self.series
                );
                vec![None; self.data_volume.len()]
            }
            None => vec![None; self.data_volume.len()],
        };

        let points = self
            .data_volume
            .iter()
            .zip(self.unit_price.iter().zip(package_prices.iter()))
            .map(|(volume, (unit, package))| {
                PlanPoint::new(
                    DataVolume::from(*volume),
                    unit.map(UnitPrice::from),
                    package.map(PackagePrice::from),
                )
            })
            .collect();

        Some(PlanSeries::with_points(format!("{} - {}", self.operator, self.series), points))
    }
}

/// Convert a response batch, dropping unusable records
pub fn records_to_series(records: Vec<PlanRecordDto>) -> Vec<PlanSeries> {
    records.into_iter().filter_map(PlanRecordDto::into_series).collect()
}

/// HTTP client for the roamplan worker API
#[derive(Clone)]
pub struct RoamPlanHttpClient {
    base_url: String,
}

impl Default for RoamPlanHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RoamPlanHttpClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://roamplan-api.account-9cc.workers.dev/".to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Fetch the price tables for the selected plans with a single POST.
    /// No retry, no backoff: failures are reported to the caller, which
    /// falls back to an empty result set.
    pub async fn fetch_plan_series(
        &self,
        selectors: &[PlanSelector],
    ) -> FetchResult<Vec<PlanSeries>> {
        get_logger().info(
            LogComponent::Infrastructure("RoamPlanHttpClient"),
            &format!("📡 POST {} queries to {}", selectors.len(), self.base_url),
        );

        let body = serde_json::to_string(&PlanQueryRequest { queries: selectors })
            .map_err(|e| AppError::ParseError(format!("Failed to serialize queries: {}", e)))?;

        let response = Request::post(&self.base_url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AppError::NetworkError(format!("Failed to build request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let records: Vec<PlanRecordDto> = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse response: {:?}", e)))?;

        let series = records_to_series(records);

        get_logger().info(
            LogComponent::Infrastructure("RoamPlanHttpClient"),
            &format!("✅ Received {} plan series", series.len()),
        );

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_pairs_parallel_arrays() {
        let json = r#"{
            "operator": "CTM",
            "series": "simOnly",
            "dataVolume": [10.0, 20.0],
            "unitPrice": [5.0, 4.0],
            "packagePrice": [50.0, 80.0]
        }"#;
        let record: PlanRecordDto = serde_json::from_str(json).unwrap();
        let series = record.into_series().unwrap();

        assert_eq!(series.name(), "CTM - simOnly");
        assert_eq!(series.count(), 2);
        assert_eq!(series.points()[1].unit_price.unwrap().value(), 4.0);
        assert_eq!(series.points()[1].package_price.unwrap().value(), 80.0);
    }

    #[test]
    fn mismatched_unit_prices_drop_the_record() {
        let json = r#"{
            "operator": "CMHK",
            "series": "publicPlanTwo",
            "dataVolume": [10.0, 20.0],
            "unitPrice": [5.0]
        }"#;
        let record: PlanRecordDto = serde_json::from_str(json).unwrap();
        assert!(record.into_series().is_none());
    }

    #[test]
    fn mismatched_package_prices_are_ignored_alone() {
        let json = r#"{
            "operator": "Three",
            "series": "diy",
            "dataVolume": [10.0],
            "unitPrice": [5.0],
            "packagePrice": [50.0, 60.0]
        }"#;
        let record: PlanRecordDto = serde_json::from_str(json).unwrap();
        let series = record.into_series().unwrap();
        assert_eq!(series.points()[0].unit_price.unwrap().value(), 5.0);
        assert!(series.points()[0].package_price.is_none());
    }

    #[test]
    fn null_unit_prices_become_gaps() {
        let json = r#"{
            "operator": "CUHK",
            "series": "noContractPlan",
            "dataVolume": [10.0, 20.0],
            "unitPrice": [null, 6.0]
        }"#;
        let record: PlanRecordDto = serde_json::from_str(json).unwrap();
        let series = record.into_series().unwrap();
        assert!(series.points()[0].unit_price.is_none());
        assert_eq!(series.points()[1].unit_price.unwrap().value(), 6.0);
    }

    #[test]
    fn query_body_shape_matches_api() {
        use crate::domain::plan_data::Operator;
        let queries =
            vec![PlanSelector::new(Operator::Ctm, "simOnly"), PlanSelector::new(Operator::Three, "diy")];
        let body = serde_json::to_string(&PlanQueryRequest { queries: &queries }).unwrap();
        assert_eq!(
            body,
            r#"{"queries":[{"operator":"CTM","series":"simOnly"},{"operator":"Three","series":"diy"}]}"#
        );
    }
}
