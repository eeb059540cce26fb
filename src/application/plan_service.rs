use crate::domain::{
    errors::{AppError, FetchResult},
    events::{EventDispatcher, InMemoryEventDispatcher, PlanDataEvent},
    logging::{LogComponent, get_logger},
    plan_data::{CustomPlanInput, CustomPlanService, NormalizedChart, PlanNormalizer, PlanSelector, PlanSeries},
};
use crate::infrastructure::http::RoamPlanHttpClient;

/// Application service coordinating one fetch-normalize cycle: remote plan
/// tables plus locally derived custom plans in, chart-ready data out.
pub struct PlanApplicationService {
    http_client: RoamPlanHttpClient,
    normalizer: PlanNormalizer,
    custom_plan_service: CustomPlanService,
    events: InMemoryEventDispatcher,
}

impl Default for PlanApplicationService {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanApplicationService {
    pub fn new() -> Self {
        Self {
            http_client: RoamPlanHttpClient::new(),
            normalizer: PlanNormalizer::new(),
            custom_plan_service: CustomPlanService::new(),
            events: InMemoryEventDispatcher::new(),
        }
    }

    pub fn with_client(http_client: RoamPlanHttpClient) -> Self {
        Self { http_client, ..Self::new() }
    }

    pub fn events_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.events
    }

    /// Fetch the selected remote plans with a single POST. An empty
    /// selection never hits the network.
    pub async fn load_plan_series(&self, selectors: &[PlanSelector]) -> FetchResult<Vec<PlanSeries>> {
        if selectors.is_empty() {
            return Ok(Vec::new());
        }

        get_logger().info(
            LogComponent::Application("PlanService"),
            &format!("📡 Loading {} selected plan series", selectors.len()),
        );

        match self.http_client.fetch_plan_series(selectors).await {
            Ok(series) => {
                self.events.publish_plan_data_event(PlanDataEvent::PlanDataFetched {
                    selectors: selectors.to_vec(),
                    series_count: series.len(),
                });
                Ok(series)
            }
            Err(error) => {
                self.events.publish_plan_data_event(PlanDataEvent::PlanDataFetchFailed {
                    reason: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Validate a custom plan form entry and derive its single-point series
    pub fn add_custom_plan(&self, input: &CustomPlanInput) -> Result<PlanSeries, AppError> {
        match self.custom_plan_service.to_series(input) {
            Ok(series) => {
                let unit_price = series
                    .points()
                    .first()
                    .and_then(|p| p.unit_price.map(|u| u.value()))
                    .unwrap_or_default();
                self.events.publish_plan_data_event(PlanDataEvent::CustomPlanAdded {
                    name: series.name().to_string(),
                    unit_price,
                });
                Ok(series)
            }
            Err(error) => {
                self.events.publish_plan_data_event(PlanDataEvent::CustomPlanRejected {
                    reason: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Align remote and custom series onto the shared breakpoint axis
    pub fn normalize(&self, remote: &[PlanSeries], custom: &[PlanSeries]) -> NormalizedChart {
        let mut all = Vec::with_capacity(remote.len() + custom.len());
        all.extend_from_slice(remote);
        all.extend_from_slice(custom);
        self.normalizer.normalize(&all)
    }
}
