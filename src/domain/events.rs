use crate::domain::plan_data::PlanSelector;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Events related to plan data
#[derive(Debug, Clone)]
pub enum PlanDataEvent {
    PlanDataFetched {
        selectors: Vec<PlanSelector>,
        series_count: usize,
    },
    PlanDataFetchFailed {
        reason: String,
    },
    CustomPlanAdded {
        name: String,
        unit_price: f64,
    },
    CustomPlanRejected {
        reason: String,
    },
}

impl DomainEvent for PlanDataEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlanDataEvent::PlanDataFetched { .. } => "PlanDataFetched",
            PlanDataEvent::PlanDataFetchFailed { .. } => "PlanDataFetchFailed",
            PlanDataEvent::CustomPlanAdded { .. } => "CustomPlanAdded",
            PlanDataEvent::CustomPlanRejected { .. } => "CustomPlanRejected",
        }
    }
}

/// Events related to chart
#[derive(Debug, Clone)]
pub enum ChartEvent {
    ChartDataUpdated {
        breakpoint_count: usize,
        series_count: usize,
    },
    ChartCleared,
    StaleResultDiscarded {
        request_id: u64,
    },
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::ChartDataUpdated { .. } => "ChartDataUpdated",
            ChartEvent::ChartCleared => "ChartCleared",
            ChartEvent::StaleResultDiscarded { .. } => "StaleResultDiscarded",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_plan_data_event(&self, event: PlanDataEvent);
    fn publish_chart_event(&self, event: ChartEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    plan_data_handlers: Vec<Box<dyn Fn(&PlanDataEvent)>>,
    chart_handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_plan_data_events<F>(&mut self, handler: F)
    where
        F: Fn(&PlanDataEvent) + 'static,
    {
        self.plan_data_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_chart_events<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.chart_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_plan_data_event(&self, event: PlanDataEvent) {
        for handler in &self.plan_data_handlers {
            handler(&event);
        }
    }

    fn publish_chart_event(&self, event: ChartEvent) {
        for handler in &self.chart_handlers {
            handler(&event);
        }
    }
}
