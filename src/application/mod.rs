pub mod coordinator;
pub mod plan_service;

pub use coordinator::{
    ChartCoordinator, RequestTracker, initialize_global_coordinator, with_global_coordinator,
    with_global_coordinator_mut,
};
pub use plan_service::PlanApplicationService;
