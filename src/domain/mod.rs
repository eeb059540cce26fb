pub mod chart;
pub mod errors;
pub mod events;
pub mod logging;
pub mod plan_data;
