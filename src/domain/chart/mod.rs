pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::ChartModel;
pub use services::ChartFormatService;
pub use value_objects::{ChartKind, ChartOptions, color_for_series};
