pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{PlanPoint, PlanSeries};
pub use services::{
    AlignedSeries, CustomPlanInput, CustomPlanService, NormalizedChart, PlanNormalizer,
};
pub use value_objects::{DataVolume, Operator, PackagePrice, PlanSelector, UnitPrice};
