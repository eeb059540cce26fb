pub use super::value_objects::{DataVolume, PackagePrice, UnitPrice};
use serde::{Deserialize, Serialize};

/// Domain entity - one breakpoint on a plan's price curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub data_volume: DataVolume,
    pub unit_price: Option<UnitPrice>,
    pub package_price: Option<PackagePrice>,
}

impl PlanPoint {
    pub fn new(
        data_volume: DataVolume,
        unit_price: Option<UnitPrice>,
        package_price: Option<PackagePrice>,
    ) -> Self {
        Self { data_volume, unit_price, package_price }
    }

    /// Breakpoint with a unit price and no package reference
    pub fn priced(data_volume: f64, unit_price: f64) -> Self {
        Self {
            data_volume: DataVolume::from(data_volume),
            unit_price: Some(UnitPrice::from(unit_price)),
            package_price: None,
        }
    }

    pub fn has_price(&self) -> bool {
        self.unit_price.is_some()
    }
}

/// Domain entity - a named plan price curve
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSeries {
    name: String,
    points: Vec<PlanPoint>,
}

impl PlanSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    pub fn with_points(name: impl Into<String>, points: Vec<PlanPoint>) -> Self {
        Self { name: name.into(), points }
    }

    pub fn add_point(&mut self, point: PlanPoint) {
        self.points.push(point);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[PlanPoint] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data volumes this plan defines a price at
    pub fn breakpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.data_volume.value())
    }

    /// Exact-match lookup. Volumes that differ even in the last bit do not
    /// match; two plans reporting 9.99 and 10 stay separate breakpoints.
    pub fn point_at(&self, volume: f64) -> Option<&PlanPoint> {
        self.points.iter().find(|p| p.data_volume.value() == volume)
    }

    /// Price range across all priced points, for axis scaling
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.points.iter().filter_map(|p| p.unit_price.map(|u| u.value()));
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((min, max))
    }
}
