use super::entities::{PlanPoint, PlanSeries};
use super::value_objects::{DataVolume, PackagePrice, UnitPrice};
use crate::domain::errors::AppError;

/// A plan's price curve re-expressed over the shared breakpoint axis.
/// Index-aligned with `NormalizedChart::breakpoints`; `None` marks a
/// breakpoint this plan does not define, rendered as a connected gap.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub name: String,
    pub unit_prices: Vec<Option<f64>>,
    pub package_prices: Vec<Option<f64>>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.unit_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_prices.is_empty()
    }

    pub fn is_gap(&self, index: usize) -> bool {
        self.unit_prices.get(index).is_none_or(|p| p.is_none())
    }
}

/// Chart-ready result of normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedChart {
    pub breakpoints: Vec<f64>,
    pub aligned: Vec<AlignedSeries>,
}

impl NormalizedChart {
    pub fn is_empty(&self) -> bool {
        self.aligned.is_empty()
    }

    pub fn series_count(&self) -> usize {
        self.aligned.len()
    }

    /// Overall unit price range across all series, for axis scaling
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self
            .aligned
            .iter()
            .flat_map(|s| s.unit_prices.iter().copied().flatten());
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((min, max))
    }

    /// Re-interpret each aligned series as a plan series over the shared
    /// breakpoints. Feeding the result back through the normalizer must be
    /// a no-op.
    pub fn to_plan_series(&self) -> Vec<PlanSeries> {
        self.aligned
            .iter()
            .map(|aligned| {
                let points = self
                    .breakpoints
                    .iter()
                    .zip(aligned.unit_prices.iter().zip(aligned.package_prices.iter()))
                    .map(|(bp, (unit, package))| {
                        PlanPoint::new(
                            DataVolume::from(*bp),
                            unit.map(UnitPrice::from),
                            package.map(PackagePrice::from),
                        )
                    })
                    .collect();
                PlanSeries::with_points(aligned.name.clone(), points)
            })
            .collect()
    }
}

/// Domain service aligning heterogeneous plan tables onto a common x-axis.
/// Pure and total: any input list produces a well-formed result, called
/// fresh on every selection change instead of patching incrementally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanNormalizer;

impl PlanNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, series: &[PlanSeries]) -> NormalizedChart {
        if series.is_empty() {
            return NormalizedChart::default();
        }

        let breakpoints = Self::collect_breakpoints(series);
        let aligned = series.iter().map(|s| Self::align(s, &breakpoints)).collect();

        NormalizedChart { breakpoints, aligned }
    }

    /// Sorted, deduplicated union of every series' data volumes
    fn collect_breakpoints(series: &[PlanSeries]) -> Vec<f64> {
        let mut volumes: Vec<f64> = series.iter().flat_map(|s| s.breakpoints()).collect();
        volumes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        volumes.dedup();
        volumes
    }

    /// Exact-match alignment of one series against the shared breakpoints
    fn align(series: &PlanSeries, breakpoints: &[f64]) -> AlignedSeries {
        let mut unit_prices = Vec::with_capacity(breakpoints.len());
        let mut package_prices = Vec::with_capacity(breakpoints.len());

        for breakpoint in breakpoints {
            match series.point_at(*breakpoint) {
                Some(point) => {
                    unit_prices.push(point.unit_price.map(|p| p.value()));
                    package_prices.push(point.package_price.map(|p| p.value()));
                }
                None => {
                    unit_prices.push(None);
                    package_prices.push(None);
                }
            }
        }

        Self::propagate_plateaus(&mut unit_prices);

        AlignedSeries { name: series.name().to_string(), unit_prices, package_prices }
    }

    /// Consecutive equal unit prices must share the identical stored value so
    /// a flat price band renders as one horizontal segment. Ties resolve to
    /// the leftward value; package prices are left untouched.
    fn propagate_plateaus(values: &mut [Option<f64>]) {
        for i in 1..values.len() {
            if let (Some(prev), Some(current)) = (values[i - 1], values[i]) {
                if current == prev {
                    values[i] = Some(prev);
                }
            }
        }
    }
}

/// User-entered custom plan definition, mirroring the entry form fields.
/// `None` means the field was left blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomPlanInput {
    pub name: String,
    pub total_data_volume: Option<f64>,
    pub plan_price: Option<f64>,
    pub is_phone_plan: bool,
    pub upfront_payment: f64,
    pub phone_price: f64,
    pub contract_months: f64,
}

/// Domain service validating custom plan input and deriving its flat-rate
/// unit price. The normalizer is never invoked with unvalidated data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomPlanService;

impl CustomPlanService {
    pub fn new() -> Self {
        Self
    }

    /// Validate form input with a user-facing error message
    pub fn validate(&self, input: &CustomPlanInput) -> Result<(), AppError> {
        let volume = input
            .total_data_volume
            .ok_or_else(|| AppError::InputError("Total data volume is required".to_string()))?;
        // NaN compares false to everything, so "positive" must also mean finite
        if !volume.is_finite() || volume <= 0.0 {
            return Err(AppError::InputError(
                "Total data volume must be a positive number".to_string(),
            ));
        }

        match input.plan_price {
            None => return Err(AppError::InputError("Plan price is required".to_string())),
            Some(price) if !price.is_finite() => {
                return Err(AppError::InputError(
                    "Plan price must be a finite number".to_string(),
                ));
            }
            Some(_) => {}
        }

        if input.is_phone_plan {
            if !input.contract_months.is_finite() || input.contract_months <= 0.0 {
                return Err(AppError::InputError(
                    "Contract months must be a positive number".to_string(),
                ));
            }
            if !input.upfront_payment.is_finite() || !input.phone_price.is_finite() {
                return Err(AppError::InputError(
                    "Device payment fields must be finite numbers".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Flat-rate unit price:
    /// `(price - upfront/months + phone_price/months) / total_data_volume`,
    /// with upfront = phone_price = 0 and months = 1 for SIM-only plans.
    /// Assumes `validate` passed.
    pub fn derive_unit_price(&self, input: &CustomPlanInput) -> f64 {
        let (upfront, phone_price, months) = if input.is_phone_plan {
            (input.upfront_payment, input.phone_price, input.contract_months)
        } else {
            (0.0, 0.0, 1.0)
        };

        let plan_price = input.plan_price.unwrap_or_default();
        let volume = input.total_data_volume.unwrap_or_default();

        (plan_price - upfront / months + phone_price / months) / volume
    }

    /// Validate and convert the input into a single-point plan series
    pub fn to_series(&self, input: &CustomPlanInput) -> Result<PlanSeries, AppError> {
        self.validate(input)?;

        let volume = input.total_data_volume.unwrap_or_default();
        let unit_price = self.derive_unit_price(input);
        let package_price = input.plan_price.map(PackagePrice::from);

        let name = if input.name.trim().is_empty() {
            format!("Custom - {} GB", volume)
        } else {
            input.name.trim().to_string()
        };

        Ok(PlanSeries::with_points(
            name,
            vec![PlanPoint::new(
                DataVolume::from(volume),
                Some(UnitPrice::from(unit_price)),
                package_price,
            )],
        ))
    }
}
