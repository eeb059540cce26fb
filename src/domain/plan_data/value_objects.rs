use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - cumulative data volume in GB
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct DataVolume(f64);

impl DataVolume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for DataVolume {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - price per GB at a breakpoint
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for UnitPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - reference total package price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct PackagePrice(f64);

impl PackagePrice {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - mobile network operator with full derive coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Operator {
    #[strum(serialize = "CTM")]
    #[serde(rename = "CTM")]
    Ctm,

    #[strum(serialize = "CTMO")]
    #[serde(rename = "CTMO")]
    Ctmo,

    #[strum(serialize = "CMHK")]
    #[serde(rename = "CMHK")]
    Cmhk,

    #[strum(serialize = "CUHK")]
    #[serde(rename = "CUHK")]
    Cuhk,

    #[strum(serialize = "Three")]
    #[serde(rename = "Three")]
    Three,

    #[strum(serialize = "Free")]
    #[serde(rename = "Free")]
    Free,
}

impl Operator {
    pub fn api_str(&self) -> &str {
        self.as_ref()
    }
}

/// Value Object - key identifying one remote plan series
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanSelector {
    pub operator: Operator,
    pub series: String,
}

impl PlanSelector {
    pub fn new(operator: Operator, series: impl Into<String>) -> Self {
        Self { operator, series: series.into() }
    }

    /// Display name matching the remote records: "{operator} - {series}"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.operator, self.series)
    }
}
