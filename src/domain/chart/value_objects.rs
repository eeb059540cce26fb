use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Area")]
    #[strum(serialize = "area")]
    Area,
}

/// Value Object - display options handed to the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Draw through missing breakpoints instead of breaking the line
    pub connect_nulls: bool,
    /// Straight segments only; smoothing hides the flat price bands
    pub smooth: bool,
    pub show_legend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Roaming plan comparison: unit price by data volume".to_string(),
            x_axis_label: "Total data volume (GB)".to_string(),
            y_axis_label: "Unit price (MOP, HKD/GB)".to_string(),
            connect_nulls: true,
            smooth: false,
            show_legend: true,
        }
    }
}

/// Fixed series palette; repeats after eight plans
const SERIES_PALETTE: [&str; 8] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4",
];

pub fn color_for_series(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
