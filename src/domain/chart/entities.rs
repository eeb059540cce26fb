use super::value_objects::{ChartKind, ChartOptions};
use crate::domain::plan_data::NormalizedChart;

/// Domain entity - the chart as one owned piece of state: normalized data
/// plus display options. Lives for a single render cycle; every selection
/// change replaces the data wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub id: String,
    pub kind: ChartKind,
    pub options: ChartOptions,
    data: NormalizedChart,
}

impl ChartModel {
    pub fn new(id: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: id.into(),
            kind,
            options: ChartOptions::default(),
            data: NormalizedChart::default(),
        }
    }

    pub fn set_data(&mut self, data: NormalizedChart) {
        self.data = data;
    }

    /// Drop all data; the renderer shows an empty surface afterwards
    pub fn clear(&mut self) {
        self.data = NormalizedChart::default();
    }

    pub fn data(&self) -> &NormalizedChart {
        &self.data
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty() && !self.data.breakpoints.is_empty()
    }

    pub fn breakpoint_count(&self) -> usize {
        self.data.breakpoints.len()
    }

    pub fn series_count(&self) -> usize {
        self.data.series_count()
    }

    pub fn legend_entries(&self) -> Vec<&str> {
        self.data.aligned.iter().map(|s| s.name.as_str()).collect()
    }
}
