use crate::domain::plan_data::NormalizedChart;

/// Domain service producing display strings for the chart surface
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartFormatService;

impl ChartFormatService {
    pub fn new() -> Self {
        Self
    }

    /// Tooltip body for one breakpoint: a "0 - N GB" band header followed by
    /// one line per plan that defines a price there
    pub fn tooltip_text(&self, chart: &NormalizedChart, index: usize) -> String {
        let Some(breakpoint) = chart.breakpoints.get(index) else {
            return String::new();
        };

        let mut text = format!("0 - {} GB", format_volume(*breakpoint));
        for series in &chart.aligned {
            if let Some(Some(price)) = series.unit_prices.get(index) {
                text.push_str(&format!("\n{}: {} MOP, HKD/GB", series.name, format_price(*price)));
            }
        }
        text
    }

    /// Y-axis bounds with 5% padding above and below, clamped at zero
    pub fn axis_bounds(&self, chart: &NormalizedChart) -> (f64, f64) {
        match chart.price_range() {
            Some((min, max)) => {
                let padding = ((max - min) * 0.05).max(0.5);
                ((min - padding).max(0.0), max + padding)
            }
            None => (0.0, 1.0),
        }
    }

    /// X-axis tick labels: the raw breakpoint volumes
    pub fn x_labels(&self, chart: &NormalizedChart) -> Vec<String> {
        chart.breakpoints.iter().map(|bp| format_volume(*bp)).collect()
    }
}

/// Trim trailing zeros so 10.0 renders as "10" but 9.99 stays "9.99"
fn format_volume(volume: f64) -> String {
    if volume.fract() == 0.0 {
        format!("{}", volume as i64)
    } else {
        format!("{}", volume)
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{:.2}", price)
    }
}
