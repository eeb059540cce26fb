use roamplan_wasm::domain::chart::{ChartKind, ChartModel};
use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

fn sample_chart() -> roamplan_wasm::domain::plan_data::NormalizedChart {
    let plan_a = PlanSeries::with_points("A", vec![PlanPoint::priced(10.0, 5.0)]);
    let plan_b = PlanSeries::with_points("B", vec![PlanPoint::priced(20.0, 6.0)]);
    PlanNormalizer::new().normalize(&[plan_a, plan_b])
}

#[test]
fn new_model_starts_empty() {
    let model = ChartModel::new("canvas", ChartKind::Line);

    assert!(!model.has_data());
    assert_eq!(model.breakpoint_count(), 0);
    assert_eq!(model.series_count(), 0);
}

#[test]
fn set_data_then_clear_round_trip() {
    let mut model = ChartModel::new("canvas", ChartKind::Line);

    model.set_data(sample_chart());
    assert!(model.has_data());
    assert_eq!(model.breakpoint_count(), 2);
    assert_eq!(model.series_count(), 2);

    model.clear();
    assert!(!model.has_data());
    assert_eq!(model.breakpoint_count(), 0);
}

#[test]
fn legend_entries_follow_series_names() {
    let mut model = ChartModel::new("canvas", ChartKind::Line);
    model.set_data(sample_chart());

    assert_eq!(model.legend_entries(), vec!["A", "B"]);
}
