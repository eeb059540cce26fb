use roamplan_wasm::application::{ChartCoordinator, RequestTracker};
use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

fn chart_with_one_plan(price: f64) -> roamplan_wasm::domain::plan_data::NormalizedChart {
    let plan = PlanSeries::with_points("plan", vec![PlanPoint::priced(10.0, price)]);
    PlanNormalizer::new().normalize(&[plan])
}

#[test]
fn tracker_counts_monotonically() {
    let tracker = RequestTracker::new();
    assert_eq!(tracker.begin(), 1);
    assert_eq!(tracker.begin(), 2);
    assert!(tracker.is_current(2));
    assert!(!tracker.is_current(1));
}

#[test]
fn stale_result_is_discarded() {
    let mut coordinator = ChartCoordinator::new("test-canvas");

    let first = coordinator.begin_request();
    let second = coordinator.begin_request();

    // The slow first request completes after the second one superseded it.
    assert!(coordinator.apply_result(second, chart_with_one_plan(7.0)));
    assert!(!coordinator.apply_result(first, chart_with_one_plan(3.0)));

    let aligned = &coordinator.model().data().aligned;
    assert_eq!(aligned[0].unit_prices, vec![Some(7.0)]);
}

#[test]
fn latest_result_replaces_wholesale() {
    let mut coordinator = ChartCoordinator::new("test-canvas");

    let first = coordinator.begin_request();
    assert!(coordinator.apply_result(first, chart_with_one_plan(3.0)));

    let second = coordinator.begin_request();
    assert!(coordinator.apply_result(second, chart_with_one_plan(7.0)));

    // No merging: only the latest cycle's data survives.
    assert_eq!(coordinator.model().series_count(), 1);
    assert_eq!(coordinator.model().data().aligned[0].unit_prices, vec![Some(7.0)]);
}

#[test]
fn empty_result_clears_the_model() {
    let mut coordinator = ChartCoordinator::new("test-canvas");

    let first = coordinator.begin_request();
    assert!(coordinator.apply_result(first, chart_with_one_plan(3.0)));
    assert!(coordinator.model().has_data());

    let second = coordinator.begin_request();
    assert!(coordinator.apply_result(second, PlanNormalizer::new().normalize(&[])));
    assert!(!coordinator.model().has_data());
    assert_eq!(coordinator.model().breakpoint_count(), 0);
}
