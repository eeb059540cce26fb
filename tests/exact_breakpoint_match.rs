use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

#[test]
fn near_equal_volumes_stay_separate_breakpoints() {
    // 9.99 and 10 differ, so no interpolation and no merging: each plan
    // gets a gap at the other's breakpoint.
    let plan_a = PlanSeries::with_points("A", vec![PlanPoint::priced(9.99, 5.0)]);
    let plan_b = PlanSeries::with_points("B", vec![PlanPoint::priced(10.0, 5.0)]);

    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    assert_eq!(chart.breakpoints, vec![9.99, 10.0]);
    assert_eq!(chart.aligned[0].unit_prices, vec![Some(5.0), None]);
    assert_eq!(chart.aligned[1].unit_prices, vec![None, Some(5.0)]);
}

#[test]
fn identical_volumes_merge_into_one_breakpoint() {
    let plan_a = PlanSeries::with_points("A", vec![PlanPoint::priced(10.0, 5.0)]);
    let plan_b = PlanSeries::with_points("B", vec![PlanPoint::priced(10.0, 7.0)]);

    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    assert_eq!(chart.breakpoints, vec![10.0]);
}
