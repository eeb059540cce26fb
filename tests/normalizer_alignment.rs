use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

#[test]
fn union_axis_with_exact_match_gaps() {
    // Plan A defines prices at 10 and 30 GB, plan B at 10, 20 and 30 GB.
    let plan_a =
        PlanSeries::with_points("A", vec![PlanPoint::priced(10.0, 5.0), PlanPoint::priced(30.0, 9.0)]);
    let plan_b = PlanSeries::with_points(
        "B",
        vec![
            PlanPoint::priced(10.0, 4.0),
            PlanPoint::priced(20.0, 6.0),
            PlanPoint::priced(30.0, 8.0),
        ],
    );

    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    assert_eq!(chart.breakpoints, vec![10.0, 20.0, 30.0]);
    assert_eq!(chart.aligned.len(), 2);
    assert_eq!(chart.aligned[0].unit_prices, vec![Some(5.0), None, Some(9.0)]);
    assert_eq!(chart.aligned[1].unit_prices, vec![Some(4.0), Some(6.0), Some(8.0)]);
}

#[test]
fn breakpoints_are_sorted_and_deduplicated() {
    let plan_a = PlanSeries::with_points(
        "A",
        vec![PlanPoint::priced(30.0, 1.0), PlanPoint::priced(5.0, 2.0)],
    );
    let plan_b = PlanSeries::with_points(
        "B",
        vec![PlanPoint::priced(5.0, 3.0), PlanPoint::priced(12.0, 4.0)],
    );

    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    assert_eq!(chart.breakpoints, vec![5.0, 12.0, 30.0]);
}

#[test]
fn empty_input_yields_empty_chart() {
    let chart = PlanNormalizer::new().normalize(&[]);

    assert!(chart.is_empty());
    assert!(chart.breakpoints.is_empty());
    assert!(chart.aligned.is_empty());
}

#[test]
fn series_without_points_aligns_to_all_gaps() {
    let empty = PlanSeries::new("empty");
    let priced = PlanSeries::with_points("priced", vec![PlanPoint::priced(10.0, 2.0)]);

    let chart = PlanNormalizer::new().normalize(&[empty, priced]);

    assert_eq!(chart.breakpoints, vec![10.0]);
    assert_eq!(chart.aligned[0].unit_prices, vec![None]);
    assert!(chart.aligned[0].is_gap(0));
    assert_eq!(chart.aligned[1].unit_prices, vec![Some(2.0)]);
}

#[test]
fn package_prices_travel_with_their_points() {
    use roamplan_wasm::domain::plan_data::{DataVolume, PackagePrice, UnitPrice};

    let plan = PlanSeries::with_points(
        "bundle",
        vec![PlanPoint::new(
            DataVolume::from(20.0),
            Some(UnitPrice::from(4.0)),
            Some(PackagePrice::from(80.0)),
        )],
    );
    let other = PlanSeries::with_points("other", vec![PlanPoint::priced(10.0, 3.0)]);

    let chart = PlanNormalizer::new().normalize(&[plan, other]);

    assert_eq!(chart.aligned[0].package_prices, vec![None, Some(80.0)]);
    assert_eq!(chart.aligned[1].package_prices, vec![None, None]);
}
