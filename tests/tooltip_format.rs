use roamplan_wasm::domain::chart::ChartFormatService;
use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

#[test]
fn tooltip_lists_every_priced_plan_at_the_breakpoint() {
    let plan_a = PlanSeries::with_points(
        "CTM - simOnly",
        vec![PlanPoint::priced(10.0, 5.0), PlanPoint::priced(30.0, 9.0)],
    );
    let plan_b = PlanSeries::with_points("CUHK - publicPlanCN", vec![PlanPoint::priced(10.0, 4.5)]);
    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    let text = ChartFormatService::new().tooltip_text(&chart, 0);

    assert_eq!(text, "0 - 10 GB\nCTM - simOnly: 5 MOP, HKD/GB\nCUHK - publicPlanCN: 4.50 MOP, HKD/GB");
}

#[test]
fn tooltip_skips_plans_with_a_gap() {
    let plan_a = PlanSeries::with_points("A", vec![PlanPoint::priced(10.0, 5.0)]);
    let plan_b = PlanSeries::with_points("B", vec![PlanPoint::priced(20.0, 6.0)]);
    let chart = PlanNormalizer::new().normalize(&[plan_a, plan_b]);

    let text = ChartFormatService::new().tooltip_text(&chart, 1);

    assert_eq!(text, "0 - 20 GB\nB: 6 MOP, HKD/GB");
}

#[test]
fn tooltip_for_out_of_range_index_is_empty() {
    let plan = PlanSeries::with_points("A", vec![PlanPoint::priced(10.0, 5.0)]);
    let chart = PlanNormalizer::new().normalize(&[plan]);

    assert_eq!(ChartFormatService::new().tooltip_text(&chart, 5), "");
}

#[test]
fn fractional_volumes_keep_their_digits() {
    let plan = PlanSeries::with_points("A", vec![PlanPoint::priced(9.99, 5.0)]);
    let chart = PlanNormalizer::new().normalize(&[plan]);

    let text = ChartFormatService::new().tooltip_text(&chart, 0);
    assert!(text.starts_with("0 - 9.99 GB"));
}
