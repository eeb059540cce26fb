use roamplan_wasm::domain::plan_data::{CustomPlanInput, CustomPlanService};

#[test]
fn sim_only_plan_divides_price_by_volume() {
    let input = CustomPlanInput {
        total_data_volume: Some(50.0),
        plan_price: Some(300.0),
        ..Default::default()
    };

    let unit_price = CustomPlanService::new().derive_unit_price(&input);
    assert_eq!(unit_price, 6.0);
}

#[test]
fn device_bundle_amortizes_upfront_and_device_price() {
    // (300 - 1200/24 + 6000/24) / 50 = 10
    let input = CustomPlanInput {
        total_data_volume: Some(50.0),
        plan_price: Some(300.0),
        is_phone_plan: true,
        upfront_payment: 1200.0,
        phone_price: 6000.0,
        contract_months: 24.0,
        ..Default::default()
    };

    let unit_price = CustomPlanService::new().derive_unit_price(&input);
    assert_eq!(unit_price, 10.0);
}

#[test]
fn sim_only_plan_ignores_device_fields() {
    let input = CustomPlanInput {
        total_data_volume: Some(50.0),
        plan_price: Some(300.0),
        is_phone_plan: false,
        upfront_payment: 9999.0,
        phone_price: 9999.0,
        contract_months: 36.0,
        ..Default::default()
    };

    let unit_price = CustomPlanService::new().derive_unit_price(&input);
    assert_eq!(unit_price, 6.0);
}

#[test]
fn to_series_builds_a_single_point_with_package_price() {
    let input = CustomPlanInput {
        name: "My plan".to_string(),
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        ..Default::default()
    };

    let series = CustomPlanService::new().to_series(&input).unwrap();

    assert_eq!(series.name(), "My plan");
    assert_eq!(series.count(), 1);
    let point = &series.points()[0];
    assert_eq!(point.data_volume.value(), 20.0);
    assert_eq!(point.unit_price.map(|p| p.value()), Some(5.0));
    assert_eq!(point.package_price.map(|p| p.value()), Some(100.0));
}

#[test]
fn blank_name_gets_a_generated_one() {
    let input = CustomPlanInput {
        name: "   ".to_string(),
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        ..Default::default()
    };

    let series = CustomPlanService::new().to_series(&input).unwrap();
    assert_eq!(series.name(), "Custom - 20 GB");
}
