use roamplan_wasm::domain::plan_data::{CustomPlanInput, CustomPlanService};

#[test]
fn missing_volume_is_rejected() {
    let input = CustomPlanInput { plan_price: Some(100.0), ..Default::default() };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("volume"));
}

#[test]
fn zero_volume_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(0.0),
        plan_price: Some(100.0),
        ..Default::default()
    };

    assert!(CustomPlanService::new().validate(&input).is_err());
}

#[test]
fn negative_volume_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(-5.0),
        plan_price: Some(100.0),
        ..Default::default()
    };

    assert!(CustomPlanService::new().validate(&input).is_err());
}

#[test]
fn nan_volume_is_rejected() {
    // NaN slips past a plain `<= 0.0` check and would poison the shared
    // breakpoint axis, so validation must require a finite positive value.
    let input = CustomPlanInput {
        total_data_volume: Some(f64::NAN),
        plan_price: Some(100.0),
        ..Default::default()
    };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("volume"));
}

#[test]
fn infinite_volume_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(f64::INFINITY),
        plan_price: Some(100.0),
        ..Default::default()
    };

    assert!(CustomPlanService::new().validate(&input).is_err());
}

#[test]
fn nan_plan_price_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(20.0),
        plan_price: Some(f64::NAN),
        ..Default::default()
    };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("price"));
}

#[test]
fn nan_contract_months_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        is_phone_plan: true,
        contract_months: f64::NAN,
        ..Default::default()
    };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("Contract months"));
}

#[test]
fn nan_device_fields_are_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        is_phone_plan: true,
        upfront_payment: f64::NAN,
        contract_months: 24.0,
        ..Default::default()
    };

    assert!(CustomPlanService::new().validate(&input).is_err());
}

#[test]
fn missing_price_is_rejected() {
    let input = CustomPlanInput { total_data_volume: Some(20.0), ..Default::default() };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("price"));
}

#[test]
fn device_bundle_without_contract_months_is_rejected() {
    let input = CustomPlanInput {
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        is_phone_plan: true,
        contract_months: 0.0,
        ..Default::default()
    };

    let error = CustomPlanService::new().validate(&input).unwrap_err();
    assert!(error.to_string().contains("Contract months"));
}

#[test]
fn valid_sim_only_input_passes() {
    let input = CustomPlanInput {
        total_data_volume: Some(20.0),
        plan_price: Some(100.0),
        ..Default::default()
    };

    assert!(CustomPlanService::new().validate(&input).is_ok());
}
