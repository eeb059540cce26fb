use quickcheck_macros::quickcheck;
use roamplan_wasm::domain::plan_data::{PlanNormalizer, PlanPoint, PlanSeries};

fn series_from(raw: &[Vec<(u8, u8)>]) -> Vec<PlanSeries> {
    raw.iter()
        .enumerate()
        .map(|(i, points)| {
            PlanSeries::with_points(
                format!("plan-{i}"),
                points
                    .iter()
                    .map(|(volume, price)| {
                        PlanPoint::priced(f64::from(*volume) + 1.0, f64::from(*price) / 4.0)
                    })
                    .collect(),
            )
        })
        .collect()
}

#[quickcheck]
fn aligned_length_always_matches_breakpoint_count(raw: Vec<Vec<(u8, u8)>>) -> bool {
    let chart = PlanNormalizer::new().normalize(&series_from(&raw));
    chart.aligned.iter().all(|series| series.len() == chart.breakpoints.len())
}

#[quickcheck]
fn breakpoints_are_strictly_ascending(raw: Vec<Vec<(u8, u8)>>) -> bool {
    let chart = PlanNormalizer::new().normalize(&series_from(&raw));
    chart.breakpoints.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn breakpoints_cover_every_input_volume(raw: Vec<Vec<(u8, u8)>>) -> bool {
    let series = series_from(&raw);
    let chart = PlanNormalizer::new().normalize(&series);
    series
        .iter()
        .flat_map(|s| s.breakpoints())
        .all(|volume| chart.breakpoints.contains(&volume))
}

#[quickcheck]
fn normalization_is_idempotent(raw: Vec<Vec<(u8, u8)>>) -> bool {
    let normalizer = PlanNormalizer::new();
    let once = normalizer.normalize(&series_from(&raw));
    let twice = normalizer.normalize(&once.to_plan_series());
    once == twice
}

#[quickcheck]
fn output_series_count_matches_input(raw: Vec<Vec<(u8, u8)>>) -> bool {
    let series = series_from(&raw);
    let chart = PlanNormalizer::new().normalize(&series);
    series.is_empty() || chart.aligned.len() == series.len()
}
