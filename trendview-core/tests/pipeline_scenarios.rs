//! Hand-computed scenarios for each pipeline stage.

use chrono::NaiveDate;
use trendview_core::domain::{round_cents, PricePoint};
use trendview_core::rng::{ReplaySource, StdRandom};
use trendview_core::{
    generate, project, smooth, AnalyticsPipeline, PipelineError, SeriesGenerator,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn points(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            date: ymd(2024, 1, 1) + chrono::Duration::days(i as i64),
            price,
            symbol: "TEST".into(),
        })
        .collect()
}

#[test]
fn three_day_walk_from_fixed_start() {
    let today = ymd(2025, 7, 10);
    let mut rng = ReplaySource::new(vec![0.5, 0.5, 0.5]);

    let series = SeriesGenerator::new(3)
        .unwrap()
        .with_start_price(120.0)
        .generate("TEST", today, &mut rng)
        .unwrap();

    // Day -2: the start price.
    // Day -1: 120 + 0.2*sin(1/9) + (0.5-0.5)*0.8 = 120.02218 -> 120.02
    // Day  0: previous + 0.2*sin(0) + 0               = 120.02218 -> 120.02
    let got: Vec<(NaiveDate, f64)> = series.iter().map(|p| (p.date, p.price)).collect();
    assert_eq!(
        got,
        vec![
            (ymd(2025, 7, 8), 120.00),
            (ymd(2025, 7, 9), 120.02),
            (ymd(2025, 7, 10), 120.02),
        ]
    );
    assert!(series.iter().all(|p| p.symbol == "TEST"));
}

#[test]
fn walk_carries_unrounded_price() {
    let today = ymd(2025, 7, 10);
    let draw = 0.505;
    let series = SeriesGenerator::new(11)
        .unwrap()
        .with_start_price(100.0)
        .generate("TEST", today, &mut ReplaySource::constant(draw))
        .unwrap();

    let mut expected = 100.0_f64;
    for days_remaining in (0..10).rev() {
        let periodic = 0.2 * (days_remaining as f64 / 9.0).sin();
        expected += periodic + (draw - 0.5) * 0.8;
    }
    assert_eq!(series[10].price, round_cents(expected));
}

#[test]
fn moving_average_of_ten_twenty_thirty() {
    let smoothed = smooth(&points(&[10.0, 20.0, 30.0]), 2).unwrap();
    let averages: Vec<f64> = smoothed.iter().map(|p| p.moving_average).collect();
    assert_eq!(averages, vec![10.0, 15.0, 25.0]);
}

#[test]
fn smoothing_nothing_yields_nothing() {
    assert!(smooth(&[], 14).unwrap().is_empty());
    assert!(smooth(&[], 1).unwrap().is_empty());
}

#[test]
fn seeded_generation_repeats() {
    let today = ymd(2025, 1, 1);
    let a = generate("AAPL", 10, today, &mut StdRandom::seeded(11)).unwrap();
    let b = generate("AAPL", 10, today, &mut StdRandom::seeded(11)).unwrap();
    assert_eq!(a, b);

    let c = generate("AAPL", 10, today, &mut ReplaySource::new(vec![0.3, 0.7])).unwrap();
    let d = generate("AAPL", 10, today, &mut ReplaySource::new(vec![0.3, 0.7])).unwrap();
    assert_eq!(c, d);
}

#[test]
fn forecast_from_month_end() {
    let mut rng = ReplaySource::constant(0.4);
    let forecast = project(150.0, 6, ymd(2025, 8, 31), &mut rng).unwrap();
    let dates: Vec<NaiveDate> = forecast.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![
            ymd(2025, 9, 30),
            ymd(2025, 10, 31),
            ymd(2025, 11, 30),
            ymd(2025, 12, 31),
            ymd(2026, 1, 31),
            ymd(2026, 2, 28),
        ]
    );
    assert!(forecast.iter().all(|p| p.forecast == 150.0));
}

#[test]
fn non_positive_sizes_are_invalid_arguments() {
    let today = ymd(2025, 1, 1);
    let mut rng = ReplaySource::constant(0.5);

    let cases: Vec<(&str, Result<usize, PipelineError>)> = vec![
        ("length", generate("X", 0, today, &mut rng).map(|v| v.len())),
        ("window", smooth(&points(&[1.0]), 0).map(|v| v.len())),
        ("horizon_months", project(1.0, 0, today, &mut rng).map(|v| v.len())),
    ];
    for (expected, result) in cases {
        match result {
            Err(PipelineError::InvalidArgument { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected InvalidArgument for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn full_pipeline_end_to_end() {
    let today = ymd(2025, 3, 31);
    let snapshot = AnalyticsPipeline::default()
        .run("MSFT", today, &mut StdRandom::seeded(2024))
        .unwrap();

    assert_eq!(snapshot.history.len(), 121);
    assert_eq!(snapshot.history[0].moving_average, snapshot.history[0].price);
    assert_eq!(snapshot.forecast.len(), 6);
    assert_eq!(snapshot.forecast[0].date, ymd(2025, 4, 30));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["symbol"], "MSFT");
    assert_eq!(json["generatedOn"], "2025-03-31");
    assert!(json["history"][0]["movingAverage"].is_number());
}
