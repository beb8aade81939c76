use chart_canvas::core::{
    Candle, DataRow, ExtentTuning, fields_extent_with_padding, nearest_row_index, row_at,
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rust_decimal::Decimal;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn rows() -> Vec<DataRow> {
    (0..3)
        .map(|i| {
            DataRow::new(start() + TimeDelta::minutes(5 * i))
                .with_field("close", 10.0 + i as f64)
        })
        .collect()
}

#[test]
fn row_lookup_falls_back_to_last_known_row() {
    let rows = rows();
    assert_eq!(row_at(&rows, Some(1)).and_then(|row| row.get("close")), Some(11.0));
    assert_eq!(row_at(&rows, None).and_then(|row| row.get("close")), Some(12.0));
    assert_eq!(row_at(&rows, Some(99)).and_then(|row| row.get("close")), Some(12.0));
    assert!(row_at(&[], None).is_none());
}

#[test]
fn nearest_row_clamps_and_prefers_earlier_on_ties() {
    let rows = rows();
    assert_eq!(nearest_row_index(&rows, start() - TimeDelta::hours(1)), Some(0));
    assert_eq!(nearest_row_index(&rows, start() + TimeDelta::hours(1)), Some(2));
    assert_eq!(
        nearest_row_index(&rows, start() + TimeDelta::seconds(150)),
        Some(0)
    );
    assert_eq!(
        nearest_row_index(&rows, start() + TimeDelta::seconds(151)),
        Some(1)
    );
    assert_eq!(nearest_row_index(&[], start()), None);
}

#[test]
fn candles_validate_ordering_and_convert_from_decimal() {
    assert!(Candle::new(start(), 10.0, 9.0, 8.0, 9.5, 1.0).is_err());
    assert!(Candle::new(start(), 10.0, 12.0, 8.0, 9.5, -1.0).is_err());
    assert!(Candle::new(start(), f64::NAN, 12.0, 8.0, 9.5, 1.0).is_err());

    let candle = Candle::from_decimal(
        start(),
        Decimal::new(10050, 2),
        Decimal::new(10200, 2),
        Decimal::new(9900, 2),
        Decimal::new(10125, 2),
        Decimal::new(3, 0),
    )
    .expect("valid decimal candle");
    assert_eq!(candle.open, 100.5);
    assert_eq!(candle.close, 101.25);
    assert!(candle.is_bullish());
    assert_eq!(candle.to_row().get("high"), Some(102.0));
}

#[test]
fn extent_ignores_missing_and_non_finite_fields() {
    let rows = vec![
        DataRow::new(start()).with_field("low", 5.0).with_field("high", 15.0),
        DataRow::new(start()).with_field("low", f64::NAN).with_field("high", 25.0),
        DataRow::new(start()),
    ];
    let fields = vec!["low".to_owned(), "high".to_owned()];
    let (min, max) =
        fields_extent_with_padding(&rows, &fields, ExtentTuning::default()).expect("extent");
    assert!((min - 3.0).abs() < 1e-9);
    assert!((max - 29.0).abs() < 1e-9);

    assert!(fields_extent_with_padding(&[], &fields, ExtentTuning::default()).is_none());
}
