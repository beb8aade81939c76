use chart_canvas::core::{
    LinearScale, Point, TimeScale, align, calculate_shifted_positions, get_num_x_ticks,
};
use chart_canvas::render::Color;
use chart_canvas::scenegraph::Graphics;
use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shifted_positions_respect_gap_and_never_move_down(
        positions in prop::collection::vec(-1_000.0f64..1_000.0, 0..40),
        gap in 0.0f64..50.0,
    ) {
        let shifted = calculate_shifted_positions(&positions, gap);
        prop_assert_eq!(shifted.len(), positions.len());

        for (before, after) in positions.iter().zip(&shifted) {
            prop_assert!(after >= before);
        }

        let mut sorted = shifted.clone();
        sorted.sort_by(f64::total_cmp);
        for pair in sorted.windows(2) {
            prop_assert!(pair[1] - pair[0] >= gap - 1e-9);
        }
    }

    #[test]
    fn x_tick_count_has_floor_and_is_symmetric(width in -20_000.0f64..20_000.0) {
        let count = get_num_x_ticks(width);
        prop_assert!(count >= 3);
        prop_assert_eq!(count, get_num_x_ticks(-width));
        prop_assert_eq!(count, ((width.abs() / 160.0).floor() as usize).max(3));
    }

    #[test]
    fn linear_scale_round_trips(
        d0 in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        height in 10.0f64..4_000.0,
        t in 0.0f64..1.0,
    ) {
        let scale = LinearScale::new((d0, d0 + span), (height, 0.0)).expect("valid scale");
        let value = d0 + t * span;
        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn time_scale_round_trips_to_the_millisecond(
        offset_minutes in 0i64..100_000,
        span_minutes in 1i64..100_000,
        width in 50.0f64..4_000.0,
        t in 0.0f64..1.0,
    ) {
        let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().expect("valid date");
        let start = base + TimeDelta::minutes(offset_minutes);
        let end = start + TimeDelta::minutes(span_minutes);
        let scale = TimeScale::new((start, end), (0.0, width)).expect("valid scale");

        let millis = (t * (span_minutes * 60_000) as f64).round() as i64;
        let time = start + TimeDelta::milliseconds(millis);
        let recovered = scale.invert(scale.map(time)).expect("in range");
        prop_assert!((recovered - time).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn align_lands_on_half_pixels_below_threshold(value in -5_000.0f64..5_000.0, ratio in 0.5f64..1.99) {
        let aligned = align(value, ratio);
        let device = aligned * ratio;
        prop_assert!(((device - device.floor()) - 0.5).abs() < 1e-6);
        prop_assert_eq!(align(value, 2.0), value);
    }

    #[test]
    fn cleared_graphics_contains_no_point(
        rects in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0, 1.0f64..200.0, 1.0f64..200.0), 0..10),
        circles in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0, 1.0f64..100.0), 0..10),
        points in prop::collection::vec((-800.0f64..800.0, -800.0f64..800.0), 1..20),
    ) {
        let mut graphics = Graphics::new();
        graphics.begin_fill(Color::WHITE, 1.0);
        for &(x, y, width, height) in &rects {
            graphics.draw_rect(x, y, width, height);
        }
        for &(x, y, radius) in &circles {
            graphics.draw_circle(x, y, radius);
        }
        if let Some(&(x, y, _, _)) = rects.first() {
            prop_assert!(graphics.contains_point(Point::new(x, y)));
        }

        graphics.clear();
        prop_assert!(graphics.geometry().is_empty());
        for &(x, y) in &points {
            prop_assert!(!graphics.contains_point(Point::new(x, y)));
        }
        for &(x, y, _) in &circles {
            prop_assert!(!graphics.contains_point(Point::new(x, y)));
        }
    }
}
