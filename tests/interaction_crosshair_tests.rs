use chart_canvas::core::{DataRow, LinearScale, Point, TimeScale};
use chart_canvas::elements::Element;
use chart_canvas::interaction::{CrosshairMode, InteractionState};
use chart_canvas::pane::Pane;
use chart_canvas::render::{DrawCommand, RecordingContext};
use chart_canvas::theme::CrosshairStyle;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn rows() -> Vec<DataRow> {
    (0..5)
        .map(|i| DataRow::new(start() + TimeDelta::hours(i)).with_field("close", 1.0))
        .collect()
}

#[test]
fn magnet_crosshair_draws_at_snapped_row() {
    let rows = rows();
    let mut time_scale =
        TimeScale::new((start(), start() + TimeDelta::hours(4)), (0.0, 400.0)).expect("scale");
    let value_scale = LinearScale::new((0.0, 2.0), (100.0, 0.0)).expect("scale");

    let mut state = InteractionState::default();
    state
        .on_pointer_move(Point::new(228.0, 50.0), &rows, &mut time_scale, Some(&value_scale))
        .expect("pointer move");

    let mut pane = Pane::new("price");
    pane.crosshair = state
        .crosshair_element(CrosshairStyle::default())
        .map(Element::Crosshair);
    let mut context = RecordingContext::new();
    pane.draw(&mut context, Some(&time_scale), Some(&value_scale), 2.0)
        .expect("draw");

    assert!(context
        .commands()
        .contains(&DrawCommand::MoveTo { x: 200.0, y: 100.0 }));
    assert!(context
        .commands()
        .contains(&DrawCommand::MoveTo { x: 0.0, y: 50.0 }));
}

#[test]
fn normal_mode_follows_raw_pointer_and_leave_hides() {
    let rows = rows();
    let mut time_scale =
        TimeScale::new((start(), start() + TimeDelta::hours(4)), (0.0, 400.0)).expect("scale");

    let mut state = InteractionState::default();
    state.set_crosshair_mode(CrosshairMode::Normal);
    state
        .on_pointer_move(Point::new(150.0, 10.0), &rows, &mut time_scale, None)
        .expect("pointer move");
    let position = state.crosshair().expect("shown");
    assert_eq!(position.time, Some(start() + TimeDelta::minutes(90)));
    assert_eq!(position.value, None);
    assert_eq!(position.row_index, None);

    state.on_pointer_leave();
    assert!(state.crosshair().is_none());
    assert!(state.cursor().is_none());
    assert!(state.crosshair_element(CrosshairStyle::default()).is_none());
}

#[test]
fn zoom_keeps_anchor_time_fixed() {
    let mut time_scale =
        TimeScale::new((start(), start() + TimeDelta::hours(4)), (0.0, 400.0)).expect("scale");
    let anchor_time = time_scale.invert(100.0).expect("anchor");

    let mut state = InteractionState::default();
    state
        .zoom(&mut time_scale, 2.0, 100.0, TimeDelta::minutes(1))
        .expect("zoom");
    assert_eq!(time_scale.invert(100.0), Some(anchor_time));
    let (from, to) = time_scale.domain().expect("domain");
    assert_eq!(to - from, TimeDelta::hours(2));

    assert!(state.zoom(&mut time_scale, 0.0, 100.0, TimeDelta::minutes(1)).is_err());
}
