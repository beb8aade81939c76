use chart_canvas::core::{Curve, Point};
use chart_canvas::render::{Color, DrawCommand, RecordingContext};
use chart_canvas::scenegraph::{
    CandleCurve, CanvasRenderer, DisplayKind, HorizontalLine, Indicator, Rect, Stage,
    VerticalAxis, VerticalLine,
};
use chart_canvas::theme::AxisStyle;

fn render(stage: &Stage, root: chart_canvas::NodeId) -> RecordingContext {
    let mut renderer = CanvasRenderer::new(RecordingContext::new(), 1.0).expect("renderer");
    renderer.render(stage, root).expect("render");
    renderer.into_context()
}

#[test]
fn repeated_updates_yield_identical_scenes() {
    let mut stage = Stage::new();
    let line = HorizontalLine::new(&mut stage, Color::BLACK, 1.0).with_dash(&[2.0, 2.0]);
    line.update(&mut stage, 40.0, 300.0, 1.0).expect("first update");
    let first = render(&stage, line.root()).into_commands();
    line.update(&mut stage, 40.0, 300.0, 1.0).expect("second update");
    let second = render(&stage, line.root()).into_commands();

    assert_eq!(first, second);
    assert_eq!(stage.graphics(line.root()).expect("graphics").geometry().len(), 1);
}

#[test]
fn vertical_line_spans_height_at_aligned_x() {
    let mut stage = Stage::new();
    let line = VerticalLine::new(&mut stage, Color::BLACK, 1.0);
    line.update(&mut stage, 10.2, 50.0, 1.0).expect("update");

    let context = render(&stage, line.root());
    assert!(context
        .commands()
        .contains(&DrawCommand::MoveTo { x: 10.5, y: 0.0 }));
    assert!(context
        .commands()
        .contains(&DrawCommand::LineTo { x: 10.5, y: 50.0 }));
}

#[test]
fn rect_and_indicator_fill_once() {
    let mut stage = Stage::new();
    let root = stage.create_container();
    let rect = Rect::new(&mut stage, Color::WHITE, 0.3);
    let indicator = Indicator::new(&mut stage, Color::BLACK, Color::WHITE);
    stage
        .add_children(root, &[rect.root(), indicator.root()])
        .expect("add widgets");

    rect.update(&mut stage, 0.0, 0.0, 20.0, 10.0, 1.0).expect("rect");
    indicator.update(&mut stage, 5.0, 5.0, 1.0).expect("indicator");
    let context = render(&stage, root);
    assert!(context.fill_count() >= 2);

    indicator.set_visible(&mut stage, false).expect("hide");
    rect.update(&mut stage, 0.0, 0.0, 20.0, 10.0, 1.0).expect("rect again");
    assert_eq!(render(&stage, root).fill_count(), 1);
}

#[test]
fn candle_curve_keeps_outline_above_area() {
    let mut stage = Stage::new();
    let curve = CandleCurve::new(&mut stage, Color::WHITE, Color::BLACK)
        .expect("candle curve")
        .with_curve(Curve::Linear);
    assert_eq!(stage.children(curve.root()), &[curve.area(), curve.line()]);

    curve
        .update(
            &mut stage,
            &[Point::new(0.0, 10.0), Point::new(10.0, 20.0), Point::new(20.0, 5.0)],
            30.0,
            2.0,
        )
        .expect("update");
    let context = render(&stage, curve.root());
    let paint: Vec<&DrawCommand> = context
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::Fill | DrawCommand::Stroke))
        .collect();
    assert_eq!(paint, vec![&DrawCommand::Fill, &DrawCommand::Stroke]);

    curve.update(&mut stage, &[Point::new(0.0, 1.0)], 30.0, 2.0).expect("shrink");
    assert!(stage.graphics(curve.area()).expect("area").geometry().is_empty());
    assert!(stage.graphics(curve.line()).expect("line").geometry().is_empty());
}

#[test]
fn vertical_axis_pools_label_nodes() {
    let mut stage = Stage::new();
    let mut axis = VerticalAxis::new(&mut stage, AxisStyle::default()).expect("axis");
    let ticks: Vec<(f64, String)> = (0..5)
        .map(|i| (f64::from(i) * 20.0, format!("{i}.00")))
        .collect();

    axis.update(&mut stage, &ticks, 60.0, 1.0).expect("five ticks");
    assert_eq!(axis.label_nodes().len(), 5);
    let kept = axis.label_nodes()[0];

    axis.update(&mut stage, &ticks[..2], 60.0, 1.0).expect("two ticks");
    assert_eq!(axis.label_nodes().len(), 2);
    assert_eq!(axis.label_nodes()[0], kept);
    // ticks graphics plus two labels
    assert_eq!(stage.children(axis.root()).len(), 3);

    let label = stage.get(kept).expect("label node");
    match label.kind() {
        DisplayKind::Text(text) => assert_eq!(text.text, "0.00"),
        other => panic!("expected text node, got {other:?}"),
    }
    assert_eq!(render(&stage, axis.root()).texts(), vec!["0.00", "1.00"]);
}
