use std::cell::RefCell;
use std::rc::Rc;

use chart_canvas::core::{DataRow, ExtentTuning, Interval, LinearScale, TimeScale};
use chart_canvas::elements::{
    CrosshairElement, Element, LabelAnnotationElement, LabelCell, NoDataElement,
    RenderableElement, XAxisElement,
};
use chart_canvas::pane::{Layer, Pane, Scenegraph};
use chart_canvas::render::{DrawCommand, DrawingContext, RecordingContext};
use chart_canvas::theme::{AnnotationStyle, AxisStyle, CrosshairStyle, NoDataStyle};
use chart_canvas::{ChartError, ChartResult};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

#[derive(Debug, Clone)]
struct Probe {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl RenderableElement for Probe {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        _time_scale: Option<&TimeScale>,
        _value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        context.fill_rect(0.0, 0.0, 1.0, 1.0);
        self.log.borrow_mut().push(self.name);
        Ok(())
    }
}

fn probe(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Element {
    Element::Custom(Box::new(Probe {
        name,
        log: Rc::clone(log),
    }))
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn time_scale() -> TimeScale {
    TimeScale::new((start(), start() + TimeDelta::hours(4)), (0.0, 400.0)).expect("time scale")
}

#[test]
fn pane_paints_slots_back_to_front() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut pane = Pane::new("price");
    // Slots are filled out of order on purpose.
    pane.crosshair = Some(probe("crosshair", &log));
    pane.axis_tooltip = Some(probe("axis_tooltip", &log));
    pane.axis = Some(probe("axis", &log));
    pane.annotations.push(probe("annotation", &log));
    pane.label_lines.push(probe("label_line", &log));
    pane.grid = Some(probe("grid", &log));
    pane.push_layer(Layer::new("main").with_elements(vec![probe("main", &log)]));
    pane.push_layer(Layer::new("overlay").with_elements(vec![probe("overlay", &log)]));

    let value_scale = LinearScale::new((0.0, 1.0), (100.0, 0.0)).expect("value scale");
    let mut context = RecordingContext::new();
    pane.draw(&mut context, Some(&time_scale()), Some(&value_scale), 1.0)
        .expect("draw pane");

    assert_eq!(
        *log.borrow(),
        vec![
            "grid",
            "main",
            "overlay",
            "label_line",
            "annotation",
            "axis",
            "crosshair",
            "axis_tooltip",
        ]
    );
    assert_eq!(context.depth(), 0);
}

#[test]
fn axis_slots_paint_from_plot_right_edge() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut pane = Pane::new("price");
    pane.axis = Some(probe("axis", &log));

    let value_scale = LinearScale::new((0.0, 1.0), (100.0, 0.0)).expect("value scale");
    let mut context = RecordingContext::new();
    pane.draw(&mut context, Some(&time_scale()), Some(&value_scale), 1.0)
        .expect("draw pane");

    assert!(context
        .commands()
        .contains(&DrawCommand::Translate { x: 400.0, y: 0.0 }));
    assert_eq!(context.state().translate, (0.0, 0.0));
}

#[test]
fn overlapping_labels_are_pushed_apart() {
    let style = AnnotationStyle::default();
    let mut pane = Pane::new("price");
    pane.labels = vec![
        LabelAnnotationElement::new(50.0, vec![LabelCell::new("a")], style.clone()),
        LabelAnnotationElement::new(50.0, vec![LabelCell::new("b")], style.clone()),
    ];
    let row_height = pane.labels[0].height();

    let value_scale = LinearScale::new((0.0, 100.0), (200.0, 0.0)).expect("value scale");
    let mut context = RecordingContext::new();
    pane.draw(&mut context, Some(&time_scale()), Some(&value_scale), 1.0)
        .expect("draw pane");

    let text_ys: Vec<f64> = context
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FillText { y, .. } => Some(*y),
            _ => None,
        })
        .collect();
    assert_eq!(text_ys.len(), 2);
    assert!((text_ys[1] - text_ys[0] - row_height).abs() < 1e-9);
}

#[test]
fn resolve_y_domain_pads_asymmetrically() {
    let rows = vec![
        DataRow::new(start()).with_field("close", 100.0),
        DataRow::new(start() + TimeDelta::hours(1)).with_field("close", 200.0),
    ];
    let mut pane = Pane::new("price").with_data(rows, vec!["close".to_owned()]);
    let domain = pane
        .resolve_y_domain(ExtentTuning::default())
        .expect("domain");

    assert!((domain.0 - 90.0).abs() < 1e-9);
    assert!((domain.1 - 220.0).abs() < 1e-9);

    let empty = Pane::new("empty").with_data(Vec::new(), vec!["close".to_owned()]);
    assert!(empty.value_scale(100.0).is_err());
}

#[test]
fn scenegraph_stacks_panes_and_draws_x_axis_last() {
    let rows = vec![
        DataRow::new(start()).with_field("close", 10.0),
        DataRow::new(start() + TimeDelta::hours(1)).with_field("close", 20.0),
    ];
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut price = Pane::new("price").with_data(rows, vec!["close".to_owned()]);
    price.layer_mut("main").push(probe("price", &log));
    let mut study = Pane::new("study");
    study.layer_mut("main").push(probe("study", &log));

    let mut x_axis = Pane::new("x-axis");
    x_axis.axis = Some(Element::XAxis(XAxisElement::new(
        Interval::I1H,
        AxisStyle::default(),
    )));

    let mut scenegraph = Scenegraph::new(vec![price, study], x_axis);
    scenegraph.resolve_y_domains(ExtentTuning::default());

    let mut context = RecordingContext::new();
    scenegraph
        .draw(&mut context, &time_scale(), &[300.0, 100.0], 1.0)
        .expect("draw scenegraph");

    // The study pane has no data, so only the price pane draws.
    assert_eq!(*log.borrow(), vec!["price"]);
    assert!(context
        .commands()
        .contains(&DrawCommand::Translate { x: 0.0, y: 400.0 }));
    assert!(!context.texts().is_empty());
    assert_eq!(context.save_count(), context.restore_count());

    assert!(scenegraph
        .draw(&mut context, &time_scale(), &[300.0], 1.0)
        .is_err());
}

fn fill_rects(context: &RecordingContext) -> Vec<(f64, f64)> {
    context
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FillRect { x, width, .. } => Some((*x, *width)),
            _ => None,
        })
        .collect()
}

#[test]
fn pane_without_rows_needs_its_no_data_overlay_drawn_directly() {
    let mut empty = Pane::new("empty");
    empty
        .annotations
        .push(Element::NoData(NoDataElement::new(None, NoDataStyle::default())));
    let mut scenegraph = Scenegraph::new(vec![empty], Pane::new("x-axis"));
    scenegraph.resolve_y_domains(ExtentTuning::default());

    let mut context = RecordingContext::new();
    scenegraph
        .draw(&mut context, &time_scale(), &[200.0], 1.0)
        .expect("draw scenegraph");
    assert!(fill_rects(&context).is_empty());

    let fallback = LinearScale::new((0.0, 1.0), (200.0, 0.0)).expect("value scale");
    let mut context = RecordingContext::new();
    scenegraph.panes[0]
        .draw(&mut context, Some(&time_scale()), Some(&fallback), 1.0)
        .expect("draw pane");
    assert_eq!(fill_rects(&context), vec![(0.0, 400.0)]);
}

#[test]
fn crosshair_in_x_axis_pane_fails_the_frame() {
    let mut x_axis = Pane::new("x-axis");
    x_axis.crosshair = Some(Element::Crosshair(CrosshairElement::new(
        Some(start() + TimeDelta::hours(1)),
        None,
        CrosshairStyle::default(),
    )));
    let scenegraph = Scenegraph::new(Vec::new(), x_axis);

    let mut context = RecordingContext::new();
    let result = scenegraph.draw(&mut context, &time_scale(), &[], 1.0);
    assert!(matches!(result, Err(ChartError::InvalidScale(_))));
}
