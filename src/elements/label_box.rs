use crate::render::{ContextScope, DrawingContext, TextAlign, TextBaseline};
use crate::theme::AnnotationStyle;

/// Where the box sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoxAnchor {
    /// Anchor is the middle of the box's left edge.
    LeftMiddle,
    /// Anchor is the middle of the box's top edge.
    CenterTop,
}

/// Size of the box [`draw_label_box`] would draw for `text`.
pub(crate) fn label_box_size(
    context: &mut dyn DrawingContext,
    text: &str,
    style: &AnnotationStyle,
) -> (f64, f64) {
    let mut scope = ContextScope::new(context);
    scope.set_font(&style.font);
    let metrics = scope.measure_text(text);
    (
        metrics.width + 2.0 * style.padding_px,
        style.font.size_px + 2.0 * style.padding_px,
    )
}

/// Draws `text` on a filled, bordered box. Returns the box width.
pub(crate) fn draw_label_box(
    context: &mut dyn DrawingContext,
    text: &str,
    anchor: (f64, f64),
    placement: BoxAnchor,
    style: &AnnotationStyle,
) -> f64 {
    let (width, height) = label_box_size(context, text, style);
    let (left, top) = match placement {
        BoxAnchor::LeftMiddle => (anchor.0, anchor.1 - height / 2.0),
        BoxAnchor::CenterTop => (anchor.0 - width / 2.0, anchor.1),
    };

    let mut scope = ContextScope::new(context);
    scope.begin_path();
    scope.rect(left, top, width, height);
    scope.set_fill_color(style.background);
    scope.fill();
    scope.set_stroke_color(style.border);
    scope.set_line_width(1.0);
    scope.stroke();

    scope.set_font(&style.font);
    scope.set_fill_color(style.text_color);
    scope.set_text_align(TextAlign::Left);
    scope.set_text_baseline(TextBaseline::Middle);
    scope.fill_text(text, left + style.padding_px, top + height / 2.0);
    width
}
