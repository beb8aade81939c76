use crate::core::{Interval, LinearScale, TimeScale, align, format_time_tick, get_num_x_ticks};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext, TextAlign, TextBaseline};
use crate::theme::AxisStyle;

use super::{RenderableElement, require_time_scale};

/// Time axis: a short mark and a centred label per tick, laid out from the
/// top of the axis strip. Needs no value scale.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisElement {
    pub interval: Interval,
    pub style: AxisStyle,
}

impl XAxisElement {
    #[must_use]
    pub fn new(interval: Interval, style: AxisStyle) -> Self {
        Self { interval, style }
    }

    /// Tick pixel positions and labels for the given scale.
    #[must_use]
    pub fn tick_labels(&self, time_scale: &TimeScale) -> Vec<(f64, String)> {
        let (left, right) = time_scale.range();
        time_scale
            .ticks(get_num_x_ticks(right - left))
            .into_iter()
            .map(|tick| (time_scale.map(tick), format_time_tick(tick, self.interval)))
            .collect()
    }
}

impl RenderableElement for XAxisElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        _value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "x-axis")?;
        let ticks = self.tick_labels(time_scale);
        let tick_length = self.style.tick_length_px;

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.style.tick_color);
        scope.set_line_width(1.0);
        scope.begin_path();
        for (x, _) in &ticks {
            let x = align(*x, pixel_ratio);
            scope.move_to(x, 0.0);
            scope.line_to(x, tick_length);
        }
        scope.stroke();

        scope.set_font(&self.style.font);
        scope.set_fill_color(self.style.text_color);
        scope.set_text_align(TextAlign::Center);
        scope.set_text_baseline(TextBaseline::Top);
        let label_y = tick_length + self.style.label_padding_px;
        for (x, label) in &ticks {
            scope.fill_text(label, *x, label_y);
        }
        Ok(())
    }
}
