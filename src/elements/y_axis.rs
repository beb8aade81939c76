use crate::core::{LinearScale, TimeScale, align, format_price, get_num_y_ticks};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext, TextAlign, TextBaseline};
use crate::theme::AxisStyle;

use super::{RenderableElement, require_value_scale};

/// Value axis drawn into its own strip to the right of the plot: a mark and
/// a left-aligned price label per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisElement {
    pub decimal_places: usize,
    pub style: AxisStyle,
}

impl YAxisElement {
    #[must_use]
    pub fn new(decimal_places: usize, style: AxisStyle) -> Self {
        Self {
            decimal_places,
            style,
        }
    }

    #[must_use]
    pub fn tick_labels(&self, value_scale: &LinearScale) -> Vec<(f64, String)> {
        let (bottom, top) = value_scale.range();
        value_scale
            .ticks(get_num_y_ticks(bottom - top))
            .into_iter()
            .map(|tick| (value_scale.map(tick), format_price(tick, self.decimal_places)))
            .collect()
    }
}

impl RenderableElement for YAxisElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        _time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let value_scale = require_value_scale(value_scale, "y-axis")?;
        let ticks = self.tick_labels(value_scale);
        let tick_length = self.style.tick_length_px;

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.style.tick_color);
        scope.set_line_width(1.0);
        scope.begin_path();
        for (y, _) in &ticks {
            let y = align(*y, pixel_ratio);
            scope.move_to(0.0, y);
            scope.line_to(tick_length, y);
        }
        scope.stroke();

        scope.set_font(&self.style.font);
        scope.set_fill_color(self.style.text_color);
        scope.set_text_align(TextAlign::Left);
        scope.set_text_baseline(TextBaseline::Middle);
        let label_x = tick_length + self.style.label_padding_px;
        for (y, label) in &ticks {
            scope.fill_text(label, label_x, *y);
        }
        Ok(())
    }
}
