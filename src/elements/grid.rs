use crate::core::{LinearScale, TimeScale, align, get_num_x_ticks, get_num_y_ticks};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext};
use crate::theme::GridStyle;

use super::{RenderableElement, require_time_scale, require_value_scale};

/// Vertical lines at the time-axis ticks and horizontal lines at the
/// value-axis ticks, in a single stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridElement {
    pub style: GridStyle,
}

impl GridElement {
    #[must_use]
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }
}

impl RenderableElement for GridElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "grid")?;
        let value_scale = require_value_scale(value_scale, "grid")?;
        let (left, right) = time_scale.range();
        let (bottom, top) = value_scale.range();

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.style.color);
        scope.set_line_width(self.style.line_width);
        scope.begin_path();
        for tick in time_scale.ticks(get_num_x_ticks(right - left)) {
            let x = align(time_scale.map(tick), pixel_ratio);
            scope.move_to(x, bottom);
            scope.line_to(x, top);
        }
        for tick in value_scale.ticks(get_num_y_ticks(bottom - top)) {
            let y = align(value_scale.map(tick), pixel_ratio);
            scope.move_to(left, y);
            scope.line_to(right, y);
        }
        scope.stroke();
        Ok(())
    }
}
