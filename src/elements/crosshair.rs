use chrono::{DateTime, Utc};

use crate::core::{LinearScale, TimeScale, align};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext};
use crate::theme::CrosshairStyle;

use super::{RenderableElement, require_time_scale, require_value_scale};

/// Dashed cross through the pointer position. Either line is omitted when
/// its coordinate is unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrosshairElement {
    pub time: Option<DateTime<Utc>>,
    pub value: Option<f64>,
    pub style: CrosshairStyle,
}

impl CrosshairElement {
    #[must_use]
    pub fn new(time: Option<DateTime<Utc>>, value: Option<f64>, style: CrosshairStyle) -> Self {
        Self { time, value, style }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.value.is_none()
    }
}

impl RenderableElement for CrosshairElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let time_scale = require_time_scale(time_scale, "crosshair")?;
        let value_scale = require_value_scale(value_scale, "crosshair")?;
        let (left, right) = time_scale.range();
        let (bottom, top) = value_scale.range();

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.style.color);
        scope.set_line_width(self.style.line_width);
        scope.set_line_dash(&self.style.dash);
        scope.begin_path();
        if let Some(time) = self.time {
            let x = align(time_scale.map(time), pixel_ratio);
            scope.move_to(x, bottom);
            scope.line_to(x, top);
        }
        if let Some(value) = self.value.filter(|value| value.is_finite()) {
            let y = align(value_scale.map(value), pixel_ratio);
            scope.move_to(left, y);
            scope.line_to(right, y);
        }
        scope.stroke();
        Ok(())
    }
}
