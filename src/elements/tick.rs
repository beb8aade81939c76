use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, TimeScale, align, align_span};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext};

use super::{PositionalElement, RenderableElement, require_time_scale, require_value_scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOrientation {
    Left,
    Right,
}

/// Short horizontal tick at `(x, y)` extending half a `width` interval to one
/// side. Used for the open and close marks of OHLC bars.
#[derive(Debug, Clone, PartialEq)]
pub struct TickElement {
    pub x: DateTime<Utc>,
    pub y: f64,
    pub width: TimeDelta,
    pub orientation: TickOrientation,
    pub color: Color,
    pub line_width: f64,
}

impl TickElement {
    #[must_use]
    pub fn new(
        x: DateTime<Utc>,
        y: f64,
        width: TimeDelta,
        orientation: TickOrientation,
        color: Color,
    ) -> Self {
        Self {
            x,
            y,
            width,
            orientation,
            color,
            line_width: 1.0,
        }
    }
}

impl RenderableElement for TickElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "tick")?;
        let value_scale = require_value_scale(value_scale, "tick")?;

        let center = align(time_scale.map(self.x), pixel_ratio);
        let y = align(value_scale.map(self.y), pixel_ratio);
        let length = align_span(time_scale.span_px(self.width).abs() / 2.0, pixel_ratio);
        let end = match self.orientation {
            TickOrientation::Left => center - length,
            TickOrientation::Right => center + length,
        };

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.color);
        scope.set_line_width(self.line_width);
        scope.begin_path();
        scope.move_to(center, y);
        scope.line_to(end, y);
        scope.stroke();
        Ok(())
    }
}

impl PositionalElement for TickElement {
    fn x(&self) -> DateTime<Utc> {
        self.x
    }
}
