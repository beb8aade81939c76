use chrono::{DateTime, TimeDelta, Utc};

use crate::core::{LinearScale, TimeScale, align, align_span};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext};
use crate::scenegraph::Graphics;

use super::{PositionalElement, RenderableElement, ordered, require_time_scale, require_value_scale};

/// Vertical bar centred on `x`, spanning `height` value units down from `y`.
///
/// The bar is one `width` interval wide and never narrower than a single
/// device pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct BarElement {
    pub x: DateTime<Utc>,
    pub y: f64,
    pub height: f64,
    pub width: TimeDelta,
    pub fill: Color,
    pub stroke: Option<Color>,
}

impl BarElement {
    #[must_use]
    pub fn new(x: DateTime<Utc>, y: f64, height: f64, width: TimeDelta, fill: Color) -> Self {
        Self {
            x,
            y,
            height,
            width,
            fill,
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Pixel rectangle `(left, top, width, height)` under the given scales.
    #[must_use]
    pub fn bounds(
        &self,
        time_scale: &TimeScale,
        value_scale: &LinearScale,
        pixel_ratio: f64,
    ) -> (f64, f64, f64, f64) {
        let width = align_span(time_scale.span_px(self.width).abs(), pixel_ratio);
        let center = align(time_scale.map(self.x), pixel_ratio);
        let (top, bottom) = ordered(
            value_scale.map(self.y),
            value_scale.map(self.y - self.height),
        );
        (center - width / 2.0, top, width, bottom - top)
    }

    pub(crate) fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "bar")?;
        let value_scale = require_value_scale(value_scale, "bar")?;
        let (left, top, width, height) = self.bounds(time_scale, value_scale, pixel_ratio);

        match self.stroke {
            Some(stroke) => graphics.line_style(1.0, stroke, 1.0),
            None => graphics.line_style(0.0, self.fill, 1.0),
        };
        graphics
            .begin_fill(self.fill, 1.0)
            .draw_rect(left, top, width, height)
            .end_fill();
        Ok(())
    }
}

impl RenderableElement for BarElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "bar")?;
        let value_scale = require_value_scale(value_scale, "bar")?;
        let (left, top, width, height) = self.bounds(time_scale, value_scale, pixel_ratio);

        let mut scope = ContextScope::new(context);
        scope.begin_path();
        scope.rect(left, top, width, height);
        scope.set_fill_color(self.fill);
        scope.fill();
        if let Some(stroke) = self.stroke {
            scope.set_stroke_color(stroke);
            scope.set_line_width(1.0);
            scope.stroke();
        }
        Ok(())
    }
}

impl PositionalElement for BarElement {
    fn x(&self) -> DateTime<Utc> {
        self.x
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::BarElement;
    use crate::core::{LinearScale, TimeScale};
    use crate::render::Color;

    #[test]
    fn narrow_bar_keeps_one_device_pixel() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
        let end = start + TimeDelta::days(365);
        let time_scale = TimeScale::new((start, end), (0.0, 100.0)).expect("time scale");
        let value_scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("value scale");

        let bar = BarElement::new(start, 5.0, 5.0, TimeDelta::minutes(1), Color::BLACK);
        let (_, top, width, height) = bar.bounds(&time_scale, &value_scale, 2.0);
        assert!((width - 0.5).abs() < 1e-12);
        assert!((top - 50.0).abs() < 1e-9);
        assert!((height - 50.0).abs() < 1e-9);
    }
}
