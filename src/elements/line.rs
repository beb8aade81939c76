use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::{Curve, LinearScale, Point, TimeScale};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext};
use crate::scenegraph::Graphics;

use super::{RenderableElement, require_time_scale, require_value_scale};

/// Stroked polyline through `(time, value)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub points: Vec<(DateTime<Utc>, f64)>,
    pub color: Color,
    pub width: f64,
    pub curve: Curve,
    pub dash: SmallVec<[f64; 4]>,
}

impl LineElement {
    #[must_use]
    pub fn new(points: Vec<(DateTime<Utc>, f64)>, color: Color) -> Self {
        Self {
            points,
            color,
            width: 1.0,
            curve: Curve::Linear,
            dash: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    /// Pixel-space vertices after curve interpolation. Non-finite values are
    /// dropped.
    pub(crate) fn pixel_points(&self, time_scale: &TimeScale, value_scale: &LinearScale) -> Vec<Point> {
        let mapped: Vec<Point> = self
            .points
            .iter()
            .filter(|(_, value)| value.is_finite())
            .map(|(time, value)| Point::new(time_scale.map(*time), value_scale.map(*value)))
            .collect();
        self.curve.interpolate(&mapped)
    }

    pub(crate) fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "line")?;
        let value_scale = require_value_scale(value_scale, "line")?;
        graphics
            .line_style(self.width, self.color, 1.0)
            .line_dash(&self.dash)
            .draw_line(&self.pixel_points(time_scale, value_scale), Curve::Linear);
        Ok(())
    }
}

impl RenderableElement for LineElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "line")?;
        let value_scale = require_value_scale(value_scale, "line")?;
        let points = self.pixel_points(time_scale, value_scale);
        let [first, rest @ ..] = points.as_slice() else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.color);
        scope.set_line_width(self.width);
        scope.set_line_dash(&self.dash);
        scope.begin_path();
        scope.move_to(first.x, first.y);
        for point in rest {
            scope.line_to(point.x, point.y);
        }
        scope.stroke();
        Ok(())
    }
}
