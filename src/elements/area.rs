use chrono::{DateTime, Utc};

use crate::core::{Curve, LinearScale, Point, TimeScale};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext};
use crate::scenegraph::Graphics;

use super::{RenderableElement, require_time_scale, require_value_scale};

/// Filled region between a curve and a horizontal baseline value.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaElement {
    pub points: Vec<(DateTime<Utc>, f64)>,
    pub baseline: f64,
    pub fill: Color,
    pub curve: Curve,
}

impl AreaElement {
    #[must_use]
    pub fn new(points: Vec<(DateTime<Utc>, f64)>, baseline: f64, fill: Color) -> Self {
        Self {
            points,
            baseline,
            fill,
            curve: Curve::Linear,
        }
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    fn pixel_points(&self, time_scale: &TimeScale, value_scale: &LinearScale) -> Vec<Point> {
        self.points
            .iter()
            .filter(|(_, value)| value.is_finite())
            .map(|(time, value)| Point::new(time_scale.map(*time), value_scale.map(*value)))
            .collect()
    }

    pub(crate) fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "area")?;
        let value_scale = require_value_scale(value_scale, "area")?;
        graphics
            .line_style(0.0, self.fill, 1.0)
            .begin_fill(self.fill, 1.0)
            .draw_area(
                &self.pixel_points(time_scale, value_scale),
                self.curve,
                value_scale.map(self.baseline),
            )
            .end_fill();
        Ok(())
    }
}

impl RenderableElement for AreaElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "area")?;
        let value_scale = require_value_scale(value_scale, "area")?;
        let outline = self.curve.interpolate(&self.pixel_points(time_scale, value_scale));
        let (Some(first), Some(last)) = (outline.first(), outline.last()) else {
            return Ok(());
        };
        if outline.len() < 2 {
            return Ok(());
        }
        let baseline = value_scale.map(self.baseline);

        let mut scope = ContextScope::new(context);
        scope.set_fill_color(self.fill);
        scope.begin_path();
        scope.move_to(first.x, first.y);
        for point in &outline[1..] {
            scope.line_to(point.x, point.y);
        }
        scope.line_to(last.x, baseline);
        scope.line_to(first.x, baseline);
        scope.close_path();
        scope.fill();
        Ok(())
    }
}
