use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::{Curve, LinearScale, Point, TimeScale, align};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext};
use crate::scenegraph::Graphics;

use super::{RenderableElement, require_time_scale, require_value_scale};

/// Straight rule in one of three modes, picked from which ends are set:
///
/// * no `x`: horizontal across the whole time range at `y` (zero when `y`
///   is also unset)
/// * `x` but no `y`: vertical across the whole value range at `x`
/// * both: segment from `(x, y)` to `(x2, y2)`, each end defaulting to the
///   start when unset
#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub x: Option<DateTime<Utc>>,
    pub y: Option<f64>,
    pub x2: Option<DateTime<Utc>>,
    pub y2: Option<f64>,
    pub color: Color,
    pub width: f64,
    pub dash: SmallVec<[f64; 4]>,
}

impl Default for RuleElement {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            x2: None,
            y2: None,
            color: Color::default(),
            width: 1.0,
            dash: SmallVec::new(),
        }
    }
}

impl RuleElement {
    #[must_use]
    pub fn horizontal(y: f64, color: Color) -> Self {
        Self {
            y: Some(y),
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn vertical(x: DateTime<Utc>, color: Color) -> Self {
        Self {
            x: Some(x),
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn segment(from: (DateTime<Utc>, f64), to: (DateTime<Utc>, f64), color: Color) -> Self {
        Self {
            x: Some(from.0),
            y: Some(from.1),
            x2: Some(to.0),
            y2: Some(to.1),
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Pixel end points under the given scales.
    pub fn endpoints(
        &self,
        time_scale: &TimeScale,
        value_scale: &LinearScale,
        pixel_ratio: f64,
    ) -> (Point, Point) {
        match (self.x, self.y) {
            (None, y) => {
                let (left, right) = time_scale.range();
                let y = align(value_scale.map(y.unwrap_or(0.0)), pixel_ratio);
                (Point::new(left, y), Point::new(right, y))
            }
            (Some(x), None) => {
                let (bottom, top) = value_scale.range();
                let x = align(time_scale.map(x), pixel_ratio);
                (Point::new(x, bottom), Point::new(x, top))
            }
            (Some(x), Some(y)) => {
                let x2 = self.x2.unwrap_or(x);
                let y2 = self.y2.unwrap_or(y);
                (
                    Point::new(time_scale.map(x), value_scale.map(y)),
                    Point::new(time_scale.map(x2), value_scale.map(y2)),
                )
            }
        }
    }

    pub(crate) fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "rule")?;
        let value_scale = require_value_scale(value_scale, "rule")?;
        let (start, end) = self.endpoints(time_scale, value_scale, pixel_ratio);
        graphics
            .line_style(self.width, self.color, 1.0)
            .line_dash(&self.dash)
            .draw_line(&[start, end], Curve::Linear);
        Ok(())
    }
}

impl RenderableElement for RuleElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "rule")?;
        let value_scale = require_value_scale(value_scale, "rule")?;
        let (start, end) = self.endpoints(time_scale, value_scale, pixel_ratio);

        let mut scope = ContextScope::new(context);
        scope.set_stroke_color(self.color);
        scope.set_line_width(self.width);
        scope.set_line_dash(&self.dash);
        scope.begin_path();
        scope.move_to(start.x, start.y);
        scope.line_to(end.x, end.y);
        scope.stroke();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::RuleElement;
    use crate::core::{LinearScale, TimeScale};
    use crate::render::Color;
    use crate::scenegraph::Graphics;

    fn scales() -> (TimeScale, LinearScale) {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("valid date");
        let time_scale = TimeScale::new((start, start + TimeDelta::hours(10)), (0.0, 200.0))
            .expect("time scale");
        let value_scale = LinearScale::new((0.0, 100.0), (100.0, 0.0)).expect("value scale");
        (time_scale, value_scale)
    }

    #[test]
    fn unset_rule_is_horizontal_at_zero() {
        let (time_scale, value_scale) = scales();
        let (start, end) = RuleElement::default().endpoints(&time_scale, &value_scale, 3.0);
        assert_eq!((start.x, end.x), (0.0, 200.0));
        assert_eq!((start.y, end.y), (100.0, 100.0));
    }

    #[test]
    fn rule_with_only_x_spans_value_range() {
        let (time_scale, value_scale) = scales();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).single().expect("valid date");
        let (start, end) =
            RuleElement::vertical(at, Color::BLACK).endpoints(&time_scale, &value_scale, 3.0);
        assert_eq!((start.x, end.x), (100.0, 100.0));
        assert_eq!((start.y, end.y), (100.0, 0.0));
    }

    #[test]
    fn default_rule_records_a_visible_stroke() {
        let (time_scale, value_scale) = scales();
        let mut graphics = Graphics::new();
        RuleElement::default()
            .record(&mut graphics, Some(&time_scale), Some(&value_scale), 1.0)
            .expect("record rule");

        let data = graphics.geometry().graphics_data();
        assert_eq!(data.len(), 1);
        assert!(data[0].line_style().is_drawable());
        assert_eq!(data[0].line_style().width, 1.0);
    }
}
