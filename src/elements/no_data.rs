use chrono::{DateTime, Utc};

use crate::core::{LinearScale, TimeScale};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext, TextAlign, TextBaseline};
use crate::theme::NoDataStyle;

use super::{RenderableElement, ordered, require_time_scale, require_value_scale};

/// Shades the part of the plot after the last data point and prints the
/// no-data message there when it fits. With no data at all the whole plot
/// is shaded.
///
/// [`Scenegraph::draw`](crate::pane::Scenegraph::draw) skips panes without a
/// y-domain, overlays included, so a host shows this element for a pane
/// with no rows by drawing it directly with a fallback value scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoDataElement {
    pub last_date: Option<DateTime<Utc>>,
    pub style: NoDataStyle,
}

impl NoDataElement {
    #[must_use]
    pub fn new(last_date: Option<DateTime<Utc>>, style: NoDataStyle) -> Self {
        Self { last_date, style }
    }
}

impl RenderableElement for NoDataElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "no-data region")?;
        let value_scale = require_value_scale(value_scale, "no-data region")?;
        let (left, right) = ordered(time_scale.range().0, time_scale.range().1);
        let (top, bottom) = ordered(value_scale.range().0, value_scale.range().1);

        let start = self
            .last_date
            .map_or(left, |date| time_scale.map(date))
            .max(left)
            .min(right);
        let width = right - start;
        if width <= 0.0 {
            return Ok(());
        }

        let mut scope = ContextScope::new(context);
        scope.set_fill_color(self.style.background);
        scope.fill_rect(start, top, width, bottom - top);

        scope.set_font(&self.style.font);
        let metrics = scope.measure_text(&self.style.message);
        if metrics.width < width {
            scope.set_fill_color(self.style.text_color);
            scope.set_text_align(TextAlign::Center);
            scope.set_text_baseline(TextBaseline::Middle);
            scope.fill_text(&self.style.message, start + width / 2.0, (top + bottom) / 2.0);
        }
        Ok(())
    }
}
