use chrono::{DateTime, Utc};

use crate::core::{LinearScale, TimeScale, format_date, format_price};
use crate::error::ChartResult;
use crate::render::{Color, ContextScope, DrawingContext, TextAlign, TextBaseline};
use crate::theme::AnnotationStyle;

use super::label_box::{BoxAnchor, draw_label_box, label_box_size};
use super::{RenderableElement, require_time_scale, require_value_scale};

/// Value readout on the value axis, e.g. the crosshair price.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisAnnotationElement {
    pub value: f64,
    pub decimal_places: usize,
    pub style: AnnotationStyle,
}

impl YAxisAnnotationElement {
    #[must_use]
    pub fn new(value: f64, decimal_places: usize, style: AnnotationStyle) -> Self {
        Self {
            value,
            decimal_places,
            style,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        format_price(self.value, self.decimal_places)
    }
}

impl RenderableElement for YAxisAnnotationElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        _time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let value_scale = require_value_scale(value_scale, "y-axis annotation")?;
        if !self.value.is_finite() {
            return Ok(());
        }
        let y = value_scale.map(self.value);
        draw_label_box(context, &self.text(), (0.0, y), BoxAnchor::LeftMiddle, &self.style);
        Ok(())
    }
}

/// Date readout on the time axis, centred on `time`.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisAnnotationElement {
    pub time: DateTime<Utc>,
    pub style: AnnotationStyle,
}

impl XAxisAnnotationElement {
    #[must_use]
    pub fn new(time: DateTime<Utc>, style: AnnotationStyle) -> Self {
        Self { time, style }
    }

    #[must_use]
    pub fn text(&self) -> String {
        format_date(Some(self.time))
    }
}

impl RenderableElement for XAxisAnnotationElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        _value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "x-axis annotation")?;
        let x = time_scale.map(self.time);
        draw_label_box(context, &self.text(), (x, 0.0), BoxAnchor::CenterTop, &self.style);
        Ok(())
    }
}

/// One segment of a [`LabelAnnotationElement`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCell {
    pub text: String,
    /// Overrides the style background for this cell.
    pub fill: Option<Color>,
    /// Overrides the style text color for this cell.
    pub text_color: Option<Color>,
}

impl LabelCell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
            text_color: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }
}

/// Row of boxed cells pinned to the left edge of the plot at `value`, such
/// as the legend of an order or position line.
///
/// Panes stack overlapping labels vertically; [`Self::draw_at`] takes the
/// already-shifted pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnnotationElement {
    pub value: f64,
    pub cells: Vec<LabelCell>,
    pub style: AnnotationStyle,
}

impl LabelAnnotationElement {
    #[must_use]
    pub fn new(value: f64, cells: Vec<LabelCell>, style: AnnotationStyle) -> Self {
        Self {
            value,
            cells,
            style,
        }
    }

    /// Height of the label row in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.style.font.size_px + 2.0 * self.style.padding_px
    }

    /// Draws the cells left to right starting at `x`, vertically centred on
    /// `center_y`.
    pub fn draw_at(&self, context: &mut dyn DrawingContext, x: f64, center_y: f64) {
        let mut scope = ContextScope::new(context);
        scope.set_text_align(TextAlign::Left);
        scope.set_text_baseline(TextBaseline::Middle);

        let mut left = x;
        for cell in &self.cells {
            let style = AnnotationStyle {
                background: cell.fill.unwrap_or(self.style.background),
                text_color: cell.text_color.unwrap_or(self.style.text_color),
                ..self.style.clone()
            };
            let (width, _) = label_box_size(&mut *scope, &cell.text, &style);
            draw_label_box(
                &mut *scope,
                &cell.text,
                (left, center_y),
                BoxAnchor::LeftMiddle,
                &style,
            );
            left += width;
        }
    }
}

impl RenderableElement for LabelAnnotationElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        _pixel_ratio: f64,
    ) -> ChartResult<()> {
        let value_scale = require_value_scale(value_scale, "label annotation")?;
        let left = time_scale.map_or(0.0, |scale| scale.range().0);
        self.draw_at(context, left, value_scale.map(self.value));
        Ok(())
    }
}
