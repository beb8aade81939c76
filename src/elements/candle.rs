use chrono::{DateTime, TimeDelta, Utc};

use crate::core::{Candle, Curve, LinearScale, TimeScale, align, align_span};
use crate::error::ChartResult;
use crate::render::{ContextScope, DrawingContext};
use crate::scenegraph::Graphics;
use crate::theme::CandleStyle;

use super::{PositionalElement, RenderableElement, ordered, require_time_scale, require_value_scale};

/// Candle body fills at most this share of its interval so neighbours stay apart.
const BODY_WIDTH_RATIO: f64 = 0.8;

/// One OHLC candle: a filled body between open and close and a wick from
/// high to low. Draws exactly one fill and one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleElement {
    pub x: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub width: TimeDelta,
    pub style: CandleStyle,
}

impl CandleElement {
    #[must_use]
    pub fn from_candle(candle: &Candle, width: TimeDelta, style: CandleStyle) -> Self {
        Self {
            x: candle.date,
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            width,
            style,
        }
    }

    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    fn layout(
        &self,
        time_scale: &TimeScale,
        value_scale: &LinearScale,
        pixel_ratio: f64,
    ) -> CandleLayout {
        let body_width = align_span(
            time_scale.span_px(self.width).abs() * BODY_WIDTH_RATIO,
            pixel_ratio,
        );
        let center = align(time_scale.map(self.x), pixel_ratio);
        let (body_top, body_bottom) =
            ordered(value_scale.map(self.open), value_scale.map(self.close));
        let body_height = align_span(body_bottom - body_top, pixel_ratio);
        let (wick_top, wick_bottom) =
            ordered(value_scale.map(self.high), value_scale.map(self.low));

        CandleLayout {
            center,
            body_left: center - body_width / 2.0,
            body_top,
            body_width,
            body_height,
            wick_top,
            wick_bottom,
        }
    }

    pub(crate) fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "candle")?;
        let value_scale = require_value_scale(value_scale, "candle")?;
        let layout = self.layout(time_scale, value_scale, pixel_ratio);
        let bullish = self.is_bullish();

        graphics
            .line_style(0.0, self.style.stroke_for(bullish), 1.0)
            .begin_fill(self.style.fill_for(bullish), 1.0)
            .draw_rect(
                layout.body_left,
                layout.body_top,
                layout.body_width,
                layout.body_height,
            )
            .end_fill()
            .line_style(1.0, self.style.stroke_for(bullish), 1.0)
            .draw_line(
                &[
                    (layout.center, layout.wick_top).into(),
                    (layout.center, layout.wick_bottom).into(),
                ],
                Curve::Linear,
            );
        Ok(())
    }
}

struct CandleLayout {
    center: f64,
    body_left: f64,
    body_top: f64,
    body_width: f64,
    body_height: f64,
    wick_top: f64,
    wick_bottom: f64,
}

impl RenderableElement for CandleElement {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let time_scale = require_time_scale(time_scale, "candle")?;
        let value_scale = require_value_scale(value_scale, "candle")?;
        let layout = self.layout(time_scale, value_scale, pixel_ratio);
        let bullish = self.is_bullish();

        let mut scope = ContextScope::new(context);
        scope.set_fill_color(self.style.fill_for(bullish));
        scope.begin_path();
        scope.rect(
            layout.body_left,
            layout.body_top,
            layout.body_width,
            layout.body_height,
        );
        scope.fill();

        scope.set_stroke_color(self.style.stroke_for(bullish));
        scope.set_line_width(1.0);
        scope.begin_path();
        scope.move_to(layout.center, layout.wick_top);
        scope.line_to(layout.center, layout.wick_bottom);
        scope.stroke();
        Ok(())
    }
}

impl PositionalElement for CandleElement {
    fn x(&self) -> DateTime<Utc> {
        self.x
    }
}
