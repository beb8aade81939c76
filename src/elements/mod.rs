//! Immediate-mode chart primitives.
//!
//! Elements hold only their inputs; every `draw` call issues the full set of
//! canvas operations for the current scales. Everything a variant needs
//! beyond the scales and pixel ratio (colors, intervals, crosshair position)
//! is a typed field of that variant.

mod area;
mod bar;
mod candle;
mod crosshair;
mod grid;
mod label_box;
mod labels;
mod line;
mod no_data;
mod rule;
mod tick;
mod x_axis;
mod y_axis;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::core::{LinearScale, TimeScale};
use crate::error::{ChartError, ChartResult};
use crate::render::DrawingContext;
use crate::scenegraph::Graphics;

pub use area::AreaElement;
pub use bar::BarElement;
pub use candle::CandleElement;
pub use crosshair::CrosshairElement;
pub use grid::GridElement;
pub use labels::{LabelAnnotationElement, LabelCell, XAxisAnnotationElement, YAxisAnnotationElement};
pub use line::LineElement;
pub use no_data::NoDataElement;
pub use rule::RuleElement;
pub use tick::{TickElement, TickOrientation};
pub use x_axis::XAxisElement;
pub use y_axis::YAxisElement;

/// Anything that can draw itself given the pane's scales.
///
/// Scales are optional only where an implementation can work without them;
/// a missing required scale is reported as [`ChartError::InvalidScale`].
pub trait RenderableElement: fmt::Debug {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()>;
}

/// Element anchored at one timestamp, so it can be sorted and looked up
/// without drawing.
pub trait PositionalElement: RenderableElement {
    fn x(&self) -> DateTime<Utc>;
}

/// Every drawable kind a pane can hold.
#[derive(Debug)]
pub enum Element {
    /// Satisfies a slot without drawing anything.
    Dummy,
    Area(AreaElement),
    Bar(BarElement),
    Candle(CandleElement),
    Crosshair(CrosshairElement),
    Grid(GridElement),
    Label(LabelAnnotationElement),
    Line(LineElement),
    NoData(NoDataElement),
    Rule(RuleElement),
    Tick(TickElement),
    XAxis(XAxisElement),
    XAxisAnnotation(XAxisAnnotationElement),
    YAxis(YAxisElement),
    YAxisAnnotation(YAxisAnnotationElement),
    /// Host-defined primitive.
    Custom(Box<dyn RenderableElement>),
}

impl Element {
    /// Anchor time for positional variants.
    #[must_use]
    pub fn x(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Bar(bar) => Some(bar.x()),
            Self::Candle(candle) => Some(candle.x()),
            Self::Tick(tick) => Some(tick.x()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dummy(&self) -> bool {
        matches!(self, Self::Dummy)
    }

    /// Records this element into a retained [`Graphics`] buffer.
    ///
    /// Returns `false` for variants that only draw in immediate mode
    /// (text-bearing and full-span overlays).
    pub fn record(
        &self,
        graphics: &mut Graphics,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<bool> {
        match self {
            Self::Area(area) => area.record(graphics, time_scale, value_scale)?,
            Self::Bar(bar) => bar.record(graphics, time_scale, value_scale, pixel_ratio)?,
            Self::Candle(candle) => candle.record(graphics, time_scale, value_scale, pixel_ratio)?,
            Self::Line(line) => line.record(graphics, time_scale, value_scale)?,
            Self::Rule(rule) => rule.record(graphics, time_scale, value_scale, pixel_ratio)?,
            Self::Dummy
            | Self::Crosshair(_)
            | Self::Grid(_)
            | Self::Label(_)
            | Self::NoData(_)
            | Self::Tick(_)
            | Self::XAxis(_)
            | Self::XAxisAnnotation(_)
            | Self::YAxis(_)
            | Self::YAxisAnnotation(_)
            | Self::Custom(_) => return Ok(false),
        }
        Ok(true)
    }
}

impl RenderableElement for Element {
    fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        match self {
            Self::Dummy => Ok(()),
            Self::Area(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Bar(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Candle(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Crosshair(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Grid(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Label(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Line(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::NoData(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Rule(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::Tick(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::XAxis(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::XAxisAnnotation(element) => {
                element.draw(context, time_scale, value_scale, pixel_ratio)
            }
            Self::YAxis(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
            Self::YAxisAnnotation(element) => {
                element.draw(context, time_scale, value_scale, pixel_ratio)
            }
            Self::Custom(element) => element.draw(context, time_scale, value_scale, pixel_ratio),
        }
    }
}

macro_rules! impl_from_element {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_element! {
    Area => AreaElement,
    Bar => BarElement,
    Candle => CandleElement,
    Crosshair => CrosshairElement,
    Grid => GridElement,
    Label => LabelAnnotationElement,
    Line => LineElement,
    NoData => NoDataElement,
    Rule => RuleElement,
    Tick => TickElement,
    XAxis => XAxisElement,
    XAxisAnnotation => XAxisAnnotationElement,
    YAxis => YAxisElement,
    YAxisAnnotation => YAxisAnnotationElement,
}

pub(crate) fn require_time_scale<'a>(
    scale: Option<&'a TimeScale>,
    element: &str,
) -> ChartResult<&'a TimeScale> {
    scale.ok_or_else(|| ChartError::InvalidScale(format!("{element} requires a time scale")))
}

pub(crate) fn require_value_scale<'a>(
    scale: Option<&'a LinearScale>,
    element: &str,
) -> ChartResult<&'a LinearScale> {
    scale.ok_or_else(|| ChartError::InvalidScale(format!("{element} requires a value scale")))
}

/// Pixel span of `[lo, hi]` ordered ascending.
pub(crate) fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
