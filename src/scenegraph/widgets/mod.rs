//! Reusable retained widgets that redraw themselves from pixel-space input.
//!
//! Every `update` clears its graphics before drawing, so repeated calls with
//! the same arguments yield the same scene.

mod candle_curve;
mod horizontal_line;
mod indicator;
mod rect;
mod vertical_axis;
mod vertical_line;

pub use candle_curve::CandleCurve;
pub use horizontal_line::HorizontalLine;
pub use indicator::Indicator;
pub use rect::Rect;
pub use vertical_axis::VerticalAxis;
pub use vertical_line::VerticalLine;
