//! Retained-mode layer: a tree of display objects replayed by a renderer.
//!
//! Nodes live in a [`Stage`] arena and are addressed by [`NodeId`]. Only
//! containers own children; graphics and text nodes draw themselves.

mod bridge;
mod geometry;
mod graphics;
mod renderer;
mod shapes;
mod stage;
mod styles;
mod text;
pub mod widgets;

pub use bridge::mount_pane;
pub use geometry::{GraphicsData, GraphicsGeometry};
pub use graphics::Graphics;
pub use renderer::CanvasRenderer;
pub use shapes::{Circle, Polygon, Rectangle, Shape};
pub use stage::{DisplayKind, DisplayObject, NodeId, Stage};
pub use styles::{FillStyle, LineStyle};
pub use text::Text;
pub use widgets::{CandleCurve, HorizontalLine, Indicator, Rect, VerticalAxis, VerticalLine};
