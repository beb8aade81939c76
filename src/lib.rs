//! chart-canvas: rendering core for time-series financial charts.
//!
//! Two drawing layers share one [`render::DrawingContext`] abstraction:
//!
//! - a retained scene ([`scenegraph`]) of containers, graphics and text nodes
//!   replayed by a [`scenegraph::CanvasRenderer`], with widgets that redraw
//!   themselves on demand
//! - immediate-mode [`elements`] that draw straight from time and value
//!   scales each frame, grouped into layered [`pane::Pane`]s
//!
//! Drawing backends: [`render::RecordingContext`] for headless use and, with
//! the `cairo-backend` feature, Cairo/Pango.

pub mod core;
pub mod elements;
pub mod error;
pub mod interaction;
pub mod pane;
pub mod render;
pub mod scenegraph;
pub mod telemetry;
pub mod theme;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use elements::{Element, PositionalElement, RenderableElement};
pub use error::{ChartError, ChartResult};
pub use pane::{Layer, Pane, Scenegraph};
pub use scenegraph::{CanvasRenderer, NodeId, Stage};
pub use theme::ChartTheme;
