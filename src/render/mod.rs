mod context;
mod layer_stack;
mod primitives;
mod recording;
mod scope;

pub use context::DrawingContext;
pub use layer_stack::PaneSlot;
pub use primitives::{Color, FontSpec, TextAlign, TextBaseline, TextMetrics};
pub use recording::{DrawCommand, RecordedState, RecordingContext};
pub use scope::ContextScope;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContext2d, CairoRenderer};
