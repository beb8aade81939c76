//! GTK4 hookup: drives chart draws from a `DrawingArea`.

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{CairoContext2d, DrawingContext};

/// Installs `draw` as the area's draw function.
///
/// Each frame wraps GTK's cairo context in a [`CairoContext2d`]; errors from
/// `draw` or the backend are logged, since GTK draw callbacks cannot fail.
pub fn install_draw_func<F>(area: &gtk::DrawingArea, mut draw: F)
where
    F: FnMut(&mut dyn DrawingContext, Viewport) -> ChartResult<()> + 'static,
{
    area.set_draw_func(move |_, cairo_context, width, height| {
        let viewport = Viewport::new(width.max(0) as u32, height.max(0) as u32);
        if !viewport.is_valid() {
            return;
        }
        let mut canvas = CairoContext2d::new(cairo_context);
        let drawn = draw(&mut canvas, viewport);
        if let Err(err) = drawn.and(canvas.finish()) {
            warn!(error = %err, "chart draw failed");
        }
    });
}
