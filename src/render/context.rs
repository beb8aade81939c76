use crate::render::{Color, FontSpec, TextAlign, TextBaseline, TextMetrics};

/// Canvas-2D shaped drawing surface the rendering core draws against.
///
/// Implementations own all backend state. Calls are infallible so draw code
/// reads like canvas code; backends that can fail (cairo) latch the first
/// error and report it when the pass completes.
///
/// `save`/`restore` must snapshot and restore transform, colors, line width,
/// dash pattern and text settings. Use [`ContextScope`](crate::render::ContextScope)
/// instead of calling them directly.
pub trait DrawingContext {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, x: f64, y: f64);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Empty slice means a solid line.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn set_font(&mut self, font: &FontSpec);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Fills a rectangle without touching the current path.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn measure_text(&mut self, text: &str) -> TextMetrics;
}
