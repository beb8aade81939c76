use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingContext, FontSpec, TextAlign, TextBaseline, TextMetrics,
};

#[derive(Debug, Clone)]
struct TextState {
    fill_color: Color,
    stroke_color: Color,
    font: FontSpec,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            font: FontSpec::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

/// [`DrawingContext`] over a borrowed Cairo context, with Pango text.
///
/// Cairo has one source color; fill and stroke colors are tracked here and
/// applied right before each fill/stroke. The first Cairo error is latched
/// and returned by [`CairoContext2d::finish`].
pub struct CairoContext2d<'a> {
    context: &'a Context,
    state: TextState,
    stack: Vec<TextState>,
    error: Option<ChartError>,
}

impl<'a> CairoContext2d<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            state: TextState::default(),
            stack: Vec::new(),
            error: None,
        }
    }

    /// Ends the pass, surfacing the first backend error if any.
    pub fn finish(self) -> ChartResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check(&mut self, result: Result<(), cairo::Error>, what: &str) {
        if let Err(err) = result {
            warn!(error = %err, what, "cairo operation failed");
            if self.error.is_none() {
                self.error = Some(map_backend_error(what, err));
            }
        }
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn with_detached_path(&mut self, what: &str, op: impl FnOnce(&Context) -> Result<(), cairo::Error>) {
        let result = self.context.copy_path().and_then(|path| {
            self.context.new_path();
            let drawn = op(self.context);
            self.context.new_path();
            self.context.append_path(&path);
            drawn
        });
        self.check(result, what);
    }

    fn layout(&self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(self.context);
        let mut description = FontDescription::new();
        description.set_family(&self.state.font.family);
        description.set_absolute_size(self.state.font.size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        layout
    }
}

impl DrawingContext for CairoContext2d<'_> {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
        let result = self.context.save();
        self.check(result, "failed to save context");
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        let result = self.context.restore();
        self.check(result, "failed to restore context");
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.context.translate(x, y);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.context.scale(x, y);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.context.set_dash(segments, 0.0);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.state.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rectangle(x, y, width, height);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context.arc(x, y, radius, start_angle, end_angle);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn fill(&mut self) {
        self.apply_color(self.state.fill_color);
        let result = self.context.fill_preserve();
        self.check(result, "failed to fill path");
    }

    fn stroke(&mut self) {
        self.apply_color(self.state.stroke_color);
        let result = self.context.stroke_preserve();
        self.check(result, "failed to stroke path");
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.apply_color(self.state.fill_color);
        self.with_detached_path("failed to fill rectangle", |context| {
            context.rectangle(x, y, width, height);
            context.fill()
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.with_detached_path("failed to clear rectangle", |context| {
            context.save()?;
            context.set_operator(Operator::Clear);
            context.rectangle(x, y, width, height);
            let filled = context.fill();
            context.restore()?;
            filled
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let layout = self.layout(text);
        let (width, height) = layout.pixel_size();
        let (width, height) = (f64::from(width), f64::from(height));
        let left = match self.state.text_align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let top = match self.state.text_baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - height / 2.0,
            TextBaseline::Alphabetic => y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
            TextBaseline::Bottom => y - height,
        };

        self.apply_color(self.state.fill_color);
        self.with_detached_path("failed to draw text", |context| {
            context.move_to(left, top);
            pangocairo::functions::show_layout(context, &layout);
            Ok(())
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let (width, height) = self.layout(text).pixel_size();
        TextMetrics {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

/// Offscreen Cairo image surface that chart frames can be drawn into.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Clears the surface and runs one draw pass against it.
    pub fn draw<F>(&mut self, draw: F) -> ChartResult<()>
    where
        F: FnOnce(&mut dyn DrawingContext) -> ChartResult<()>,
    {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.set_source_rgba(
            self.clear_color.red,
            self.clear_color.green,
            self.clear_color.blue,
            self.clear_color.alpha,
        );
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut canvas = CairoContext2d::new(&context);
        draw(&mut canvas)?;
        canvas.finish()
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
