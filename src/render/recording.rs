use crate::render::{Color, DrawingContext, FontSpec, TextAlign, TextBaseline, TextMetrics};

/// Glyph advance used by the headless text measurement, as a share of font size.
const APPROX_GLYPH_WIDTH_RATIO: f64 = 0.6;

/// One call issued against a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Scale { x: f64, y: f64 },
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    SetFont(FontSpec),
    SetTextAlign(TextAlign),
    SetTextBaseline(TextBaseline),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    ClosePath,
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64 },
}

/// Style and transform state tracked by the recording backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedState {
    pub translate: (f64, f64),
    pub scale: (f64, f64),
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f64,
    pub line_dash: Vec<f64>,
    pub font: FontSpec,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for RecordedState {
    fn default() -> Self {
        Self {
            translate: (0.0, 0.0),
            scale: (1.0, 1.0),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            line_dash: Vec::new(),
            font: FontSpec::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

/// Headless drawing context that logs every call.
///
/// Used by tests to assert draw sequences and by hosts that want to replay a
/// frame onto another surface later.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    state: RecordedState,
    stack: Vec<RecordedState>,
    unbalanced_restores: usize,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    #[must_use]
    pub fn state(&self) -> &RecordedState {
        &self.state
    }

    /// Current save nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// `restore` calls issued with nothing saved.
    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Fill | DrawCommand::FillRect { .. }))
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Stroke))
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Save))
    }

    #[must_use]
    pub fn restore_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Restore))
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingContext for RecordingContext {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => self.unbalanced_restores += 1,
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        let (sx, sy) = self.state.scale;
        self.state.translate.0 += x * sx;
        self.state.translate.1 += y * sy;
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.state.scale.0 *= x;
        self.state.scale.1 *= y;
        self.commands.push(DrawCommand::Scale { x, y });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.state.line_dash = segments.to_vec();
        self.commands.push(DrawCommand::SetLineDash(segments.to_vec()));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.state.font = font.clone();
        self.commands.push(DrawCommand::SetFont(font.clone()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
        self.commands.push(DrawCommand::SetTextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
        self.commands.push(DrawCommand::SetTextBaseline(baseline));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let size = self.state.font.size_px;
        TextMetrics {
            width: text.chars().count() as f64 * size * APPROX_GLYPH_WIDTH_RATIO,
            height: size,
        }
    }
}
