use crate::render::{Color, DrawingContext, FontSpec, TextAlign, TextBaseline};

/// Single-line label positioned by its display object.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub color: Color,
    pub font: FontSpec,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Text {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Color, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            color,
            font,
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }

    pub fn render<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        if self.text.is_empty() {
            return;
        }
        context.set_font(&self.font);
        context.set_fill_color(self.color);
        context.set_text_align(self.align);
        context.set_text_baseline(self.baseline);
        context.fill_text(&self.text, 0.0, 0.0);
    }
}
