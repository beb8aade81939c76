use crate::core::{Curve, Point, align};
use crate::error::ChartResult;
use crate::render::Color;
use crate::scenegraph::{NodeId, Stage};

/// Full-width horizontal guide (price line, crosshair arm).
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalLine {
    root: NodeId,
    color: Color,
    width: f64,
    dash: Vec<f64>,
}

impl HorizontalLine {
    pub fn new(stage: &mut Stage, color: Color, width: f64) -> Self {
        Self {
            root: stage.create_graphics(),
            color,
            width,
            dash: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = dash.to_vec();
        self
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Redraws the line at pixel row `y`, spanning `[0, width]`.
    pub fn update(&self, stage: &mut Stage, y: f64, width: f64, resolution: f64) -> ChartResult<()> {
        let y = align(y, resolution);
        let graphics = stage.graphics_mut(self.root)?;
        graphics.clear();
        graphics
            .line_style(self.width, self.color, 1.0)
            .line_dash(&self.dash)
            .draw_line(&[Point::new(0.0, y), Point::new(width, y)], Curve::Linear);
        Ok(())
    }
}
