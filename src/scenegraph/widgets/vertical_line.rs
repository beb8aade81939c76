use crate::core::{Curve, Point, align};
use crate::error::ChartResult;
use crate::render::Color;
use crate::scenegraph::{NodeId, Stage};

/// Full-height vertical guide.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLine {
    root: NodeId,
    color: Color,
    width: f64,
    dash: Vec<f64>,
}

impl VerticalLine {
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

    pub fn update(&self, stage: &mut Stage, x: f64, height: f64, resolution: f64) -> ChartResult<()> {
        let x = align(x, resolution);
        let graphics = stage.graphics_mut(self.root)?;
        graphics.clear();
        graphics
            .line_style(self.width, self.color, 1.0)
            .line_dash(&self.dash)
            .draw_line(&[Point::new(x, 0.0), Point::new(x, height)], Curve::Linear);
        Ok(())
    }
}
