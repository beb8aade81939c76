use crate::core::snap_to_device;
use crate::error::ChartResult;
use crate::render::Color;
use crate::scenegraph::{NodeId, Stage};

/// Filled rectangle (shaded regions, overlay backgrounds).
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    root: NodeId,
    color: Color,
    alpha: f64,
}

impl Rect {
    pub fn new(stage: &mut Stage, color: Color, alpha: f64) -> Self {
        Self {
            root: stage.create_graphics(),
            color,
            alpha,
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Redraws the rectangle. Negative sizes are recorded as given.
    pub fn update(
        &self,
        stage: &mut Stage,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        resolution: f64,
    ) -> ChartResult<()> {
        let snap = |v: f64| snap_to_device(v, resolution);
        let graphics = stage.graphics_mut(self.root)?;
        graphics.clear();
        graphics
            .begin_fill(self.color, self.alpha)
            .draw_rect(snap(x), snap(y), snap(width), snap(height))
            .end_fill();
        Ok(())
    }
}
