use crate::core::snap_to_device;
use crate::error::ChartResult;
use crate::render::Color;
use crate::scenegraph::{NodeId, Stage};

const INDICATOR_RADIUS_PX: f64 = 4.0;
const INDICATOR_RING_PX: f64 = 1.5;

/// Dot marking the hovered point on a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    root: NodeId,
    color: Color,
    ring: Color,
}

impl Indicator {
    pub fn new(stage: &mut Stage, color: Color, ring: Color) -> Self {
        Self {
            root: stage.create_graphics(),
            color,
            ring,
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn update(&self, stage: &mut Stage, x: f64, y: f64, resolution: f64) -> ChartResult<()> {
        let snap = |v: f64| snap_to_device(v, resolution);
        let graphics = stage.graphics_mut(self.root)?;
        graphics.clear();
        graphics
            .line_style(INDICATOR_RING_PX, self.ring, 1.0)
            .begin_fill(self.color, 1.0)
            .draw_circle(snap(x), snap(y), INDICATOR_RADIUS_PX)
            .end_fill();
        Ok(())
    }

    pub fn set_visible(&self, stage: &mut Stage, visible: bool) -> ChartResult<()> {
        stage.set_visible(self.root, visible)
    }
}
