use crate::core::{Curve, Point, align};
use crate::error::ChartResult;
use crate::render::Color;
use crate::scenegraph::{NodeId, Stage};

/// Filled area under a curve with a stroked outline on top.
///
/// Two graphics children: the area first, the outline second, so the
/// outline always paints over the fill.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleCurve {
    root: NodeId,
    area: NodeId,
    line: NodeId,
    fill: Color,
    fill_alpha: f64,
    stroke: Color,
    stroke_width: f64,
    curve: Curve,
}

impl CandleCurve {
    pub fn new(stage: &mut Stage, fill: Color, stroke: Color) -> ChartResult<Self> {
        let root = stage.create_container();
        let area = stage.create_graphics();
        let line = stage.create_graphics();
        stage.add_children(root, &[area, line])?;
        Ok(Self {
            root,
            area,
            line,
            fill,
            fill_alpha: 0.5,
            stroke,
            stroke_width: 1.0,
            curve: Curve::StepBefore,
        })
    }

    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f64) -> Self {
        self.fill_alpha = alpha;
        self
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn area(&self) -> NodeId {
        self.area
    }

    #[must_use]
    pub fn line(&self) -> NodeId {
        self.line
    }

    /// Redraws from pixel-space `points`, filling down to `baseline_y`.
    /// Fewer than two points leaves both children empty.
    pub fn update(
        &self,
        stage: &mut Stage,
        points: &[Point],
        baseline_y: f64,
        resolution: f64,
    ) -> ChartResult<()> {
        let aligned: Vec<Point> = points
            .iter()
            .map(|point| Point::new(point.x, align(point.y, resolution)))
            .collect();

        let area = stage.graphics_mut(self.area)?;
        area.clear();
        area.begin_fill(self.fill, self.fill_alpha)
            .draw_area(&aligned, self.curve, baseline_y)
            .end_fill();

        let line = stage.graphics_mut(self.line)?;
        line.clear();
        line.line_style(self.stroke_width, self.stroke, 1.0)
            .draw_line(&aligned, self.curve);
        Ok(())
    }
}
