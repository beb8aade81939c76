use crate::core::Point;
use crate::scenegraph::{FillStyle, LineStyle, Shape};

/// One recorded shape with the styles active when it was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsData {
    shape: Shape,
    fill_style: FillStyle,
    line_style: LineStyle,
}

impl GraphicsData {
    #[must_use]
    pub fn new(shape: Shape, fill_style: FillStyle, line_style: LineStyle) -> Self {
        Self {
            shape,
            fill_style,
            line_style,
        }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn fill_style(&self) -> &FillStyle {
        &self.fill_style
    }

    #[must_use]
    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }
}

/// Ordered list of recorded shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsGeometry {
    graphics_data: Vec<GraphicsData>,
}

impl GraphicsGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape. Bounds are not validated.
    pub fn draw_shape(
        &mut self,
        shape: impl Into<Shape>,
        fill_style: FillStyle,
        line_style: LineStyle,
    ) -> &mut Self {
        self.graphics_data
            .push(GraphicsData::new(shape.into(), fill_style, line_style));
        self
    }

    /// True when some shape with a visible fill contains `point`.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.graphics_data
            .iter()
            .filter(|data| data.fill_style.visible)
            .any(|data| data.shape.contains(point))
    }

    pub fn clear(&mut self) {
        self.graphics_data.clear();
    }

    #[must_use]
    pub fn graphics_data(&self) -> &[GraphicsData] {
        &self.graphics_data
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphics_data.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.graphics_data.len()
    }
}
