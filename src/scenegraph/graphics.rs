use std::f64::consts::TAU;

use crate::core::{Curve, Point};
use crate::render::{Color, DrawingContext};
use crate::scenegraph::{
    Circle, FillStyle, GraphicsGeometry, LineStyle, Polygon, Rectangle, Shape,
};

/// Retained drawing buffer: draw calls append styled shapes to a geometry
/// that the renderer replays every frame.
///
/// Shapes drawn between `begin_fill` and `end_fill` carry that fill; every
/// shape carries the line style active when it was drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graphics {
    geometry: GraphicsGeometry,
    fill_style: FillStyle,
    line_style: LineStyle,
}

impl Graphics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn geometry(&self) -> &GraphicsGeometry {
        &self.geometry
    }

    /// Drops every recorded shape and resets the active styles.
    pub fn clear(&mut self) -> &mut Self {
        self.geometry.clear();
        self.fill_style = FillStyle::default();
        self.line_style = LineStyle::default();
        self
    }

    /// Sets the stroke for subsequent shapes. A zero width disables stroking.
    pub fn line_style(&mut self, width: f64, color: Color, alpha: f64) -> &mut Self {
        self.line_style = LineStyle::solid(width, color, alpha);
        self
    }

    pub fn line_dash(&mut self, dash: &[f64]) -> &mut Self {
        self.line_style = self.line_style.clone().with_dash(dash);
        self
    }

    pub fn begin_fill(&mut self, color: Color, alpha: f64) -> &mut Self {
        self.fill_style = FillStyle::solid(color, alpha);
        self
    }

    pub fn end_fill(&mut self) -> &mut Self {
        self.fill_style = FillStyle::default();
        self
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.draw_shape(Rectangle::new(x, y, width, height))
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, radius: f64) -> &mut Self {
        self.draw_shape(Circle::new(x, y, radius))
    }

    pub fn draw_polygon(&mut self, points: Vec<Point>) -> &mut Self {
        self.draw_shape(Polygon::new(points, true))
    }

    /// Records a stroked polyline through `points`. Lines are never filled.
    /// Fewer than two points records nothing.
    pub fn draw_line(&mut self, points: &[Point], curve: Curve) -> &mut Self {
        if points.len() < 2 {
            return self;
        }
        let shape = Polygon::new(curve.interpolate(points), false);
        self.geometry
            .draw_shape(shape, FillStyle::default(), self.line_style.clone());
        self
    }

    /// Records the region between the curve through `points` and `baseline_y`.
    pub fn draw_area(&mut self, points: &[Point], curve: Curve, baseline_y: f64) -> &mut Self {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return self;
        };
        if points.len() < 2 {
            return self;
        }
        let mut outline = curve.interpolate(points);
        outline.push(Point::new(last.x, baseline_y));
        outline.push(Point::new(first.x, baseline_y));
        self.draw_polygon(outline)
    }

    fn draw_shape(&mut self, shape: impl Into<Shape>) -> &mut Self {
        self.geometry
            .draw_shape(shape, self.fill_style, self.line_style.clone());
        self
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.geometry.contains_point(point)
    }

    /// Replays the recorded shapes, each with its own styles.
    pub fn render<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        for data in self.geometry.graphics_data() {
            context.begin_path();
            trace_shape(context, data.shape());

            let fill = data.fill_style();
            if fill.visible {
                context.set_fill_color(fill.paint_color());
                context.fill();
            }

            let line = data.line_style();
            if line.is_drawable() {
                context.set_stroke_color(line.paint_color());
                context.set_line_width(line.width);
                context.set_line_dash(&line.dash);
                context.stroke();
            }
        }
    }
}

fn trace_shape<C: DrawingContext + ?Sized>(context: &mut C, shape: &Shape) {
    match shape {
        Shape::Rectangle(rect) => context.rect(rect.x, rect.y, rect.width, rect.height),
        Shape::Circle(circle) => {
            context.move_to(circle.x + circle.radius, circle.y);
            context.arc(circle.x, circle.y, circle.radius, 0.0, TAU);
        }
        Shape::Polygon(polygon) => {
            let mut points = polygon.points.iter();
            if let Some(first) = points.next() {
                context.move_to(first.x, first.y);
                for point in points {
                    context.line_to(point.x, point.y);
                }
                if polygon.closed {
                    context.close_path();
                }
            }
        }
    }
}
