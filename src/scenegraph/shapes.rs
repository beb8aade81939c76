use serde::{Deserialize, Serialize};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment; empty or inverted rectangles contain nothing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.radius <= 0.0 {
            return false;
        }
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Vertex list; `closed == false` is a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Even-odd rule over the implied closed outline.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let count = self.points.len();
        if count < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = count - 1;
        for i in 0..count {
            let (a, b) = (self.points[i], self.points[j]);
            let crosses = (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Rectangle(rect) => rect.contains(point),
            Self::Circle(circle) => circle.contains(point),
            Self::Polygon(polygon) => polygon.contains(point),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Circle, Polygon, Rectangle};
    use crate::core::Point;

    #[test]
    fn rectangle_edges_are_half_open() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!Rectangle::new(0.0, 0.0, -10.0, 10.0).contains(Point::new(-5.0, 5.0)));
    }

    #[test]
    fn circle_includes_boundary() {
        let circle = Circle::new(0.0, 0.0, 5.0);
        assert!(circle.contains(Point::new(3.0, 4.0)));
        assert!(!circle.contains(Point::new(4.0, 4.0)));
    }

    #[test]
    fn polygon_even_odd() {
        let triangle = Polygon::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)],
            true,
        );
        assert!(triangle.contains(Point::new(2.0, 2.0)));
        assert!(!triangle.contains(Point::new(8.0, 8.0)));
    }
}
