use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Interpolation between consecutive points of a line or area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Curve {
    #[default]
    Linear,
    /// Horizontal step centred between points.
    Step,
    /// Vertical segment first, then horizontal (value changes at the earlier point).
    StepBefore,
    /// Horizontal segment first, then vertical.
    StepAfter,
}

impl Curve {
    /// Expands `points` into the polyline vertices that trace this curve.
    #[must_use]
    pub fn interpolate(self, points: &[Point]) -> Vec<Point> {
        let Some(first) = points.first() else {
            return Vec::new();
        };
        let extra_per_segment = match self {
            Self::Linear => 0,
            Self::StepBefore | Self::StepAfter => 1,
            Self::Step => 2,
        };
        let mut out = Vec::with_capacity(points.len() * (1 + extra_per_segment));
        out.push(*first);
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            match self {
                Self::Linear => {}
                Self::StepBefore => out.push(Point::new(from.x, to.y)),
                Self::StepAfter => out.push(Point::new(to.x, from.y)),
                Self::Step => {
                    let mid = (from.x + to.x) / 2.0;
                    out.push(Point::new(mid, from.y));
                    out.push(Point::new(mid, to.y));
                }
            }
            out.push(to);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::core::Point;

    #[test]
    fn step_before_moves_vertically_first() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
        assert_eq!(
            Curve::StepBefore.interpolate(&points),
            vec![Point::new(0.0, 0.0), Point::new(0.0, 5.0), Point::new(10.0, 5.0)]
        );
    }

    #[test]
    fn linear_is_identity() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        assert_eq!(Curve::Linear.interpolate(&points), points.to_vec());
    }
}
