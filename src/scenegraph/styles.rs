use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::Color;

/// Fill attached to one recorded shape. Invisible fills are neither painted
/// nor hit-testable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: Color,
    pub alpha: f64,
    pub visible: bool,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            alpha: 1.0,
            visible: false,
        }
    }
}

impl FillStyle {
    #[must_use]
    pub fn solid(color: Color, alpha: f64) -> Self {
        Self {
            color,
            alpha,
            visible: true,
        }
    }

    #[must_use]
    pub fn paint_color(&self) -> Color {
        self.color.with_alpha(self.alpha)
    }
}

/// Stroke attached to one recorded shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
    pub alpha: f64,
    pub dash: SmallVec<[f64; 4]>,
    pub visible: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: Color::BLACK,
            alpha: 1.0,
            dash: SmallVec::new(),
            visible: false,
        }
    }
}

impl LineStyle {
    #[must_use]
    pub fn solid(width: f64, color: Color, alpha: f64) -> Self {
        Self {
            width,
            color,
            alpha,
            dash: SmallVec::new(),
            visible: width > 0.0,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.visible && self.width > 0.0
    }

    #[must_use]
    pub fn paint_color(&self) -> Color {
        self.color.with_alpha(self.alpha)
    }
}
