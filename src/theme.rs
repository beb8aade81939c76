//! Visual configuration shared by elements and widgets.
//!
//! Themes are plain serde data so hosts can ship them as JSON next to their
//! other chart settings.

use serde::{Deserialize, Serialize};

use crate::core::ExtentTuning;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub color: Color,
    pub line_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba(1.0, 1.0, 1.0, 0.08),
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub text_color: Color,
    pub tick_color: Color,
    pub font: FontSpec,
    pub tick_length_px: f64,
    pub label_padding_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgba(1.0, 1.0, 1.0, 0.7),
            tick_color: Color::rgba(1.0, 1.0, 1.0, 0.3),
            font: FontSpec::default(),
            tick_length_px: 6.0,
            label_padding_px: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairStyle {
    pub color: Color,
    pub line_width: f64,
    pub dash: Vec<f64>,
}

impl Default for CrosshairStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba(1.0, 1.0, 1.0, 0.6),
            line_width: 1.0,
            dash: vec![4.0, 6.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    pub background: Color,
    pub border: Color,
    pub text_color: Color,
    pub font: FontSpec,
    pub padding_px: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            border: Color::WHITE,
            text_color: Color::WHITE,
            font: FontSpec::default(),
            padding_px: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoDataStyle {
    pub background: Color,
    pub text_color: Color,
    pub font: FontSpec,
    pub message: String,
}

impl Default for NoDataStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(1.0, 1.0, 1.0, 0.04),
            text_color: Color::rgba(1.0, 1.0, 1.0, 0.6),
            font: FontSpec::default(),
            message: "Market opened".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleStyle {
    pub up_fill: Color,
    pub down_fill: Color,
    pub up_stroke: Color,
    pub down_stroke: Color,
}

impl Default for CandleStyle {
    fn default() -> Self {
        let up = Color::from_rgb8(0x26, 0xff, 0x8a);
        let down = Color::from_rgb8(0xff, 0x26, 0x1a);
        Self {
            up_fill: up,
            down_fill: down,
            up_stroke: up,
            down_stroke: down,
        }
    }
}

impl CandleStyle {
    #[must_use]
    pub fn fill_for(self, bullish: bool) -> Color {
        if bullish { self.up_fill } else { self.down_fill }
    }

    #[must_use]
    pub fn stroke_for(self, bullish: bool) -> Color {
        if bullish { self.up_stroke } else { self.down_stroke }
    }
}

/// Complete visual configuration for one chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background: Color,
    pub grid: GridStyle,
    pub axis: AxisStyle,
    pub crosshair: CrosshairStyle,
    pub annotation: AnnotationStyle,
    pub no_data: NoDataStyle,
    pub candle: CandleStyle,
    pub extent: ExtentTuning,
}

impl ChartTheme {
    /// Parses and validates a JSON theme. Missing fields take defaults.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let theme: Self = serde_json::from_str(json)?;
        theme.validate()
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.background,
            self.grid.color,
            self.axis.text_color,
            self.axis.tick_color,
            self.crosshair.color,
            self.annotation.background,
            self.annotation.border,
            self.annotation.text_color,
            self.no_data.background,
            self.no_data.text_color,
            self.candle.up_fill,
            self.candle.down_fill,
            self.candle.up_stroke,
            self.candle.down_stroke,
        ] {
            color.validate().map_err(|err| ChartError::Config(err.to_string()))?;
        }
        for (name, width) in [
            ("grid.line_width", self.grid.line_width),
            ("crosshair.line_width", self.crosshair.line_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::Config(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if self
            .crosshair
            .dash
            .iter()
            .any(|segment| !segment.is_finite() || *segment < 0.0)
        {
            return Err(ChartError::Config(
                "crosshair dash segments must be finite and >= 0".to_owned(),
            ));
        }
        for font in [&self.axis.font, &self.annotation.font, &self.no_data.font] {
            if !font.size_px.is_finite() || font.size_px <= 0.0 {
                return Err(ChartError::Config(
                    "font size must be finite and > 0".to_owned(),
                ));
            }
        }
        self.extent.validate()?;
        Ok(self)
    }
}
