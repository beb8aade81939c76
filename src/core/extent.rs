use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataRow;
use crate::error::{ChartError, ChartResult};

/// Headroom applied around an observed value extent.
///
/// The default leaves more room above the data than below so overlays drawn
/// above price action stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtentTuning {
    pub bottom_padding_ratio: f64,
    pub top_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ExtentTuning {
    fn default() -> Self {
        Self {
            bottom_padding_ratio: 0.10,
            top_padding_ratio: 0.20,
            min_span_absolute: 0.000_001,
        }
    }
}

impl ExtentTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::Config(
                "extent padding ratios must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::Config(
                "extent min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Min/max of the finite values, or `None` when there are none.
#[must_use]
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Observed extent widened by the tuning's asymmetric padding.
#[must_use]
pub fn extent_with_padding(
    values: impl IntoIterator<Item = f64>,
    tuning: ExtentTuning,
) -> Option<(f64, f64)> {
    let (min, max) = extent(values)?;
    let span = (max - min).max(tuning.min_span_absolute);
    Some((
        min - span * tuning.bottom_padding_ratio,
        max + span * tuning.top_padding_ratio,
    ))
}

/// Padded y-domain over the named fields of every row.
///
/// Rows missing a field simply do not contribute. Returns `None` when no row
/// carries a finite value for any field.
#[must_use]
pub fn fields_extent_with_padding(
    rows: &[DataRow],
    fields: &[String],
    tuning: ExtentTuning,
) -> Option<(f64, f64)> {
    let values = rows
        .iter()
        .flat_map(|row| fields.iter().filter_map(|field| row.get(field)));
    let padded = extent_with_padding(values, tuning);
    if padded.is_none() {
        warn!(
            rows = rows.len(),
            fields = fields.len(),
            "no finite values for y-domain"
        );
    }
    padded
}
