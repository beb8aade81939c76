use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous value -> pixel mapping.
///
/// The range is free to be inverted (`range.0 > range.1`), which is how value
/// axes map larger prices to smaller y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidScale(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidScale(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy of this scale targeting another pixel range.
    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(self.domain(), range)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Roughly `count` round tick values covering the domain, ascending.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (min, max) = self.sorted_domain();
        linear_ticks(min, max, count)
    }

    /// Extends the domain outward to round values.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let (mut min, mut max) = self.sorted_domain();
        for _ in 0..2 {
            let Some(step) = tick_step(min, max, count) else {
                break;
            };
            min = (min / step).floor() * step;
            max = (max / step).ceil() * step;
        }
        let (domain_start, domain_end) = if self.domain_start <= self.domain_end {
            (min, max)
        } else {
            (max, min)
        };
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    fn sorted_domain(self) -> (f64, f64) {
        if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        }
    }
}

fn tick_step(min: f64, max: f64, count: usize) -> Option<f64> {
    if count == 0 || !(max > min) {
        return None;
    }
    let raw = (max - min) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * base)
}

pub(crate) fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(min, max, count) else {
        return if count > 0 && min == max && min.is_finite() {
            vec![min]
        } else {
            Vec::new()
        };
    };

    // Work in integer multiples so decimal steps do not accumulate error.
    let power = step.log10().floor();
    if power < 0.0 {
        let inverse = (10f64.powf(-power) / (step / 10f64.powf(power))).round();
        let start = (min * inverse).ceil() as i64;
        let stop = (max * inverse).floor() as i64;
        (start..=stop).map(|i| i as f64 / inverse).collect()
    } else {
        let start = (min / step).ceil() as i64;
        let stop = (max / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}
