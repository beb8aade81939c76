use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_millis, millis_to_datetime};
use crate::error::{ChartError, ChartResult};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickStep {
    Fixed(i64),
    Months(u32),
}

impl TickStep {
    fn approx_ms(self) -> i64 {
        match self {
            Self::Fixed(ms) => ms,
            Self::Months(months) => i64::from(months) * 30 * DAY_MS,
        }
    }
}

const TICK_LADDER: [TickStep; 19] = [
    TickStep::Fixed(SECOND_MS),
    TickStep::Fixed(5 * SECOND_MS),
    TickStep::Fixed(15 * SECOND_MS),
    TickStep::Fixed(30 * SECOND_MS),
    TickStep::Fixed(MINUTE_MS),
    TickStep::Fixed(5 * MINUTE_MS),
    TickStep::Fixed(15 * MINUTE_MS),
    TickStep::Fixed(30 * MINUTE_MS),
    TickStep::Fixed(HOUR_MS),
    TickStep::Fixed(3 * HOUR_MS),
    TickStep::Fixed(6 * HOUR_MS),
    TickStep::Fixed(12 * HOUR_MS),
    TickStep::Fixed(DAY_MS),
    TickStep::Fixed(2 * DAY_MS),
    TickStep::Fixed(7 * DAY_MS),
    TickStep::Months(1),
    TickStep::Months(3),
    TickStep::Months(6),
    TickStep::Months(12),
];

/// Continuous time -> pixel mapping.
///
/// The domain is kept in epoch milliseconds so pan/zoom arithmetic stays in
/// `f64`; conversions back to `DateTime<Utc>` happen at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start_ms: f64,
    end_ms: f64,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> ChartResult<Self> {
        Self::from_millis(
            (datetime_to_millis(domain.0), datetime_to_millis(domain.1)),
            range,
        )
    }

    pub fn from_millis(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (start_ms, end_ms) = domain;
        if !start_ms.is_finite() || !end_ms.is_finite() || start_ms == end_ms {
            return Err(ChartError::InvalidScale(
                "time domain must be finite and non-empty".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidScale(
                "time range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            start_ms,
            end_ms,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Domain bounds. `None` only if pan/zoom pushed a bound outside chrono's range.
    #[must_use]
    pub fn domain(self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((
            millis_to_datetime(self.start_ms)?,
            millis_to_datetime(self.end_ms)?,
        ))
    }

    #[must_use]
    pub fn domain_millis(self) -> (f64, f64) {
        (self.start_ms, self.end_ms)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        Self::from_millis(self.domain_millis(), range)
    }

    #[must_use]
    pub fn map(self, time: DateTime<Utc>) -> f64 {
        self.map_millis(datetime_to_millis(time))
    }

    #[must_use]
    pub fn map_millis(self, millis: f64) -> f64 {
        let normalized = (millis - self.start_ms) / (self.end_ms - self.start_ms);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.invert_millis(pixel))
    }

    #[must_use]
    pub fn invert_millis(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.start_ms;
        }
        let normalized = (pixel - self.range_start) / span;
        self.start_ms + normalized * (self.end_ms - self.start_ms)
    }

    /// Pixel extent covered by `duration` at the current zoom level.
    #[must_use]
    pub fn span_px(self, duration: TimeDelta) -> f64 {
        let ms = duration.num_milliseconds() as f64;
        (ms / (self.end_ms - self.start_ms) * (self.range_end - self.range_start)).abs()
    }

    /// Shifts the domain so content follows a pointer drag of `delta_px`.
    pub fn pan_by_pixels(&mut self, delta_px: f64) -> ChartResult<()> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(());
        }
        let delta_ms = -delta_px * (self.end_ms - self.start_ms) / range_span;
        self.start_ms += delta_ms;
        self.end_ms += delta_ms;
        Ok(())
    }

    /// Zooms around the time under `anchor_px`.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The resulting
    /// span never drops below `min_span`.
    pub fn zoom_around(
        &mut self,
        factor: f64,
        anchor_px: f64,
        min_span: TimeDelta,
    ) -> ChartResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_px.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        let min_span_ms = min_span.num_milliseconds().max(1) as f64;

        let anchor_ms = self.invert_millis(anchor_px);
        let current_span = self.end_ms - self.start_ms;
        let target_span = (current_span.abs() / factor).max(min_span_ms) * current_span.signum();
        let left_ratio = (anchor_ms - self.start_ms) / current_span;

        self.start_ms = anchor_ms - left_ratio * target_span;
        self.end_ms = self.start_ms + target_span;
        Ok(())
    }

    /// Roughly `count` evenly spaced, calendar-aligned ticks inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<DateTime<Utc>> {
        let (min, max) = if self.start_ms <= self.end_ms {
            (self.start_ms, self.end_ms)
        } else {
            (self.end_ms, self.start_ms)
        };
        if count == 0 {
            return Vec::new();
        }
        let target = (max - min) / count as f64;
        let step = TICK_LADDER
            .iter()
            .copied()
            .find(|step| step.approx_ms() as f64 >= target)
            .unwrap_or(TickStep::Months(12));

        match step {
            TickStep::Fixed(step_ms) => {
                let step_ms = step_ms as f64;
                let first = (min / step_ms).ceil() as i64;
                let last = (max / step_ms).floor() as i64;
                (first..=last)
                    .filter_map(|i| millis_to_datetime(i as f64 * step_ms))
                    .collect()
            }
            TickStep::Months(months) => month_ticks(min, max, months),
        }
    }
}

fn month_ticks(min: f64, max: f64, months: u32) -> Vec<DateTime<Utc>> {
    let Some(start) = millis_to_datetime(min) else {
        return Vec::new();
    };
    let mut year = start.year();
    let mut month0 = start.month0();
    month0 -= month0 % months;

    let mut out = Vec::new();
    loop {
        let Some(tick) = Utc.with_ymd_and_hms(year, month0 + 1, 1, 0, 0, 0).single() else {
            break;
        };
        let tick_ms = datetime_to_millis(tick);
        if tick_ms > max {
            break;
        }
        if tick_ms >= min {
            out.push(tick);
        }
        month0 += months;
        if month0 >= 12 {
            year += (month0 / 12) as i32;
            month0 %= 12;
        }
    }
    out
}
