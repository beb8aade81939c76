//! Pointer bookkeeping: crosshair position in data space plus pan and zoom.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataRow, LinearScale, Point, TimeScale, nearest_row_index};
use crate::elements::CrosshairElement;
use crate::error::{ChartError, ChartResult};
use crate::theme::CrosshairStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrosshairMode {
    /// Crosshair time snaps to the nearest data row.
    #[default]
    Magnet,
    /// Crosshair follows the raw pointer position.
    Normal,
    /// Crosshair stays hidden regardless of pointer movement.
    Hidden,
}

/// Crosshair location in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairPosition {
    pub time: Option<DateTime<Utc>>,
    pub value: Option<f64>,
    /// Row the time snapped to in [`CrosshairMode::Magnet`].
    pub row_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    crosshair_mode: CrosshairMode,
    cursor: Option<Point>,
    pan_anchor_x: f64,
    crosshair: Option<CrosshairPosition>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            crosshair_mode: CrosshairMode::Magnet,
            cursor: None,
            pan_anchor_x: 0.0,
            crosshair: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn crosshair_mode(self) -> CrosshairMode {
        self.crosshair_mode
    }

    pub fn set_crosshair_mode(&mut self, mode: CrosshairMode) {
        self.crosshair_mode = mode;
        if mode == CrosshairMode::Hidden {
            self.crosshair = None;
        }
    }

    #[must_use]
    pub fn cursor(self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn crosshair(self) -> Option<CrosshairPosition> {
        self.crosshair
    }

    /// Tracks the pointer. While panning, the time scale follows the drag;
    /// the crosshair is then recomputed against the updated scale.
    pub fn on_pointer_move(
        &mut self,
        point: Point,
        rows: &[DataRow],
        time_scale: &mut TimeScale,
        value_scale: Option<&LinearScale>,
    ) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        self.cursor = Some(point);

        if self.mode == InteractionMode::Panning {
            time_scale.pan_by_pixels(point.x - self.pan_anchor_x)?;
            self.pan_anchor_x = point.x;
        }

        self.crosshair = self.locate(point, rows, time_scale, value_scale);
        trace!(crosshair = ?self.crosshair, "crosshair moved");
        Ok(())
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.crosshair = None;
    }

    pub fn pan_start(&mut self, x: f64) {
        self.mode = InteractionMode::Panning;
        self.pan_anchor_x = x;
    }

    pub fn pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    /// Zooms the time scale around the pointer x; `factor > 1.0` zooms in.
    pub fn zoom(
        &mut self,
        time_scale: &mut TimeScale,
        factor: f64,
        anchor_x: f64,
        min_span: TimeDelta,
    ) -> ChartResult<()> {
        time_scale.zoom_around(factor, anchor_x, min_span)
    }

    /// Crosshair element for the current position, if one is shown.
    #[must_use]
    pub fn crosshair_element(self, style: CrosshairStyle) -> Option<CrosshairElement> {
        self.crosshair
            .map(|position| CrosshairElement::new(position.time, position.value, style))
    }

    fn locate(
        self,
        point: Point,
        rows: &[DataRow],
        time_scale: &TimeScale,
        value_scale: Option<&LinearScale>,
    ) -> Option<CrosshairPosition> {
        let raw_time = time_scale.invert(point.x);
        let value = value_scale
            .map(|scale| scale.invert(point.y))
            .filter(|value| value.is_finite());

        match self.crosshair_mode {
            CrosshairMode::Hidden => None,
            CrosshairMode::Normal => Some(CrosshairPosition {
                time: raw_time,
                value,
                row_index: None,
            }),
            CrosshairMode::Magnet => {
                let row_index = raw_time.and_then(|time| nearest_row_index(rows, time));
                let time = row_index
                    .and_then(|index| rows.get(index))
                    .map(|row| row.date)
                    .or(raw_time);
                Some(CrosshairPosition {
                    time,
                    value,
                    row_index,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::{CrosshairMode, InteractionMode, InteractionState};
    use crate::core::{DataRow, LinearScale, Point, TimeScale};

    #[test]
    fn magnet_snaps_to_nearest_row_and_hidden_clears() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
        let rows: Vec<DataRow> = (0..4)
            .map(|i| DataRow::new(start + TimeDelta::hours(i)).with_field("close", 1.0))
            .collect();
        let mut time_scale =
            TimeScale::new((start, start + TimeDelta::hours(3)), (0.0, 300.0)).expect("scale");
        let value_scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("scale");

        let mut state = InteractionState::default();
        state
            .on_pointer_move(Point::new(140.0, 50.0), &rows, &mut time_scale, Some(&value_scale))
            .expect("pointer move");
        let position = state.crosshair().expect("crosshair shown");
        assert_eq!(position.row_index, Some(1));
        assert_eq!(position.time, Some(start + TimeDelta::hours(1)));
        assert_eq!(position.value, Some(5.0));

        state.set_crosshair_mode(CrosshairMode::Hidden);
        assert!(state.crosshair().is_none());
    }

    #[test]
    fn panning_moves_time_scale_with_drag() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
        let mut time_scale =
            TimeScale::new((start, start + TimeDelta::hours(10)), (0.0, 100.0)).expect("scale");
        let mut state = InteractionState::default();
        state.pan_start(50.0);
        assert_eq!(state.mode(), InteractionMode::Panning);
        state
            .on_pointer_move(Point::new(60.0, 0.0), &[], &mut time_scale, None)
            .expect("pointer move");
        assert_eq!(time_scale.invert(60.0), Some(start + TimeDelta::hours(5)));
        state.pan_end();
        assert_eq!(state.mode(), InteractionMode::Idle);
    }
}
