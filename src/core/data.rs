use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a pane's backing series: a timestamp plus named numeric fields.
///
/// Field order is preserved so tooltips and legends list fields the way the
/// data source produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub date: DateTime<Utc>,
    pub fields: IndexMap<String, f64>,
}

impl DataRow {
    #[must_use]
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            fields: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Finite value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied().filter(|value| value.is_finite())
    }
}

/// Row at `index`, falling back to the last row when the index is absent or
/// out of bounds. `None` only for an empty slice.
#[must_use]
pub fn row_at(rows: &[DataRow], index: Option<usize>) -> Option<&DataRow> {
    match index {
        Some(index) if index < rows.len() => rows.get(index),
        _ => rows.last(),
    }
}

/// Index of the row whose date is closest to `date`.
///
/// `rows` must be sorted ascending by date. Ties resolve to the earlier row.
#[must_use]
pub fn nearest_row_index(rows: &[DataRow], date: DateTime<Utc>) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }
    let insert_at = rows.partition_point(|row| row.date < date);
    if insert_at == 0 {
        return Some(0);
    }
    if insert_at == rows.len() {
        return Some(rows.len() - 1);
    }
    let before = date - rows[insert_at - 1].date;
    let after = rows[insert_at].date - date;
    if after < before {
        Some(insert_at)
    } else {
        Some(insert_at - 1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{DataRow, nearest_row_index, row_at};

    fn rows() -> Vec<DataRow> {
        (0..3)
            .map(|hour| {
                DataRow::new(Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap())
                    .with_field("close", f64::from(hour))
            })
            .collect()
    }

    #[test]
    fn row_at_falls_back_to_last_row() {
        let rows = rows();
        assert_eq!(row_at(&rows, Some(1)).and_then(|r| r.get("close")), Some(1.0));
        assert_eq!(row_at(&rows, Some(9)).and_then(|r| r.get("close")), Some(2.0));
        assert_eq!(row_at(&rows, None).and_then(|r| r.get("close")), Some(2.0));
        assert!(row_at(&[], None).is_none());
    }

    #[test]
    fn nearest_row_prefers_closest_date() {
        let rows = rows();
        let probe = Utc.with_ymd_and_hms(2024, 1, 1, 1, 40, 0).unwrap();
        assert_eq!(nearest_row_index(&rows, probe), Some(2));
        let early = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(nearest_row_index(&rows, early), Some(0));
    }
}
