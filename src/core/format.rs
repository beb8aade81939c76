use chrono::{DateTime, Timelike, Utc};

use crate::core::Interval;

/// Placeholder shown wherever a value is unavailable.
pub const PLACEHOLDER: &str = "-";

/// Fixed-decimal price with `,` thousands grouping.
#[must_use]
pub fn format_price(value: f64, decimal_places: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    let fixed = format!("{:.*}", decimal_places, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Long-form timestamp for tooltips; `-` when the date is unknown.
#[must_use]
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y %H:%M").to_string(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Axis tick label for `date` at the active interval.
///
/// Intraday ticks that land on midnight show the day instead of `00:00`.
#[must_use]
pub fn format_time_tick(date: DateTime<Utc>, interval: Interval) -> String {
    if interval.is_intraday() && date.hour() == 0 && date.minute() == 0 {
        return date.format("%d %b").to_string();
    }
    date.format(interval.tick_format()).to_string()
}

/// Parses the leading number of a CSS-like length (`" 44px"`, `"1.5em"`).
///
/// Surrounding whitespace and any trailing unit are ignored.
#[must_use]
pub fn string2num(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    // Optional exponent, only consumed when followed by digits.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{format_date, format_price, format_time_tick, string2num};
    use crate::core::Interval;

    #[test]
    fn string2num_ignores_whitespace_and_units() {
        assert_eq!(string2num(" 44px"), Some(44.0));
        assert_eq!(string2num("44 "), Some(44.0));
        assert_eq!(string2num("-1.5em"), Some(-1.5));
        assert_eq!(string2num("2e3px"), Some(2000.0));
        assert_eq!(string2num("3em"), Some(3.0));
        assert_eq!(string2num("px"), None);
    }

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_price(-999.6, 0), "-1,000");
        assert_eq!(format_price(12.0, 3), "12.000");
        assert_eq!(format_price(-0.001, 2), "0.00");
        assert_eq!(format_price(f64::NAN, 2), "-");
    }

    #[test]
    fn missing_date_renders_placeholder() {
        assert_eq!(format_date(None), "-");
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date(Some(date)), "05 Mar 2024 14:30");
    }

    #[test]
    fn intraday_midnight_tick_shows_day() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let afternoon = Utc.with_ymd_and_hms(2024, 3, 5, 15, 0, 0).unwrap();
        assert_eq!(format_time_tick(midnight, Interval::I15M), "05 Mar");
        assert_eq!(format_time_tick(afternoon, Interval::I15M), "15:00");
        assert_eq!(format_time_tick(afternoon, Interval::I1D), "05 Mar");
    }
}
