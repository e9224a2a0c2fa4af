//! Display formatting for sizes, metrics and timestamps

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde_json::Value;

/// `1536` -> `1.5 KB`; trailing zeros trimmed like `parseFloat(x.toFixed(2))`
pub fn file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(value, 2), UNITS[unit])
}

/// KPI values: millions and thousands abbreviated, other numbers grouped,
/// non-numbers shown as-is
pub fn kpi_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) if v >= 1_000_000.0 => format!("{:.1}M", v / 1_000_000.0),
            Some(v) if v >= 1_000.0 => format!("{:.1}K", v / 1_000.0),
            Some(v) => trim_decimals(v, 3),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Row counts with thousands separators
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_decimals(value: f64, places: usize) -> String {
    let fixed = format!("{:.*}", places, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// `09:41 AM`
pub fn short_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%I:%M %p").to_string()
}

/// Header clock: `Sat, Oct 17 • 09:41 AM`
pub fn clock_text<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} • {}", dt.format("%a, %b %-d"), short_time(dt))
}

pub fn now_short_time() -> String {
    short_time(&Local::now())
}

/// Current local minute in datetime-local input format
pub fn datetime_local_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse the timestamps the backend hands out: RFC 3339, or naive ISO
/// with or without seconds/fraction (taken as local time)
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Note card timestamp: `09:41 AM`, raw text when unparseable
pub fn note_time(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%I:%M %p").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    }
}

/// Reminder timestamp: `Oct 17, 2026, 09:41 AM`, raw text when unparseable
pub fn reminder_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_file_size() {
        assert_eq!(file_size(0), "0 Bytes");
        assert_eq!(file_size(512), "512 Bytes");
        assert_eq!(file_size(1536), "1.5 KB");
        assert_eq!(file_size(1024 * 1024), "1 MB");
        assert_eq!(file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_kpi_value() {
        assert_eq!(kpi_value(&json!(2_500_000)), "2.5M");
        assert_eq!(kpi_value(&json!(1234)), "1.2K");
        assert_eq!(kpi_value(&json!(42)), "42");
        assert_eq!(kpi_value(&json!(3.14159)), "3.142");
        assert_eq!(kpi_value(&json!("N/A")), "N/A");
        assert_eq!(kpi_value(&Value::Null), "-");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_clock_text() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 17, 21, 5, 0).unwrap();
        assert_eq!(clock_text(&dt), "Sat, Oct 17 • 09:05 PM");
    }

    #[test]
    fn test_reminder_time() {
        assert_eq!(reminder_time("2026-10-17T09:30"), "Oct 17, 2026, 09:30 AM");
        assert_eq!(reminder_time("not a date"), "not a date");
    }

    #[test]
    fn test_note_time_variants() {
        assert_eq!(note_time(Some("2026-10-17T14:03:11.123456")), "02:03 PM");
        assert_eq!(note_time(None), "");
    }
}
