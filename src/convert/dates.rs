use crate::error::{ConvertError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Formats that carry an explicit UTC offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Formats without an offset, interpreted as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a Day One timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2021-03-03T12:34:56Z`), ISO-8601 with numeric offsets,
/// optional fractional seconds, a space instead of `T`, and bare dates.
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    // Trailing "Z" outside of strict RFC 3339 (e.g. "2021-03-03 12:34:56Z")
    let naive = s.strip_suffix('Z').unwrap_or(s);
    for format in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(ConvertError::InvalidDate(input.to_string()))
}

/// Whole seconds since the Unix epoch, scaled to milliseconds
pub fn epoch_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp() * 1000
}

/// Ordinal suffix for a day of month ("st", "nd", "rd" or "th")
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Page title for an entry, e.g. "March 3rd, 2021"
pub fn format_title(dt: &DateTime<Utc>) -> String {
    let month = MONTH_NAMES[dt.month0() as usize];
    format!(
        "{} {}{}, {}",
        month,
        dt.day(),
        ordinal_suffix(dt.day()),
        dt.year()
    )
}

/// Extended ISO-8601 instant with colons stripped, safe to use as a file name
pub fn date_key(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true).replace(':', "")
}
