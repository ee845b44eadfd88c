//! Calendar dates for article permalinks.
//!
//! Articles are dated at day granularity; there is no time of day and no
//! timezone. The builder renders a date either as three path segments
//! (`YYYY/MM/DD`) or as one compact segment (`YYYYMMDD`).
//!
//! ```ignore
//! let date = PublishDate::parse("2025-01-26").unwrap();
//! assert_eq!(date.to_path(), "2025/01/26");
//! assert_eq!(date.to_compact(), "20250126");
//! ```

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month is invalid: {0}")]
    Month(u8),

    #[error("day is invalid: {day} (month {month} has {max} days)")]
    Day { day: u8, month: u8, max: u8 },

    #[error("expected YYYY-MM-DD, got `{0}`")]
    Format(String),
}

/// Publication date of an article (year/month/day only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublishDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PublishDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Build a date and validate it in one step.
    pub fn checked(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Parse from "YYYY-MM-DD".
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        Self::checked(year, month, day).ok()
    }

    /// Today's date in UTC, from the system clock.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        #[allow(clippy::cast_possible_wrap)] // u64 seconds / 86400 fits i64
        Self::from_days_since_epoch((secs / 86_400) as i64)
    }

    /// Civil date from days since 1970-01-01 (Howard Hinnant's algorithm).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_days_since_epoch(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self::new(year as u16, month, day)
    }

    pub fn validate(&self) -> Result<(), DateError> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            return Err(DateError::Month(month));
        }

        let max = Self::days_in_month(year, month);
        if day == 0 || day > max {
            return Err(DateError::Day { day, month, max });
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Path form: `YYYY/MM/DD`
    pub fn to_path(self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }

    /// Compact form: `YYYYMMDD`
    pub fn to_compact(self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// Parse the compact `YYYYMMDD` form.
    pub fn parse_compact(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 {
            return None;
        }
        Self::checked(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[4..6])?,
            parse_u8(&bytes[6..8])?,
        )
        .ok()
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for PublishDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DateError::Format(s.to_string()))
    }
}

impl Serialize for PublishDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublishDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            PublishDate::parse("2025-01-26"),
            Some(PublishDate::new(2025, 1, 26))
        );
        assert_eq!(
            PublishDate::parse(" 2024-02-29 "),
            Some(PublishDate::new(2024, 2, 29))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(PublishDate::parse("2025/01/26"), None);
        assert_eq!(PublishDate::parse("2025-1-26"), None);
        assert_eq!(PublishDate::parse("2025-01-26T10:00:00Z"), None);
        assert_eq!(PublishDate::parse("abcd-01-26"), None);
        assert_eq!(PublishDate::parse(""), None);
    }

    #[test]
    fn test_validate_invalid_month() {
        assert_eq!(
            PublishDate::new(2024, 0, 15).validate(),
            Err(DateError::Month(0))
        );
        assert_eq!(
            PublishDate::new(2024, 13, 15).validate(),
            Err(DateError::Month(13))
        );
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(PublishDate::new(2024, 6, 0).validate().is_err());
        assert!(PublishDate::new(2024, 1, 32).validate().is_err());
        assert!(PublishDate::new(2024, 4, 31).validate().is_err());
        assert!(PublishDate::new(2024, 2, 30).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(PublishDate::new(2024, 2, 29).validate().is_ok());
        assert!(PublishDate::new(2000, 2, 29).validate().is_ok()); // divisible by 400
        assert!(PublishDate::new(2023, 2, 29).validate().is_err());
        assert!(PublishDate::new(1900, 2, 29).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_path_forms_are_zero_padded() {
        let date = PublishDate::new(2025, 1, 6);
        assert_eq!(date.to_path(), "2025/01/06");
        assert_eq!(date.to_compact(), "20250106");
        assert_eq!(date.to_string(), "2025-01-06");
    }

    #[test]
    fn test_parse_compact() {
        assert_eq!(
            PublishDate::parse_compact("20250126"),
            Some(PublishDate::new(2025, 1, 26))
        );
        assert_eq!(PublishDate::parse_compact("20251326"), None);
        assert_eq!(PublishDate::parse_compact("2025012"), None);
    }

    #[test]
    fn test_from_days_since_epoch() {
        assert_eq!(
            PublishDate::from_days_since_epoch(0),
            PublishDate::new(1970, 1, 1)
        );
        // 2000-03-01 is day 11017
        assert_eq!(
            PublishDate::from_days_since_epoch(11_017),
            PublishDate::new(2000, 3, 1)
        );
        // 2025-01-26 is day 20114
        assert_eq!(
            PublishDate::from_days_since_epoch(20_114),
            PublishDate::new(2025, 1, 26)
        );
    }

    #[test]
    fn test_today_is_valid() {
        assert!(PublishDate::today().validate().is_ok());
    }

    #[test]
    fn test_serde_as_iso_string() {
        let date = PublishDate::new(2025, 1, 26);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2025-01-26""#);

        let parsed: PublishDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        assert!(serde_json::from_str::<PublishDate>(r#""2025-02-30""#).is_err());
    }
}
