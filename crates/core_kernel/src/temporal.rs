//! Calendar-date handling for invoice due dates
//!
//! Due dates arrive from the backend as bare `YYYY-MM-DD` strings. Routing
//! such a string through a generic ISO parser treats it as UTC midnight,
//! which shifts the calendar day backward for any timezone behind UTC and
//! misclassifies invoices near their due date. [`parse_date_safe`] keeps a
//! bare date on its own calendar day; only inputs that really carry a time
//! component fall back to instant parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid window: start {start} must not be after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Unparseable date: {0}")]
    Unparseable(String),
}

/// Returns true when the input is a bare calendar date (`YYYY-MM-DD`)
fn is_bare_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Parses a server-supplied date string without shifting the calendar day.
///
/// A bare `YYYY-MM-DD` is taken as exactly that day. Anything else is
/// parsed as an instant (RFC 3339, or a naive timestamp) and reduced to
/// the wall-clock day it was written with. Unparseable input yields `None`
/// so callers can skip the record instead of comparing against garbage.
pub fn parse_date_safe(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if is_bare_date(s) {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Business timezone used to anchor "today" for overdue comparisons
///
/// Wraps chrono_tz::Tz with serde support. Defaults to the deployment's
/// home timezone; configurable per installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Current calendar day in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }

    /// Converts an instant to this timezone's calendar day
    pub fn civil_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Jakarta)
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

/// An inclusive calendar-day window
///
/// Used for the due-soon range: `[today, today + N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a window, rejecting an inverted range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window spanning `days` days forward from `start`, both ends inclusive
    pub fn forward_days(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            end: start + chrono::Days::new(u64::from(days)),
        }
    }

    /// Returns true if the date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days the window spans
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_date_keeps_calendar_day() {
        // The regression this module exists for: a bare date must parse to
        // exactly that day no matter what offset the runtime sits in.
        let date = parse_date_safe("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_rfc3339_uses_written_wall_clock() {
        let date = parse_date_safe("2024-03-15T23:30:00+07:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_naive_timestamp() {
        let date = parse_date_safe("2024-03-15T08:00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_date_safe(""), None);
        assert_eq!(parse_date_safe("   "), None);
        assert_eq!(parse_date_safe("15/03/2024"), None);
        assert_eq!(parse_date_safe("2024-13-99"), None);
        assert_eq!(parse_date_safe("not a date"), None);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let date = parse_date_safe("  2024-03-15  ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_window_contains_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = DateWindow::forward_days(start, 7);

        assert!(window.contains(start));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(matches!(
            DateWindow::new(start, end),
            Err(TemporalError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_timezone_roundtrip_serde() {
        let tz = Timezone::default();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Asia/Jakarta\"");

        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_timezone_civil_date_crosses_midnight() {
        // 18:00 UTC on the 15th is already the 16th in Jakarta (UTC+7).
        let at = DateTime::parse_from_rfc3339("2024-03-15T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let tz = Timezone::default();
        assert_eq!(
            tz.civil_date(at),
            NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
        );
    }
}
