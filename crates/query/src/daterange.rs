//! Date ranges and aggregation intervals
//!
//! Query documents carry date bounds symbolically (`-7d`, `2024-01-31`) so
//! that equal queries stay byte-equal across renders. Resolution to concrete
//! instants happens at execution time against an explicit `now` - nothing in
//! this module reads the clock.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// Symbolic date bounds for a query
///
/// A missing `date_from` means "since the beginning"; a missing `date_to`
/// means "up to now".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound: relative (`-7d`, `-12h`, `-4w`, `-3m`, `-1y`) or
    /// absolute (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Upper bound, same formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl DateRange {
    /// Range covering the last `n` calendar days up to now
    pub fn last_days(n: u32) -> Self {
        Self {
            date_from: Some(format!("-{n}d")),
            date_to: None,
        }
    }

    /// Range between two explicit bounds
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            date_from: Some(from.into()),
            date_to: Some(to.into()),
        }
    }

    /// Whether both bounds are open
    pub fn is_unbounded(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    /// Resolve the symbolic bounds to concrete UTC instants
    ///
    /// `now` is supplied by the caller; resolution is pure. An open lower
    /// bound resolves to the Unix epoch, an open upper bound to the end of
    /// the current day.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let start = match &self.date_from {
            Some(s) => resolve_bound(s, now, Edge::Start)?,
            None => DateTime::UNIX_EPOCH,
        };
        let end = match &self.date_to {
            Some(s) => resolve_bound(s, now, Edge::End)?,
            None => end_of_day(now),
        };

        if end < start {
            return Err(QueryError::InvalidDateRange(format!(
                "date_to {} precedes date_from {}",
                end, start
            )));
        }
        Ok((start, end))
    }
}

/// Which edge of the range a bound belongs to
///
/// Day-granular bounds snap to the start or end of the day accordingly.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

fn resolve_bound(s: &str, now: DateTime<Utc>, edge: Edge) -> Result<DateTime<Utc>> {
    let s = s.trim();

    if let Some(rel) = s.strip_prefix('-') {
        let (num, unit) = extract_num_unit(rel)
            .ok_or_else(|| QueryError::InvalidDateRange(format!("bad relative bound: {}", s)))?;
        let at = match unit {
            // Hour-granular bounds are not snapped to day boundaries
            'h' => return Ok(now - Duration::hours(num)),
            'd' => now - Duration::days(num),
            'w' => now - Duration::weeks(num),
            'm' => now - Duration::days(num * 30),
            'y' => now - Duration::days(num * 365),
            _ => {
                return Err(QueryError::InvalidDateRange(format!(
                    "unknown unit '{}' in {}",
                    unit, s
                )));
            }
        };
        return Ok(snap(at, edge));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        QueryError::InvalidDateRange(format!("invalid bound: {} (use -7d or YYYY-MM-DD)", s))
    })?;
    let at = date
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .unwrap_or(now);
    Ok(snap(at, edge))
}

fn extract_num_unit(s: &str) -> Option<(i64, char)> {
    let unit = s.chars().last()?;
    if !unit.is_ascii_alphabetic() {
        return None;
    }
    let num: i64 = s[..s.len() - 1].parse().ok()?;
    if num < 0 { None } else { Some((num, unit)) }
}

fn snap(at: DateTime<Utc>, edge: Edge) -> DateTime<Utc> {
    match edge {
        Edge::Start => start_of_day(at),
        Edge::End => end_of_day(at),
    }
}

fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .unwrap_or(dt)
}

fn end_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(23, 59, 59)
        .map(|t| t.and_utc())
        .unwrap_or(dt)
}

/// Time bucket for series aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Per hour
    Hour,
    /// Per day
    #[default]
    Day,
    /// Per week
    Week,
    /// Per month
    Month,
}

impl Interval {
    /// Parse an interval from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hour" | "hourly" | "1h" => Ok(Self::Hour),
            "day" | "daily" | "1d" => Ok(Self::Day),
            "week" | "weekly" | "1w" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            _ => Err(QueryError::InvalidInterval(s.to_string())),
        }
    }
}
