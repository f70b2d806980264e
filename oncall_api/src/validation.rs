//! Input validation for filter options that carry structured values.
//!
//! Validation runs before a request is built, so a rejected filter never
//! reaches the network.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Timestamp layout used by range filters such as `started_at`.
pub const TIME_RANGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const TIME_RANGE_PATTERN: &str =
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}_\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$";

/// Errors produced by filter validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(
        "invalid time range '{0}'. Expected format: YYYY-MM-DDThh:mm:ss_YYYY-MM-DDThh:mm:ss"
    )]
    TimeRangeFormat(String),
    #[error("invalid start time '{value}': {source}")]
    StartTime {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid end time '{value}': {source}")]
    EndTime {
        value: String,
        source: chrono::ParseError,
    },
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

fn time_range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_RANGE_PATTERN).expect("time range pattern is valid"))
}

/// Validate a `<start>_<end>` range such as
/// `2024-03-20T10:00:00_2024-03-21T10:00:00`.
///
/// An empty string is accepted: the filter is optional.
pub fn validate_time_range(range: &str) -> Result<(), ValidationError> {
    if range.is_empty() {
        return Ok(());
    }
    if !time_range_regex().is_match(range) {
        return Err(ValidationError::TimeRangeFormat(range.to_string()));
    }
    let (start, end) = range
        .split_once('_')
        .ok_or_else(|| ValidationError::TimeRangeFormat(range.to_string()))?;

    let start = NaiveDateTime::parse_from_str(start, TIME_RANGE_FORMAT).map_err(|source| {
        ValidationError::StartTime {
            value: start.to_string(),
            source,
        }
    })?;
    let end = NaiveDateTime::parse_from_str(end, TIME_RANGE_FORMAT).map_err(|source| {
        ValidationError::EndTime {
            value: end.to_string(),
            source,
        }
    })?;

    if end <= start {
        return Err(ValidationError::EndNotAfterStart { start, end });
    }
    Ok(())
}
