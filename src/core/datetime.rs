//! Due-date and due-time parsing.
//!
//! Accepts ISO dates plus a few relative forms:
//!
//! ```text
//! 2024-12-01, today, tomorrow, in 3 days, +3d, friday
//! ```
//!
//! Weekday names resolve to the next occurrence after the anchor day.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TaskdeckError;

#[allow(clippy::unwrap_used)]
static IN_DAYS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:in\s+(\d+)\s+days?|\+(\d+)d)$").unwrap());

/// Parse a due date relative to today.
///
/// # Errors
///
/// Returns `TaskdeckError::InvalidInput` if the string is not a
/// recognized date form.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, TaskdeckError> {
    parse_due_date_from(s, Local::now().date_naive())
}

/// Parse a due date relative to an explicit anchor day.
///
/// # Errors
///
/// Returns `TaskdeckError::InvalidInput` if the string is not a
/// recognized date form.
pub fn parse_due_date_from(s: &str, today: NaiveDate) -> Result<NaiveDate, TaskdeckError> {
    let input = s.trim().to_lowercase();

    match input.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Some(caps) = IN_DAYS_RE.captures(&input) {
        let digits = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        if let Some(days) = digits.and_then(|d| d.parse::<i64>().ok()) {
            return Ok(today + Duration::days(days));
        }
    }

    if let Some(weekday) = parse_weekday(&input) {
        return Ok(next_weekday(today, weekday));
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").map_err(|_| {
        TaskdeckError::InvalidInput(format!(
            "Invalid due date: {s} (expected YYYY-MM-DD, today, tomorrow, a weekday, or 'in N days')"
        ))
    })
}

/// Parse a due time as HH:MM (24-hour).
///
/// # Errors
///
/// Returns `TaskdeckError::InvalidInput` if the string is not a valid time.
pub fn parse_due_time(s: &str) -> Result<NaiveTime, TaskdeckError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| TaskdeckError::InvalidInput(format!("Invalid due time: {s} (expected HH:MM)")))
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// The next occurrence of a weekday strictly after `today`.
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    let mut ahead = (wanted - current).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    today + Duration::days(ahead)
}
