//! Temporal Extraction for assist_core
//!
//! Recovers date/time values from natural-language text, relative to a
//! caller-supplied "now". Two entry points with different contracts:
//!
//! - `extract_date_time`: the quick command-input scan. Rules are tried in
//!   a fixed order and only the first applicable rule fires, so compound
//!   phrases like "tomorrow at 3pm" resolve on the "tomorrow" rule alone
//!   and drop the clock time.
//! - `parse_date_time`: the exhaustive deadline parser used when filling a
//!   task/reminder due field. Also handles "now", "in N minutes/hours/
//!   days/weeks" durations, and month-name calendar dates with next-year
//!   rollover.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Weekday names indexed Sunday = 0 through Saturday = 6
const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Weekday names indexed Monday = 0 through Sunday = 6
const WEEKDAYS_FROM_MONDAY: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("sept", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

fn at_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"at (\d{1,2})(?::(\d{1,2}))?\s*(am|pm)?").unwrap())
}

fn bare_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})(?::(\d{1,2}))?\s*(am|pm)").unwrap())
}

fn in_duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"in (\d+) (minute|minutes|hour|hours|day|days|week|weeks)").unwrap()
    })
}

fn month_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w+)\s+(\d{1,2})(?:st|nd|rd|th)?").unwrap())
}

fn day_month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})(?:st|nd|rd|th)?\s+(\w+)").unwrap())
}

/// Extract a date/time implied by `text`, resolved against `now`.
///
/// Returns `None` when no rule applies. Never panics, including on empty or
/// unicode input and on out-of-range clock components.
pub fn extract_date_time(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let text = text.to_lowercase();

    if text.contains("today") {
        return Some(now);
    }

    if text.contains("tomorrow") {
        return Some(now + Duration::days(1));
    }

    if text.contains("next week") {
        return Some(now + Duration::days(7));
    }

    if let Some(target) = next_weekday(&text, now) {
        return Some(target);
    }

    clock_time(&text, now)
}

/// Rule 4: the next future occurrence of a named weekday.
///
/// A same-day match always rolls a full week forward, never "today".
fn next_weekday(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let today = now.weekday().num_days_from_sunday() as i64;

    for (target, name) in WEEKDAYS.iter().enumerate() {
        if text.contains(name) {
            let mut diff = (target as i64 + 7 - today) % 7;
            if diff == 0 {
                diff = 7;
            }
            return Some(now + Duration::days(diff));
        }
    }

    None
}

/// Rule 5: "at H[:MM] [am|pm]" on today's date, rolled to tomorrow if past.
fn clock_time(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let caps = at_time_re().captures(text)?;
    let (hour, minute) = clock_components(&caps)?;

    // and_hms_opt rejects hour >= 24 / minute >= 60; treat as no value
    let candidate = now.date().and_hms_opt(hour, minute, 0)?;

    if candidate < now {
        Some(candidate + Duration::days(1))
    } else {
        Some(candidate)
    }
}

/// Parse a deadline from free text, trying every supported phrase family.
///
/// Used when populating a task or reminder due field, where richer forms
/// than the command-input scan are worth recognizing:
///
/// 1. "now" → `now`.
/// 2. "today" / "tomorrow" → end of that day (23:59:59).
/// 3. "in N minutes|hours|days|weeks" → `now` plus the duration.
/// 4. A weekday name → next future occurrence at 9:00.
/// 5. "at H[:MM] [am|pm]" or a bare "H[:MM] am|pm" → that time on `now`'s
///    date (no next-day rollover, unlike `extract_date_time`).
/// 6. "May 15" / "15th May" → that calendar date at 9:00, rolled to next
///    year when already past; impossible dates yield `None`.
///
/// Total over its input domain: out-of-range components and overflowing
/// durations return `None` rather than panicking.
pub fn parse_date_time(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if text.contains("now") {
        return Some(now);
    }

    if text.contains("today") {
        return now.date().and_hms_opt(23, 59, 59);
    }

    if text.contains("tomorrow") {
        let tomorrow = now.date().checked_add_signed(Duration::days(1))?;
        return tomorrow.and_hms_opt(23, 59, 59);
    }

    if let Some(caps) = in_duration_re().captures(&text) {
        let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
        let delta = match caps.get(2)?.as_str() {
            "minute" | "minutes" => Duration::try_minutes(amount),
            "hour" | "hours" => Duration::try_hours(amount),
            "day" | "days" => Duration::try_days(amount),
            _ => Duration::try_weeks(amount),
        }?;
        return now.checked_add_signed(delta);
    }

    let today = now.weekday().num_days_from_monday() as i64;
    for (target, name) in WEEKDAYS_FROM_MONDAY.iter().enumerate() {
        if text.contains(name) {
            let mut ahead = target as i64 - today;
            if ahead <= 0 {
                ahead += 7;
            }
            let date = now.date().checked_add_signed(Duration::days(ahead))?;
            return date.and_hms_opt(9, 0, 0);
        }
    }

    for re in [at_time_re(), bare_time_re()] {
        if let Some(caps) = re.captures(&text) {
            let (hour, minute) = clock_components(&caps)?;
            return now.date().and_hms_opt(hour, minute, 0);
        }
    }

    if let Some(caps) = month_day_re().captures(&text) {
        if let Some(month) = month_number(caps.get(1)?.as_str()) {
            let day: u32 = caps.get(2)?.as_str().parse().ok()?;
            return calendar_date(month, day, now);
        }
    }

    if let Some(caps) = day_month_re().captures(&text) {
        if let Some(month) = month_number(caps.get(2)?.as_str()) {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            return calendar_date(month, day, now);
        }
    }

    None
}

/// Hour/minute from a clock-time capture, with 12-hour adjustment applied
fn clock_components(caps: &regex::Captures<'_>) -> Option<(u32, u32)> {
    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    match caps.get(3).map(|m| m.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    Some((hour, minute))
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, num)| *num)
}

/// A month/day at 9:00, pushed to next year when the date has passed
fn calendar_date(month: u32, day: u32, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let mut year = now.year();
    if month < now.month() || (month == now.month() && day < now.day()) {
        year += 1;
    }
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(9, 0, 0)
}
