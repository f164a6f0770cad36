//! Conversions between the backend timestamp format and ISO query values.
//!
//! The backend sends local wall-clock times as `YYYY-MM-DD HH:mm:ss` with
//! no offset, and accepts `YYYY-MM-DDTHH:mm:ss` in query parameters. Both
//! map onto [`PrimitiveDateTime`]; no timezone conversion ever happens.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Shown in place of a missing or unusable date.
pub const PLACEHOLDER: &str = "-";

const BACKEND_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const ISO_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_ONLY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Backend string for display: `-` when absent, the input itself when it
/// does not parse.
pub fn format_display(date: Option<&str>) -> String {
    match date {
        None | Some("") => String::from(PLACEHOLDER),
        Some(raw) => match PrimitiveDateTime::parse(raw, BACKEND_FORMAT) {
            Ok(parsed) => format_date(parsed),
            Err(_) => raw.to_owned(),
        },
    }
}

/// Parse a backend timestamp. Invalid or absent input yields `None`.
pub fn parse_backend_date(date: Option<&str>) -> Option<PrimitiveDateTime> {
    date.filter(|raw| !raw.is_empty())
        .and_then(|raw| PrimitiveDateTime::parse(raw, BACKEND_FORMAT).ok())
}

/// Parse a user-supplied date for a query filter. Accepts the backend
/// format, the ISO form, or a bare `YYYY-MM-DD` (midnight).
pub fn parse_query_date(input: &str) -> Option<PrimitiveDateTime> {
    let input = input.trim();
    PrimitiveDateTime::parse(input, ISO_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(input, BACKEND_FORMAT))
        .ok()
        .or_else(|| {
            Date::parse(input, DATE_ONLY_FORMAT)
                .ok()
                .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
        })
}

/// `YYYY-MM-DD HH:mm:ss`. Sub-second precision is dropped.
pub fn format_date(date: PrimitiveDateTime) -> String {
    date.format(BACKEND_FORMAT).expect("backend timestamp format must be formattable")
}

/// `YYYY-MM-DDTHH:mm:ss`, the form used in query parameters.
pub fn to_iso_date_time(date: PrimitiveDateTime) -> String {
    date.format(ISO_FORMAT).expect("ISO timestamp format must be formattable")
}

/// Current local wall-clock time. Falls back to UTC when the local offset
/// cannot be determined (for example in multi-threaded processes on Unix).
pub fn now_local() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Relative phrase for a backend timestamp, measured from `now`.
pub fn from_now(date: Option<&str>, now: PrimitiveDateTime) -> String {
    match parse_backend_date(date) {
        Some(then) => relative_phrase((now - then).whole_seconds()),
        None => String::from(PLACEHOLDER),
    }
}

/// [`from_now`] against the current local time.
pub fn from_now_local(date: Option<&str>) -> String {
    from_now(date, now_local())
}

/// English relative-time phrase for an offset in seconds.
/// Positive values lie in the past.
pub fn relative_phrase(elapsed_secs: i64) -> String {
    let secs = elapsed_secs.unsigned_abs() as f64;
    let minutes = (secs / 60.0).round() as u64;
    let hours = (secs / 3_600.0).round() as u64;
    let days = (secs / 86_400.0).round() as u64;
    let months = (secs / 86_400.0 / 30.4).round() as u64;
    let years = (secs / 86_400.0 / 365.0).round() as u64;

    let span = if secs < 45.0 {
        String::from("a few seconds")
    } else if secs < 90.0 {
        String::from("a minute")
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        String::from("an hour")
    } else if hours < 22 {
        format!("{hours} hours")
    } else if hours < 36 {
        String::from("a day")
    } else if days < 26 {
        format!("{days} days")
    } else if days < 46 {
        String::from("a month")
    } else if months < 11 {
        format!("{months} months")
    } else if months < 18 {
        String::from("a year")
    } else {
        format!("{} years", years.max(2))
    };

    if elapsed_secs < 0 {
        format!("in {span}")
    } else {
        format!("{span} ago")
    }
}
