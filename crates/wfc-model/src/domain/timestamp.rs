use std::{borrow::Cow, fmt::Write};

use chrono::{
    DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone,
    format::{Item, StrftimeItems},
};
use chrono_tz::Tz;

use crate::{
    ModelError, ModelResult,
    domain::{INPUT_DATE_FORMAT, NULL_LITERAL},
};

/// Localize the form's start/end dates to `tz` and render them with `format`.
///
/// Each date is either the literal `"null"`, returned untouched, or a
/// `YYYY-MM-DDTHH:MM` wall-clock time in `tz`. The timezone is validated even
/// when both dates are null.
///
/// `format` uses strftime syntax; `%f` renders six-digit microseconds and
/// specifiers chrono does not know are copied to the output as written.
///
/// # Examples
/// ```
/// use wfc_model::normalize_timestamps;
///
/// let (start, end) =
///     normalize_timestamps("UTC", "2024-01-01T10:00", "null", "%Y-%m-%d %H:%M:%S%z").unwrap();
/// assert_eq!(start, "2024-01-01 10:00:00+0000");
/// assert_eq!(end, "null");
/// ```
pub fn normalize_timestamps(
    tz: &str,
    start: &str,
    end: &str,
    format: &str,
) -> ModelResult<(String, String)> {
    let zone: Tz = tz
        .parse()
        .map_err(|_| ModelError::InvalidTimeZone(tz.to_string()))?;

    Ok((
        normalize_one(zone, start, format)?,
        normalize_one(zone, end, format)?,
    ))
}

fn normalize_one(zone: Tz, value: &str, format: &str) -> ModelResult<String> {
    if value == NULL_LITERAL {
        return Ok(value.to_string());
    }

    let naive = NaiveDateTime::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|source| {
        ModelError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })?;

    render(&localize(zone, &naive), format)
}

/// Attach `zone` to a wall-clock time without shifting it.
///
/// Ambiguous times (DST fall-back) resolve to the standard-time instant,
/// which is the later of the two. Times skipped by a DST gap keep their
/// wall clock and take the offset in effect before the gap.
fn localize(zone: Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, latest) => latest,
        LocalResult::None => {
            let before = zone.offset_from_utc_datetime(&(*naive - TimeDelta::hours(6)));
            DateTime::from_naive_utc_and_offset(*naive - before.fix(), before)
        }
    }
}

fn render(dt: &DateTime<Tz>, format: &str) -> ModelResult<String> {
    let format = microsecond_fraction(format);
    let items: Vec<Item<'_>> = specifiers(&format)
        .into_iter()
        .flat_map(|chunk| {
            let parsed: Vec<Item<'_>> = StrftimeItems::new(chunk).collect();
            if parsed.iter().any(|item| matches!(item, Item::Error)) {
                vec![Item::Literal(chunk)]
            } else {
                parsed
            }
        })
        .collect();

    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.iter()))
        .map_err(|_| ModelError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// Split `format` so every chunk holds at most one `%` specifier, followed by
/// plain text. `%%` stays whole.
fn specifiers(format: &str) -> Vec<&str> {
    let bytes = format.as_bytes();
    let mut chunks = Vec::new();
    let (mut start, mut i) = (0, 0);
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if i > start {
            chunks.push(&format[start..i]);
            start = i;
        }
        i += if bytes.get(i + 1) == Some(&b'%') { 2 } else { 1 };
    }
    if start < bytes.len() {
        chunks.push(&format[start..]);
    }
    chunks
}

/// Rewrite `%f` as `%6f`: the pipeline reads `%f` as microseconds.
fn microsecond_fraction(format: &str) -> Cow<'_, str> {
    if !format.contains("%f") {
        return Cow::Borrowed(format);
    }

    let mut out = String::with_capacity(format.len() + 4);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('f') => out.push_str("%6f"),
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    Cow::Owned(out)
}
