//! Accepted free-form date grammars, tried in order.

use std::{borrow::Cow, iter};

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    format_description::BorrowedFormatItem, macros::format_description,
};
use tracing::debug;

use crate::error::ResolveError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const ISO_CLOCKS: [&[BorrowedFormatItem<'static>]; 3] = [
    format_description!("[hour]:[minute]:[second].[subsecond]"),
    format_description!("[hour]:[minute]:[second]"),
    format_description!("[hour]:[minute]"),
];
const ISO_OFFSET: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");
const RFC2822_DATE_TIMES: [&[BorrowedFormatItem<'static>]; 2] = [
    format_description!(
        "[day padding:none] [month repr:short] [year] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    ),
    format_description!(
        "[day padding:none] [month repr:short] [year] [hour]:[minute] [offset_hour sign:mandatory][offset_minute]"
    ),
];

/// Zone names accepted in place of a numeric RFC 2822 offset.
const ZONE_NAMES: [(&str, &str); 12] = [
    ("GMT", "+0000"),
    ("UTC", "+0000"),
    ("UT", "+0000"),
    ("Z", "+0000"),
    ("EST", "-0500"),
    ("EDT", "-0400"),
    ("CST", "-0600"),
    ("CDT", "-0500"),
    ("MST", "-0700"),
    ("MDT", "-0600"),
    ("PST", "-0800"),
    ("PDT", "-0700"),
];

struct Grammar {
    name: &'static str,
    parse: fn(&str) -> Option<OffsetDateTime>,
}

const GRAMMARS: [Grammar; 2] = [
    Grammar {
        name: "iso8601",
        parse: parse_iso8601,
    },
    Grammar {
        name: "rfc2822",
        parse: parse_rfc2822,
    },
];

/// Parse `text` with the first grammar that accepts it.
///
/// A string that is shaped right but names an impossible date (`2015-02-30`)
/// is rejected by every grammar and reported as [`ResolveError::Unrecognized`].
pub fn parse_free_form(text: &str) -> Result<OffsetDateTime, ResolveError> {
    GRAMMARS
        .iter()
        .find_map(|grammar| {
            let parsed = (grammar.parse)(text)?;
            debug!(grammar = grammar.name, input = text, "matched free-form date");
            Some(parsed)
        })
        .ok_or_else(|| ResolveError::Unrecognized(text.to_owned()))
}

/// `YYYY[-MM[-DD]]`, optionally followed by `THH:MM[:SS[.fff]]` and `Z` or `±HH:MM`.
///
/// Dates without a time are UTC midnight; times without an offset are UTC too.
fn parse_iso8601(text: &str) -> Option<OffsetDateTime> {
    match text.split_once('T') {
        None => parse_iso_date(text).map(|date| date.midnight().assume_utc()),
        Some((date, rest)) => {
            let date = parse_iso_date(date)?;
            let (clock, offset) = split_offset(rest)?;
            let time = ISO_CLOCKS
                .iter()
                .find_map(|format| Time::parse(clock, *format).ok())?;
            Some(PrimitiveDateTime::new(date, time).assume_offset(offset))
        }
    }
}

fn parse_iso_date(text: &str) -> Option<Date> {
    let bytes = text.as_bytes();
    let four_digit_year = bytes.len() >= 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes.get(4).is_none_or(|b| *b == b'-');
    if !four_digit_year {
        return None;
    }

    let full: Cow<'_, str> = match text.len() {
        4 => format!("{text}-01-01").into(),
        7 => format!("{text}-01").into(),
        _ => text.into(),
    };
    Date::parse(&full, ISO_DATE).ok()
}

/// Split a trailing `Z` or `±HH:MM` off the time-of-day part.
fn split_offset(rest: &str) -> Option<(&str, UtcOffset)> {
    if let Some(clock) = rest.strip_suffix('Z') {
        return Some((clock, UtcOffset::UTC));
    }

    let split = rest
        .len()
        .checked_sub(6)
        .and_then(|at| Some((rest.get(..at)?, rest.get(at..)?)));
    match split {
        Some((clock, zone)) if zone.starts_with(['+', '-']) => UtcOffset::parse(zone, ISO_OFFSET)
            .ok()
            .map(|offset| (clock, offset)),
        _ => Some((rest, UtcOffset::UTC)),
    }
}

/// `[Www, ]D Mon YYYY HH:MM[:SS] zone`, where zone is `±HHMM` or a name from [`ZONE_NAMES`].
///
/// This also covers the `Www, DD Mon YYYY HH:MM:SS GMT` shape this service emits.
fn parse_rfc2822(text: &str) -> Option<OffsetDateTime> {
    let normalized = normalize_zone_name(strip_weekday(text));
    RFC2822_DATE_TIMES
        .iter()
        .find_map(|format| OffsetDateTime::parse(&normalized, *format).ok())
}

/// Drop a leading `Www, `. The named day is not checked against the date.
fn strip_weekday(text: &str) -> &str {
    match text.split_once(", ") {
        Some((name, rest)) if is_weekday_abbreviation(name) => rest,
        _ => text,
    }
}

fn is_weekday_abbreviation(name: &str) -> bool {
    name.len() == 3
        && iter::successors(Some(Weekday::Monday), |day| Some(day.next()))
            .take(7)
            .any(|day| day.to_string().starts_with(name))
}

/// Rewrite a trailing zone name as its numeric offset.
fn normalize_zone_name(text: &str) -> Cow<'_, str> {
    ZONE_NAMES
        .iter()
        .find_map(|(name, offset)| {
            text.strip_suffix(name)
                .filter(|head| head.ends_with(' '))
                .map(|head| Cow::Owned(format!("{head}{offset}")))
        })
        .unwrap_or(Cow::Borrowed(text))
}
