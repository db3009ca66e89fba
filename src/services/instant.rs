//! Millisecond instants and their RFC 1123 rendering.

use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::error::ResolveError;

/// Largest distance from the epoch, in milliseconds, that an instant may have
/// (100,000,000 days either side of 1970-01-01).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const NANOS_PER_MILLI: i128 = 1_000_000;

const RFC1123_DAY: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short]");
const RFC1123_CLOCK: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// A point in time as whole milliseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    /// Wrap a millisecond count, rejecting values beyond [`MAX_EPOCH_MILLIS`].
    pub fn new(millis: i64) -> Result<Self, ResolveError> {
        if (-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&millis) {
            Ok(Self(millis))
        } else {
            Err(ResolveError::OutOfRange(millis.to_string()))
        }
    }

    /// Parse a base-10 digit string as a millisecond count.
    ///
    /// Strings too long for a 64-bit integer are out of range rather than wrapped or saturated.
    pub fn from_digits(digits: &str) -> Result<Self, ResolveError> {
        let millis = digits
            .parse::<i64>()
            .map_err(|_| ResolveError::OutOfRange(digits.to_owned()))?;
        Self::new(millis)
    }

    /// Truncate a date-time to millisecond precision.
    pub fn from_datetime(datetime: OffsetDateTime) -> Result<Self, ResolveError> {
        let millis = datetime.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI);
        let millis =
            i64::try_from(millis).map_err(|_| ResolveError::OutOfRange(millis.to_string()))?;
        Self::new(millis)
    }

    /// Raw millisecond count.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Convert back into a UTC date-time.
    pub fn to_datetime(self) -> Result<OffsetDateTime, ResolveError> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * NANOS_PER_MILLI)
            .map_err(|_| ResolveError::OutOfRange(self.0.to_string()))
    }

    /// Render as `Www, DD Mon YYYY HH:MM:SS GMT`.
    pub fn to_utc_string(self) -> Result<String, ResolveError> {
        let datetime = self.to_datetime()?;
        format_rfc1123(datetime).map_err(|err| ResolveError::Render(err.to_string()))
    }
}

/// Format a UTC date-time in the HTTP-date style.
///
/// The year is spliced in by hand: it is zero-padded to four digits, longer
/// years are written in full and years before 0000 carry a leading `-`.
fn format_rfc1123(datetime: OffsetDateTime) -> Result<String, time::error::Format> {
    let year = datetime.year();
    let sign = if year < 0 { "-" } else { "" };
    Ok(format!(
        "{} {sign}{:04} {} GMT",
        datetime.format(RFC1123_DAY)?,
        year.unsigned_abs(),
        datetime.format(RFC1123_CLOCK)?,
    ))
}
