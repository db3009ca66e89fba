use tracing::debug;

use crate::{
    error::ResolveError,
    services::{classify::Classification, grammar, instant::EpochMillis},
    state::Clock,
};

/// Result of resolving one date input; exactly one shape is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input named a real instant.
    Success {
        /// Milliseconds since the epoch.
        unix: i64,
        /// RFC 1123 rendering of `unix`.
        utc: String,
    },
    /// The input could not be interpreted as a date.
    Failure,
}

/// Resolve a classified input, folding every parse error into [`Outcome::Failure`].
pub fn resolve(classification: Classification<'_>, clock: &dyn Clock) -> Outcome {
    match resolve_instant(classification, clock).and_then(|instant| {
        let utc = instant.to_utc_string()?;
        Ok((instant, utc))
    }) {
        Ok((instant, utc)) => Outcome::Success {
            unix: instant.as_millis(),
            utc,
        },
        Err(err) => {
            debug!(error = %err, "rejecting date input");
            Outcome::Failure
        }
    }
}

fn resolve_instant(
    classification: Classification<'_>,
    clock: &dyn Clock,
) -> Result<EpochMillis, ResolveError> {
    match classification {
        Classification::Empty => EpochMillis::from_datetime(clock.now()),
        Classification::Numeric(digits) => EpochMillis::from_digits(digits),
        Classification::FreeForm(text) => {
            EpochMillis::from_datetime(grammar::parse_free_form(text)?)
        }
    }
}
