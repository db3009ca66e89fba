use serde::Serialize;
use utoipa::ToSchema;

use crate::services::date_service::Outcome;

/// Error string returned for every input that does not resolve to a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Body of `/api/{date}`.
///
/// Both shapes are served with `200 OK`; clients tell them apart by the
/// presence of the `error` key.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum TimestampResponse {
    /// The input resolved to an instant.
    Resolved {
        /// Milliseconds since 1970-01-01T00:00:00Z.
        #[schema(example = 1451001600000_i64)]
        unix: i64,
        /// The same instant as an HTTP date, e.g. `Fri, 25 Dec 2015 00:00:00 GMT`.
        #[schema(example = "Fri, 25 Dec 2015 00:00:00 GMT")]
        utc: String,
    },
    /// The input could not be interpreted as a date.
    Invalid {
        /// Always "Invalid Date".
        #[schema(example = "Invalid Date")]
        error: String,
    },
}

impl From<Outcome> for TimestampResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success { unix, utc } => Self::Resolved { unix, utc },
            Outcome::Failure => Self::Invalid {
                error: INVALID_DATE.to_string(),
            },
        }
    }
}
