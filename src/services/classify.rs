//! Buckets raw path input before any parsing is attempted.

/// Interpretation rule selected for a raw date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// No input at all: resolve to the current time.
    Empty,
    /// Only ASCII decimal digits: milliseconds since the epoch.
    Numeric(&'a str),
    /// Anything else: a date string to match against the accepted grammars.
    FreeForm(&'a str),
}

/// Classify the raw path segment verbatim, without trimming.
///
/// Signs and decimal points are not digits, so `-1` or `1.5` are free-form
/// text and will later fail to parse.
pub fn classify(raw: Option<&str>) -> Classification<'_> {
    match raw {
        None | Some("") => Classification::Empty,
        Some(text) if text.bytes().all(|b| b.is_ascii_digit()) => Classification::Numeric(text),
        Some(text) => Classification::FreeForm(text),
    }
}
