//! Turns raw UI state into a [`RequestDescriptor`].

use chrono::NaiveDate;

use crate::daterange::RANGE_SEPARATOR;
use crate::error::QueryError;

use super::descriptor::{RequestDescriptor, WordQuery};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the canonical request parameters from the word-input field and the
/// raw range string emitted by the date-range widget.
///
/// A malformed range must surface as a no-op upstream (previous chart state
/// retained), so the only failure mode here is `QueryError::MalformedRange`.
pub fn build_descriptor(words_raw: &str, range_raw: &str) -> Result<RequestDescriptor, QueryError> {
    let (date_from, date_to) = parse_range(range_raw)?;
    Ok(RequestDescriptor {
        words: WordQuery::new(words_raw),
        date_from,
        date_to,
    })
}

/// Split the raw range string on the fixed `" - "` separator. Exactly two
/// tokens are required; each is trimmed before being read as `YYYY-MM-DD`.
pub fn parse_range(raw: &str) -> Result<(NaiveDate, NaiveDate), QueryError> {
    let tokens: Vec<&str> = raw.split(RANGE_SEPARATOR).collect();
    let &[from_token, to_token] = tokens.as_slice() else {
        return Err(QueryError::MalformedRange(raw.to_string()));
    };

    let from = parse_date(from_token, raw)?;
    let to = parse_date(to_token, raw)?;
    Ok((from, to))
}

fn parse_date(token: &str, raw: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(token.trim(), DATE_FORMAT)
        .map_err(|_| QueryError::MalformedRange(raw.to_string()))
}
