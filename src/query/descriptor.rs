use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw comma-separated word/tag list, e.g. `"veira:kvk, smit:hk"`.
///
/// Only whitespace at the ends of the whole field is insignificant; the
/// internal formatting is preserved verbatim so the server can parse the
/// linguistic tags. The server echoes back a canonicalized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WordQuery(String);

impl WordQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for WordQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable request parameters, built fresh for every query cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub words: WordQuery,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trims_only_the_field_ends() {
        let words = WordQuery::new("  veira:kvk, smit:hk ");
        assert_eq!(words.as_str(), "veira:kvk, smit:hk");
    }

    #[test]
    fn internal_formatting_survives_untouched() {
        let raw = "veira:kvk,smit:hk,  bóla";
        assert_eq!(WordQuery::new(raw).as_str(), raw);
    }
}
