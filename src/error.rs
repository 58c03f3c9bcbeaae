use thiserror::Error;

/// Failure modes of the query pipeline.
///
/// `Superseded` is not a real fault: it marks the expected discard of a
/// response whose request was cancelled by a newer one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("range string does not split into two dates: {0:?}")]
    MalformedRange(String),

    #[error("word frequency request failed: {0}")]
    RequestFailed(String),

    #[error("request superseded by a newer query")]
    Superseded,
}
