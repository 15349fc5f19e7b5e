use thiserror::Error;

/// Why a whole upstream response could not be used.
///
/// These are values handed back to the aggregator, never panics; each fetch is
/// attempted exactly once per run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Connection refused, DNS failure, timeout or a body that could not be read
    #[error("{upstream} is unreachable: {reason}")]
    Unreachable { upstream: &'static str, reason: String },

    /// The upstream answered with a non-success status
    #[error("{upstream} rejected the request with HTTP {status}")]
    Rejected { upstream: &'static str, status: u16 },

    /// A success status whose body is not a JSON array of records
    #[error("{upstream} returned an unusable payload: {reason}")]
    InvalidPayload { upstream: &'static str, reason: String },
}

impl SourceError {
    pub fn upstream(&self) -> &'static str {
        match self {
            SourceError::Unreachable { upstream, .. }
            | SourceError::Rejected { upstream, .. }
            | SourceError::InvalidPayload { upstream, .. } => upstream,
        }
    }

    /// Stable tag used in structured logs
    pub fn tag(&self) -> &'static str {
        match self {
            SourceError::Unreachable { .. } => "SourceUnreachable",
            SourceError::Rejected { .. } => "SourceRejected",
            SourceError::InvalidPayload { .. } => "SourceInvalidPayload",
        }
    }

    pub(crate) fn from_transport(upstream: &'static str, error: &reqwest::Error) -> Self {
        let reason = if error.is_timeout() {
            format!("request timed out ({})", error)
        } else {
            error.to_string()
        };
        SourceError::Unreachable { upstream, reason }
    }
}

/// Why a single upstream record was dropped. Never escalates past the fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("record does not match the expected shape: {0}")]
    Malformed(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has unparseable timestamp '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("release {release} is before the window start {window_start}")]
    BeforeWindow {
        release: chrono::NaiveDate,
        window_start: chrono::NaiveDate,
    },
}
