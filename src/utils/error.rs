//! Error handling for ytinfo

use thiserror::Error;

/// Main error type for ytinfo
///
/// One variant per stage of the resolution pipeline, so callers can tell a
/// local validation failure from a transport failure from a logical
/// rejection signalled inside a 200 response by the upstream itself.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid video ID {0:?}")]
    InvalidId(String),

    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("invalid video ID pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("upstream response status {code} ({status})")]
    UpstreamStatus { code: u16, status: String },

    #[error("unexpected response content type {0:?}")]
    UnexpectedContentType(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("upstream rejected request: errorcode {errorcode} ({reason})")]
    UpstreamRejected { errorcode: String, reason: String },

    #[error("no player_response in envelope")]
    MissingPayload,

    #[error("malformed player_response: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
