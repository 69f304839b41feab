//! Error types for transit-relay

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream timed out")]
    UpstreamTimeout,

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream response malformed: {0}")]
    UpstreamMalformed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::UpstreamMalformed(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

/// The request URL carries the upstream credential, so it is stripped before the
/// error text is kept anywhere.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Error::UpstreamTimeout
        } else if err.is_decode() {
            Error::UpstreamMalformed(err.to_string())
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}
