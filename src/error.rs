//! Error types for the login flow

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the individual login stages
#[derive(Debug, Error)]
pub enum LoginError {
    /// Transport failure, including the request timeout
    #[error("auth poll request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid auth poll URL: {0}")]
    InvalidPollUrl(#[from] url::ParseError),

    #[error("auth poll failed with status: {status}")]
    PollStatus { status: u16 },

    #[error("auth poll returned a malformed body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("no access token received")]
    MissingAccessToken,

    #[error("could not format token")]
    EmptyToken,

    #[error("unsupported platform: {os}")]
    UnsupportedPlatform { os: &'static str },

    #[error("failed to launch browser: {0}")]
    BrowserLaunch(#[source] std::io::Error),

    #[error("failed to read confirmation: {0}")]
    Confirmation(#[source] std::io::Error),

    #[error("could not update config file {}: {source}", path.display())]
    ConfigPatch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
