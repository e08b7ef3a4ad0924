//! Error type definitions

use thiserror::Error;

/// Common error type
///
/// Every variant is terminal for the workflow invocation that produced it;
/// callers surface the message and return the UI to a safe idle state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Enter the original subscription link.")]
    MissingSource,

    #[error("The subscription link must start with http:// or https:// and name a host.")]
    MalformedSource,

    #[error("Enter a custom service root URL.")]
    MissingServiceRoot,

    #[error("Pair row {0} is only half filled. Fill both the landing and the front name.")]
    IncompletePair(usize),

    #[error("At least one complete landing/front pair is required.")]
    NoCompletePair,

    #[error("Node name '{0}' contains ':' or ',' which cannot be carried in the pair list.")]
    ReservedDelimiter(String),

    #[error("Backend rejected the configuration: {0}")]
    BackendRejected(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Download failed (HTTP {status}): {body}")]
    DownloadHttp { status: u16, body: String },

    /// Another workflow request is still in flight. Callers drop this
    /// silently; it must never produce a user-visible notice.
    #[error("Another request is already in flight.")]
    Busy,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_incomplete_pair() {
        let error = Error::IncompletePair(3);
        let display = format!("{}", error);
        assert!(display.contains("row 3"));
    }

    #[test]
    fn test_error_display_backend_rejected() {
        let error = Error::BackendRejected("remote YAML is invalid".to_string());
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Backend rejected the configuration: remote YAML is invalid"
        );
    }

    #[test]
    fn test_error_display_download_http() {
        let error = Error::DownloadHttp {
            status: 502,
            body: "Error fetching remote_url".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("502"));
        assert!(display.contains("Error fetching remote_url"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Transport("connection refused".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Transport"));
        assert!(debug.contains("connection refused"));
    }
}
