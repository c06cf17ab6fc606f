//! Error types for Chirp

use thiserror::Error;

/// Everything that can go wrong between reading credentials and getting a 200 back.
#[derive(Error, Debug)]
pub enum TweetError {
    /// One or more required credential variables are empty or unset
    #[error(
        "Missing Twitter API credentials ({}). Please set the environment variables.",
        .missing.join(", ")
    )]
    MissingCredentials {
        /// Names of the variables that were empty
        missing: Vec<&'static str>,
    },

    /// The request could not be built (bad URL or header value)
    #[error("failed to create request for {url}: {reason}")]
    InvalidRequest {
        /// Target URL of the request
        url: String,
        /// What was wrong with it
        reason: String,
    },

    /// Connection, DNS or TLS failure below the HTTP status level
    #[error("failed to {action}: {source}")]
    Transport {
        /// What was being attempted ("post tweet", "delete tweet")
        action: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than 200
    #[error("failed to {action}, status code: {status}")]
    Status {
        /// What was being attempted ("post tweet", "delete tweet")
        action: &'static str,
        /// Numeric HTTP status received
        status: u16,
    },

    /// Console output could not be written
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TweetError {
    /// The HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the library.
pub type TweetResult<T> = Result<T, TweetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_embeds_code() {
        let err = TweetError::Status {
            action: "post tweet",
            status: 401,
        };
        assert_eq!(err.to_string(), "failed to post tweet, status code: 401");
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn test_missing_credentials_names_variables() {
        let err = TweetError::MissingCredentials {
            missing: vec!["TWITTER_ACCESS_TOKEN", "TWITTER_ACCESS_SECRET"],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Missing Twitter API credentials"));
        assert!(msg.contains("TWITTER_ACCESS_TOKEN, TWITTER_ACCESS_SECRET"));
        assert_eq!(err.status_code(), None);
    }
}
