//! Authentication module (environment credentials and request signing)
//!
//! Credentials come from four environment variables and are required together.
//! They are handed to a [`RequestSigner`], which produces the `Authorization`
//! header for every outbound request.

mod signer;

pub use signer::{PLACEHOLDER_AUTHORIZATION, PlaceholderSigner, RequestSigner};

use std::fmt;

use crate::error::{TweetError, TweetResult};

/// Environment variable holding the consumer (API) key
pub const CONSUMER_KEY_VAR: &str = "TWITTER_CONSUMER_KEY";
/// Environment variable holding the consumer (API) secret
pub const CONSUMER_SECRET_VAR: &str = "TWITTER_CONSUMER_SECRET";
/// Environment variable holding the user access token
pub const ACCESS_TOKEN_VAR: &str = "TWITTER_ACCESS_TOKEN";
/// Environment variable holding the user access token secret
pub const ACCESS_SECRET_VAR: &str = "TWITTER_ACCESS_SECRET";

/// The four OAuth 1.0a values for a Twitter app + user pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Consumer (API) key
    pub consumer_key: String,
    /// Consumer (API) secret
    pub consumer_secret: String,
    /// Access token
    pub access_token: String,
    /// Access token secret
    pub access_secret: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// An unset variable is treated the same as an empty one.
    pub fn from_env() -> TweetResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    ///
    /// Fails with [`TweetError::MissingCredentials`] naming every variable that
    /// came back empty; there is no partial result.
    pub fn from_lookup<F>(lookup: F) -> TweetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            let value = lookup(name).unwrap_or_default();
            if value.is_empty() {
                missing.push(name);
            }
            value
        };

        let consumer_key = read(CONSUMER_KEY_VAR);
        let consumer_secret = read(CONSUMER_SECRET_VAR);
        let access_token = read(ACCESS_TOKEN_VAR);
        let access_secret = read(ACCESS_SECRET_VAR);

        if !missing.is_empty() {
            return Err(TweetError::MissingCredentials { missing });
        }

        Ok(Self {
            consumer_key,
            consumer_secret,
            access_token,
            access_secret,
        })
    }
}

// Secrets stay out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_secret", &"<redacted>")
            .finish()
    }
}
