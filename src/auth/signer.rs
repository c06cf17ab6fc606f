//! Request signing
//!
//! Twitter's v1.1 user endpoints expect an OAuth 1.0a `Authorization` header
//! computed per request. Chirp does not compute one: [`PlaceholderSigner`]
//! holds the credentials but emits a fixed literal, so the live API answers
//! 401. Swapping in a real signer only needs a new [`RequestSigner`] impl.

use reqwest::{Method, Url};

use super::Credentials;

/// Literal sent as the `Authorization` header by [`PlaceholderSigner`]
pub const PLACEHOLDER_AUTHORIZATION: &str = "OAuth ...";

/// Produces the `Authorization` header value for an outbound request
pub trait RequestSigner {
    /// Header value for a request with this method and URL
    fn authorization(&self, method: &Method, url: &Url) -> String;
}

/// Signer that accepts credentials but never uses them.
///
/// Known defect: every request carries [`PLACEHOLDER_AUTHORIZATION`] instead
/// of a real signature.
#[derive(Debug, Clone)]
pub struct PlaceholderSigner {
    credentials: Credentials,
}

impl PlaceholderSigner {
    /// Wrap credentials that will not be used for signing
    pub const fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The credentials this signer was given
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl RequestSigner for PlaceholderSigner {
    fn authorization(&self, _method: &Method, _url: &Url) -> String {
        PLACEHOLDER_AUTHORIZATION.to_string()
    }
}
