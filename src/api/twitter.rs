//! Twitter REST client

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode, Url};
use tracing::{debug, warn};

use crate::auth::{PlaceholderSigner, RequestSigner};
use crate::config::Config;
use crate::error::{TweetError, TweetResult};

use super::{DESTROY_SEGMENT, FORM_CONTENT_TYPE, STATUSES_SEGMENTS, UPDATE_SEGMENT, destroy_segment};

/// Twitter API client.
///
/// One `reqwest::Client` is shared by every call made through this value.
#[derive(Debug)]
pub struct TwitterClient<S = PlaceholderSigner> {
    client: Client,
    api_url: String,
    signer: S,
}

impl<S: RequestSigner> TwitterClient<S> {
    /// Create a new client against `api_url` (e.g. `https://api.twitter.com`)
    pub fn new(api_url: &str, signer: S) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            signer,
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config, signer: S) -> Self {
        Self::new(&config.api_url, signer)
    }

    /// Full URL of the status-update endpoint
    pub fn update_url(&self) -> TweetResult<Url> {
        self.endpoint(&[UPDATE_SEGMENT])
    }

    /// Full URL of the status-destroy endpoint.
    ///
    /// `{tweet_id}.json` is pushed as one path segment, so `/` and `..` in the
    /// id are escaped and can never leave the destroy path.
    pub fn destroy_url(&self, tweet_id: &str) -> TweetResult<Url> {
        self.endpoint(&[DESTROY_SEGMENT, &destroy_segment(tweet_id)])
    }

    /// Post a new tweet. Succeeds only on HTTP 200.
    pub async fn create_tweet(&self, text: &str) -> TweetResult<()> {
        let url = self.update_url()?;
        let builder = self.client.post(url.clone()).form(&[("status", text)]);
        let request = self.build_request(builder, &url)?;

        self.execute(request, "post tweet").await
    }

    /// Delete a tweet by id. Succeeds only on HTTP 200.
    pub async fn delete_tweet(&self, tweet_id: &str) -> TweetResult<()> {
        let url = self.destroy_url(tweet_id)?;
        let builder = self.client.post(url.clone());
        let request = self.build_request(builder, &url)?;

        self.execute(request, "delete tweet").await
    }

    /// Base URL followed by `/1.1/statuses/` and the given segments
    fn endpoint(&self, segments: &[&str]) -> TweetResult<Url> {
        let invalid = |reason: String| TweetError::InvalidRequest {
            url: self.api_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(STATUSES_SEGMENTS)
            .extend(segments);

        Ok(url)
    }

    /// Finish a request, then attach the auth and content-type headers
    fn build_request(&self, builder: reqwest::RequestBuilder, url: &Url) -> TweetResult<Request> {
        let invalid = |reason: String| TweetError::InvalidRequest {
            url: url.to_string(),
            reason,
        };

        let mut request = builder.build().map_err(|e| invalid(e.to_string()))?;

        let authorization = self.signer.authorization(&Method::POST, request.url());
        let authorization = HeaderValue::from_str(&authorization)
            .map_err(|e| invalid(format!("bad Authorization header: {e}")))?;

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        Ok(request)
    }

    /// Send a prepared request and map the outcome
    async fn execute(&self, request: Request, action: &'static str) -> TweetResult<()> {
        debug!(method = %request.method(), url = %request.url(), action, "Sending Twitter API request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| TweetError::Transport { action, source })?;

        let status = response.status();
        drop(response);

        if status != StatusCode::OK {
            warn!(action, status = status.as_u16(), "Twitter API rejected request");
            return Err(TweetError::Status {
                action,
                status: status.as_u16(),
            });
        }

        debug!(action, "Twitter API request succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, PLACEHOLDER_AUTHORIZATION};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string, header, method, path},
    };

    fn signer() -> PlaceholderSigner {
        PlaceholderSigner::new(Credentials {
            consumer_key: "test_consumer_key".into(),
            consumer_secret: "test_consumer_secret".into(),
            access_token: "test_access_token".into(),
            access_secret: "test_access_secret".into(),
        })
    }

    /// Create a client pointing to the mock server.
    fn test_client(mock_server: &MockServer) -> TwitterClient {
        TwitterClient::new(&mock_server.uri(), signer())
    }

    #[tokio::test]
    async fn test_create_tweet_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1.1/statuses/update.json"))
            .and(header("Authorization", PLACEHOLDER_AUTHORIZATION))
            .and(header("Content-Type", FORM_CONTENT_TYPE))
            .and(body_string("status=Hello+from+Twitter+API+using+only+net%2Fhttp%21"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        client
            .create_tweet("Hello from Twitter API using only net/http!")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_tweet_error_statuses() {
        for code in [400_u16, 401, 500] {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/1.1/statuses/update.json"))
                .respond_with(ResponseTemplate::new(code))
                .mount(&mock_server)
                .await;

            let client = test_client(&mock_server);
            let err = client.create_tweet("hi").await.unwrap_err();

            assert_eq!(err.status_code(), Some(code));
            assert_eq!(
                err.to_string(),
                format!("failed to post tweet, status code: {code}")
            );
        }
    }

    #[tokio::test]
    async fn test_non_200_success_codes_are_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client.create_tweet("hi").await.unwrap_err();
        assert_eq!(err.status_code(), Some(201));
    }

    #[tokio::test]
    async fn test_create_tweet_body_encoding() {
        let cases = [
            ("a b", "status=a+b"),
            ("x&y=z", "status=x%26y%3Dz"),
            ("café ☕", "status=caf%C3%A9+%E2%98%95"),
        ];

        for (text, expected) in cases {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/1.1/statuses/update.json"))
                .and(body_string(expected))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&mock_server)
                .await;

            let client = test_client(&mock_server);
            client.create_tweet(text).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_delete_tweet_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1.1/statuses/destroy/1234567890.json"))
            .and(header("Authorization", PLACEHOLDER_AUTHORIZATION))
            .and(header("Content-Type", FORM_CONTENT_TYPE))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        client.delete_tweet("1234567890").await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_tweet_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1.1/statuses/destroy/42.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client.delete_tweet("42").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to delete tweet, status code: 404");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Grab a free port, then release it so connections are refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let uri = format!("http://127.0.0.1:{port}");

        let client = TwitterClient::new(&uri, signer());

        let err = client.create_tweet("hi").await.unwrap_err();
        assert!(matches!(err, TweetError::Transport { action: "post tweet", .. }));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let client = TwitterClient::new("not a url", signer());

        let err = client.delete_tweet("1").await.unwrap_err();
        assert!(matches!(err, TweetError::InvalidRequest { .. }));
    }

    #[test]
    fn test_urls() {
        let client = TwitterClient::new("https://api.twitter.com/", signer());

        assert_eq!(
            client.update_url().unwrap().as_str(),
            "https://api.twitter.com/1.1/statuses/update.json"
        );
        assert_eq!(
            client.destroy_url("your_tweet_id_here").unwrap().as_str(),
            "https://api.twitter.com/1.1/statuses/destroy/your_tweet_id_here.json"
        );
    }

    #[test]
    fn test_destroy_url_keeps_id_in_one_segment() {
        let client = TwitterClient::new("https://api.twitter.com", signer());

        let url = client.destroy_url("../x").unwrap();
        assert_eq!(url.path(), "/1.1/statuses/destroy/..%2Fx.json");

        let url = client.destroy_url("a/b").unwrap();
        assert_eq!(url.path(), "/1.1/statuses/destroy/a%2Fb.json");

        let url = client.destroy_url("..").unwrap();
        assert_eq!(url.path(), "/1.1/statuses/destroy/...json");
    }

    #[tokio::test]
    async fn test_delete_tweet_with_dot_segments_stays_on_destroy() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1.1/statuses/x.json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client.delete_tweet("../x").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/1.1/statuses/destroy/..%2Fx.json");
    }
}
