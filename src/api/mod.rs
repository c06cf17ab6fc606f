//! API client for Twitter's v1.1 REST endpoints

pub mod twitter;

pub use twitter::TwitterClient;

/// Path segments shared by the status endpoints
pub const STATUSES_SEGMENTS: [&str; 2] = ["1.1", "statuses"];

/// Final segment of the status-update endpoint
pub const UPDATE_SEGMENT: &str = "update.json";

/// Segment under which the status-destroy endpoint lives
pub const DESTROY_SEGMENT: &str = "destroy";

/// Content type sent with every request, body or not
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Last path segment of the status-destroy endpoint for a tweet id
pub fn destroy_segment(tweet_id: &str) -> String {
    format!("{tweet_id}.json")
}
