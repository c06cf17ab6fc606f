//! Tweet operations with console reporting
//!
//! Each operation is one request through a [`TwitterClient`] followed by a
//! single success line on `out`. Nothing is written when the request fails.

use std::io::Write;

use tracing::info;

use crate::api::TwitterClient;
use crate::auth::RequestSigner;
use crate::error::TweetResult;

/// Printed after a tweet is created
pub const POSTED_MESSAGE: &str = "Tweet posted successfully!";

/// Printed after a tweet is deleted
pub const DELETED_MESSAGE: &str = "Tweet deleted successfully!";

/// Text posted by the demo flow
pub const DEMO_TWEET_TEXT: &str = "Hello from Twitter API using only net/http!";

/// Placeholder id deleted by the demo flow
pub const DEMO_TWEET_ID: &str = "your_tweet_id_here";

/// Post `text` and report success on `out`
pub async fn post_tweet<S, W>(client: &TwitterClient<S>, text: &str, out: &mut W) -> TweetResult<()>
where
    S: RequestSigner,
    W: Write,
{
    client.create_tweet(text).await?;
    info!(chars = text.chars().count(), "Tweet posted");
    writeln!(out, "{POSTED_MESSAGE}")?;
    Ok(())
}

/// Delete the tweet `tweet_id` and report success on `out`
pub async fn delete_tweet<S, W>(
    client: &TwitterClient<S>,
    tweet_id: &str,
    out: &mut W,
) -> TweetResult<()>
where
    S: RequestSigner,
    W: Write,
{
    client.delete_tweet(tweet_id).await?;
    info!(tweet_id, "Tweet deleted");
    writeln!(out, "{DELETED_MESSAGE}")?;
    Ok(())
}

/// Post the demo tweet, then delete the placeholder id.
///
/// The delete is only attempted once the post has succeeded.
pub async fn run_demo<S, W>(client: &TwitterClient<S>, out: &mut W) -> TweetResult<()>
where
    S: RequestSigner,
    W: Write,
{
    post_tweet(client, DEMO_TWEET_TEXT, out).await?;
    delete_tweet(client, DEMO_TWEET_ID, out).await
}
