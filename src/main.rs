//! Chirp - post and delete tweets from the command line
#![allow(clippy::uninlined_format_args)]

use std::io::Write;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chirp::{Config, Credentials, PlaceholderSigner, TwitterClient, commands};

#[tokio::main]
async fn main() {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let result = match parse_args(&args) {
        Ok(command) => run(command, env_lookup, &mut std::io::stdout()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Run a command. `lookup` resolves credential and config variables.
async fn run<F, W>(command: Command, lookup: F, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    match command {
        Command::Help => print_help(),
        Command::Version => print_version(),
        Command::Demo => {
            let client = build_client(&lookup)?;
            commands::run_demo(&client, out).await?;
        }
        Command::Post { text } => {
            let client = build_client(&lookup)?;
            commands::post_tweet(&client, &text, out).await?;
        }
        Command::Delete { tweet_id } => {
            let client = build_client(&lookup)?;
            commands::delete_tweet(&client, &tweet_id, out).await?;
        }
    }

    Ok(())
}

/// CLI commands
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Demo,
    Post { text: String },
    Delete { tweet_id: String },
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command> {
    if args.len() == 1 {
        return Ok(Command::Demo);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),

        "post" => {
            // Unquoted words are joined back into one tweet
            let text = args[2..].join(" ");
            if text.is_empty() {
                anyhow::bail!("Missing tweet text");
            }
            Ok(Command::Post { text })
        }

        "delete" | "rm" => match &args[2..] {
            [tweet_id] => Ok(Command::Delete {
                tweet_id: tweet_id.clone(),
            }),
            [] => Err(anyhow::anyhow!("Missing tweet id")),
            [_, extra @ ..] => Err(anyhow::anyhow!(
                "delete takes exactly one tweet id, got extra arguments: {}",
                extra.join(" ")
            )),
        },

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'chirp --help' for usage"
        )),
    }
}

/// Credentials first, so nothing is sent when one is missing
fn build_client<F>(lookup: &F) -> Result<TwitterClient>
where
    F: Fn(&str) -> Option<String>,
{
    let credentials = Credentials::from_lookup(lookup)?;
    let config = Config::load_with(lookup)?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    Ok(TwitterClient::from_config(
        &config,
        PlaceholderSigner::new(credentials),
    ))
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"🐦 Chirp - post and delete tweets

USAGE:
    chirp                              Post a demo tweet, then delete a placeholder id
    chirp [COMMAND]

COMMANDS:
    post <text>...                     Post a tweet (words are joined with spaces)
    delete <id>                        Delete a tweet by id

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

ENVIRONMENT:
    TWITTER_CONSUMER_KEY               Required
    TWITTER_CONSUMER_SECRET            Required
    TWITTER_ACCESS_TOKEN               Required
    TWITTER_ACCESS_SECRET              Required
    TWITTER_API_URL                    Overrides the API base URL
    RUST_LOG                           Log filter (default: warn)

NOTE:
    Requests carry a placeholder Authorization header and are not
    OAuth-signed, so the live API answers 401.

CONFIG:
    {}
"#,
        config_path
    );
}

fn print_version() {
    println!("chirp {}", chirp::VERSION);
}
