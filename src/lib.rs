//! # Chirp 🐦
//!
//! A tiny command-line client that posts and deletes tweets through
//! Twitter's v1.1 REST endpoints.
//!
//! ## Overview
//!
//! Chirp reads four OAuth credentials from the environment, then issues one
//! `POST` per operation and treats exactly HTTP 200 as success. Response
//! bodies are never parsed.
//!
//! Requests are not actually signed: the `Authorization` header comes from
//! [`auth::PlaceholderSigner`], which sends a fixed literal. The real API
//! therefore rejects every call until a proper [`auth::RequestSigner`] exists.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        main / commands                      │
//! │   Parse args, load credentials, run post/delete, report     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │       API       │ │      Auth       │
//! │                 │ │                 │ │                 │
//! │ • API base URL  │ │ • update.json   │ │ • Env creds     │
//! │ • Env override  │ │ • destroy/id    │ │ • Signer trait  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Twitter REST client
//! - [`auth`] — Credential loading and request signing
//! - [`commands`] — Operations with console output
//! - [`config`] — Configuration management
//! - [`error`] — Error taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use chirp::{Config, Credentials, PlaceholderSigner, TwitterClient};
//!
//! # async fn demo() -> chirp::TweetResult<()> {
//! let credentials = Credentials::from_env()?;
//! let config = Config::load()?;
//! let client = TwitterClient::from_config(&config, PlaceholderSigner::new(credentials));
//! chirp::commands::post_tweet(&client, "Hello!", &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod paths;

// Re-export main types for convenience
pub use api::TwitterClient;
pub use auth::{Credentials, PlaceholderSigner, RequestSigner};
pub use config::Config;
pub use error::{TweetError, TweetResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
