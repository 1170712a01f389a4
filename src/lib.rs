//! # chirp - microblogging API client
//!
//! A Rust client for Twitter-compatible microblogging REST APIs. The
//! library signs every request with OAuth 1.0a and exposes typed methods
//! for each endpoint: statuses, users, friendships, direct messages,
//! search, trends, favorites, blocks, saved searches, and photo upload.
//!
//! ## Features
//!
//! - Typed endpoint methods over one shared request/response pipeline
//! - OAuth 1.0a request signing (HMAC-SHA1); bring your own access token
//! - Multipart photo upload and profile image replacement
//! - The service's non-standard error envelope mapped to a real error type
//!
//! ## Basic Usage
//!
//! ```no_run
//! use chirp::{Client, Credentials};
//!
//! fn main() -> Result<(), chirp::Error> {
//!     let client = Client::new().authenticate(Credentials::new(
//!         "consumer_key".to_string(),
//!         "consumer_secret".to_string(),
//!         "access_token".to_string(),
//!         "access_token_secret".to_string(),
//!     ));
//!
//!     let status = client.update_status("Hello from chirp!", "")?;
//!     println!("posted status {} at {:?}", status.id, status.created_at);
//!
//!     for status in client.home_timeline(&chirp::Params::default())? {
//!         println!("{}: {}", status.user.map(|u| u.screen_name).unwrap_or_default(), status.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! The client starts unauthenticated and every call fails fast until a
//! transport is installed. Obtaining the access token pair (the OAuth or
//! XAuth handshake) is outside this library; once you have it,
//! [`Client::authenticate`] installs the stock signing transport. Custom
//! transports plug in through [`Transport`].
//!
//! ## Raw dispatch
//!
//! Endpoints not covered by a typed method can be reached directly:
//!
//! ```no_run
//! # use chirp::{Client, Params};
//! # let client = Client::new();
//! let params = Params { count: "5".to_string(), ..Params::default() };
//! let bytes = client.dispatch("GET", "https://api.twitter.com/1/statuses/public_timeline.json", Some(&params))?;
//! # Ok::<(), chirp::Error>(())
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod params;
pub mod response;
pub mod rest;
pub mod time;
pub mod transport;
pub mod upload;

// Re-export main types for convenience
pub use auth::{Credentials, OAuthTransport};
pub use client::Config;
pub use endpoint::{lookup, Endpoint};
pub use error::{Error, Result, ServiceErrorKind};
pub use models::{
    DirectMessage, RateLimitStatus, Relationship, SavedSearch, SearchResult, SearchResults,
    Status, Trend, Trends, User,
};
pub use params::Params;
pub use response::{decode, decode_bool_string};
pub use rest::Client;
pub use time::Time;
pub use transport::{RawResponse, Transport};
