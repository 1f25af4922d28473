#![warn(missing_docs)]
//! Obtain a long-lived Discogs access token through the OAuth 1.0a three-legged handshake.
//!
//! Signing is delegated to [oauth1-request](https://docs.rs/oauth1-request/) and requests go
//! out through a blocking [reqwest](https://docs.rs/reqwest/) client.
//! ```rust,no_run
//! # fn main() -> Result<(), discogs_oauth::Error> {
//! use discogs_oauth::{Client, ConsumerCredentials, DiscogsConfig, Verifier};
//!
//! let client = Client::new(DiscogsConfig::default())?;
//! let consumer = ConsumerCredentials::new("<consumer key>", "<consumer secret>")
//!     .ok_or(discogs_oauth::Error::MissingCredentials)?;
//!
//! let request_token = client.request_token(&consumer)?;
//! println!("Browse to {}", client.authorize_url(&request_token)?);
//!
//! let mut code = String::new();
//! std::io::stdin().read_line(&mut code)?;
//! let verifier = Verifier::new(&code)?;
//!
//! let access_token = client.access_token(&consumer, &request_token, &verifier)?;
//! println!("{}", access_token.env_lines());
//! # Ok(())
//! # }
//! ```

mod client;
mod console;
mod error;
pub mod flow;
mod signer;
mod token;

pub use client::{
    Client, DiscogsConfig, ACCESS_TOKEN_URL, AUTHORIZE_URL, REQUEST_TOKEN_URL, USER_AGENT,
};
pub use console::{Console, Environment, ProcessEnv};
pub use error::{Error, Result};
pub use signer::{HmacSha1Signer, Signer};
pub use token::{AccessToken, ConsumerCredentials, RequestToken, TokenKind, TokenPair, Verifier};
