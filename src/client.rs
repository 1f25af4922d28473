use log::debug;
use reqwest::blocking::Response;
use url::Url;

use crate::error::{Error, Result};
use crate::signer::{HmacSha1Signer, Signer};
use crate::token::{
    preview, AccessToken, ConsumerCredentials, RequestToken, TokenKind, TokenPair, Verifier,
};

/// Longest error body carried into [`Error::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Discogs' request-token endpoint.
pub const REQUEST_TOKEN_URL: &str = "https://api.discogs.com/oauth/request_token";
/// The page the user visits to grant access.
pub const AUTHORIZE_URL: &str = "https://www.discogs.com/oauth/authorize";
/// Discogs' access-token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://api.discogs.com/oauth/access_token";

/// Discogs rejects requests without an identifying user agent.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " +",
    env!("CARGO_PKG_REPOSITORY")
);

/// Where the handshake talks to. The [`Default`] points at Discogs.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct DiscogsConfig {
    pub request_token_url: String,
    pub authorize_url: String,
    pub access_token_url: String,
    pub user_agent: String,
}

impl Default for DiscogsConfig {
    fn default() -> Self {
        DiscogsConfig {
            request_token_url: REQUEST_TOKEN_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            access_token_url: ACCESS_TOKEN_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Performs the two signed round-trips of the handshake.
pub struct Client<S = HmacSha1Signer> {
    http: reqwest::blocking::Client,
    config: DiscogsConfig,
    signer: S,
}

impl Client {
    /// A client signing with HMAC-SHA1.
    pub fn new(config: DiscogsConfig) -> Result<Self> {
        Client::with_signer(config, HmacSha1Signer)
    }
}

impl<S: Signer> Client<S> {
    /// A client that delegates request signing to `signer`.
    pub fn with_signer(config: DiscogsConfig, signer: S) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Client {
            http,
            config,
            signer,
        })
    }

    /// Obtains a temporary token with a signed `GET`.
    pub fn request_token(&self, consumer: &ConsumerCredentials) -> Result<RequestToken> {
        let uri = &self.config.request_token_url;
        let authorization = self.signer.authorization("GET", uri, consumer, None, None);

        debug!("GET {}", uri);
        let response = self
            .http
            .get(uri)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()?;

        token_from_response(response, TokenKind::Request).map(RequestToken)
    }

    /// The URL the user has to visit to authorize `request_token`.
    pub fn authorize_url(&self, request_token: &RequestToken) -> Result<Url> {
        Url::parse_with_params(
            &self.config.authorize_url,
            &[("oauth_token", request_token.token())],
        )
        .map_err(|_| Error::InvalidUrl)
    }

    /// Exchanges the authorized request token and the user's verifier for an access token
    /// with a signed `POST`.
    pub fn access_token(
        &self,
        consumer: &ConsumerCredentials,
        request_token: &RequestToken,
        verifier: &Verifier,
    ) -> Result<AccessToken> {
        let uri = &self.config.access_token_url;
        let authorization =
            self.signer
                .authorization("POST", uri, consumer, Some(&request_token.0), Some(verifier));

        debug!("POST {}", uri);
        let response = self
            .http
            .post(uri)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .body("")
            .send()?;

        token_from_response(response, TokenKind::Access).map(AccessToken)
    }
}

fn token_from_response(response: Response, kind: TokenKind) -> Result<TokenPair> {
    let status = response.status();
    debug!("{} endpoint answered {}", kind, status);

    if !status.is_success() {
        // the status matters more than the body, so a failed read leaves it empty
        let body = response.text().unwrap_or_default();
        return Err(Error::Status {
            endpoint: kind,
            status,
            body: preview(body.trim(), MAX_ERROR_BODY).to_string(),
        });
    }

    TokenPair::from_form(&response.text()?, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_discogs() {
        let config = DiscogsConfig::default();
        assert_eq!(config.request_token_url, REQUEST_TOKEN_URL);
        assert_eq!(config.authorize_url, AUTHORIZE_URL);
        assert_eq!(config.access_token_url, ACCESS_TOKEN_URL);
        assert!(config.user_agent.starts_with("discogs-oauth/"));
        assert!(config
            .user_agent
            .ends_with(" +https://github.com/discogs-oauth/discogs-oauth"));
    }

    #[test]
    fn authorize_url_carries_token() {
        let client = Client::new(DiscogsConfig::default()).unwrap();
        let token = RequestToken(TokenPair::new("abc", "xyz").unwrap());
        assert_eq!(
            client.authorize_url(&token).unwrap().as_str(),
            "https://www.discogs.com/oauth/authorize?oauth_token=abc"
        );
    }

    #[test]
    fn authorize_url_encodes_token() {
        let client = Client::new(DiscogsConfig::default()).unwrap();
        let token = RequestToken(TokenPair::new("a b&c", "xyz").unwrap());
        let url = client.authorize_url(&token).unwrap();
        assert_eq!(url.query(), Some("oauth_token=a+b%26c"));
    }

    #[test]
    fn invalid_authorize_url() {
        let config = DiscogsConfig {
            authorize_url: "not a url".into(),
            ..DiscogsConfig::default()
        };
        let client = Client::new(config).unwrap();
        let token = RequestToken(TokenPair::new("abc", "xyz").unwrap());
        assert!(matches!(client.authorize_url(&token), Err(Error::InvalidUrl)));
    }
}
