use std::fmt;

use crate::error::{Error, Result};

/// Which leg of the handshake a token pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The temporary token used only to carry the user through authorization.
    Request,
    /// The long-lived token this crate exists to produce.
    Access,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Request => f.write_str("request token"),
            TokenKind::Access => f.write_str("access token"),
        }
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The application's consumer key and secret, as issued on the Discogs developer settings page.
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerCredentials {
    key: String,
    secret: String,
}

#[allow(missing_docs)]
impl ConsumerCredentials {
    /// Returns `None` if either part is empty.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Option<Self> {
        Some(ConsumerCredentials {
            key: non_empty(key)?,
            secret: non_empty(secret)?,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ConsumerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerCredentials")
            .field("key", &self.key)
            .field("secret", &format_args!("[redacted]"))
            .finish()
    }
}

/// An `oauth_token` / `oauth_token_secret` pair returned by one of the token endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    token: String,
    secret: String,
}

#[allow(missing_docs)]
impl TokenPair {
    /// Returns `None` if either part is empty.
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Option<Self> {
        Some(TokenPair {
            token: non_empty(token)?,
            secret: non_empty(secret)?,
        })
    }

    /// Parses an `application/x-www-form-urlencoded` token response body.
    ///
    /// The first occurrence of each field wins and unknown fields such as
    /// `oauth_callback_confirmed` are ignored.
    pub fn from_form(body: &str, kind: TokenKind) -> Result<Self> {
        let mut token = None;
        let mut secret = None;
        for (name, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
            match name.as_ref() {
                "oauth_token" if token.is_none() => token = Some(value.into_owned()),
                "oauth_token_secret" if secret.is_none() => secret = Some(value.into_owned()),
                _ => {}
            }
        }

        token
            .zip(secret)
            .and_then(|(token, secret)| TokenPair::new(token, secret))
            .ok_or(Error::IncompleteResponse(kind))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn into_parts(self) -> (String, String) {
        (self.token, self.secret)
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("token", &self.token)
            .field("secret", &format_args!("[redacted]"))
            .finish()
    }
}

/// Temporary credentials, valid only until they are exchanged for an [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken(pub TokenPair);

/// Long-lived credentials; they do not expire unless the user revokes access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub TokenPair);

impl std::ops::Deref for RequestToken {
    type Target = TokenPair;

    fn deref(&self) -> &TokenPair {
        &self.0
    }
}

impl std::ops::Deref for AccessToken {
    type Target = TokenPair;

    fn deref(&self) -> &TokenPair {
        &self.0
    }
}

impl AccessToken {
    /// Renders the token as lines that can be appended to a `.env` file.
    pub fn env_lines(&self) -> String {
        format!(
            "DISCOGS_OAUTH_TOKEN={}\nDISCOGS_OAUTH_TOKEN_SECRET={}",
            self.token(),
            self.secret()
        )
    }
}

/// The code shown to the user after they authorize the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verifier(String);

impl Verifier {
    /// Trims the input and fails on an empty code.
    pub fn new(code: &str) -> Result<Self> {
        non_empty(code.trim())
            .map(Verifier)
            .ok_or(Error::MissingVerifier)
    }

    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// At most `len` characters of `value`, for progress output that should not echo a whole secret.
pub(crate) fn preview(value: &str, len: usize) -> &str {
    match value.char_indices().nth(len) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_pair() {
        let pair = TokenPair::from_form("oauth_token=abc&oauth_token_secret=xyz", TokenKind::Request)
            .unwrap();
        assert_eq!(pair.into_parts(), ("abc".to_string(), "xyz".to_string()));
    }

    #[test]
    fn ignores_extra_fields_and_decodes() {
        let body = "oauth_token_secret=s%2Bc%3Dret&oauth_callback_confirmed=true&oauth_token=t%20k\n";
        let pair = TokenPair::from_form(body, TokenKind::Request).unwrap();
        assert_eq!(pair.token(), "t k");
        assert_eq!(pair.secret(), "s+c=ret");
    }

    #[test]
    fn first_occurrence_wins() {
        let pair = TokenPair::from_form(
            "oauth_token=one&oauth_token=two&oauth_token_secret=s",
            TokenKind::Access,
        )
        .unwrap();
        assert_eq!(pair.token(), "one");
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for body in [
            "oauth_token=abc",
            "oauth_token_secret=xyz",
            "oauth_token=&oauth_token_secret=xyz",
            "",
            "<html>Invalid</html>",
        ] {
            let err = TokenPair::from_form(body, TokenKind::Access).unwrap_err();
            assert!(
                matches!(err, Error::IncompleteResponse(TokenKind::Access)),
                "{body:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn constructors_reject_empty_parts() {
        assert!(ConsumerCredentials::new("", "secret").is_none());
        assert!(ConsumerCredentials::new("key", "").is_none());
        assert!(TokenPair::new("token", "").is_none());
        assert!(ConsumerCredentials::new("key", "secret").is_some());
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = ConsumerCredentials::new("key", "hunter2").unwrap();
        let token = AccessToken(TokenPair::new("tok", "hunter3").unwrap());
        let out = format!("{:?} {:?}", creds, token);
        assert!(!out.contains("hunter2"));
        assert!(!out.contains("hunter3"));
        assert!(out.contains("[redacted]"));
    }

    #[test]
    fn verifier_is_trimmed() {
        assert_eq!(Verifier::new("  12345\n").unwrap().as_str(), "12345");
        assert!(matches!(Verifier::new(" \n"), Err(Error::MissingVerifier)));
    }

    #[test]
    fn env_lines_are_unmodified() {
        let token = AccessToken(TokenPair::new("a+b", "c/d").unwrap());
        assert_eq!(
            token.env_lines(),
            "DISCOGS_OAUTH_TOKEN=a+b\nDISCOGS_OAUTH_TOKEN_SECRET=c/d"
        );
    }

    #[test]
    fn preview_is_char_safe() {
        assert_eq!(preview("abcdef", 3), "abc");
        assert_eq!(preview("ab", 3), "ab");
        assert_eq!(preview("äöüß", 2), "äö");
    }
}
