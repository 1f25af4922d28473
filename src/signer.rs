use oauth1_request::{Builder, Credentials, HMAC_SHA1};

use crate::token::{ConsumerCredentials, TokenPair, Verifier};

/// Produces the `Authorization` header value for an OAuth 1.0a request.
///
/// The handshake only ever talks to the token endpoints, which take no request parameters,
/// so only the method and URL take part in the signature base string.
pub trait Signer {
    /// Signs a request to `uri` with `method` (`"GET"`, `"POST"`, ...).
    fn authorization(
        &self,
        method: &str,
        uri: &str,
        consumer: &ConsumerCredentials,
        token: Option<&TokenPair>,
        verifier: Option<&Verifier>,
    ) -> String;
}

/// HMAC-SHA1 signing in the `Authorization` header, with a fresh nonce and timestamp per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha1Signer;

impl Signer for HmacSha1Signer {
    fn authorization(
        &self,
        method: &str,
        uri: &str,
        consumer: &ConsumerCredentials,
        token: Option<&TokenPair>,
        verifier: Option<&Verifier>,
    ) -> String {
        let client = Credentials::new(consumer.key(), consumer.secret());
        let mut builder = Builder::<_, &str, &str>::new(client, HMAC_SHA1);
        if let Some(token) = token {
            builder.token(Credentials::new(token.token(), token.secret()));
        }
        if let Some(verifier) = verifier {
            builder.verifier(verifier.as_str());
        }
        builder.authorize(method, uri, &())
    }
}
