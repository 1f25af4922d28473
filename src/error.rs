use crate::token::TokenKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Consumer key and secret are required")]
    MissingCredentials,
    #[error("Verification code is required")]
    MissingVerifier,
    #[error("Failed to get {0} from Discogs")]
    IncompleteResponse(TokenKind),
    #[error("{endpoint} endpoint returned HTTP {status}: {body}")]
    Status {
        endpoint: TokenKind,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid url given")]
    InvalidUrl,
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("an IO error occured: {0}")]
    IO(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
