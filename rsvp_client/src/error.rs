use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Retrieval failure against the RSVP API.
///
/// The board does not distinguish transport errors from bad payloads, so
/// the variants exist for logging, not for branching.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API base address: {0}")]
    BaseUrl(String),
}
