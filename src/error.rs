use nft_social_transport::TransportError;
use nft_social_types::IntentError;

/// Errors surfaced by the social actions.
#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    /// A required value was not provided (package id, object id, account).
    #[error("missing required input: {0}")]
    MissingRequiredInput(&'static str),

    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type SocialResult<T> = Result<T, SocialError>;
