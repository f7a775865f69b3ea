//! nft-social
//!
//! Client for the `social_creator` Move module on Sui:
//!
//! - **Intent construction**: typed Move-call descriptions, with the caller's
//!   `AdminCap` resolved from their owned objects ([`intent`])
//! - **Response normalization**: receipts, dev-inspect reports and object
//!   queries reduced to stable records whatever shape they arrive in
//!   ([`normalize`])
//! - **Social flows**: mint, list, add XP and inspect XP, submitted through a
//!   signer or simulated without one ([`social`])
//!
//! Transports live in `nft-social-transport`; the shared data model lives in
//! `nft-social-types`.

pub mod config;
pub mod error;
pub mod intent;
pub mod normalize;
pub mod social;

pub use config::SocialConfig;
pub use error::{SocialError, SocialResult};
pub use normalize::{normalize, FieldKind, FieldSpec, Normalized, PayloadKind};
pub use social::{MintParams, SocialClient, XpReport};

pub use nft_social_types::{
    Argument, CallDescription, CallTarget, NormalizedResult, OwnedObjectSummary, Primitive,
    RawArg,
};
