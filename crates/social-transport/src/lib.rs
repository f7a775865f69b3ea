//! Network collaborators for nft-social.
//!
//! This crate provides:
//! - [`ObjectQueryService`]: owned-object listing and object detail lookups
//! - [`TransactionTransport`]: submitting (signed) or simulating (dev-inspect)
//!   a [`CallDescription`]
//! - [`rpc::SuiRpcTransport`]: both traits over a Sui fullnode JSON-RPC client
//! - [`signer`]: the signing capability submission depends on
//!
//! Payloads are returned as untyped JSON. Their shape is not trusted; the
//! normalizer in the root crate decides what to read from them.

pub mod network;
pub mod ptb;
pub mod rpc;
pub mod signer;

use serde_json::Value;

use nft_social_types::CallDescription;

pub use rpc::{RpcSettings, SuiRpcTransport};
pub use signer::{KeypairSigner, TransactionSigner};

/// Failure of an external collaborator. Never interpreted, only reported.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("no signer configured; the call can only be simulated")]
    NoSigner,

    #[error("{0:#}")]
    Rpc(#[from] anyhow::Error),
}

/// Read access to on-chain objects.
#[async_trait::async_trait]
pub trait ObjectQueryService: Send + Sync {
    /// Objects currently owned by `owner`.
    async fn list_owned(&self, owner: &str) -> Result<Value, TransportError>;

    /// One object with its type, owner and content.
    async fn object_detail(&self, id: &str) -> Result<Value, TransportError>;
}

/// Executes a call description, either for real or as a simulation.
#[async_trait::async_trait]
pub trait TransactionTransport: Send + Sync {
    /// Whether [`submit`](Self::submit) can succeed, i.e. a signer is present.
    fn can_submit(&self) -> bool;

    /// Sign and execute. Returns the raw receipt.
    async fn submit(&self, call: CallDescription) -> Result<Value, TransportError>;

    /// Dev-inspect as `sender` without committing anything.
    async fn simulate(&self, call: CallDescription, sender: &str) -> Result<Value, TransportError>;
}
