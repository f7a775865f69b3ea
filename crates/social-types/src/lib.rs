//! Shared types for the nft-social workspace.
//!
//! This crate holds the data model that both the intent/normalization layer
//! and the transport agree on:
//!
//! - [`CallTarget`], [`Argument`] and [`CallDescription`] describe a Move call
//!   before it is lowered into a transaction.
//! - [`OwnedObjectSummary`] is the stable record extracted from object queries.
//! - [`NormalizedResult`] is the stable record extracted from submit/simulate
//!   responses.

pub mod address;
pub mod call;
pub mod env_utils;
pub mod error;
pub mod object;
pub mod result;

pub use call::{Argument, CallDescription, CallTarget, Primitive, RawArg};
pub use error::IntentError;
pub use object::OwnedObjectSummary;
pub use result::{NormalizedResult, DIGEST_NOT_AVAILABLE};
