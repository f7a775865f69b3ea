//! The `social_creator` flows: mint, list, add XP, inspect XP.
//!
//! Every flow is builder → transport → normalizer. State-changing calls are
//! submitted when the transport has a signer and dev-inspected otherwise.

use serde::Serialize;
use tracing::{debug, info, warn};

use nft_social_transport::{ObjectQueryService, TransactionTransport};
use nft_social_types::address::ZERO_ADDRESS;
use nft_social_types::{CallDescription, CallTarget, NormalizedResult, OwnedObjectSummary, RawArg};

use crate::error::{SocialError, SocialResult};
use crate::intent;
use crate::normalize::{self, FieldSpec};

pub const MODULE: &str = "social_creator";
pub const ADMIN_CAP_SUFFIX: &str = "::social_creator::AdminCap";
pub const NFT_TYPE_SUFFIX: &str = "::social_creator::NFTSOCIAL";

pub const MINT_FUNCTION: &str = "mint_social_nft";
pub const ADD_XP_FUNCTION: &str = "add_xp";
pub const GET_XP_FUNCTION: &str = "get_xp";

pub const DEFAULT_CREATOR_NAME: &str = "Creator";
pub const DEFAULT_CREATOR_HANDLE: &str = "handle";

const NO_OWNED: &[OwnedObjectSummary] = &[];

/// Display fields of an `NFTSOCIAL` object.
pub const NFT_SOCIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("creator_name"),
    FieldSpec::text("creator_handle"),
    FieldSpec::number("xp"),
    FieldSpec::number("level"),
];

/// `<package>::social_creator::<function>`. A missing or blank package is a
/// missing input, anything else malformed is an invalid target.
pub fn social_target(package: Option<&str>, function: &str) -> SocialResult<CallTarget> {
    let package = package
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(SocialError::MissingRequiredInput("package"))?;
    Ok(CallTarget::new(&format!("{package}::{MODULE}"), function)?)
}

#[derive(Debug, Clone, Default)]
pub struct MintParams {
    pub creator_name: String,
    pub creator_handle: String,
    /// Falls back to the account, then to the zero address.
    pub recipient: Option<String>,
}

impl MintParams {
    fn raw_args(&self, account: Option<&str>) -> Vec<RawArg> {
        let name = non_blank(Some(&self.creator_name)).unwrap_or(DEFAULT_CREATOR_NAME);
        let handle = non_blank(Some(&self.creator_handle)).unwrap_or(DEFAULT_CREATOR_HANDLE);
        let recipient = non_blank(self.recipient.as_deref())
            .or(account)
            .unwrap_or(ZERO_ADDRESS);
        vec![
            RawArg::Text(name.to_string()),
            RawArg::Text(handle.to_string()),
            RawArg::Address(recipient.to_string()),
        ]
    }
}

/// Outcome of the XP getter simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XpReport {
    pub nft_id: String,
    /// `None` when the report carried no decodable `u64`.
    pub xp: Option<u64>,
    pub result: NormalizedResult,
}

/// The four flows over borrowed collaborators.
pub struct SocialClient<'a> {
    query: &'a dyn ObjectQueryService,
    transport: &'a dyn TransactionTransport,
    package: Option<String>,
    account: Option<String>,
}

impl<'a> SocialClient<'a> {
    pub fn new(
        query: &'a dyn ObjectQueryService,
        transport: &'a dyn TransactionTransport,
        package: Option<String>,
    ) -> Self {
        Self {
            query,
            transport,
            package,
            account: None,
        }
    }

    pub fn with_account(mut self, account: Option<String>) -> Self {
        self.account = account.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.transport.can_submit()
    }

    pub fn target(&self, function: &str) -> SocialResult<CallTarget> {
        social_target(self.package.as_deref(), function)
    }

    /// Everything the account owns, optionally filtered by type fragment.
    pub async fn owned_objects(
        &self,
        type_filter: Option<&str>,
    ) -> SocialResult<Vec<OwnedObjectSummary>> {
        let account = self
            .account()
            .ok_or(SocialError::MissingRequiredInput("account"))?;
        let raw = self.query.list_owned(account).await?;
        Ok(normalize::normalize_owned(&raw, type_filter))
    }

    /// Mint an `NFTSOCIAL`. An owned `AdminCap` is passed first when one is found.
    pub async fn mint(&self, params: &MintParams) -> SocialResult<NormalizedResult> {
        let target = self.target(MINT_FUNCTION)?;

        let owned = if self.account.is_some() {
            self.owned_objects(None).await.unwrap_or_else(|e| {
                warn!(error = %e, "owned-object lookup failed; minting without AdminCap");
                Vec::new()
            })
        } else {
            Vec::new()
        };

        let call = intent::build(
            target,
            &owned,
            &params.raw_args(self.account()),
            Some(ADMIN_CAP_SUFFIX),
        )?;
        self.dispatch(call).await
    }

    pub async fn add_xp(&self, nft_id: &str, amount: &str) -> SocialResult<NormalizedResult> {
        let target = self.target(ADD_XP_FUNCTION)?;
        let nft_id = require(nft_id, "nft object id")?;
        let args = [
            RawArg::Object(nft_id.to_string()),
            RawArg::Amount(amount.to_string()),
        ];
        let call = intent::build(target, NO_OWNED, &args, None)?;
        self.dispatch(call).await
    }

    /// Simulate the `get_xp` getter. Never submits.
    pub async fn inspect_xp(&self, nft_id: &str) -> SocialResult<XpReport> {
        let target = self.target(GET_XP_FUNCTION)?;
        let nft_id = require(nft_id, "nft object id")?;
        let call = intent::build(target, NO_OWNED, &[RawArg::Object(nft_id.to_string())], None)?;

        let raw = self.transport.simulate(call, self.sender()).await?;
        let xp = normalize::simulated_return_u64(&raw);
        debug!(nft_id, ?xp, "get_xp simulated");
        Ok(XpReport {
            nft_id: nft_id.to_string(),
            xp,
            result: normalize::normalize_simulation(&raw),
        })
    }

    /// Owned `NFTSOCIAL` objects with their display fields.
    pub async fn list_nfts(&self) -> SocialResult<Vec<OwnedObjectSummary>> {
        let matches = self.owned_objects(Some(NFT_TYPE_SUFFIX)).await?;
        let mut nfts = Vec::with_capacity(matches.len());
        for nft in matches {
            let detail = self.query.object_detail(&nft.object_id).await?;
            nfts.push(normalize::summarize_detail(
                &nft.object_id,
                &nft.object_type,
                &detail,
                NFT_SOCIAL_FIELDS,
            ));
        }
        info!(count = nfts.len(), "listed social NFTs");
        Ok(nfts)
    }

    async fn dispatch(&self, call: CallDescription) -> SocialResult<NormalizedResult> {
        if self.transport.can_submit() {
            info!(call_target = %call.target(), "submitting");
            let raw = self.transport.submit(call).await?;
            Ok(normalize::normalize_submission(&raw))
        } else {
            info!(call_target = %call.target(), sender = self.sender(), "no signer, simulating");
            let raw = self.transport.simulate(call, self.sender()).await?;
            Ok(normalize::normalize_simulation(&raw))
        }
    }

    fn sender(&self) -> &str {
        self.account().unwrap_or(ZERO_ADDRESS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn require<'v>(value: &'v str, what: &'static str) -> SocialResult<&'v str> {
    non_blank(Some(value))
        .map(str::trim)
        .ok_or(SocialError::MissingRequiredInput(what))
}
