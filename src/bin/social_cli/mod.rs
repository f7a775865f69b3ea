//! CLI subcommand implementations for nft-social

pub mod account;
pub mod add_xp;
pub mod build;
pub mod get_xp;
pub mod list;
pub mod mint;
pub mod output;

use anyhow::{Context, Result};
use tracing::debug;

use nft_social::{SocialClient, SocialConfig};
use nft_social_transport::{KeypairSigner, SuiRpcTransport};

/// A connected fullnode client plus the account the commands act for.
pub struct CliContext {
    pub config: SocialConfig,
    pub transport: SuiRpcTransport,
    /// `--account`, else the signer's address.
    pub account: Option<String>,
}

impl CliContext {
    pub async fn connect(config: SocialConfig, account: Option<String>) -> Result<Self> {
        let mut transport = SuiRpcTransport::connect(&config.rpc_url, config.rpc_settings()).await?;
        if let Some(key) = config.private_key.as_deref() {
            let signer = KeypairSigner::from_encoded(key).context("load signing key")?;
            debug!(?signer, "signer loaded");
            transport = transport.with_signer(Box::new(signer));
        }
        let account = account
            .filter(|a| !a.trim().is_empty())
            .or_else(|| transport.signer_address().map(|a| a.to_string()));
        Ok(Self {
            config,
            transport,
            account,
        })
    }

    pub fn client(&self) -> SocialClient<'_> {
        SocialClient::new(&self.transport, &self.transport, self.config.package.clone())
            .with_account(self.account.clone())
    }
}
