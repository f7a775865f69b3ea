//! Mint command - mint_social_nft, then refresh the listing

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use nft_social::social::{DEFAULT_CREATOR_HANDLE, DEFAULT_CREATOR_NAME};
use nft_social::{MintParams, NormalizedResult, OwnedObjectSummary};

use super::{output, CliContext};

#[derive(Parser, Debug)]
#[command(about = "Mint an NFTSOCIAL (simulated when no signer is configured)")]
pub struct MintCmd {
    /// Creator display name
    #[arg(long, default_value = DEFAULT_CREATOR_NAME)]
    pub name: String,

    /// Creator handle
    #[arg(long, default_value = DEFAULT_CREATOR_HANDLE)]
    pub handle: String,

    /// Recipient address (default: the account)
    #[arg(long)]
    pub recipient: Option<String>,

    /// Do not re-list owned NFTs after a submitted mint
    #[arg(long)]
    pub no_refresh: bool,
}

#[derive(Serialize)]
struct MintOutput<'a> {
    result: &'a NormalizedResult,
    nfts: Option<&'a [OwnedObjectSummary]>,
}

impl MintCmd {
    pub async fn execute(&self, ctx: &CliContext, json: bool, verbose: bool) -> Result<()> {
        let client = ctx.client();
        let params = MintParams {
            creator_name: self.name.clone(),
            creator_handle: self.handle.clone(),
            recipient: self.recipient.clone(),
        };
        let result = client.mint(&params).await?;

        let submitted = result.digest().is_some();
        let refreshed = if submitted && !self.no_refresh && client.account().is_some() {
            tokio::time::sleep(Duration::from_millis(ctx.config.refresh_delay_ms)).await;
            match client.list_nfts().await {
                Ok(nfts) => Some(nfts),
                Err(e) => {
                    warn!(error = %e, "refresh after mint failed");
                    None
                }
            }
        } else {
            None
        };

        if json {
            return output::print_json(&MintOutput {
                result: &result,
                nfts: refreshed.as_deref(),
            });
        }
        print!("{}", output::format_result(&result, verbose));
        if let Some(nfts) = refreshed {
            println!();
            print!("{}", output::format_nfts(&nfts));
        }
        Ok(())
    }
}
