//! Get-XP command - simulate the get_xp getter

use anyhow::Result;
use clap::Parser;

use super::{output, CliContext};

#[derive(Parser, Debug)]
#[command(about = "Read an NFT's XP through dev-inspect")]
pub struct GetXpCmd {
    /// NFT object id
    pub nft_id: String,
}

impl GetXpCmd {
    pub async fn execute(&self, ctx: &CliContext, json: bool, verbose: bool) -> Result<()> {
        let report = ctx.client().inspect_xp(&self.nft_id).await?;
        if json {
            output::print_json(&report)
        } else {
            print!("{}", output::format_xp(&report, verbose));
            Ok(())
        }
    }
}
