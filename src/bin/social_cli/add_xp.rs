//! Add-XP command

use anyhow::Result;
use clap::Parser;

use super::{output, CliContext};

#[derive(Parser, Debug)]
#[command(about = "Add XP to an NFTSOCIAL (simulated when no signer is configured)")]
pub struct AddXpCmd {
    /// NFT object id
    pub nft_id: String,

    /// XP amount (decimal u64)
    #[arg(long, default_value = "100")]
    pub amount: String,
}

impl AddXpCmd {
    pub async fn execute(&self, ctx: &CliContext, json: bool, verbose: bool) -> Result<()> {
        let result = ctx.client().add_xp(&self.nft_id, &self.amount).await?;
        if json {
            output::print_json(&result)
        } else {
            print!("{}", output::format_result(&result, verbose));
            Ok(())
        }
    }
}
