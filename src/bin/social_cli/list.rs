//! List command - owned NFTSOCIAL objects with their fields

use anyhow::Result;
use clap::Parser;

use super::{output, CliContext};

#[derive(Parser, Debug)]
#[command(about = "List NFTSOCIAL objects owned by the account")]
pub struct ListCmd {}

impl ListCmd {
    pub async fn execute(&self, ctx: &CliContext, json: bool) -> Result<()> {
        let nfts = ctx.client().list_nfts().await?;
        if json {
            output::print_json(&nfts)
        } else {
            print!("{}", output::format_nfts(&nfts));
            Ok(())
        }
    }
}
