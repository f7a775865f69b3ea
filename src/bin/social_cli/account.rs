//! Account command - show who the CLI acts for and whether it can sign

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use nft_social_transport::network::infer_network_from_url;

use super::CliContext;

#[derive(Parser, Debug)]
#[command(about = "Show the active account, network and signing mode")]
pub struct AccountCmd {}

#[derive(Serialize)]
struct AccountReport<'a> {
    account: Option<&'a str>,
    rpc_url: &'a str,
    network: Option<&'static str>,
    package: Option<&'a str>,
    can_submit: bool,
}

impl AccountCmd {
    pub async fn execute(&self, ctx: &CliContext, json: bool) -> Result<()> {
        let report = AccountReport {
            account: ctx.account.as_deref(),
            rpc_url: &ctx.config.rpc_url,
            network: infer_network_from_url(&ctx.config.rpc_url),
            package: ctx.config.package.as_deref(),
            can_submit: ctx.client().can_submit(),
        };
        if json {
            return super::output::print_json(&report);
        }

        match report.account {
            Some(account) => println!("\x1b[1mAccount:\x1b[0m \x1b[36m{}\x1b[0m", account),
            None => println!("\x1b[33mNo account: pass --account or set NFT_SOCIAL_PRIVATE_KEY\x1b[0m"),
        }
        println!(
            "\x1b[1mNetwork:\x1b[0m {} ({})",
            report.network.unwrap_or("custom"),
            report.rpc_url
        );
        println!(
            "\x1b[1mPackage:\x1b[0m {}",
            report.package.unwrap_or("(not set)")
        );
        if report.can_submit {
            println!("\x1b[32mSigner loaded: transactions will be submitted\x1b[0m");
        } else {
            println!("\x1b[33mNo signer: state-changing commands are simulated\x1b[0m");
        }
        Ok(())
    }
}
