//! Build command - construct a call description without touching the network
//!
//! Arguments use `<kind>:<value>` with kind one of `text`, `object`,
//! `amount` or `address`:
//!
//! ```bash
//! nft-social build add_xp object:0x5 amount:100
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use nft_social::intent;
use nft_social::social::{social_target, ADMIN_CAP_SUFFIX};
use nft_social::{OwnedObjectSummary, RawArg, SocialConfig};
use nft_social_types::address::{address_to_string, normalize_id};

use super::output;

#[derive(Parser, Debug)]
#[command(about = "Build a social_creator call offline and print it")]
pub struct BuildCmd {
    /// Function in the social_creator module (e.g. add_xp)
    pub function: String,

    /// Arguments as <kind>:<value>
    #[arg(value_parser = clap::value_parser!(RawArg))]
    pub args: Vec<RawArg>,

    /// Prepend this authorization object (an owned AdminCap id)
    #[arg(long)]
    pub auth_object: Option<String>,
}

impl BuildCmd {
    pub fn execute(&self, config: &SocialConfig, json: bool) -> Result<()> {
        let target = social_target(config.package.as_deref(), &self.function)?;

        // Offline there is no owned-object listing; a supplied capability
        // stands in for one.
        let owned = match self.auth_object.as_deref() {
            Some(id) => {
                let id = normalize_id(id)
                    .map_err(|reason| anyhow!("invalid --auth-object {id:?}: {reason}"))?;
                let cap_type =
                    format!("{}{}", address_to_string(target.package()), ADMIN_CAP_SUFFIX);
                vec![OwnedObjectSummary::new(id, cap_type)]
            }
            None => Vec::new(),
        };
        let auth_suffix = self.auth_object.as_ref().map(|_| ADMIN_CAP_SUFFIX);
        let call = intent::build(target, &owned, &self.args, auth_suffix)
            .context("build call description")?;

        if json {
            output::print_json(&call)
        } else {
            print!("{}", output::format_call(&call));
            Ok(())
        }
    }
}
