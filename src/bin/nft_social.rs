//! nft-social: command-line client for the social_creator Move module
//!
//! ## Features
//!
//! - **account**: Show the active account and whether calls will be signed
//! - **list**: List owned NFTSOCIAL objects with creator name, handle, XP and level
//! - **mint**: Mint an NFTSOCIAL, passing the caller's AdminCap when one is owned
//! - **add-xp**: Add XP to an NFTSOCIAL
//! - **get-xp**: Read XP through dev-inspect
//! - **build**: Build a call description offline
//!
//! Without `NFT_SOCIAL_PRIVATE_KEY`, `mint` and `add-xp` are dev-inspected
//! instead of submitted.
//!
//! ## Example Usage
//!
//! ```bash
//! # Simulate a mint for an account
//! nft-social --account 0xABC mint --name Ana --handle ana
//!
//! # Submit for real
//! NFT_SOCIAL_PRIVATE_KEY=suiprivkey1... nft-social add-xp 0x5 --amount 250
//!
//! # Offline call construction
//! nft-social build add_xp object:0x5 amount:250 --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod social_cli;

use nft_social::SocialConfig;
use social_cli::{
    account::AccountCmd, add_xp::AddXpCmd, build::BuildCmd, get_xp::GetXpCmd, list::ListCmd,
    mint::MintCmd, CliContext,
};

#[derive(Parser)]
#[command(
    name = "nft-social",
    author,
    version,
    about = "Client for the social_creator NFT module on Sui"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fullnode RPC URL or network name (default: NFT_SOCIAL_RPC_URL, else testnet)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Package id of the social_creator module (default: NFT_SOCIAL_PACKAGE, else the published package)
    #[arg(long, global = true)]
    package: Option<String>,

    /// Account to act for (default: the signer's address)
    #[arg(long, global = true)]
    account: Option<String>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (raw responses, debug logs)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account, network and signing mode
    Account(AccountCmd),

    /// List owned NFTSOCIAL objects
    List(ListCmd),

    /// Mint an NFTSOCIAL
    Mint(MintCmd),

    /// Add XP to an NFTSOCIAL
    AddXp(AddXpCmd),

    /// Read XP through dev-inspect
    GetXp(GetXpCmd),

    /// Build a call description without network access
    Build(BuildCmd),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        command,
        rpc_url,
        package,
        account,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    let config = SocialConfig::from_env()
        .with_rpc_url(rpc_url.as_deref())
        .with_package(package.as_deref());
    tracing::debug!(?config, "configuration");

    if let Commands::Build(cmd) = &command {
        return cmd.execute(&config, json);
    }

    let ctx = CliContext::connect(config, account).await?;
    match command {
        Commands::Account(cmd) => cmd.execute(&ctx, json).await,
        Commands::List(cmd) => cmd.execute(&ctx, json).await,
        Commands::Mint(cmd) => cmd.execute(&ctx, json, verbose).await,
        Commands::AddXp(cmd) => cmd.execute(&ctx, json, verbose).await,
        Commands::GetXp(cmd) => cmd.execute(&ctx, json, verbose).await,
        Commands::Build(cmd) => cmd.execute(&ctx.config, json),
    }
}
