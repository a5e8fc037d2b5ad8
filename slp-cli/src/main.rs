//! Startup Launchpad CLI - run panel analyses and budget math from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slp-cli",
    version,
    about = "Startup Launchpad analysis toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: slp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    slp_cmd::run(cli.command).await
}
