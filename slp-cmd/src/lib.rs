//! Command implementations for the Startup Launchpad CLI.
//!
//! Provides subcommands for running the panel analyses outside the browser,
//! exercising the budget rebalancer and dumping the bundled demo documents.

use clap::Subcommand;
use slp_core::allocation::DEFAULT_MONTHLY_BUDGET;
use slp_core::endpoint::DEFAULT_BASE_URL;
use slp_core::Endpoint;

pub mod analyze;
pub mod rebalance;

#[derive(Subcommand)]
pub enum Command {
    /// Resolve every dashboard panel for an idea and print the results as JSON
    Analyze {
        /// The business idea sent to each endpoint
        #[arg(short, long)]
        idea: String,

        /// Business name (informational, echoed in the log)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Use the bundled sample documents instead of the service
        #[arg(long)]
        demo: bool,

        /// Base URL of the analysis service
        #[arg(long, env = "SLP_API_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Per-request timeout in seconds; 0 waits indefinitely
        #[arg(long, default_value_t = 120)]
        timeout_secs: u64,
    },

    /// Apply one slider edit to a budget split and print the result
    Rebalance {
        #[arg(long, default_value_t = 40)]
        marketing: u8,

        #[arg(long, default_value_t = 35)]
        investments: u8,

        #[arg(long, default_value_t = 25)]
        labor: u8,

        /// The edit to apply, e.g. `marketing=60`
        #[arg(short, long)]
        edit: String,

        /// Only change the edited field
        #[arg(long)]
        no_auto_adjust: bool,

        /// Monthly budget in USD used for the dollar amounts
        #[arg(long, default_value_t = DEFAULT_MONTHLY_BUDGET)]
        budget: u32,
    },

    /// Print the bundled sample document for an endpoint
    Sample {
        /// market, branding-images, branding-text, outreach or pricing
        endpoint: Endpoint,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            idea,
            name,
            demo,
            base_url,
            timeout_secs,
        } => analyze::run_analyze(&idea, &name, demo, &base_url, timeout_secs).await,
        Command::Rebalance {
            marketing,
            investments,
            labor,
            edit,
            no_auto_adjust,
            budget,
        } => {
            let report = rebalance::run_rebalance(
                (marketing, investments, labor),
                &edit,
                !no_auto_adjust,
                budget,
            )?;
            println!("{}", report);
            Ok(())
        }
        Command::Sample { endpoint } => {
            println!("{}", slp_core::sample::sample_json(endpoint));
            Ok(())
        }
    }
}
