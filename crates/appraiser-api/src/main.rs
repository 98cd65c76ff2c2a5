//! Appraiser CLI and REST API entry point.
//!
//! Binary name: `appraiser`
//!
//! Parses CLI arguments, sets up tracing, then either runs a one-off
//! appraisal or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "appraiser", &mut std::io::stdout());
        return Ok(());
    }

    let enable_otel = matches!(&cli.command, Commands::Serve(args) if args.otel);
    appraiser_observe::tracing_setup::init_tracing(cli.log_filter(), cli.log_format(), enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let outcome = match cli.command {
        Commands::Serve(args) => match args.resolve_config().await {
            Ok(config) => cli::serve::run(config).await,
            Err(e) => Err(e),
        },

        Commands::Appraise { content, seed } => {
            let state = AppState::init(seed);
            cli::appraise::appraise_content(&state, content, cli.json)
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    appraiser_observe::tracing_setup::shutdown_tracing();
    outcome
}
