//! CLI command definitions and dispatch for the `appraiser` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod appraise;
pub mod serve;

use appraiser_observe::tracing_setup::LogFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Randomized quality appraisals for digital collectibles.
#[derive(Parser)]
#[command(name = "appraiser", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Emit log lines as JSON objects.
    #[arg(long, global = true, env = "APPRAISER_LOG_JSON")]
    pub log_json: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing directives for the chosen verbosity.
    ///
    /// `RUST_LOG` still wins when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Log rendering chosen by `--log-json`.
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve(serve::ServeArgs),

    /// Appraise one asset locally and print the result.
    Appraise {
        /// Asset content: a URI or free-form description.
        content: String,

        /// Fixed seed for reproducible scores.
        #[arg(long, env = "RANDOM_SEED")]
        seed: Option<u64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_appraise_with_seed() {
        let cli = Cli::try_parse_from(["appraiser", "appraise", "ipfs://abc123", "--seed", "7"])
            .unwrap();
        match cli.command {
            Commands::Appraise { content, seed } => {
                assert_eq!(content, "ipfs://abc123");
                assert_eq!(seed, Some(7));
            }
            _ => panic!("expected appraise command"),
        }
    }

    #[test]
    fn test_log_filter_follows_verbosity() {
        let quiet = Cli::try_parse_from(["appraiser", "--quiet", "completions", "bash"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");

        let debug = Cli::try_parse_from(["appraiser", "-v", "completions", "bash"]).unwrap();
        assert_eq!(debug.log_filter(), "debug");

        let trace = Cli::try_parse_from(["appraiser", "-vv", "completions", "bash"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }

    #[test]
    fn test_log_json_flag_selects_json_format() {
        let cli = Cli::try_parse_from(["appraiser", "--log-json", "completions", "zsh"]).unwrap();
        assert_eq!(cli.log_format(), LogFormat::Json);
    }
}
