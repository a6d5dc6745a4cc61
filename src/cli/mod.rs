//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

use crate::sleeper::Season;

/// Upstream settings shared between commands
#[derive(Debug, Args)]
pub struct UpstreamArgs {
    /// Sleeper API base URL (or set `SLEEPER_API_BASE`).
    #[clap(long)]
    pub api_base: Option<String>,

    /// Log debug output for this crate.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve {
        /// Port to listen on (or set `PORT`).
        #[clap(long, short)]
        port: Option<u16>,

        #[clap(flatten)]
        upstream: UpstreamArgs,
    },

    /// Print a user's questionable starters across all of their leagues.
    Questionable {
        /// Sleeper username.
        username: String,

        /// Season year (defaults to the season in progress).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        upstream: UpstreamArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-watch",
    version,
    about = "Flags questionable starters across Sleeper fantasy football leagues"
)]
pub struct SleeperWatch {
    #[clap(subcommand)]
    pub command: Commands,
}
