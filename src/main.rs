//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_watch::{
    cli::{Commands, SleeperWatch},
    commands::{questionable::handle_questionable, serve::handle_serve},
    logging::setup_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SleeperWatch::parse();

    match app.command {
        Commands::Serve { port, upstream } => {
            setup_logging(upstream.verbose);
            handle_serve(port, upstream.api_base).await?
        }

        Commands::Questionable {
            username,
            season,
            json,
            upstream,
        } => {
            setup_logging(upstream.verbose);
            handle_questionable(&username, season, json, upstream.api_base).await?
        }
    }

    Ok(())
}
