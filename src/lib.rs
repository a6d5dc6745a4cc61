//! Sleeper Lineup Watch
//!
//! Finds the starters in a Sleeper user's fantasy football lineups who carry a
//! problematic injury designation (questionable, doubtful, out, IR, ...) and
//! reports them per league, over HTTP or from the command line.
//!
//! ## Features
//!
//! - **Upstream Client**: Typed access to the public Sleeper REST API
//! - **Status Filtering**: Case-insensitive injury-status matching against the player directory
//! - **Questionable Report**: Per-league list of flagged starters, in lineup order
//! - **HTTP API**: JSON endpoints with uniform `{"error": ...}` responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_watch::{find_questionable_starters, Config, Season, SleeperClient};
//!
//! # async fn example() -> sleeper_watch::Result<()> {
//! let client = SleeperClient::new(&Config::default())?;
//! let report = find_questionable_starters(&client, "gridiron_guru", Season::current()).await?;
//!
//! for entry in report {
//!     println!("{}: {} flagged", entry.league.name, entry.questionable_starters.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PORT=3000
//! export SLEEPER_API_BASE=https://api.sleeper.app/v1
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod sleeper;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SleeperError};
pub use sleeper::{find_questionable_starters, Season, SleeperClient};
