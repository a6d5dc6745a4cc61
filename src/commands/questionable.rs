//! Questionable command implementation

use std::fmt::Write as _;

use crate::{
    config::Config,
    sleeper::{find_questionable_starters, types::QuestionableLeague, Season, SleeperClient},
    Result,
};

/// Handle the questionable command
pub async fn handle_questionable(
    username: &str,
    season: Option<Season>,
    as_json: bool,
    api_base: Option<String>,
) -> Result<()> {
    // The port is irrelevant here; only the upstream base matters.
    let config = Config::resolve(Some(0), api_base)?;
    let client = SleeperClient::new(&config)?;
    let season = season.unwrap_or_else(Season::current);

    let report = find_questionable_starters(&client, username, season).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, season));
    }

    Ok(())
}

/// Plain-text rendering: one block per league, one line per starter.
pub fn render_report(report: &[QuestionableLeague], season: Season) -> String {
    if report.is_empty() {
        return format!("No questionable starters in the {season} season.\n");
    }

    let mut out = String::new();
    for entry in report {
        let _ = writeln!(out, "{}", entry.league.name);
        for player in &entry.questionable_starters {
            let _ = writeln!(
                out,
                "  {} ({}, {}) - {}",
                player.full_name.as_deref().unwrap_or(&player.player_id),
                player.position.as_deref().unwrap_or("?"),
                player.team.as_deref().unwrap_or("FA"),
                player.injury_status.as_deref().unwrap_or("")
            );
        }
    }
    out
}
