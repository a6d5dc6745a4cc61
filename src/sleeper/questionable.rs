//! Questionable-starter report across all of a user's leagues.

use tracing::debug;

use crate::{
    error::{Result, SleeperError},
    sleeper::{
        http::SleeperClient,
        season::Season,
        status::filter_players_by_status,
        types::{LeagueSummary, QuestionableLeague},
        validation::validate_username,
    },
};


/// Collect, per league, the user's starters carrying a problematic injury status.
///
/// Leagues are visited one at a time in the order Sleeper lists them. Leagues
/// where the user has no roster, no starters, or no flagged starters are left
/// out. The first upstream failure aborts the whole report.
pub async fn find_questionable_starters(
    client: &SleeperClient,
    username: &str,
    season: Season,
) -> Result<Vec<QuestionableLeague>> {
    let username = validate_username(username)?;

    let user = client
        .fetch_user(username)
        .await?
        .ok_or(SleeperError::UserNotFound)?;

    let leagues = client.fetch_leagues(&user.user_id, season).await?;
    debug!(user_id = %user.user_id, %season, leagues = leagues.len(), "leagues loaded");
    if leagues.is_empty() {
        return Ok(Vec::new());
    }

    let directory = client.fetch_all_players().await?;

    let mut report = Vec::new();
    for league in &leagues {
        let Some(roster) = client.fetch_roster(&league.league_id, &user.user_id).await? else {
            debug!(league_id = %league.league_id, "no roster owned by user");
            continue;
        };
        if roster.starters.is_empty() {
            continue;
        }

        let questionable_starters = filter_players_by_status(&roster.starters, &directory);
        if questionable_starters.is_empty() {
            continue;
        }

        debug!(
            league_id = %league.league_id,
            flagged = questionable_starters.len(),
            "questionable starters found"
        );
        report.push(QuestionableLeague {
            league: LeagueSummary::from(league),
            questionable_starters,
        });
    }

    Ok(report)
}
