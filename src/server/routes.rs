//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::AppState;
use crate::{
    error::{Result, SleeperError},
    sleeper::{
        filter_players_by_status, find_questionable_starters,
        types::{QuestionableLeague, SleeperLeague, SleeperPlayer, SleeperRoster, SleeperUser},
        validate_id, validate_username, Season,
    },
};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub timestamp: String,
}

/// Optional `?season=YYYY` override; defaults to the current season.
#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}

impl SeasonQuery {
    fn resolve(&self) -> Result<Season> {
        match self.season.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(Season::current()),
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Sleeper Lineup Watch API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/api/health",
            "sleeper": "/api/sleeper"
        }
    }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SleeperUser>> {
    let username = validate_username(&username)?;
    let user = state
        .client
        .fetch_user(username)
        .await?
        .ok_or(SleeperError::UserNotFound)?;
    Ok(Json(user))
}

pub async fn get_leagues(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<Vec<SleeperLeague>>> {
    let username = validate_username(&username)?;
    let season = query.resolve()?;
    let user = state
        .client
        .fetch_user(username)
        .await?
        .ok_or(SleeperError::UserNotFound)?;
    let leagues = state.client.fetch_leagues(&user.user_id, season).await?;
    Ok(Json(leagues))
}

pub async fn get_roster(
    State(state): State<AppState>,
    Path((league_id, user_id)): Path<(String, String)>,
) -> Result<Json<SleeperRoster>> {
    let league_id = validate_id("league id", &league_id)?;
    let user_id = validate_id("user id", &user_id)?;
    let roster = state
        .client
        .fetch_roster(league_id, user_id)
        .await?
        .ok_or(SleeperError::RosterNotFound)?;
    Ok(Json(roster))
}

pub async fn post_players_status(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<SleeperPlayer>>> {
    let Json(body) = body.map_err(|rejection| SleeperError::InvalidBody {
        message: rejection.body_text(),
    })?;
    let player_ids = parse_player_ids(&body)?;

    let directory = state.client.fetch_all_players().await?;
    Ok(Json(filter_players_by_status(&player_ids, &directory)))
}

pub async fn get_questionable(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<Vec<QuestionableLeague>>> {
    let username = validate_username(&username)?;
    let season = query.resolve()?;
    let report = find_questionable_starters(&state.client, username, season).await?;
    Ok(Json(report))
}

pub async fn not_found() -> SleeperError {
    SleeperError::RouteNotFound
}

/// Extract `playerIds` from a status request body: a non-empty array of strings.
fn parse_player_ids(body: &Value) -> Result<Vec<String>> {
    let ids = body
        .get("playerIds")
        .and_then(Value::as_array)
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| SleeperError::InvalidPlayerIds {
            message: "playerIds must be a non-empty array".to_string(),
        })?;

    ids.iter()
        .map(|id| {
            id.as_str()
                .map(str::to_string)
                .ok_or_else(|| SleeperError::InvalidPlayerIds {
                    message: "All playerIds must be strings".to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_ids_accepts_strings() {
        let ids = parse_player_ids(&json!({ "playerIds": ["4046", "KC"] })).unwrap();
        assert_eq!(ids, vec!["4046", "KC"]);
    }

    #[test]
    fn test_parse_player_ids_rejects_missing_or_empty() {
        for body in [json!({}), json!({ "playerIds": [] }), json!({ "playerIds": "4046" })] {
            let err = parse_player_ids(&body).unwrap_err();
            assert!(err.to_string().contains("non-empty array"), "{body}");
        }
    }

    #[test]
    fn test_parse_player_ids_rejects_non_strings() {
        let err = parse_player_ids(&json!({ "playerIds": ["4046", 17] })).unwrap_err();
        assert_eq!(err.to_string(), "All playerIds must be strings");
    }

    #[test]
    fn test_season_query_defaults_to_current() {
        let query = SeasonQuery::default();
        assert_eq!(query.resolve().unwrap(), Season::current());
    }

    #[test]
    fn test_season_query_override() {
        let query = SeasonQuery {
            season: Some("2022".to_string()),
        };
        assert_eq!(query.resolve().unwrap(), Season::new(2022));

        let query = SeasonQuery {
            season: Some("22".to_string()),
        };
        assert!(matches!(
            query.resolve(),
            Err(SleeperError::InvalidSeason { .. })
        ));
    }
}
