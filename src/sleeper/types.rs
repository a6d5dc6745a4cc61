use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;


/// Sleeper sends `null` for some list fields; treat that as the empty default.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// User record from `/user/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// League record from `/user/{user_id}/leagues/nfl/{season}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperLeague {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub sport: String,
    pub status: String,
}

/// One team's roster inside a league.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperRoster {
    pub roster_id: u32,
    /// `None` for rosters nobody owns.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Player ids in lineup-slot order.
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub players: Vec<String>,
}

/// Entry in the NFL player directory.
///
/// Only the fields this service reports are kept; Sleeper sends many more.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleeperPlayer {
    pub player_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    /// Raw upstream token, echoed back unchanged.
    #[serde(default)]
    pub injury_status: Option<String>,
}

impl SleeperPlayer {
    /// Parsed injury status. Unknown tokens yield `None`.
    pub fn status(&self) -> Option<InjuryStatus> {
        self.injury_status.as_deref()?.parse().ok()
    }
}

/// Player directory keyed by player id, as returned by `/players/nfl`.
pub type PlayerDirectory = HashMap<String, SleeperPlayer>;

/// Injury designations Sleeper can attach to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjuryStatus {
    Questionable,
    Doubtful,
    Out,
    Active,
    /// Injured reserve
    IR,
    Sus,
    Susp,
    /// Physically unable to perform
    Pup,
    Na,
    /// Did not report
    Dnr,
    Cov,
    /// Non-football injury, reserve list
    NfiR,
    /// Non-football injury, active list
    NfiA,
    Cel,
}

impl InjuryStatus {
    pub const ALL: [InjuryStatus; 14] = [
        InjuryStatus::Questionable,
        InjuryStatus::Doubtful,
        InjuryStatus::Out,
        InjuryStatus::Active,
        InjuryStatus::IR,
        InjuryStatus::Sus,
        InjuryStatus::Susp,
        InjuryStatus::Pup,
        InjuryStatus::Na,
        InjuryStatus::Dnr,
        InjuryStatus::Cov,
        InjuryStatus::NfiR,
        InjuryStatus::NfiA,
        InjuryStatus::Cel,
    ];

    /// Token as Sleeper spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryStatus::Questionable => "questionable",
            InjuryStatus::Doubtful => "doubtful",
            InjuryStatus::Out => "out",
            InjuryStatus::Active => "active",
            InjuryStatus::IR => "IR",
            InjuryStatus::Sus => "SUS",
            InjuryStatus::Susp => "SUSP",
            InjuryStatus::Pup => "PUP",
            InjuryStatus::Na => "NA",
            InjuryStatus::Dnr => "DNR",
            InjuryStatus::Cov => "COV",
            InjuryStatus::NfiR => "NFI-R",
            InjuryStatus::NfiA => "NFI-A",
            InjuryStatus::Cel => "CEL",
        }
    }

    /// Whether the status signals reduced availability for a starter.
    pub fn is_problematic(&self) -> bool {
        !matches!(self, InjuryStatus::Active)
    }
}

impl FromStr for InjuryStatus {
    type Err = String;

    /// Case-insensitive: `"Out"`, `"OUT"` and `"out"` are the same status.
    /// Surrounding whitespace is not ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unrecognized injury status: {s:?}"))
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// League identity reported alongside its questionable starters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeagueSummary {
    pub league_id: String,
    pub name: String,
}

impl From<&SleeperLeague> for LeagueSummary {
    fn from(league: &SleeperLeague) -> Self {
        Self {
            league_id: league.league_id.clone(),
            name: league.name.clone(),
        }
    }
}

/// One league with at least one questionable starter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuestionableLeague {
    pub league: LeagueSummary,
    pub questionable_starters: Vec<SleeperPlayer>,
}
