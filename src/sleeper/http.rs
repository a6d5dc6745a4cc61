//! HTTP client for the Sleeper public REST API

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::{Result, SleeperError},
    sleeper::{
        season::Season,
        types::{PlayerDirectory, SleeperLeague, SleeperRoster, SleeperUser},
    },
};


const USER_AGENT: &str = concat!("sleeper-watch/", env!("CARGO_PKG_VERSION"));

/// Stateless wrapper over the upstream endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(http, &config.api_base))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a user by username. `Ok(None)` when Sleeper does not know them.
    pub async fn fetch_user(&self, username: &str) -> Result<Option<SleeperUser>> {
        let url = self.endpoint(&["user", username])?;
        Ok(self.get_optional::<Option<SleeperUser>>(url).await?.flatten())
    }

    /// All NFL leagues the user joined in `season`. Empty when there are none.
    pub async fn fetch_leagues(&self, user_id: &str, season: Season) -> Result<Vec<SleeperLeague>> {
        let season = season.to_string();
        let url = self.endpoint(&["user", user_id, "leagues", "nfl", &season])?;
        Ok(self
            .get_optional::<Option<Vec<SleeperLeague>>>(url)
            .await?
            .flatten()
            .unwrap_or_default())
    }

    /// The roster owned by `user_id` in `league_id`, if any.
    pub async fn fetch_roster(&self, league_id: &str, user_id: &str) -> Result<Option<SleeperRoster>> {
        let url = self.endpoint(&["league", league_id, "rosters"])?;
        let rosters = self
            .get_optional::<Option<Vec<SleeperRoster>>>(url)
            .await?
            .flatten()
            .unwrap_or_default();

        Ok(rosters
            .into_iter()
            .find(|roster| roster.owner_id.as_deref() == Some(user_id)))
    }

    /// The full NFL player directory. Large (several MB); fetch once per request.
    pub async fn fetch_all_players(&self) -> Result<PlayerDirectory> {
        let url = self.endpoint(&["players", "nfl"])?;
        debug!(%url, "GET");

        let players = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayerDirectory>()
            .await?;

        debug!(count = players.len(), "player directory loaded");
        Ok(players)
    }

    /// Upstream URL for `segments` under the base path.
    ///
    /// Each segment is percent-encoded, so ids containing `/` or `..` stay a
    /// single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = || SleeperError::InvalidApiBase {
            value: self.base_url.clone(),
        };

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode the body, mapping an upstream 404 to `Ok(None)`.
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "upstream returned 404");
            return Ok(None);
        }

        let body = response.error_for_status()?.json::<T>().await?;
        Ok(Some(body))
    }
}
