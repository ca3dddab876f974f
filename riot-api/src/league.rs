use crate::request::ApiRequest;
use crate::{ApiVersion, Error, Handle, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub struct LeagueClient {
    handle: Arc<Handle>,
}
impl LeagueClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    /// The league a summoner is placed in
    pub fn by_summoner(&self, summoner_id: &str) -> GetLeagueRequestBuilder {
        let url = self
            .handle
            .endpoint(ApiVersion::V2_1, &["league", "by-summoner", summoner_id]);
        GetLeagueRequestBuilder {
            request: ApiRequest::new(self.handle.clone(), url),
            summoner_id: summoner_id.to_string(),
        }
    }
}

pub struct GetLeagueRequestBuilder {
    request: ApiRequest<HashMap<String, League>>,
    summoner_id: String,
}

impl GetLeagueRequestBuilder {
    pub fn url(&self) -> Option<&url::Url> {
        self.request.url()
    }
    pub async fn send(self) -> Result<League> {
        let leagues = self.request.send().await?;
        pick_league(leagues, &self.summoner_id)
    }
}

/// The service keys leagues by summoner id.
fn pick_league(mut leagues: HashMap<String, League>, summoner_id: &str) -> Result<League> {
    if let Some(league) = leagues.remove(summoner_id) {
        return Ok(league);
    }
    if leagues.len() == 1 {
        if let Some(league) = leagues.into_values().next() {
            return Ok(league);
        }
    }
    Err(Error::MissingEntry(summoner_id.to_string()))
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: Option<String>,
    pub tier: String,
    pub queue: Option<String>,
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub entries: Vec<LeagueEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub player_or_team_id: String,
    pub player_or_team_name: String,
    pub league_name: Option<String>,
    pub queue_type: Option<String>,
    pub tier: Option<String>,
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub is_hot_streak: bool,
    #[serde(default)]
    pub is_veteran: bool,
    #[serde(default)]
    pub is_fresh_blood: bool,
    #[serde(default)]
    pub is_inactive: bool,
    pub last_played: Option<i64>,
}
