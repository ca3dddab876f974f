use crate::request::ApiRequest;
use crate::{ApiVersion, Handle, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Season3,
    Season4,
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let season = match self {
            Season::Season3 => "SEASON3",
            Season::Season4 => "SEASON4",
        };
        write!(f, "{}", season)
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SEASON3" | "3" => Ok(Season::Season3),
            "SEASON4" | "4" => Ok(Season::Season4),
            _ => Err(format!("unknown season '{}'", s)),
        }
    }
}

pub struct StatsClient {
    handle: Arc<Handle>,
}
impl StatsClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    /// Per-champion ranked statistics
    pub fn ranked(&self, summoner_id: &str) -> SeasonalRequestBuilder<RankedStats, Vec<ChampionStat>> {
        let url = self.handle.endpoint(
            ApiVersion::V1_1,
            &["stats", "by-summoner", summoner_id, "ranked"],
        );
        SeasonalRequestBuilder::new(ApiRequest::with_extract(
            self.handle.clone(),
            url,
            |stats: RankedStats| stats.champions,
        ))
    }

    /// Aggregated statistics for every queue type the summoner played
    pub fn summary(
        &self,
        summoner_id: &str,
    ) -> SeasonalRequestBuilder<PlayerStatSummaries, Vec<PlayerStatSummary>> {
        let url = self.handle.endpoint(
            ApiVersion::V1_1,
            &["stats", "by-summoner", summoner_id, "summary"],
        );
        SeasonalRequestBuilder::new(ApiRequest::with_extract(
            self.handle.clone(),
            url,
            |summaries: PlayerStatSummaries| summaries.player_stat_summaries,
        ))
    }
}

/// Stats request that can be scoped to a season. Without one the service
/// answers for the current season.
pub struct SeasonalRequestBuilder<W, T> {
    request: ApiRequest<W, T>,
}

impl<W: DeserializeOwned, T> SeasonalRequestBuilder<W, T> {
    fn new(request: ApiRequest<W, T>) -> Self {
        Self { request }
    }
    pub fn season(mut self, season: Season) -> Self {
        self.request = self.request.query("season", &season.to_string());
        self
    }
    pub fn url(&self) -> Option<&url::Url> {
        self.request.url()
    }
    pub async fn send(self) -> Result<T> {
        self.request.send().await
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStats {
    pub summoner_id: Option<i64>,
    pub modify_date: Option<i64>,
    #[serde(default)]
    pub champions: Vec<ChampionStat>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionStat {
    /// Champion id, `0` holds the totals over all champions
    pub id: i64,
    pub name: Option<String>,
    #[serde(default)]
    pub stats: Vec<Statistic>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSummaries {
    pub summoner_id: Option<i64>,
    #[serde(default)]
    pub player_stat_summaries: Vec<PlayerStatSummary>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSummary {
    pub player_stat_summary_type: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    pub modify_date: Option<i64>,
    #[serde(default)]
    pub aggregated_stats: Vec<Statistic>,
}

/// A named counter. Shared by ranked, summary and recent game stats.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: Option<i64>,
    pub name: String,
    #[serde(alias = "c")]
    pub count: Option<i64>,
    pub value: i64,
}
