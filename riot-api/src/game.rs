use crate::request::ApiRequest;
use crate::stats::Statistic;
use crate::{ApiVersion, Handle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct GameClient {
    handle: Arc<Handle>,
}
impl GameClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    /// The last games played by a summoner, newest first
    pub fn recent(&self, summoner_id: &str) -> ApiRequest<RecentGames, Vec<Game>> {
        let url = self.handle.endpoint(
            ApiVersion::V1_1,
            &["game", "by-summoner", summoner_id, "recent"],
        );
        ApiRequest::with_extract(self.handle.clone(), url, |recent: RecentGames| recent.games)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGames {
    pub summoner_id: Option<i64>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: i64,
    pub champion_id: i64,
    pub create_date: Option<i64>,
    pub game_mode: Option<String>,
    pub game_type: Option<String>,
    pub sub_type: Option<String>,
    pub map_id: Option<i64>,
    pub team_id: Option<i64>,
    pub spell1: Option<i64>,
    pub spell2: Option<i64>,
    pub level: Option<i64>,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub fellow_players: Vec<Player>,
    #[serde(default)]
    pub statistics: Vec<Statistic>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub summoner_id: i64,
    pub team_id: i64,
    pub champion_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_game_without_fellows() {
        let recent: RecentGames = serde_json::from_str(
            r#"{"summonerId":1,"games":[{"gameId":7,"championId":103,"gameMode":"CLASSIC",
                "statistics":[{"id":2,"name":"LEVEL","value":18}]}]}"#,
        )
        .unwrap();
        let game = &recent.games[0];
        assert_eq!(game.champion_id, 103);
        assert!(game.fellow_players.is_empty());
        assert_eq!(game.statistics[0].count, None);
    }
}
