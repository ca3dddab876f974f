use crate::request::ApiRequest;
use crate::{ApiVersion, Handle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct ChampionClient {
    handle: Arc<Handle>,
}
impl ChampionClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> ApiRequest<ChampionList, Vec<Champion>> {
        let url = self.handle.endpoint(ApiVersion::V1_1, &["champion"]);
        ApiRequest::with_extract(self.handle.clone(), url, |list: ChampionList| list.champions)
    }

    /// This week's free-to-play rotation
    pub fn free(&self) -> ApiRequest<ChampionList, Vec<Champion>> {
        self.list().query("freeToPlay", "true")
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionList {
    #[serde(default)]
    pub champions: Vec<Champion>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    pub attack_rank: Option<i64>,
    pub defense_rank: Option<i64>,
    pub magic_rank: Option<i64>,
    pub difficulty_rank: Option<i64>,
    #[serde(default)]
    pub bot_enabled: bool,
    #[serde(default)]
    pub bot_mm_enabled: bool,
    #[serde(default)]
    pub ranked_play_enabled: bool,
    #[serde(default)]
    pub free_to_play: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_champion_list() {
        let list: ChampionList = serde_json::from_str(
            r#"{"champions":[{"id":1,"name":"Annie","active":true,"attackRank":2,"defenseRank":3,
                "magicRank":10,"difficultyRank":4,"botEnabled":true,"botMmEnabled":true,
                "rankedPlayEnabled":true,"freeToPlay":false}]}"#,
        )
        .unwrap();
        let annie = &list.champions[0];
        assert_eq!(annie.name, "Annie");
        assert_eq!(annie.magic_rank, Some(10));
        assert!(annie.ranked_play_enabled);
        assert!(!annie.free_to_play);
    }
}
