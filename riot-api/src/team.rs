use crate::request::ApiRequest;
use crate::{ApiVersion, Handle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct TeamClient {
    handle: Arc<Handle>,
}
impl TeamClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    /// Ranked teams the summoner is a member of
    pub fn by_summoner(&self, summoner_id: &str) -> ApiRequest<Vec<Team>> {
        let url = self
            .handle
            .endpoint(ApiVersion::V2_1, &["team", "by-summoner", summoner_id]);
        ApiRequest::new(self.handle.clone(), url)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub tag: Option<String>,
    pub status: Option<String>,
    pub create_date: Option<i64>,
    pub modify_date: Option<i64>,
    #[serde(default)]
    pub roster: Roster,
    #[serde(default)]
    pub match_history: Vec<MatchHistory>,
    #[serde(default)]
    pub team_stat_summary: TeamStatSummary,
}

/// Teams are addressed by a `TEAM-<uuid>` full id.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamId {
    pub full_id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub owner_id: i64,
    #[serde(default)]
    pub member_list: Vec<TeamMember>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub player_id: i64,
    pub join_date: Option<i64>,
    pub invite_date: Option<i64>,
    pub status: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistory {
    pub game_id: i64,
    pub map_id: Option<i64>,
    pub game_mode: Option<String>,
    pub date: Option<i64>,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub invalid: bool,
    pub opposing_team_name: Option<String>,
    pub opposing_team_kills: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatSummary {
    pub team_id: TeamId,
    #[serde(default)]
    pub team_stat_details: Vec<TeamStatDetail>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatDetail {
    pub team_id: TeamId,
    pub team_stat_type: String,
    pub wins: i64,
    pub losses: i64,
    pub average_games_played: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_team_without_history() {
        let teams: Vec<Team> = serde_json::from_str(
            r#"[{"teamId":{"fullId":"TEAM-1"},"name":"Team Fnatic","tag":"FNC",
                 "roster":{"ownerId":19531813,"memberList":[{"playerId":19531813,"status":"MEMBER"}]},
                 "teamStatSummary":{"teamId":{"fullId":"TEAM-1"},"teamStatDetails":[
                    {"teamId":{"fullId":"TEAM-1"},"teamStatType":"RANKED_TEAM_5x5","wins":3,"losses":1}]}}]"#,
        )
        .unwrap();
        let team = &teams[0];
        assert_eq!(team.team_id.full_id, "TEAM-1");
        assert!(team.match_history.is_empty());
        assert_eq!(team.roster.member_list[0].player_id, 19531813);
        assert_eq!(team.team_stat_summary.team_stat_details[0].wins, 3);
    }
}
