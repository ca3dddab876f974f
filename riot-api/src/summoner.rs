use crate::request::ApiRequest;
use crate::{ApiVersion, Error, Handle};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct SummonerClient {
    handle: Arc<Handle>,
}
impl SummonerClient {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self { handle }
    }

    pub fn by_name(&self, summoner_name: &str) -> ApiRequest<Summoner> {
        let url = self
            .handle
            .endpoint(ApiVersion::V1_1, &["summoner", "by-name", summoner_name]);
        ApiRequest::new(self.handle.clone(), url)
    }

    pub fn by_id(&self, summoner_id: &str) -> ApiRequest<Summoner> {
        let url = self
            .handle
            .endpoint(ApiVersion::V1_1, &["summoner", summoner_id]);
        ApiRequest::new(self.handle.clone(), url)
    }

    /// Resolve several summoner ids to names in one call
    pub fn names<S: AsRef<str>>(
        &self,
        summoner_ids: &[S],
    ) -> ApiRequest<SummonerNameList, Vec<SummonerName>> {
        let ids = summoner_ids
            .iter()
            .map(|id| id.as_ref().trim())
            .collect::<Vec<_>>();
        let url = match ids.iter().find(|id| id.is_empty()) {
            Some(_) => Err(Error::InvalidId(ids.join(","))),
            None => self
                .handle
                .endpoint(ApiVersion::V1_1, &["summoner", ids.join(",").as_str(), "name"]),
        };
        ApiRequest::with_extract(self.handle.clone(), url, |list: SummonerNameList| {
            list.summoners
        })
    }

    pub fn masteries(&self, summoner_id: &str) -> ApiRequest<MasteryPages, Vec<MasteryPage>> {
        let url = self
            .handle
            .endpoint(ApiVersion::V1_1, &["summoner", summoner_id, "masteries"]);
        ApiRequest::with_extract(self.handle.clone(), url, |pages: MasteryPages| pages.pages)
    }

    pub fn runes(&self, summoner_id: &str) -> ApiRequest<RunePages, Vec<RunePage>> {
        let url = self
            .handle
            .endpoint(ApiVersion::V1_1, &["summoner", summoner_id, "runes"]);
        ApiRequest::with_extract(self.handle.clone(), url, |pages: RunePages| pages.pages)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub id: i64,
    pub name: String,
    pub profile_icon_id: i64,
    /// Milliseconds since the epoch
    pub revision_date: i64,
    pub revision_date_str: Option<String>,
    pub summoner_level: i64,
}

impl Summoner {
    /// `revision_date` as a timestamp
    pub fn revised_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.revision_date).single()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonerNameList {
    pub summoners: Vec<SummonerName>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonerName {
    pub id: i64,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryPages {
    pub summoner_id: Option<i64>,
    #[serde(default)]
    pub pages: Vec<MasteryPage>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasteryPage {
    pub name: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub talents: Vec<Talent>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: i64,
    pub name: String,
    pub rank: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunePages {
    pub summoner_id: Option<i64>,
    #[serde(default)]
    pub pages: Vec<RunePage>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunePage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub slots: Vec<RuneSlot>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneSlot {
    pub rune_slot_id: i64,
    pub rune: Rune,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rune {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub tier: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_summoner() {
        let summoner: Summoner = serde_json::from_str(
            r#"{"id":44600324,"name":"Best Lux EUW","profileIconId":7,
                "revisionDate":1375116256000,"revisionDateStr":"07/29/2013 04:44 PM UTC",
                "summonerLevel":6}"#,
        )
        .unwrap();
        assert_eq!(summoner.id, 44600324);
        assert_eq!(summoner.name, "Best Lux EUW");
        assert_eq!(summoner.profile_icon_id, 7);
        assert_eq!(summoner.summoner_level, 6);

        let revised = summoner.revised_at().unwrap();
        assert_eq!(
            revised.format("%m/%d/%Y %I:%M %p UTC").to_string(),
            summoner.revision_date_str.unwrap()
        );
    }
    #[test]
    fn decodes_rune_pages() {
        let pages: RunePages = serde_json::from_str(
            r#"{"summonerId":19531813,"pages":[{"id":1,"name":"AP","current":true,
                "slots":[{"runeSlotId":1,"rune":{"id":5273,"name":"Greater Mark of Magic Penetration",
                "description":"+0.95 magic penetration","tier":3}}]}]}"#,
        )
        .unwrap();
        let rune = &pages.pages[0].slots[0].rune;
        assert_eq!(rune.id, 5273);
        assert_eq!(rune.tier, Some(3));
    }
    #[test]
    fn empty_mastery_book() {
        let pages: MasteryPages = serde_json::from_str(r#"{"summonerId":1}"#).unwrap();
        assert!(pages.pages.is_empty());
    }
}
