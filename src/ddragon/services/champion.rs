use serde::{Deserialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct ChampionDto {
    pub id : String,     // same as the map key, e.g. "MonkeyKing"
    pub key : String,    // numeric champion id as a string
    pub name : String,   // display name, e.g. "Wukong"
    pub title : String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct ChampionListDto {
    pub version : String,
    pub data : BTreeMap<String, ChampionDto>,  // keyed by champion id
}

impl ChampionListDto {

    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, champion : &str) -> bool {
        self.data.contains_key(champion)
    }
}
