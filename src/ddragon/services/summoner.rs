use serde::{Deserialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct SummonerSpellDto {
    pub id : String,     // e.g. "SummonerFlash"
    pub key : String,    // numeric spell id as a string
    pub name : String,   // display name, e.g. "Flash"
    pub description : String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct SummonerListDto {
    pub version : String,
    pub data : BTreeMap<String, SummonerSpellDto>,  // keyed by spell id
}

impl SummonerListDto {

    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }
}
