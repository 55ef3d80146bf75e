use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map id of summoner's rift in the `maps` table of an item.
pub const SUMMONERS_RIFT_MAP_ID : &str = "11";

// tags, plus any angle bracket left over from unbalanced markup
static MARKUP : Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>|[<>]").expect("markup pattern is valid"));

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct ItemDto {
    pub name : String,
    pub description : String,              // html-ish markup
    pub plaintext : String,
    pub gold : GoldDto,
    pub maps : Option<BTreeMap<String, bool>>,  // map id -> available
    pub in_store : Option<bool>,           // absent means sold in the store
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct GoldDto {
    pub base : i32,
    pub total : i32,
    pub sell : i32,
    pub purchasable : bool,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all="camelCase", default)]
pub struct ItemListDto {
    pub version : String,
    pub data : BTreeMap<String, ItemDto>,  // keyed by item id, e.g. "1001"
}

/// An item as it appears in a build: display data only,
/// with the description already reduced to plain text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id : String,
    pub name : String,
    pub image : String,
    pub description : String,
}

impl ItemDto {

    /// Whether the item can be bought from the shop on summoner's rift.
    /// An item qualifies when it is purchasable, is not explicitly
    /// hidden from the store, and either carries no map table or
    /// marks summoner's rift as available.
    pub fn is_valid(&self) -> bool {
        let in_store = self.in_store.unwrap_or(true);
        let on_summoners_rift = match &self.maps {
            Some(maps) => maps.get(SUMMONERS_RIFT_MAP_ID).copied().unwrap_or(false),
            None => true,
        };

        self.gold.purchasable && in_store && on_summoners_rift
    }

    pub fn plain_description(&self) -> String {
        strip_markup(&self.description)
    }
}

impl ItemListDto {

    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, item_id : &str) -> bool {
        self.data.contains_key(item_id)
    }
}

/// Removes every markup tag from the text in a single substitution.
/// The result never contains `<` or `>`.
pub fn strip_markup(text : &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}
