//! Canned CDN documents for tests, and a way to serve them
//! from a `wiremock` server laid out like the real CDN.

use super::{Catalog, Catalogs, Context, FilteredCatalogs};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VERSION : &str = "14.5.1";
pub const LOCALE : &str = "en_US";

/// Ids of the items in `items()` that pass the validity filter, in id order.
pub const VALID_ITEM_IDS : [&str; 8] = ["1001", "2003", "3006", "3020", "3031", "3078", "3089", "3157"];

pub fn champions() -> Value {
    json!({
        "type": "champion",
        "version": VERSION,
        "data": {
            "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox" },
            "Annie": { "id": "Annie", "key": "1", "name": "Annie", "title": "the Dark Child" },
            "Garen": { "id": "Garen", "key": "86", "name": "Garen", "title": "The Might of Demacia" },
            "MonkeyKing": { "id": "MonkeyKing", "key": "62", "name": "Wukong", "title": "the Monkey King" }
        }
    })
}

fn item(name : &str, description : &str, purchasable : bool) -> Value {
    json!({
        "name": name,
        "description": description,
        "plaintext": "",
        "gold": { "base": 300, "total": 300, "sell": 210, "purchasable": purchasable },
        "maps": { "11": true, "12": true, "21": true, "22": false }
    })
}

pub fn items() -> Value {
    let mut data = json!({
        "1001": item("Boots", "<mainText><stats><attention>25</attention> Move Speed</stats></mainText><br>", true),
        "2003": item("Health Potion", "<mainText><active>Consume:</active> Restores health.</mainText>", true),
        "3006": item("Berserker's Greaves", "<mainText><stats><attention>35%</attention> Attack Speed</stats></mainText>", true),
        "3020": item("Sorcerer's Shoes", "<mainText><stats><attention>12</attention> Magic Penetration</stats></mainText>", true),
        "3031": item("Infinity Edge", "<mainText><stats><attention>70</attention> Attack Damage</stats></mainText>", true),
        "3078": item("Trinity Force", "<mainText><passive>Spellblade</passive> hits < harder</mainText>", true),
        "3089": item("Rabadon's Deathcap", "<mainText><stats><attention>140</attention> Ability Power</stats></mainText>", true),
        "3157": item("Zhonya's Hourglass", "<mainText><active>Stasis</active></mainText>", true),
        "3340": item("Stealth Ward", "<mainText>Trinket</mainText>", false),
        "3599": item("Kalista's Black Spear", "<mainText>Bind an ally</mainText>", true),
        "3330": item("Scarecrow Effigy", "<mainText>Fiddlesticks only</mainText>", true)
    });
    data["3599"]["inStore"] = json!(false);
    data["3330"]["maps"]["11"] = json!(false);

    json!({ "type": "item", "version": VERSION, "data": data })
}

/// An item catalog where only three items survive the validity filter.
pub fn scarce_items() -> Value {
    json!({
        "type": "item",
        "version": VERSION,
        "data": {
            "1001": item("Boots", "<mainText>Move Speed</mainText>", true),
            "3020": item("Sorcerer's Shoes", "<mainText>Magic Penetration</mainText>", true),
            "3157": item("Zhonya's Hourglass", "<mainText>Stasis</mainText>", true),
            "3340": item("Stealth Ward", "<mainText>Trinket</mainText>", false)
        }
    })
}

pub fn runes_reforged() -> Value {
    json!([
        {
            "id": 8100, "key": "Domination", "icon": "perk-images/Styles/7200_Domination.png", "name": "Domination",
            "slots": [
                { "runes": [
                    { "id": 8112, "key": "Electrocute", "icon": "perk-images/Styles/Domination/Electrocute/Electrocute.png", "name": "Electrocute" },
                    { "id": 8128, "key": "DarkHarvest", "icon": "perk-images/Styles/Domination/DarkHarvest/DarkHarvest.png", "name": "Dark Harvest" }
                ]},
                { "runes": [
                    { "id": 8126, "key": "CheapShot", "icon": "perk-images/Styles/Domination/CheapShot/CheapShot.png", "name": "Cheap Shot" }
                ]}
            ]
        },
        {
            "id": 8000, "key": "Precision", "icon": "perk-images/Styles/7201_Precision.png", "name": "Precision",
            "slots": [
                { "runes": [
                    { "id": 8005, "key": "PressTheAttack", "icon": "perk-images/Styles/Precision/PressTheAttack/PressTheAttack.png", "name": "Press the Attack" },
                    { "id": 8010, "key": "Conqueror", "icon": "perk-images/Styles/Precision/Conqueror/Conqueror.png", "name": "Conqueror" }
                ]}
            ]
        }
    ])
}

pub fn summoner_spells() -> Value {
    json!({
        "type": "summoner",
        "version": VERSION,
        "data": {
            "SummonerDot": { "id": "SummonerDot", "key": "14", "name": "Ignite" },
            "SummonerFlash": { "id": "SummonerFlash", "key": "4", "name": "Flash" },
            "SummonerHeal": { "id": "SummonerHeal", "key": "7", "name": "Heal" }
        }
    })
}

/// The parsed form of the default documents.
pub fn catalogs() -> Catalogs {
    Catalogs {
        champions : serde_json::from_value(champions()).unwrap(),
        items : serde_json::from_value(items()).unwrap(),
        runes : serde_json::from_value(runes_reforged()).unwrap(),
        summoner_spells : serde_json::from_value(summoner_spells()).unwrap(),
    }
}

/// The filtered form of the default documents, as the given context would build it.
pub fn filtered_catalogs(ctx : &Context) -> FilteredCatalogs {
    let catalogs = catalogs();
    FilteredCatalogs {
        valid_items : catalogs.items.data.iter()
            .filter(|(_, item)| item.is_valid())
            .map(|(id, item)| ctx.summarize_item(id, item))
            .collect(),
        champions : catalogs.champions,
        runes : catalogs.runes,
        summoner_spells : catalogs.summoner_spells,
    }
}

/// A context pointed at the mock server.
pub fn context(server : &MockServer) -> Context {
    Context::new(&server.uri(), VERSION, LOCALE)
}

/// One response per catalog document. Defaults to a 200 with the
/// canned documents above.
pub struct CdnFixture {
    pub champions : ResponseTemplate,
    pub items : ResponseTemplate,
    pub runes : ResponseTemplate,
    pub summoner_spells : ResponseTemplate,
}

impl Default for CdnFixture {
    fn default() -> Self {
        CdnFixture {
            champions : ResponseTemplate::new(200).set_body_json(champions()),
            items : ResponseTemplate::new(200).set_body_json(items()),
            runes : ResponseTemplate::new(200).set_body_json(runes_reforged()),
            summoner_spells : ResponseTemplate::new(200).set_body_json(summoner_spells()),
        }
    }
}

impl CdnFixture {

    pub async fn mount(self, server : &MockServer) {
        let routes = vec![
            (Catalog::Champion, self.champions),
            (Catalog::Item, self.items),
            (Catalog::RunesReforged, self.runes),
            (Catalog::Summoner, self.summoner_spells),
        ];

        for (catalog, template) in routes {
            Mock::given(method("GET"))
                .and(path(format!("/{}{}", VERSION, catalog.data_path(LOCALE))))
                .respond_with(template)
                .mount(server)
                .await;
        }
    }
}
