//! Assembles a random build out of freshly fetched catalogs.
//!
//! Two flavours exist, picked by `BuildMode`:
//!
//! * `Locked` draws items from the whole item catalog and honours
//!   item ids the caller wants in the build.
//! * `Filtered` draws items only from those that can be bought on
//!   summoner's rift and ignores requested items.
//!
//! Both draw their items through `sampling::sample_unique`, so a
//! pool that is too small is reported instead of retried forever.

mod errors;
mod sampling;

pub use errors::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ddragon::{Catalog, Catalogs, ChampionListDto, Context, FilteredCatalogs,
                     ImageKind, ItemListDto, ItemSummary, RunePathDto, SummonerListDto};
use crate::util::BuildMode;

/// Number of items in a build.
pub const BUILD_SIZE : usize = 6;

/// Number of summoner spells in a build.
pub const SUMMONER_SPELL_COUNT : usize = 2;

/// What the caller asked for. Both fields come straight from the query string.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct BuildRequest {
    pub champion : Option<String>,
    pub items : Option<String>,  // comma separated item ids
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedImage {
    pub name : String,
    pub image : String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all="camelCase")]
pub struct RuneSelection {
    pub primary : String,
    pub primary_image : String,
    pub keystone : String,
    pub keystone_image : String,
}

/// The response payload.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all="camelCase")]
pub struct Build {
    pub champion : NamedImage,
    pub items : Vec<ItemSummary>,
    pub runes : RuneSelection,
    pub summoner_spells : Vec<NamedImage>,
}

/// Fetches the catalogs the mode needs and rolls a build from them.
///
/// # Arguments
///
/// `context` - the CDN to read from
/// `mode` - which item rules apply
/// `request` - the caller's champion and locked items
pub async fn random_build(context : &Context, mode : BuildMode, request : &BuildRequest) -> Result<Build> {
    match mode {
        BuildMode::Locked => {
            let catalogs = context.fetch_catalogs().await?;
            generate_locked(context, &catalogs, request, &mut rand::thread_rng())
        },
        BuildMode::Filtered => {
            let catalogs = context.fetch_filtered_catalogs().await?;
            generate_filtered(context, &catalogs, request, &mut rand::thread_rng())
        },
    }
}

/// Rolls a build from the full item catalog, keeping every requested
/// item id that exists in it.
pub fn generate_locked<R>(context : &Context, catalogs : &Catalogs, request : &BuildRequest, rng : &mut R) -> Result<Build>
where R : Rng + ?Sized {

    let champion = pick_champion(context, &catalogs.champions, request.champion.as_deref(), rng)?;
    let items = pick_locked_items(context, &catalogs.items, request.items.as_deref(), rng)?;
    let runes = pick_runes(context, &catalogs.runes, rng)?;
    let summoner_spells = pick_summoner_spells(context, &catalogs.summoner_spells, rng)?;

    Ok(Build { champion, items, runes, summoner_spells })
}

/// Rolls a build whose items all come from the pre-filtered valid items.
/// Requested items are not supported here and are ignored.
pub fn generate_filtered<R>(context : &Context, catalogs : &FilteredCatalogs, request : &BuildRequest, rng : &mut R) -> Result<Build>
where R : Rng + ?Sized {

    let mut seen = HashSet::new();
    let candidates : Vec<ItemSummary> = catalogs.valid_items.iter()
        .filter(|item| seen.insert(item.id.as_str()))
        .cloned()
        .collect();

    if candidates.len() < BUILD_SIZE {
        bail!(ErrorKind::NoValidItems(candidates.len()));
    }

    let champion = pick_champion(context, &catalogs.champions, request.champion.as_deref(), rng)?;
    let items = sampling::sample_unique(&candidates, BUILD_SIZE, rng)?;
    let runes = pick_runes(context, &catalogs.runes, rng)?;
    let summoner_spells = pick_summoner_spells(context, &catalogs.summoner_spells, rng)?;

    Ok(Build { champion, items, runes, summoner_spells })
}

/// Uses the requested champion verbatim when it is a known key,
/// otherwise picks one at random.
fn pick_champion<R>(context : &Context, champions : &ChampionListDto, requested : Option<&str>, rng : &mut R) -> Result<NamedImage>
where R : Rng + ?Sized {

    let name = match requested {
        Some(champion) if champions.contains(champion) => champion.to_string(),
        _ => sampling::pick_one(&champions.keys(), rng)
                .ok_or(ErrorKind::EmptyCatalog(Catalog::Champion))?
                .to_string(),
    };

    Ok(NamedImage {
        image : context.image_url(ImageKind::Champion, &name),
        name,
    })
}

/// Turns the raw `items` query value into the locked item ids.
/// Unknown ids, blanks and repeats are dropped, and at most a full
/// build's worth is kept. Order of first appearance is preserved.
pub fn parse_locked_items(raw : Option<&str>, items : &ItemListDto) -> Vec<String> {
    let mut locked : Vec<String> = Vec::new();

    for id in raw.unwrap_or("").split(',').map(str::trim) {
        if locked.len() == BUILD_SIZE {
            break;
        }
        if !id.is_empty() && items.contains(id) && !locked.iter().any(|l| l == id) {
            locked.push(id.to_string());
        }
    }

    locked
}

/// Locked items first, then random distinct fillers from the rest of the catalog.
fn pick_locked_items<R>(context : &Context, items : &ItemListDto, raw : Option<&str>, rng : &mut R) -> Result<Vec<ItemSummary>>
where R : Rng + ?Sized {

    let locked = parse_locked_items(raw, items);
    let remaining : Vec<&str> = items.keys().into_iter()
        .filter(|id| !locked.iter().any(|l| l == id))
        .collect();
    let fillers = sampling::sample_unique(&remaining, BUILD_SIZE - locked.len(), rng)?;

    let ids = locked.iter().map(String::as_str).chain(fillers.into_iter());
    Ok(ids.filter_map(|id| items.data.get(id).map(|item| context.summarize_item(id, item))).collect())
}

/// A random rune path and a random keystone out of its first slot.
fn pick_runes<R>(context : &Context, runes : &[RunePathDto], rng : &mut R) -> Result<RuneSelection>
where R : Rng + ?Sized {

    let path = sampling::pick_one(runes, rng).ok_or(ErrorKind::EmptyCatalog(Catalog::RunesReforged))?;
    let keystone = sampling::pick_one(path.keystones(), rng)
        .ok_or_else(|| ErrorKind::MissingKeystones(path.name.clone()))?;

    Ok(RuneSelection {
        primary : path.name.clone(),
        primary_image : context.image_url(ImageKind::RuneIcon, &path.icon),
        keystone : keystone.name.clone(),
        keystone_image : context.image_url(ImageKind::RuneIcon, &keystone.icon),
    })
}

/// Two independent picks, so the same spell can come up twice.
fn pick_summoner_spells<R>(context : &Context, spells : &SummonerListDto, rng : &mut R) -> Result<Vec<NamedImage>>
where R : Rng + ?Sized {

    let keys = spells.keys();
    (0..SUMMONER_SPELL_COUNT)
        .map(|_| -> Result<NamedImage> {
            let spell = sampling::pick_one(&keys, rng).ok_or(ErrorKind::EmptyCatalog(Catalog::Summoner))?;
            Ok(NamedImage {
                name : spell.to_string(),
                image : context.image_url(ImageKind::Spell, spell),
            })
        })
        .collect()
}
