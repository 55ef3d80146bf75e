//! The ddragon module reads the static game data published
//! on the data dragon CDN: the champion, item, rune and
//! summoner spell catalogs, plus the image urls that go
//! along with them.
//!
//! Nothing is cached. Every build asks the CDN again, and
//! the catalogs only live as long as the request that
//! fetched them.

// external uses
use error_chain::ChainedError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

// my mods/uses
mod catalog;
mod errors;
mod services;
#[cfg(test)]
pub mod fixtures;

pub use catalog::{Catalog, ImageKind};
pub use errors::*;
pub use services::champion::ChampionListDto;
pub use services::item::{ItemDto, ItemListDto, ItemSummary};
pub use services::runes_reforged::RunePathDto;
pub use services::summoner::SummonerListDto;

/// Everything a locked-item build draws from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub champions : ChampionListDto,
    pub items : ItemListDto,
    pub runes : Vec<RunePathDto>,
    pub summoner_spells : SummonerListDto,
}

/// Everything a filtered build draws from. The item catalog
/// is replaced by the items that passed the validity filter.
#[derive(Debug, Clone)]
pub struct FilteredCatalogs {
    pub champions : ChampionListDto,
    pub valid_items : Vec<ItemSummary>,
    pub runes : Vec<RunePathDto>,
    pub summoner_spells : SummonerListDto,
}

/// Handle to one version/locale of the CDN. Cheap to clone,
/// all clones share the same http client.
#[derive(Debug, Clone)]
pub struct Context {
    inner : Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    client : Client,
    base_uri : String,  // e.g. https://ddragon.leagueoflegends.com/cdn/14.5.1
    locale : String,
}

impl Context {

    /// Constructs a new context for the given CDN location.
    ///
    /// # Arguments
    ///
    /// `cdn_root` - the unversioned CDN root (e.g. https://ddragon.leagueoflegends.com/cdn)
    /// `version` - the data version to read (e.g. 14.5.1)
    /// `locale` - the locale the catalogs are localized in (e.g. en_US)
    pub fn new(cdn_root : &str, version : &str, locale : &str) -> Context {
        Context {
            inner : Arc::new(ContextInner {
                client : Client::new(),
                base_uri : format!("{}/{}", cdn_root.trim_end_matches('/'), version),
                locale : locale.to_string(),
            })
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.inner.base_uri
    }

    /// Full url of an image asset on the CDN.
    pub fn image_url(&self, kind : ImageKind, id : &str) -> String {
        self.inner.base_uri.clone() + &kind.image_path(id)
    }

    /// Builds the display form of a catalog item.
    pub fn summarize_item(&self, id : &str, item : &ItemDto) -> ItemSummary {
        ItemSummary {
            id : id.to_string(),
            name : item.name.clone(),
            image : self.image_url(ImageKind::Item, id),
            description : item.plain_description(),
        }
    }

    pub async fn fetch_champions(&self) -> Result<ChampionListDto> {
        self.fetch_catalog(Catalog::Champion).await
    }

    pub async fn fetch_items(&self) -> Result<ItemListDto> {
        self.fetch_catalog(Catalog::Item).await
    }

    pub async fn fetch_runes_reforged(&self) -> Result<Vec<RunePathDto>> {
        self.fetch_catalog(Catalog::RunesReforged).await
    }

    pub async fn fetch_summoner_spells(&self) -> Result<SummonerListDto> {
        self.fetch_catalog(Catalog::Summoner).await
    }

    /// Fetches all four catalogs at once. The first failure
    /// aborts the whole thing, nothing is retried.
    pub async fn fetch_catalogs(&self) -> Result<Catalogs> {
        let (champions, items, runes, summoner_spells) = tokio::try_join!(
            self.fetch_champions(),
            self.fetch_items(),
            self.fetch_runes_reforged(),
            self.fetch_summoner_spells(),
        )?;

        Ok(Catalogs { champions, items, runes, summoner_spells })
    }

    /// Fetches the three unfiltered catalogs alongside the valid items.
    /// A failure fetching items never shows up here, it just leaves
    /// `valid_items` empty (see `fetch_valid_items`).
    pub async fn fetch_filtered_catalogs(&self) -> Result<FilteredCatalogs> {
        let (others, valid_items) = tokio::join!(
            async {
                tokio::try_join!(
                    self.fetch_champions(),
                    self.fetch_runes_reforged(),
                    self.fetch_summoner_spells(),
                )
            },
            self.fetch_valid_items(),
        );
        let (champions, runes, summoner_spells) = others?;

        Ok(FilteredCatalogs { champions, valid_items, runes, summoner_spells })
    }

    /// Fetches the item catalog and keeps only the items that can be
    /// bought on summoner's rift, ordered by item id.
    ///
    /// # Return
    ///
    /// The valid items, or an empty list if the catalog could not be
    /// fetched. The error is logged and otherwise swallowed, so an empty
    /// list must be read as "no data available".
    pub async fn fetch_valid_items(&self) -> Vec<ItemSummary> {
        match self.fetch_items().await {
            Ok(items) => items.data.iter()
                .filter(|(_, item)| item.is_valid())
                .map(|(id, item)| self.summarize_item(id, item))
                .collect(),
            Err(e) => {
                error!(error = %e.display_chain(), "Failed to fetch item catalog");
                Vec::new()
            }
        }
    }

    /// Sends a GET for one catalog and decodes the json body.
    async fn fetch_catalog<T : DeserializeOwned>(&self, catalog : Catalog) -> Result<T> {
        let uri = self.inner.base_uri.clone() + &catalog.data_path(&self.inner.locale);
        let response = self.send_query(&uri).await?;
        let data = response.json::<T>().await?;
        Ok(data)
    }

    async fn send_query(&self, uri : &str) -> Result<Response> {
        debug!(uri, "Querying CDN");
        let response = self.inner.client.get(uri).send().await?;
        Self::handle_response(uri, response)
    }

    /// Converts anything but a 2xx into an error. A 429 gets its own
    /// error kind so it can be told apart further up.
    fn handle_response(uri : &str, response : Response) -> Result<Response> {
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(ErrorKind::RateLimited(uri.to_string()).into()),
            status if !status.is_success() => Err(ErrorKind::BadStatus(uri.to_string(), status.as_u16()).into()),
            _ => Ok(response),
        }
    }
}
