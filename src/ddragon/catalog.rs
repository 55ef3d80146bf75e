//! Enumerates the documents and static assets we read from
//! the data dragon CDN, and knows how to turn them into
//! paths relative to the versioned CDN base
//! (e.g. `https://ddragon.leagueoflegends.com/cdn/14.5.1`).

/// The json documents published under `/data/<locale>/`.
/// The `Display` impl yields the file name on the CDN.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumIter)]
pub enum Catalog {
    #[strum(serialize = "champion.json")]
    Champion,
    #[strum(serialize = "item.json")]
    Item,
    #[strum(serialize = "runesReforged.json")]
    RunesReforged,
    #[strum(serialize = "summoner.json")]
    Summoner,
}

impl Catalog {

    /// Path of the catalog document relative to the CDN base.
    ///
    /// # Arguments
    ///
    /// `locale` - the locale segment, e.g. `en_US`
    pub fn data_path(self, locale : &str) -> String {
        format!("/data/{}/{}", locale, self)
    }
}

/// The image categories we link to from a build.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter)]
pub enum ImageKind {
    Champion,
    Item,
    RuneIcon,
    Spell,
}

impl ImageKind {

    /// Path of an image relative to the CDN base.
    ///
    /// # Arguments
    ///
    /// `id` - the champion key, item id, spell key, or for
    ///     `RuneIcon` the `icon` field of the rune as published
    ///     (which already carries its own directory and extension)
    pub fn image_path(self, id : &str) -> String {
        match self {
            ImageKind::Champion => format!("/img/champion/{}.png", id),
            ImageKind::Item => format!("/img/item/{}.png", id),
            ImageKind::RuneIcon => format!("/img/{}", id),
            ImageKind::Spell => format!("/img/spell/{}.png", id),
        }
    }
}
