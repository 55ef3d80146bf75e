error_chain!{

    links {
        Ddragon(crate::ddragon::Error, crate::ddragon::ErrorKind);
    }

    errors {
        NotEnoughCandidates(requested : usize, available : usize) {
            description("Not enough distinct candidates to sample from.")
            display("Asked for {} distinct picks but only {} candidates exist", requested, available)
        }

        NoValidItems(available : usize) {
            description("Not enough valid items for a build.")
            display("Only {} valid items available, a build needs {}", available, crate::builder::BUILD_SIZE)
        }

        EmptyCatalog(catalog : crate::ddragon::Catalog) {
            description("A catalog had no entries.")
            display("Catalog {} has no entries", catalog)
        }

        MissingKeystones(rune_path : String) {
            description("A rune path has no keystones.")
            display("Rune path {} has no keystone slot", rune_path)
        }
    }
}

impl Error {

    /// True if the CDN rate limited one of the catalog fetches.
    pub fn is_rate_limited(&self) -> bool {
        match self.kind() {
            ErrorKind::Ddragon(kind) => kind.is_rate_limited(),
            _ => false,
        }
    }

    pub fn is_no_valid_items(&self) -> bool {
        match self.kind() {
            ErrorKind::NoValidItems(_) => true,
            _ => false,
        }
    }
}
