//! Runtime configuration, read from the environment once at startup.

use std::env;
use std::time::Duration;

use crate::{Result, ResultExt};

pub const DEFAULT_CDN_ROOT : &str = "https://ddragon.leagueoflegends.com/cdn";
pub const DEFAULT_VERSION : &str = "14.5.1";
pub const DEFAULT_LOCALE : &str = "en_US";
pub const DEFAULT_REQUEST_TIMEOUT_SECS : u64 = 60;

/// Which item rules a build follows.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BuildMode {
    Locked,    // whole item catalog, caller may lock items
    Filtered,  // summoner's rift store items only, no locking
}

impl BuildMode {

    /// Port to listen on when `PORT` is not set.
    pub fn default_port(self) -> u16 {
        match self {
            BuildMode::Locked => 3000,
            BuildMode::Filtered => 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port : u16,
    pub mode : BuildMode,
    pub cdn_root : String,
    pub version : String,
    pub locale : String,
    pub request_timeout : Duration,
}

impl Config {

    /// Loads the config from the process environment.
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the config through an arbitrary variable lookup.
    ///
    /// # Arguments
    ///
    /// `lookup` - returns the value of a variable, `None` if unset
    ///
    /// # Return
    ///
    /// The config, or an error naming the variable that failed to parse.
    pub fn from_lookup<F>(lookup : F) -> Result<Config>
    where F : Fn(&str) -> Option<String> {

        let mode = match lookup("BUILD_MODE") {
            Some(raw) => raw.trim().parse::<BuildMode>()
                .chain_err(|| format!("BUILD_MODE must be 'locked' or 'filtered', got '{}'", raw))?,
            None => BuildMode::Locked,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>()
                .chain_err(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => mode.default_port(),
        };

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>()
                .chain_err(|| format!("REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}'", raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Config {
            port,
            mode,
            cdn_root : lookup("DDRAGON_CDN").unwrap_or_else(|| DEFAULT_CDN_ROOT.to_string()),
            version : lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            locale : lookup("DDRAGON_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            request_timeout : Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars : &[(&str, &str)]) -> Result<Config> {
        let vars : HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.mode, BuildMode::Locked);
        assert_eq!(config.port, 3000);
        assert_eq!(config.cdn_root, DEFAULT_CDN_ROOT);
        assert_eq!(config.version, "14.5.1");
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn filtered_mode_has_its_own_default_port() {
        let config = load(&[("BUILD_MODE", "filtered")]).unwrap();
        assert_eq!(config.mode, BuildMode::Filtered);
        assert_eq!(config.port, 500);

        let config = load(&[("BUILD_MODE", "filtered"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("DDRAGON_CDN", "http://localhost:9000/cdn"),
            ("DDRAGON_VERSION", "15.1.1"),
            ("DDRAGON_LOCALE", "de_DE"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]).unwrap();
        assert_eq!(config.cdn_root, "http://localhost:9000/cdn");
        assert_eq!(config.version, "15.1.1");
        assert_eq!(config.locale, "de_DE");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(load(&[("BUILD_MODE", "chaos")]).is_err());
        assert!(load(&[("PORT", "http")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("REQUEST_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn mode_names_round_trip_through_display() {
        assert_eq!(BuildMode::Locked.to_string(), "locked");
        assert_eq!("filtered".parse::<BuildMode>().unwrap(), BuildMode::Filtered);
    }
}
