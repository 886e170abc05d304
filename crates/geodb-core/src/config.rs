//! Layered configuration and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (nested keys separated by `__`, e.g. `APP_CACHE__QUERY_CAPACITY`).
//! [`Config::settings`] extracts the typed [`Settings`] with defaults for
//! every missing key.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Load from the config files found in `dir`, selecting the overlay from `RUST_ENV`.
    pub fn load_in(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(dir, &env_name)
    }

    pub fn load_for_env(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        let settings = config.settings()?;
        tracing::debug!(env = env_name, dir = %dir.display(), ?settings, "loaded configuration");
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed view of the whole configuration; missing keys take their defaults.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub geo: GeoSettings,
    pub cache: CacheSettings,
    pub data: DataSettings,
    pub log: LogSettings,
}

impl Settings {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.geo.precision == 0 || self.geo.search_precision < 2 {
            return Err(Error::InvalidConfig(format!(
                "geo.precision must be >= 1 and geo.search_precision >= 2 (got {} / {})",
                self.geo.precision, self.geo.search_precision
            )));
        }
        if self.cache.query_capacity == 0 {
            return Err(Error::InvalidConfig("cache.query_capacity must be >= 1".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSettings {
    /// Length of the geoprints written to the index.
    pub precision: usize,
    /// Cell length used by proximity queries when the caller gives none.
    pub search_precision: usize,
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self { precision: 22, search_precision: 12 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Cell queries kept by the place search engine.
    pub query_capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { query_capacity: 1024 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub index_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { index_dir: "./data/places".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
