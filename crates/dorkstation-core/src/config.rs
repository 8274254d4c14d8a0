//! Lightweight configuration loader.
//!
//! Uses Figment to merge built-in defaults + `config.toml` +
//! `config.<env>.toml` + `DORK_*` env vars (nested keys separated by `__`,
//! e.g. `DORK_ENGINE__DEFAULT=duck`). The state directory may use `~` and
//! `${VAR}`; relative directories resolve against the config base.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Error;
use crate::types::SubstitutionMap;

/// Keys of the search engines a query can be opened against.
pub const ENGINE_KEYS: [&str; 4] = ["google", "duck", "startpage", "brave"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub engine: EngineSettings,
    pub store: StoreSettings,
    /// Default values for `{name}` placeholders.
    #[serde(default)]
    pub substitutions: SubstitutionMap,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSettings {
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSettings {
    pub dir: String,
}

impl StoreSettings {
    /// `dir` with `~` and `$VAR` expanded. An unset variable is an error
    /// rather than a literal path segment.
    pub fn expanded_dir(&self) -> Result<PathBuf, Error> {
        let expanded = shellexpand::full(&self.dir)
            .map_err(|e| Error::InvalidConfig(format!("store.dir '{}': {}", self.dir, e)))?;
        Ok(PathBuf::from(expanded.as_ref()))
    }

    /// Expanded `dir`, anchored at `base` when relative.
    pub fn resolve(&self, base: &Path) -> Result<PathBuf, Error> {
        let dir = self.expanded_dir()?;
        Ok(if dir.is_absolute() { dir } else { base.join(dir) })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineSettings { default: "google".to_string() },
            store: StoreSettings { dir: "~/.dorkstation".to_string() },
            substitutions: SubstitutionMap::new(),
        }
    }
}

pub struct Config {
    figment: Figment,
    base: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(&env::current_dir()?, &env_name)
    }

    /// Load `config.toml` and the env overlay from `base`.
    pub fn load_from(base: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("DORK_").split("__"));

        let config = Self { figment, base: base.to_path_buf() };
        config.validate_for_env(env_name)?;
        debug!(env = env_name, base = %base.display(), "configuration loaded");
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))
    }

    /// State directory with `~`/`$VAR` expanded and relative paths anchored
    /// at the directory the configuration was loaded from.
    pub fn store_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(self.settings()?.store.resolve(&self.base)?)
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        settings.validate()?;
        match env {
            "prod" | "production" => {
                if !settings.store.expanded_dir()?.is_absolute() {
                    return Err(Error::InvalidConfig(format!(
                        "store.dir must be absolute in production, got '{}'",
                        settings.store.dir
                    ))
                    .into());
                }
            }
            "dev" | "development" => {}
            "test" | "testing" => {}
            _ => {}
        }
        Ok(())
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), Error> {
        if !ENGINE_KEYS.contains(&self.engine.default.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "engine.default must be one of {}, got '{}'",
                ENGINE_KEYS.join(", "),
                self.engine.default
            )));
        }
        if self.store.dir.trim().is_empty() {
            return Err(Error::InvalidConfig("store.dir must not be empty".to_string()));
        }
        self.store.expanded_dir()?;
        if let Some(bad) = self.substitutions.keys().find(|k| k.is_empty() || k.contains(['{', '}'])) {
            return Err(Error::InvalidConfig(format!("invalid substitution name '{}'", bad)));
        }
        Ok(())
    }
}
