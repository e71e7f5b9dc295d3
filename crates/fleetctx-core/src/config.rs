//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against the directory the configuration was loaded from.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_RESULTS: usize = 20;

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

/// `[search]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize { DEFAULT_MAX_RESULTS }

impl Default for SearchSettings {
    fn default() -> Self { Self { max_results: DEFAULT_MAX_RESULTS } }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(Path::new("."), &env_name)
    }

    /// Loads `config.toml` and the overlay for `env_name` from `dir`.
    pub fn load_for_env(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.validate()?;
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

    /// `[search]`, or the defaults when the table is absent.
    pub fn search_settings(&self) -> anyhow::Result<SearchSettings> {
        if !self.figment.contains("search") {
            return Ok(SearchSettings::default());
        }
        self.get("search")
    }

    /// Organization selected when the caller names none.
    pub fn default_org(&self) -> anyhow::Result<Option<String>> {
        if !self.figment.contains("scope.default_org") {
            return Ok(None);
        }
        self.get("scope.default_org").map(Some)
    }

    /// `data.snapshot_path`, expanded and resolved against the config directory.
    pub fn snapshot_path(&self) -> anyhow::Result<PathBuf> {
        let raw: String = self.get("data.snapshot_path")?;
        Ok(resolve_with_base(&self.base_dir, raw))
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.search_settings()?.max_results == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "search.max_results must be at least 1".to_string(),
            )
            .into());
        }
        self.default_org()?;
        Ok(())
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
