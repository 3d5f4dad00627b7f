//! Loading `site.json` from disk or over HTTP.

use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::core::paths::resolve_resource_path;
use crate::state::SiteConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read site config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch site config: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Remote(String),
}

impl ConfigSource {
    /// Interpret a location override; `None` or blank means the default file.
    pub fn from_location(location: Option<&str>) -> Self {
        let location = location
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CONFIG_PATH);
        if location.starts_with("http://") || location.starts_with("https://") {
            ConfigSource::Remote(location.to_string())
        } else {
            ConfigSource::File(resolve_resource_path(Path::new(location)))
        }
    }

    pub fn from_env() -> Self {
        Self::from_location(std::env::var(CONFIG_PATH_ENV).ok().as_deref())
    }
}

pub fn parse_site_config(json: &str) -> Result<SiteConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub async fn load_site_config() -> Result<SiteConfig, ConfigError> {
    load_from(&ConfigSource::from_env()).await
}

pub async fn load_from(source: &ConfigSource) -> Result<SiteConfig, ConfigError> {
    log::debug!("loading site config from {:?}", source);
    match source {
        ConfigSource::File(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
            parse_site_config(&json)
        }
        ConfigSource::Remote(url) => {
            let config = reqwest::Client::new()
                .get(url)
                .header(reqwest::header::CACHE_CONTROL, "no-store")
                .send()
                .await?
                .error_for_status()?
                .json::<SiteConfig>()
                .await?;
            Ok(config)
        }
    }
}
