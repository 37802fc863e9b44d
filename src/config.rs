use crate::error::{CatalogError, CatalogResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CACHED_MOVIES_FILE: &str = "movies.json";
pub const LOG_FILE: &str = "movie-catalog.log";

/// User configuration, read from `config.json` in the platform config dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default movie source: a file path or an http(s) URL.
    pub source: Option<String>,
    /// Directory prefix for poster references.
    pub poster_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            poster_dir: "posters".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> CatalogResult<Self> {
        match project_dirs() {
            Some(dirs) => Self::load_from(&dirs.config_dir().join("config.json")),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> CatalogResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?;
        let config = serde_json::from_str(&text)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "movie-catalog", "movie-catalog")
}

pub fn cache_dir() -> CatalogResult<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine home directory".to_string()))
}

/// Where `fetch` stores the downloaded movie list.
pub fn cached_movies_path() -> CatalogResult<PathBuf> {
    Ok(cache_dir()?.join(CACHED_MOVIES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.source.is_none());
        assert_eq!(config.poster_dir, "posters");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"source": "https://example.org/movies.json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some("https://example.org/movies.json"));
        assert_eq!(config.poster_dir, "posters");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "source = nope").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CatalogError::Config(_))));
    }
}
