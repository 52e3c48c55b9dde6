use folio_engine::LookupTables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Lookup table overrides. Keys missing here keep their built-in values.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size key to points
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub font_sizes: BTreeMap<String, f32>,
    /// Family key to font name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub font_families: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$FOLIO_CONFIG` when set, otherwise `~/.config/folio/config.toml`
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_ENV).ok())
    }

    /// Resolve the config location from the value of `$FOLIO_CONFIG`, if any
    fn config_path_from(custom: Option<String>) -> PathBuf {
        if let Some(custom) = custom
            && !custom.is_empty()
        {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/folio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Built-in tables with this config's entries layered on top
    pub fn lookup_tables(&self) -> LookupTables {
        let mut tables = LookupTables::default();
        tables.extend(LookupTables {
            font_sizes: self.font_sizes.clone(),
            font_families: self.font_families.clone(),
        });
        tables
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Process-wide lookup tables, read from the config file on first use.
///
/// A missing file gives the built-in tables. An unreadable or malformed one
/// is logged and also falls back to the built-in tables.
pub fn lookup_tables() -> &'static LookupTables {
    static TABLES: OnceLock<LookupTables> = OnceLock::new();
    TABLES.get_or_init(|| match Config::load() {
        Ok(Some(config)) => {
            log::debug!("loaded lookup tables from {}", Config::config_path().display());
            config.lookup_tables()
        }
        Ok(None) => LookupTables::default(),
        Err(e) => {
            log::warn!("{e}; using built-in lookup tables");
            LookupTables::default()
        }
    })
}
