//! CLI configuration.
//!
//! Resolution order, last wins: YAML config file (`--config`), then
//! environment variables, then explicit command-line flags.
//!
//! Variables:
//! - `SHIPNET_NETWORK`: path to the network document.
//! - `SHIPNET_FORMAT`: `text` or `json`.
//! - `SHIPNET_DOT_DIR`: directory for per-shipment DOT route maps.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per shipment plus a summary.
    #[default]
    Text,
    /// Machine-readable report with a content digest.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShipnetConfig {
    /// Network document to load when no `--network` flag is given.
    pub network: Option<PathBuf>,
    /// Report format when no `--format` flag is given.
    pub format: OutputFormat,
    /// Where to write DOT route maps when no `--dot-dir` flag is given.
    pub dot_dir: Option<PathBuf>,
}

impl ShipnetConfig {
    /// Load the optional config file, then apply process environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply `SHIPNET_*` overrides looked up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup("SHIPNET_NETWORK").filter(|v| !v.is_empty()) {
            self.network = Some(PathBuf::from(network));
        }
        if let Some(format) = lookup("SHIPNET_FORMAT").filter(|v| !v.is_empty()) {
            self.format = format.parse()?;
        }
        if let Some(dir) = lookup("SHIPNET_DOT_DIR").filter(|v| !v.is_empty()) {
            self.dot_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }

    /// The network document to load: the explicit flag if given, else the
    /// configured one.
    pub fn network_path<'a>(&'a self, explicit: Option<&'a Path>) -> Result<&'a Path, ConfigError> {
        explicit
            .or(self.network.as_deref())
            .ok_or(ConfigError::MissingNetwork)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("invalid value for {key}: \"{value}\"")]
    InvalidValue { key: String, value: String },
    #[error("no network document given; pass --network, --demo, or set SHIPNET_NETWORK")]
    MissingNetwork,
}
