//! TOML configuration for the `rxl` binary.
//!
//! Loads from (in order):
//! 1. The path given with `--config`
//! 2. `rxl.toml` in the working directory
//! 3. Built-in defaults
//!
//! Environment variables (`RXL_LOG_LEVEL`, `RXL_SEED_GENESIS`) override file
//! values, and command-line flags override both.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use rxl_ledger::LedgerConfig;
use serde::{Deserialize, Serialize};
use tracing::Level;

pub const DEFAULT_CONFIG_FILE: &str = "rxl.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RxlConfig {
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// The configured level, rejecting anything `tracing` does not recognise.
    pub fn max_level(&self) -> anyhow::Result<Level> {
        self.level.parse().map_err(|_| {
            anyhow!(
                "invalid log level {:?} (expected trace, debug, info, warn or error)",
                self.level
            )
        })
    }
}

impl RxlConfig {
    /// Returns defaults if `path` does not exist and an error if it exists
    /// but cannot be parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parse config file {}", path.display()))
    }

    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("RXL_LOG_LEVEL").ok(),
            std::env::var("RXL_SEED_GENESIS").ok(),
        );
    }

    fn apply_overrides(&mut self, log_level: Option<String>, seed_genesis: Option<String>) {
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if let Some(flag) = seed_genesis.as_deref().and_then(parse_flag) {
            self.ledger.seed_genesis = flag;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Install the global fmt subscriber. Logs go to stderr so that stdout only
/// carries responses. An unrecognised level is an error even with
/// `--verbose`.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> anyhow::Result<()> {
    let configured = config.max_level()?;
    let level = if verbose { Level::DEBUG } else { configured };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let cfg = RxlConfig::default();
        assert!(cfg.ledger.seed_genesis);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn load_missing_file_returns_default() {
        let cfg = RxlConfig::load_from(Path::new("nonexistent_rxl_config.toml")).unwrap();
        assert_eq!(cfg, RxlConfig::default());
    }

    #[test]
    fn parse_partial_toml() {
        let cfg: RxlConfig = toml::from_str("[ledger]\nseed_genesis = false\n").unwrap();
        assert!(!cfg.ledger.seed_genesis);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();
        let cfg = RxlConfig::load_from(file.path()).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.ledger.seed_genesis);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ledger]\nseed_genesis = \"maybe\"").unwrap();
        assert!(RxlConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn overrides_apply() {
        let mut cfg = RxlConfig::default();
        cfg.apply_overrides(Some("warn".into()), Some("0".into()));
        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.ledger.seed_genesis);
    }

    #[test]
    fn log_level_is_validated() {
        let mut cfg = RxlConfig::default();
        assert_eq!(cfg.logging.max_level().unwrap(), Level::INFO);

        cfg.apply_overrides(Some("debug".into()), None);
        assert_eq!(cfg.logging.max_level().unwrap(), Level::DEBUG);

        cfg.apply_overrides(Some("loud".into()), None);
        let err = cfg.logging.max_level().unwrap_err();
        assert!(err.to_string().contains("\"loud\""));
    }

    #[test]
    fn unrecognized_flag_is_ignored() {
        let mut cfg = RxlConfig::default();
        cfg.apply_overrides(None, Some("sometimes".into()));
        assert!(cfg.ledger.seed_genesis);
    }
}
