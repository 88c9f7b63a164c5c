//! Environment-driven configuration.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `LEDGER_SEED_DEMO` | `true` | create the demo accounts at startup |
//! | `LEDGER_MAX_INVALID_OPTIONS` | `5` | sign-in menu retries before giving up |
//! | `LEDGER_LOG_FORMAT` | `json` | `json` or `pretty` |
//!
//! `RUST_LOG` is honoured by the log filter; without it the binary only shows
//! warnings so log lines do not crowd the prompts.

use ledger_observability::{LogConfig, LogFormat};

use crate::session::SessionConfig;

pub const SEED_DEMO_VAR: &str = "LEDGER_SEED_DEMO";
pub const MAX_INVALID_OPTIONS_VAR: &str = "LEDGER_MAX_INVALID_OPTIONS";
pub const LOG_FORMAT_VAR: &str = "LEDGER_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub seed_demo_accounts: bool,
    pub session: SessionConfig,
    pub log: LogConfig,
    /// Problems found while reading the environment. Logged by the binary once
    /// logging is up.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed_demo_accounts: true,
            session: SessionConfig::default(),
            log: LogConfig {
                format: LogFormat::Json,
                default_directive: "warn".to_string(),
            },
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Invalid
    /// values fall back to the default and leave a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            match parse_bool(&raw) {
                Some(value) => config.seed_demo_accounts = value,
                None => config
                    .warnings
                    .push(format!("{SEED_DEMO_VAR}={raw:?} is not a boolean; using default")),
            }
        }

        if let Some(raw) = lookup(MAX_INVALID_OPTIONS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => config.session.max_invalid_options = value,
                _ => config.warnings.push(format!(
                    "{MAX_INVALID_OPTIONS_VAR}={raw:?} is not a positive integer; using default"
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log.format = format,
                None => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}={raw:?} is not json|pretty; using default")),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
