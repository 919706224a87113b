use std::net::SocketAddr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wfc_observe::{LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone};

const ENV_BIND: &str = "WFC_BIND";
const ENV_LOG_LEVEL: &str = "WFC_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "WFC_LOG_FORMAT";
const ENV_LOG_TZ: &str = "WFC_LOG_TZ";
const ENV_LOG_COLOR: &str = "WFC_LOG_COLOR";

/// Runtime settings of the configuration form server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    pub logger: LoggerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            logger: LoggerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read overrides from `WFC_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(bind) = lookup(ENV_BIND) {
            cfg.bind = bind
                .parse::<SocketAddr>()
                .with_context(|| format!("{ENV_BIND}: invalid socket address '{bind}'"))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            cfg.logger.level = level.parse::<LoggerLevel>().context(ENV_LOG_LEVEL)?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            cfg.logger.format = format.parse::<LoggerFormat>().context(ENV_LOG_FORMAT)?;
        }
        if let Some(tz) = lookup(ENV_LOG_TZ) {
            cfg.logger.tz = tz.parse::<LoggerTimeZone>().context(ENV_LOG_TZ)?;
        }
        if let Some(color) = lookup(ENV_LOG_COLOR) {
            cfg.logger.use_color = parse_switch(&color)
                .with_context(|| format!("{ENV_LOG_COLOR}: expected a boolean, got '{color}'"))?;
        }
        Ok(cfg)
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind.port(), 5000);
    }

    #[test]
    fn env_overrides_apply() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("WFC_BIND", "0.0.0.0:8080"),
            ("WFC_LOG_LEVEL", "wfc_api=debug,info"),
            ("WFC_LOG_FORMAT", "json"),
            ("WFC_LOG_TZ", "local"),
            ("WFC_LOG_COLOR", "off"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.logger.level.as_str(), "wfc_api=debug,info");
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
        assert_eq!(cfg.logger.tz, LoggerTimeZone::Local);
        assert!(!cfg.logger.use_color);
    }

    #[test]
    fn invalid_values_are_reported() {
        for (key, value) in [
            ("WFC_BIND", "localhost"),
            ("WFC_LOG_LEVEL", "x=loud"),
            ("WFC_LOG_FORMAT", "xml"),
            ("WFC_LOG_TZ", "mars"),
            ("WFC_LOG_COLOR", "maybe"),
        ] {
            let err = ServerConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(err.to_string().contains(key), "{key}: {err}");
        }
    }

    #[test]
    fn serde_partial_config() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"bind": "127.0.0.1:9000", "logger": {"format": "json"}}"#)
                .unwrap();
        assert_eq!(cfg.bind.port(), 9000);
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
    }
}
