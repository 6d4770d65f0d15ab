use crate::search::types::ZonePolicy;
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Settings for the Gemini intent extraction client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` disables extraction entirely
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub zone_policy: ZonePolicy,
    /// Form-processing endpoint for contact leads
    pub lead_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = GeminiConfig::default();

        let timeout = match get("SEARCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .with_context(|| format!("Invalid SEARCH_TIMEOUT_SECS: {}", raw))?;
                if secs == 0 {
                    anyhow::bail!("Invalid SEARCH_TIMEOUT_SECS: must be at least 1");
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let zone_policy = match get("ZONE_POLICY") {
            Some(raw) => raw.parse::<ZonePolicy>().context("Invalid ZONE_POLICY")?,
            None => ZonePolicy::default(),
        };

        Ok(Self {
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
                model: get("GEMINI_MODEL").unwrap_or(defaults.model),
                base_url: get("GEMINI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
                timeout,
            },
            zone_policy,
            lead_endpoint: get("LEAD_ENDPOINT"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini.timeout, Duration::from_secs(12));
        assert_eq!(config.zone_policy, ZonePolicy::Keep);
        assert!(config.lead_endpoint.is_none());
    }

    #[test]
    fn api_key_falls_back_to_generic_variable() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "generic")])).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("generic"));

        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "generic"),
            ("GEMINI_API_KEY", "specific"),
        ]))
        .unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("specific"));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "   "),
            ("LEAD_ENDPOINT", ""),
        ]))
        .unwrap();
        assert!(config.gemini.api_key.is_none());
        assert!(config.lead_endpoint.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_BASE_URL", "http://localhost:9000/models/"),
            ("SEARCH_TIMEOUT_SECS", "5"),
            ("ZONE_POLICY", "Overwrite"),
            ("LEAD_ENDPOINT", "https://forms.example.com/f/abc"),
        ]))
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.base_url, "http://localhost:9000/models");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.zone_policy, ZonePolicy::Overwrite);
        assert_eq!(
            config.lead_endpoint.as_deref(),
            Some("https://forms.example.com/f/abc")
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("SEARCH_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SEARCH_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("ZONE_POLICY", "merge")])).is_err());
    }
}
