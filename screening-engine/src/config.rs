//! Configuration for the screening engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Best-score cutoff at or above which a clean transaction escalates
pub const DEFAULT_ESCALATION_THRESHOLD: f64 = 0.80;

/// Screening configuration
///
/// Tables are fixed at engine construction; the engine never mutates
/// them after canonicalizing the country lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Escalation threshold applied to the best composite score
    pub escalation_threshold: f64,

    /// Sanctioned jurisdictions (full names, any spelling the alias
    /// table can resolve)
    pub sanctioned_countries: Vec<String>,

    /// Known misspellings mapped to their canonical country name
    pub country_aliases: HashMap<String, String>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            escalation_threshold: DEFAULT_ESCALATION_THRESHOLD,
            sanctioned_countries: [
                "pakistan",
                "iran",
                "syria",
                "ukraine",
                "cuba",
                "south korea",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            country_aliases: [("ukraise", "ukraine"), ("u k r a i s e", "ukraine")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl ScreeningConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScreeningConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = ScreeningConfig::default();

        if let Ok(raw) = std::env::var("SCREENING_THRESHOLD") {
            config.escalation_threshold = raw.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid SCREENING_THRESHOLD: {}", e))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert_eq!(config.escalation_threshold, 0.80);
        assert_eq!(config.sanctioned_countries.len(), 6);
        assert_eq!(
            config.country_aliases.get("ukraise").map(String::as_str),
            Some("ukraine")
        );
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = ScreeningConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: ScreeningConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.escalation_threshold, config.escalation_threshold);
        assert_eq!(parsed.sanctioned_countries, config.sanctioned_countries);
    }
}
