use crate::domain::model::IntegrationConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Application settings file (TOML): where the catalog comes from and which
/// integrations are enabled. An integration section may be present but
/// disabled; its config is only handed to the composition root when enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommendation: Option<IntegrationSettings>,
    #[serde(default)]
    pub reservation: Option<IntegrationSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationSettings {
    #[serde(default)]
    pub enabled: bool,
    pub provider: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl IntegrationSettings {
    pub fn to_config(&self) -> IntegrationConfig {
        IntegrationConfig {
            provider: self.provider.clone(),
            endpoint: self.endpoint.clone(),
            params: self.params.clone(),
        }
    }
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Config for the recommendation provider, only when the section exists
    /// and is enabled.
    pub fn recommendation_config(&self) -> Option<IntegrationConfig> {
        self.recommendation
            .as_ref()
            .filter(|s| s.enabled)
            .map(IntegrationSettings::to_config)
    }

    pub fn reservation_config(&self) -> Option<IntegrationConfig> {
        self.reservation
            .as_ref()
            .filter(|s| s.enabled)
            .map(IntegrationSettings::to_config)
    }

    pub fn log_summary(&self) {
        tracing::info!("Catalog source: {}", self.catalog.source);
        for (name, section) in [
            ("recommendation", &self.recommendation),
            ("reservation", &self.reservation),
        ] {
            match section {
                Some(s) if s.enabled => {
                    tracing::info!("Integration {}: enabled via {}", name, s.provider)
                }
                Some(_) => tracing::info!("Integration {}: configured but disabled", name),
                None => tracing::info!("Integration {}: not configured", name),
            }
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.source", &self.catalog.source)?;
        for (name, section) in [
            ("recommendation", &self.recommendation),
            ("reservation", &self.reservation),
        ] {
            if let Some(s) = section {
                validate_non_empty_string(&format!("{}.provider", name), &s.provider)?;
                if let Some(endpoint) = &s.endpoint {
                    validate_url(&format!("{}.endpoint", name), endpoint)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_settings_file() {
        let settings: Settings = toml::from_str(
            r#"
            [catalog]
            source = "./catalog.json"
            "#,
        )
        .unwrap();
        assert!(settings.validate().is_ok());
        assert!(settings.recommendation_config().is_none());
        assert!(settings.reservation_config().is_none());
    }

    #[test]
    fn disabled_integration_yields_no_config() {
        let settings: Settings = toml::from_str(
            r#"
            [catalog]
            source = "./catalog.json"

            [reservation]
            enabled = false
            provider = "opentable"
            endpoint = "https://api.example.com/reservations"
            "#,
        )
        .unwrap();
        assert!(settings.validate().is_ok());
        assert!(settings.reservation_config().is_none());
    }

    #[test]
    fn enabled_integration_maps_to_integration_config() {
        let settings: Settings = toml::from_str(
            r#"
            [catalog]
            source = "./catalog.json"

            [recommendation]
            enabled = true
            provider = "menu-ai"
            endpoint = "https://api.example.com/recommend"

            [recommendation.params]
            model = "house-blend"
            "#,
        )
        .unwrap();
        let config = settings.recommendation_config().unwrap();
        assert_eq!(config.provider, "menu-ai");
        assert!(config.params.contains_key("model"));
    }

    #[test]
    fn bad_endpoint_fails_validation() {
        let settings: Settings = toml::from_str(
            r#"
            [catalog]
            source = "./catalog.json"

            [reservation]
            enabled = true
            provider = "opentable"
            endpoint = "not a url"
            "#,
        )
        .unwrap();
        assert!(settings.validate().is_err());
    }
}
