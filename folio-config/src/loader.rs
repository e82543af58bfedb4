use thiserror::Error;

use crate::runtime::RuntimeConfig;
use crate::settings::Settings;
use crate::validation::{ConfigGuardRailError, ConfigWarnings, apply_guard_rails};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to parse page configuration")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}

/// Result of a successful load: the overrides, their resolved form, and any
/// non-fatal findings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: RuntimeConfig,
    pub settings: Settings,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load from an optional embedded JSON document. A missing or blank
    /// document yields the compiled defaults.
    pub fn load(&self, raw: Option<&str>) -> Result<ConfigLoad, ConfigLoadError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => self.load_json(raw),
            _ => self.load_config(RuntimeConfig::default()),
        }
    }

    pub fn load_json(&self, raw: &str) -> Result<ConfigLoad, ConfigLoadError> {
        let config: RuntimeConfig = serde_json::from_str(raw)
            .map_err(|source| ConfigLoadError::Json { source })?;
        self.load_config(config)
    }

    pub fn load_config(
        &self,
        config: RuntimeConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let warnings = apply_guard_rails(&config)?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => log::warn!("config: {} ({hint})", warning.message),
                None => log::warn!("config: {}", warning.message),
            }
        }
        let settings = Settings::from(&config);
        Ok(ConfigLoad {
            config,
            settings,
            warnings,
        })
    }
}
