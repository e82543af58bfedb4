use thiserror::Error;

use crate::runtime::RuntimeConfig;

/// Autoplay faster than this is legal but almost certainly a typo.
const MIN_COMFORTABLE_PERIOD_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("autoplay period must be greater than zero")]
    ZeroAutoplayPeriod,
    #[error("{field} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }
}

pub fn apply_guard_rails(
    config: &RuntimeConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if let Some(period) = config.autoplay_period_ms {
        if period == 0 {
            return Err(ConfigGuardRailError::ZeroAutoplayPeriod);
        }
        if period < MIN_COMFORTABLE_PERIOD_MS {
            warnings.push_with_hint(
                format!("autoplay period of {period}ms is very short"),
                "periods are in milliseconds; 5000 is the default",
            );
        }
    }

    enforce_threshold("fade_threshold", config.fade_threshold)?;
    enforce_threshold("skills_threshold", config.skills_threshold)?;

    for (field, value) in [
        ("section_trigger_offset", config.section_trigger_offset),
        ("anchor_scroll_offset", config.anchor_scroll_offset),
        ("navbar_scrolled_threshold", config.navbar_scrolled_threshold),
        ("back_to_top_threshold", config.back_to_top_threshold),
    ] {
        let Some(value) = value else { continue };
        if !value.is_finite() {
            return Err(ConfigGuardRailError::NonFinite { field });
        }
        if value < 0.0 {
            warnings.push(format!("{field} is negative ({value})"));
        }
    }

    if let Some(level) = config.log_level.as_deref()
        && level.parse::<log::LevelFilter>().is_err()
    {
        return Err(ConfigGuardRailError::InvalidLogLevel(level.to_string()));
    }

    if config.scroll_indicator_target.as_deref().is_some_and(str::is_empty) {
        warnings.push_with_hint(
            "scroll_indicator_target is empty",
            "the scroll indicator will do nothing",
        );
    }

    Ok(warnings)
}

fn enforce_threshold(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ConfigGuardRailError> {
    match value {
        Some(value) if !(0.0..=1.0).contains(&value) => {
            Err(ConfigGuardRailError::ThresholdOutOfRange { field, value })
        }
        _ => Ok(()),
    }
}
