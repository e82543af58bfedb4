use std::time::Duration;

use crate::runtime::RuntimeConfig;

/// Fully resolved configuration handed to the page state machines.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub section_trigger_offset: f64,
    pub anchor_scroll_offset: f64,
    pub navbar_scrolled_threshold: f64,
    pub scroll_indicator_target: String,
    pub back_to_top_threshold: f64,
    pub autoplay_period: Duration,
    pub autoplay_enabled: bool,
    pub fade_threshold: f64,
    pub fade_root_margin: String,
    pub skills_threshold: f64,
    pub skill_bar_delay: Duration,
    pub loader_hide_delay: Duration,
    pub card_show_delay: Duration,
    pub card_hide_delay: Duration,
    pub success_message: String,
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&RuntimeConfig::default())
    }
}

impl From<&RuntimeConfig> for Settings {
    fn from(config: &RuntimeConfig) -> Self {
        Self {
            section_trigger_offset: config.section_trigger_offset(),
            anchor_scroll_offset: config.anchor_scroll_offset(),
            navbar_scrolled_threshold: config.navbar_scrolled_threshold(),
            scroll_indicator_target: config
                .scroll_indicator_target()
                .to_string(),
            back_to_top_threshold: config.back_to_top_threshold(),
            autoplay_period: Duration::from_millis(
                config.autoplay_period_ms(),
            ),
            autoplay_enabled: config.autoplay_enabled(),
            fade_threshold: config.fade_threshold(),
            fade_root_margin: config.fade_root_margin().to_string(),
            skills_threshold: config.skills_threshold(),
            skill_bar_delay: Duration::from_millis(
                config.skill_bar_delay_ms(),
            ),
            loader_hide_delay: Duration::from_millis(
                config.loader_hide_delay_ms(),
            ),
            card_show_delay: Duration::from_millis(
                config.card_show_delay_ms(),
            ),
            card_hide_delay: Duration::from_millis(
                config.card_hide_delay_ms(),
            ),
            success_message: config.success_message().to_string(),
            log_level: config.log_level(),
        }
    }
}
