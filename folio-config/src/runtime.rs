//! Runtime configuration for user-adjustable constants
//!
//! [`RuntimeConfig`] mirrors the compiled constants with `Option<T>` fields.
//! Accessor methods fall back to the constants when a field is `None`, so an
//! empty document (`{}`) reproduces the compiled behaviour exactly.

use serde::Deserialize;

use crate::constants::{
    back_to_top, carousel, contact, filter, logging, navigation, reveal,
};

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    // ========== NAVIGATION ==========
    pub section_trigger_offset: Option<f64>,
    pub anchor_scroll_offset: Option<f64>,
    pub navbar_scrolled_threshold: Option<f64>,
    pub scroll_indicator_target: Option<String>,
    pub back_to_top_threshold: Option<f64>,

    // ========== CAROUSEL ==========
    pub autoplay_period_ms: Option<u64>,
    pub autoplay_enabled: Option<bool>,

    // ========== REVEAL ==========
    pub fade_threshold: Option<f64>,
    pub fade_root_margin: Option<String>,
    pub skills_threshold: Option<f64>,
    pub skill_bar_delay_ms: Option<u64>,
    pub loader_hide_delay_ms: Option<u64>,

    // ========== FILTER ==========
    pub card_show_delay_ms: Option<u64>,
    pub card_hide_delay_ms: Option<u64>,

    // ========== CONTACT ==========
    pub success_message: Option<String>,

    // ========== LOGGING ==========
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn section_trigger_offset(&self) -> f64 {
        self.section_trigger_offset
            .unwrap_or(navigation::SECTION_TRIGGER_OFFSET)
    }

    pub fn anchor_scroll_offset(&self) -> f64 {
        self.anchor_scroll_offset
            .unwrap_or(navigation::ANCHOR_SCROLL_OFFSET)
    }

    pub fn navbar_scrolled_threshold(&self) -> f64 {
        self.navbar_scrolled_threshold
            .unwrap_or(navigation::NAVBAR_SCROLLED_THRESHOLD)
    }

    pub fn scroll_indicator_target(&self) -> &str {
        self.scroll_indicator_target
            .as_deref()
            .unwrap_or(navigation::SCROLL_INDICATOR_TARGET)
    }

    pub fn back_to_top_threshold(&self) -> f64 {
        self.back_to_top_threshold
            .unwrap_or(back_to_top::VISIBLE_THRESHOLD)
    }

    pub fn autoplay_period_ms(&self) -> u64 {
        self.autoplay_period_ms
            .unwrap_or(carousel::AUTOPLAY_PERIOD_MS)
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled.unwrap_or(carousel::AUTOPLAY_ENABLED)
    }

    pub fn fade_threshold(&self) -> f64 {
        self.fade_threshold.unwrap_or(reveal::FADE_THRESHOLD)
    }

    pub fn fade_root_margin(&self) -> &str {
        self.fade_root_margin
            .as_deref()
            .unwrap_or(reveal::FADE_ROOT_MARGIN)
    }

    pub fn skills_threshold(&self) -> f64 {
        self.skills_threshold.unwrap_or(reveal::SKILLS_THRESHOLD)
    }

    pub fn skill_bar_delay_ms(&self) -> u64 {
        self.skill_bar_delay_ms
            .unwrap_or(reveal::SKILL_BAR_DELAY_MS)
    }

    pub fn loader_hide_delay_ms(&self) -> u64 {
        self.loader_hide_delay_ms
            .unwrap_or(reveal::LOADER_HIDE_DELAY_MS)
    }

    pub fn card_show_delay_ms(&self) -> u64 {
        self.card_show_delay_ms
            .unwrap_or(filter::CARD_SHOW_DELAY_MS)
    }

    pub fn card_hide_delay_ms(&self) -> u64 {
        self.card_hide_delay_ms
            .unwrap_or(filter::CARD_HIDE_DELAY_MS)
    }

    pub fn success_message(&self) -> &str {
        self.success_message
            .as_deref()
            .unwrap_or(contact::SUCCESS_MESSAGE)
    }

    /// Resolved log level. Unparseable values are rejected by the guard rails
    /// before this is reached; the fallback only covers `None`.
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(logging::DEFAULT_LEVEL)
    }
}
