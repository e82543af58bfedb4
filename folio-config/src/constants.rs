//! Constants module for centralized configuration values
//!
//! Every value here can be overridden at runtime through
//! [`RuntimeConfig`](crate::RuntimeConfig); tuning the defaults should happen
//! here so all consumers update consistently.

/// Scroll-driven navigation behaviour.
pub mod navigation {
    /// How far ahead of a section's top the highlight switches to it (px).
    pub const SECTION_TRIGGER_OFFSET: f64 = 100.0;
    /// Gap left above a section when jumping to it from a nav link (px).
    /// Matches the fixed navbar height.
    pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
    /// Scroll offset past which the navbar switches to its compact style (px).
    pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;
    /// Section the hero scroll indicator jumps to.
    pub const SCROLL_INDICATOR_TARGET: &str = "about";
}

/// Testimonial carousel.
pub mod carousel {
    /// Autoplay advance period (ms).
    pub const AUTOPLAY_PERIOD_MS: u64 = 5000;
    pub const AUTOPLAY_ENABLED: bool = true;
}

pub mod back_to_top {
    /// Scroll offset past which the back-to-top button is shown (px).
    pub const VISIBLE_THRESHOLD: f64 = 500.0;
}

/// Visibility-triggered effects.
pub mod reveal {
    /// Fraction of an element that must be visible before it fades in.
    pub const FADE_THRESHOLD: f64 = 0.1;
    /// Root margin for the fade-in observer; trims 50px off the viewport
    /// bottom so elements fade in once they are properly on screen.
    pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    /// Fraction of the skills section that must be visible to start the bars.
    pub const SKILLS_THRESHOLD: f64 = 0.5;
    pub const SKILL_BAR_DELAY_MS: u64 = 200;
    pub const LOADER_HIDE_DELAY_MS: u64 = 1000;
}

/// Project grid filtering.
pub mod filter {
    /// Delay between putting a card back into layout and fading it in (ms).
    pub const CARD_SHOW_DELAY_MS: u64 = 10;
    /// Fade-out time before a filtered card leaves layout (ms).
    pub const CARD_HIDE_DELAY_MS: u64 = 300;
}

pub mod contact {
    pub const SUCCESS_MESSAGE: &str =
        "Thank you for your message! I will get back to you soon.";
}

pub mod logging {
    pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;
}
