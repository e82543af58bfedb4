//! Imperative side effects requested by [`Page::update`](crate::Page::update).
//!
//! Presentation state (classes, inline styles) is not expressed as commands;
//! hosts read it back from the page after each update. Commands cover the
//! things that cannot be derived from state: one-off scrolls, observer
//! bookkeeping and user notifications.

use crate::domains::reveal::RevealKey;

/// Element the host should stop observing for visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveTarget {
    Reveal(RevealKey),
    SkillsSection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Smooth-scroll the window to `top`.
    ScrollTo { top: f64 },
    Unobserve(ObserveTarget),
    /// Tell the user something, synchronously.
    Notify(String),
    /// Clear the contact form's inputs.
    ResetForm,
}
