//! Scroll-driven navigation: active section highlighting, sticky navbar,
//! mobile menu, anchor jumps and the back-to-top button.

pub mod messages;
pub mod state;
pub mod tracker;
pub mod update;

pub use messages::NavigationMessage;
pub use state::NavigationState;
pub use tracker::SectionTracker;
pub use update::update_navigation;
