use folio_model::{Section, SectionId};

use super::tracker::SectionTracker;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub tracker: SectionTracker,
    pub scroll_y: f64,
    /// Compact navbar style once the page is scrolled.
    pub navbar_scrolled: bool,
    /// Mobile menu (and its toggle button) expanded.
    pub menu_open: bool,
    /// Section whose nav link is highlighted.
    pub active_link: Option<SectionId>,
    pub back_to_top_visible: bool,
}

impl NavigationState {
    pub fn new(sections: Vec<Section>, pre_trigger: f64) -> Self {
        Self {
            tracker: SectionTracker::new(sections, pre_trigger),
            scroll_y: 0.0,
            navbar_scrolled: false,
            menu_open: false,
            active_link: None,
            back_to_top_visible: false,
        }
    }

    /// Whether the nav link with the given `href` should be highlighted.
    pub fn is_link_active(&self, href: &str) -> bool {
        self.active_link
            .as_ref()
            .is_some_and(|id| href.strip_prefix('#') == Some(id.as_str()))
    }
}
