use folio_config::Settings;
use folio_model::SectionId;

use crate::command::Command;

use super::messages::NavigationMessage;
use super::state::NavigationState;

/// Handle navigation messages.
pub fn update_navigation(
    state: &mut NavigationState,
    settings: &Settings,
    message: NavigationMessage,
) -> Vec<Command> {
    match message {
        NavigationMessage::Scrolled(scroll_y) => {
            on_scrolled(state, settings, scroll_y);
            Vec::new()
        }
        NavigationMessage::LinkClicked(id) => {
            let Some(section) = state.tracker.section(&id) else {
                return Vec::new();
            };
            let top = section.start - settings.anchor_scroll_offset;
            log::debug!("nav: jumping to #{id} at {top}");
            state.menu_open = false;
            state.active_link = Some(id);
            vec![Command::ScrollTo { top }]
        }
        NavigationMessage::ScrollIndicatorClicked => {
            let Ok(target) =
                SectionId::new(settings.scroll_indicator_target.as_str())
            else {
                return Vec::new();
            };
            state
                .tracker
                .section(&target)
                .map(|section| {
                    vec![Command::ScrollTo { top: section.start }]
                })
                .unwrap_or_default()
        }
        NavigationMessage::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Vec::new()
        }
        NavigationMessage::BackToTopClicked => vec![Command::ScrollTo { top: 0.0 }],
        NavigationMessage::LayoutMeasured(sections) => {
            log::debug!("nav: {} sections measured", sections.len());
            state.tracker.set_sections(sections);
            let scroll_y = state.scroll_y;
            on_scrolled(state, settings, scroll_y);
            Vec::new()
        }
    }
}

fn on_scrolled(state: &mut NavigationState, settings: &Settings, scroll_y: f64) {
    state.scroll_y = scroll_y;
    state.navbar_scrolled = scroll_y > settings.navbar_scrolled_threshold;
    state.back_to_top_visible = scroll_y > settings.back_to_top_threshold;
    // Outside every section no link stays highlighted.
    state.active_link = state.tracker.classify(scroll_y).cloned();
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::Section;

    fn state() -> NavigationState {
        let sections = vec![
            Section::new(SectionId::new("about").unwrap(), 800.0, 600.0)
                .unwrap(),
            Section::new(SectionId::new("contact").unwrap(), 1400.0, 500.0)
                .unwrap(),
        ];
        NavigationState::new(sections, 100.0)
    }

    #[test]
    fn scrolling_updates_every_scroll_derived_flag() {
        let mut s = state();
        let settings = Settings::default();
        update_navigation(&mut s, &settings, NavigationMessage::Scrolled(750.0));
        assert!(s.navbar_scrolled);
        assert!(s.back_to_top_visible);
        assert!(s.is_link_active("#about"));
        assert!(!s.is_link_active("#contact"));

        update_navigation(&mut s, &settings, NavigationMessage::Scrolled(50.0));
        assert!(!s.navbar_scrolled);
        assert!(!s.back_to_top_visible);
        assert_eq!(s.active_link, None);
    }

    #[test]
    fn link_click_scrolls_below_the_navbar_and_closes_menu() {
        let mut s = state();
        s.menu_open = true;
        let commands = update_navigation(
            &mut s,
            &Settings::default(),
            NavigationMessage::LinkClicked(SectionId::new("contact").unwrap()),
        );
        assert_eq!(
            commands,
            vec![Command::ScrollTo { top: 1320.0 }]
        );
        assert!(!s.menu_open);
        assert!(s.is_link_active("#contact"));
    }

    #[test]
    fn unknown_anchor_is_ignored() {
        let mut s = state();
        s.menu_open = true;
        let commands = update_navigation(
            &mut s,
            &Settings::default(),
            NavigationMessage::LinkClicked(SectionId::new("blog").unwrap()),
        );
        assert!(commands.is_empty());
        assert!(s.menu_open);
    }

    #[test]
    fn scroll_indicator_targets_about() {
        let mut s = state();
        let commands = update_navigation(
            &mut s,
            &Settings::default(),
            NavigationMessage::ScrollIndicatorClicked,
        );
        assert_eq!(
            commands,
            vec![Command::ScrollTo { top: 800.0 }]
        );
    }

    #[test]
    fn menu_toggles() {
        let mut s = state();
        let settings = Settings::default();
        update_navigation(&mut s, &settings, NavigationMessage::ToggleMenu);
        assert!(s.menu_open);
        update_navigation(&mut s, &settings, NavigationMessage::ToggleMenu);
        assert!(!s.menu_open);
    }

    #[test]
    fn relayout_reclassifies_current_offset() {
        let mut s = state();
        let settings = Settings::default();
        update_navigation(&mut s, &settings, NavigationMessage::Scrolled(100.0));
        assert_eq!(s.active_link, None);
        let moved = vec![
            Section::new(SectionId::new("about").unwrap(), 0.0, 600.0).unwrap(),
        ];
        update_navigation(
            &mut s,
            &settings,
            NavigationMessage::LayoutMeasured(moved),
        );
        assert!(s.is_link_active("#about"));
    }
}
