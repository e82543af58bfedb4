mod common;

use std::time::Duration;

use folio_config::Settings;
use folio_core::domains::carousel::CarouselMessage;
use folio_core::domains::projects::{CardKey, CardPhase, ProjectsMessage};
use folio_core::domains::reveal::{RevealKey, RevealMessage, SkillsPhase};
use folio_core::testing::ManualScheduler;
use folio_core::{Command, Key, Message, ObserveTarget, Page, PageLayout};
use folio_model::{FilterTag, ProjectId};

fn activate(id: &str) -> Message {
    Message::Projects(ProjectsMessage::CardActivated(ProjectId::from(id)))
}

fn select_filter(button: usize, filter: FilterTag) -> Message {
    Message::Projects(ProjectsMessage::FilterSelected { button, filter })
}

#[test]
fn unknown_project_keeps_modal_closed() {
    let mut page = common::page();
    assert!(page.update(activate("99")).is_empty());
    assert!(!page.projects.modal.is_open());
}

#[test]
fn escape_closes_an_open_modal() {
    let mut page = common::page();
    page.update(activate("2"));
    assert!(page.projects.modal.scroll_locked());
    assert_eq!(page.projects.modal.current().map(|r| r.id), Some("2"));

    page.update(Message::KeyPressed(Key::Other));
    assert!(page.projects.modal.is_open());
    page.update(Message::KeyPressed(Key::Escape));
    assert!(!page.projects.modal.is_open());
    assert!(!page.projects.modal.scroll_locked());

    page.update(Message::KeyPressed(Key::Escape));
    assert!(!page.projects.modal.is_open());
}

#[test]
fn backdrop_click_closes_modal() {
    let mut page = common::page();
    page.update(activate("5"));
    page.update(Message::Projects(ProjectsMessage::BackdropClicked));
    assert!(!page.projects.modal.is_open());
}

#[test]
fn filter_transitions_settle_on_their_timers() {
    let mut page = common::page();
    page.update(select_filter(4, FilterTag::parse("clinical")));
    let phase = |page: &Page<ManualScheduler>, i| {
        page.projects.filter.card(CardKey(i)).unwrap().phase()
    };
    assert_eq!(phase(&page, 0), CardPhase::Leaving);
    assert_eq!(phase(&page, 3), CardPhase::Shown);

    page.advance(Duration::from_millis(300));
    assert_eq!(phase(&page, 0), CardPhase::Hidden);

    page.update(select_filter(0, FilterTag::All));
    assert_eq!(phase(&page, 0), CardPhase::Entering);
    assert_eq!(phase(&page, 0).style().display, "block");
    page.advance(Duration::from_millis(10));
    assert_eq!(phase(&page, 0), CardPhase::Shown);
    assert_eq!(page.projects.filter.visible().count(), 4);
}

#[test]
fn pressed_filter_button_is_remembered() {
    let mut page = common::page();
    assert_eq!(page.projects.selected_button, None);
    page.update(select_filter(2, FilterTag::parse("compliance")));
    assert_eq!(page.projects.selected_button, Some(2));
    page.update(select_filter(0, FilterTag::All));
    assert_eq!(page.projects.selected_button, Some(0));
    assert_eq!(page.projects.filter.active(), &FilterTag::All);
}

#[test]
fn quick_refilter_does_not_hide_a_reshown_card() {
    let mut page = common::page();
    page.update(select_filter(2, FilterTag::parse("compliance")));
    page.advance(Duration::from_millis(100));
    page.update(select_filter(0, FilterTag::All));
    page.advance(Duration::from_secs(1));
    assert!(
        page.projects
            .filter
            .cards()
            .iter()
            .all(|card| card.phase() == CardPhase::Shown)
    );
}

#[test]
fn skill_bars_animate_once_after_delay() {
    let mut page = common::page();
    let commands = page.update(Message::Reveal(RevealMessage::SkillsVisible));
    assert_eq!(
        commands,
        vec![Command::Unobserve(ObserveTarget::SkillsSection)]
    );
    assert_eq!(page.reveal.skills(), SkillsPhase::Scheduled);
    page.advance(Settings::default().skill_bar_delay);
    assert_eq!(page.reveal.skills(), SkillsPhase::Animated);
    assert!(
        page.update(Message::Reveal(RevealMessage::SkillsVisible))
            .is_empty()
    );
}

#[test]
fn fade_in_targets_are_unobserved_once_revealed() {
    let mut page = common::page();
    let commands =
        page.update(Message::Reveal(RevealMessage::Intersected(RevealKey(2))));
    assert_eq!(
        commands,
        vec![Command::Unobserve(ObserveTarget::Reveal(RevealKey(2)))]
    );
    assert!(page.reveal.is_revealed(RevealKey(2)));
}

#[test]
fn loader_hides_after_start_delay() {
    let mut page = common::page();
    assert!(page.reveal.loader_visible());
    page.advance(Duration::from_millis(999));
    assert!(page.reveal.loader_visible());
    page.advance(Duration::from_millis(1));
    assert!(!page.reveal.loader_visible());
}

#[test]
fn page_without_slides_or_form_ignores_their_messages() {
    let layout = PageLayout {
        slide_count: 0,
        form_fields: None,
        ..common::layout()
    };
    let mut page =
        Page::new(Settings::default(), ManualScheduler::new(), layout)
            .expect("page");
    page.start();
    assert!(page.carousel.is_none());
    assert!(page.contact.is_none());
    assert!(
        page.update(Message::Carousel(CarouselMessage::Next))
            .is_empty()
    );
    page.advance(Duration::from_secs(10));
    assert_eq!(page.scheduler().active_timers(), 0);
}
