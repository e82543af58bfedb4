//! Presentation snapshot of a [`Page`] and the DOM patches between two
//! snapshots.
//!
//! The browser view keeps the last snapshot it wrote and, after every
//! update, writes only what changed. Nothing in here touches the DOM.

use folio_core::domains::projects::CardPhase;
use folio_core::domains::reveal::{RevealKey, SkillsPhase};
use folio_core::{Page, Scheduler};
use folio_model::FilterTag;

use crate::selectors::class;

/// Element a patch applies to. Indices are document order within their
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Navbar,
    MenuToggle,
    Menu,
    NavLink(usize),
    BackToTop,
    Loader,
    Slide(usize),
    Dot(usize),
    FilterButton(usize),
    Card(usize),
    Modal,
    ModalBody,
    Body,
    SkillBars,
    Reveal(usize),
    FormGroup(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    Class {
        target: Target,
        class: &'static str,
        on: bool,
    },
    Style {
        target: Target,
        property: &'static str,
        value: &'static str,
    },
    Html {
        target: Target,
        html: String,
    },
}

/// Host-side facts needed to project page state onto elements.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    /// `href` of every nav link.
    pub link_hrefs: Vec<String>,
    /// Parsed `data-filter` of every filter button.
    pub filters: Vec<FilterTag>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageView {
    pub navbar_scrolled: bool,
    pub menu_open: bool,
    pub active_links: Vec<bool>,
    pub back_to_top_visible: bool,
    pub loader_hidden: bool,
    pub slide_count: usize,
    pub slide: Option<usize>,
    pub filter_buttons: Vec<bool>,
    pub cards: Vec<CardPhase>,
    /// Body markup while the modal is open.
    pub modal: Option<String>,
    pub skills_animated: bool,
    pub revealed: Vec<bool>,
    pub field_errors: Vec<bool>,
}

impl PageView {
    pub fn capture<S: Scheduler>(page: &Page<S>, bindings: &Bindings) -> Self {
        let navigation = &page.navigation;
        let filter = &page.projects.filter;
        let reveal = &page.reveal;
        let selected_filter = page.projects.selected_button.or_else(|| {
            bindings.filters.iter().position(|tag| tag == filter.active())
        });

        Self {
            navbar_scrolled: navigation.navbar_scrolled,
            menu_open: navigation.menu_open,
            active_links: bindings
                .link_hrefs
                .iter()
                .map(|href| navigation.is_link_active(href))
                .collect(),
            back_to_top_visible: navigation.back_to_top_visible,
            loader_hidden: !reveal.loader_visible(),
            slide_count: page.carousel.as_ref().map_or(0, |c| c.len()),
            slide: page.carousel.as_ref().map(|c| c.index()),
            filter_buttons: (0..bindings.filters.len())
                .map(|index| Some(index) == selected_filter)
                .collect(),
            cards: filter.cards().iter().map(|card| card.phase()).collect(),
            modal: page.projects.modal.body(),
            skills_animated: reveal.skills() == SkillsPhase::Animated,
            revealed: (0..reveal.len())
                .map(|index| reveal.is_revealed(RevealKey(index)))
                .collect(),
            field_errors: page
                .contact
                .as_ref()
                .map(|form| {
                    form.fields().iter().map(|f| f.error.is_some()).collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Patches that turn `prev` into `next`. With no previous snapshot every
/// class is written, but cards still in their initial phase keep the
/// stylesheet's styles and a closed modal leaves the body alone.
pub fn diff(prev: Option<&PageView>, next: &PageView) -> Vec<Patch> {
    let mut out = Vec::new();

    flag(
        &mut out,
        prev.map(|p| p.navbar_scrolled),
        next.navbar_scrolled,
        Target::Navbar,
        class::SCROLLED,
    );
    for target in [Target::MenuToggle, Target::Menu] {
        flag(
            &mut out,
            prev.map(|p| p.menu_open),
            next.menu_open,
            target,
            class::ACTIVE,
        );
    }
    flags(
        &mut out,
        prev.map(|p| p.active_links.as_slice()),
        &next.active_links,
        Target::NavLink,
        class::ACTIVE,
    );
    flag(
        &mut out,
        prev.map(|p| p.back_to_top_visible),
        next.back_to_top_visible,
        Target::BackToTop,
        class::VISIBLE,
    );
    flag(
        &mut out,
        prev.map(|p| p.loader_hidden),
        next.loader_hidden,
        Target::Loader,
        class::HIDDEN,
    );

    for index in 0..next.slide_count {
        let on = next.slide == Some(index);
        let was = prev.map(|p| p.slide == Some(index));
        flag(&mut out, was, on, Target::Slide(index), class::ACTIVE);
        flag(&mut out, was, on, Target::Dot(index), class::ACTIVE);
    }

    flags(
        &mut out,
        prev.map(|p| p.filter_buttons.as_slice()),
        &next.filter_buttons,
        Target::FilterButton,
        class::ACTIVE,
    );

    for (index, phase) in next.cards.iter().enumerate() {
        let was = match prev {
            Some(prev) => prev.cards.get(index).copied(),
            None => Some(CardPhase::default()),
        };
        if was != Some(*phase) {
            card_style(&mut out, Target::Card(index), *phase);
        }
    }

    modal(&mut out, prev, next);

    flag(
        &mut out,
        prev.map(|p| p.skills_animated),
        next.skills_animated,
        Target::SkillBars,
        class::ANIMATE,
    );
    flags(
        &mut out,
        prev.map(|p| p.revealed.as_slice()),
        &next.revealed,
        Target::Reveal,
        class::FADE_IN,
    );
    flags(
        &mut out,
        prev.map(|p| p.field_errors.as_slice()),
        &next.field_errors,
        Target::FormGroup,
        class::ERROR,
    );

    out
}

fn flag(
    out: &mut Vec<Patch>,
    was: Option<bool>,
    on: bool,
    target: Target,
    class: &'static str,
) {
    if was != Some(on) {
        out.push(Patch::Class { target, class, on });
    }
}

fn flags(
    out: &mut Vec<Patch>,
    was: Option<&[bool]>,
    on: &[bool],
    target: fn(usize) -> Target,
    class: &'static str,
) {
    for (index, on) in on.iter().enumerate() {
        let was = was.and_then(|was| was.get(index).copied());
        flag(out, was, *on, target(index), class);
    }
}

fn card_style(out: &mut Vec<Patch>, target: Target, phase: CardPhase) {
    let style = phase.style();
    for (property, value) in [
        ("display", style.display),
        ("opacity", style.opacity),
        ("transform", style.transform),
    ] {
        out.push(Patch::Style {
            target,
            property,
            value,
        });
    }
}

fn modal(out: &mut Vec<Patch>, prev: Option<&PageView>, next: &PageView) {
    let was_open = prev.is_some_and(|p| p.modal.is_some());
    let open = next.modal.is_some();

    if let Some(html) = &next.modal
        && prev.and_then(|p| p.modal.as_ref()) != Some(html)
    {
        out.push(Patch::Html {
            target: Target::ModalBody,
            html: html.clone(),
        });
    }

    if prev.is_none() || was_open != open {
        out.push(Patch::Class {
            target: Target::Modal,
            class: class::ACTIVE,
            on: open,
        });
    }
    if was_open != open {
        out.push(Patch::Style {
            target: Target::Body,
            property: "overflow",
            value: if open { "hidden" } else { "auto" },
        });
    }
}
