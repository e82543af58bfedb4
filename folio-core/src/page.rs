//! The page session: every state machine plus the scheduler that drives
//! their timers.

use folio_config::Settings;
use folio_model::{ProjectCatalog, Section};

use crate::command::Command;
use crate::domains::carousel::{CarouselController, update_carousel};
use crate::domains::contact::{ContactForm, FieldSpec, update_contact};
use crate::domains::navigation::{NavigationState, update_navigation};
use crate::domains::projects::{CardSpec, ProjectsState, update_projects};
use crate::domains::reveal::{RevealMessage, RevealState};
use crate::error::Result;
use crate::message::{Key, Message};
use crate::scheduler::{Scheduler, TimerEvent};

/// What the host found on the page at load time.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<Section>,
    pub slide_count: usize,
    pub cards: Vec<CardSpec>,
    /// `None` when the page has no contact form.
    pub form_fields: Option<Vec<FieldSpec>>,
    pub reveal_targets: usize,
    pub catalog: ProjectCatalog,
}

#[derive(Debug)]
pub struct Page<S: Scheduler> {
    settings: Settings,
    scheduler: S,
    pub navigation: NavigationState,
    /// `None` when the page has no slides.
    pub carousel: Option<CarouselController<S::Handle>>,
    pub projects: ProjectsState<S::Handle>,
    pub contact: Option<ContactForm>,
    pub reveal: RevealState<S::Handle>,
}

impl<S: Scheduler> Page<S> {
    /// Build every state machine. Nothing is scheduled until
    /// [`start`](Self::start).
    pub fn new(
        settings: Settings,
        scheduler: S,
        layout: PageLayout,
    ) -> Result<Self> {
        let carousel = match layout.slide_count {
            0 => None,
            n => Some(CarouselController::new(n, settings.autoplay_period)?),
        };

        Ok(Self {
            navigation: NavigationState::new(
                layout.sections,
                settings.section_trigger_offset,
            ),
            carousel,
            projects: ProjectsState::new(
                layout.cards,
                layout.catalog,
                &settings,
            ),
            contact: layout.form_fields.map(ContactForm::new),
            reveal: RevealState::new(layout.reveal_targets),
            settings,
            scheduler,
        })
    }

    pub fn start(&mut self) {
        self.reveal.schedule_loader_hide(
            &mut self.scheduler,
            self.settings.loader_hide_delay,
        );

        if let Some(carousel) = self.carousel.as_mut() {
            if self.settings.autoplay_enabled {
                carousel.start(&mut self.scheduler);
            } else {
                carousel.disarm(&mut self.scheduler);
            }
        }

        log::info!(
            "page started: {} sections, {} slides, {} project cards",
            self.navigation.tracker.sections().len(),
            self.carousel.as_ref().map_or(0, |c| c.len()),
            self.projects.filter.cards().len(),
        );
    }

    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Navigation(message) => update_navigation(
                &mut self.navigation,
                &self.settings,
                message,
            ),
            Message::Carousel(message) => match self.carousel.as_mut() {
                Some(carousel) => {
                    update_carousel(carousel, &mut self.scheduler, message)
                }
                None => Vec::new(),
            },
            Message::Projects(message) => update_projects(
                &mut self.projects,
                &mut self.scheduler,
                message,
            ),
            Message::Contact(message) => match self.contact.as_mut() {
                Some(form) => update_contact(form, &self.settings, message),
                None => Vec::new(),
            },
            Message::Reveal(RevealMessage::Intersected(key)) => {
                self.reveal.intersected(key)
            }
            Message::Reveal(RevealMessage::SkillsVisible) => {
                self.reveal.skills_visible(
                    &mut self.scheduler,
                    self.settings.skill_bar_delay,
                )
            }
            Message::Timer(event) => {
                self.on_timer(event);
                Vec::new()
            }
            Message::KeyPressed(Key::Escape) => {
                if self.projects.modal.is_open() {
                    self.projects.modal.close();
                }
                Vec::new()
            }
            Message::KeyPressed(Key::Other) => Vec::new(),
        }
    }

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::CarouselAdvance => {
                if let Some(carousel) = self.carousel.as_mut()
                    && carousel.is_running()
                {
                    carousel.advance();
                }
            }
            TimerEvent::AnimateSkillBars => {
                self.reveal.animate_skill_bars(&mut self.scheduler);
            }
            TimerEvent::HideLoader => {
                self.reveal.hide_loader(&mut self.scheduler);
            }
            TimerEvent::CardSettled(key) => {
                self.projects.filter.settle(key, &mut self.scheduler);
            }
        }
    }

    /// Cancel every outstanding timer.
    pub fn teardown(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.teardown(&mut self.scheduler);
        }
        self.projects.filter.teardown(&mut self.scheduler);
        self.reveal.teardown(&mut self.scheduler);
        log::debug!("page torn down");
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
