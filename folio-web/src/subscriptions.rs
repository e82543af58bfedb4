//! DOM event listeners and visibility observers. Every callback turns the
//! browser event into a [`Message`] and hands it to [`dispatch`].

use folio_config::Settings;
use folio_core::domains::carousel::CarouselMessage;
use folio_core::domains::contact::{ContactMessage, FieldKey};
use folio_core::domains::navigation::NavigationMessage;
use folio_core::domains::projects::ProjectsMessage;
use folio_core::domains::reveal::{RevealKey, RevealMessage};
use folio_core::{Key, Message, ObserveTarget};
use folio_model::{FilterTag, ProjectId, SectionId};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
};

use crate::app::dispatch;
use crate::dom::{PageElements, control_value, measure_sections};
use crate::error::Result;
use crate::selectors::attr;

type EventCallback = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Debug)]
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: EventCallback,
}

#[derive(Debug)]
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

#[derive(Debug, Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
    reveal: Option<Observer>,
    skills: Option<Observer>,
}

impl Subscriptions {
    pub fn wire(elements: &PageElements, settings: &Settings) -> Result<Self> {
        let mut subs = Self::default();
        subs.wire_navigation(elements)?;
        subs.wire_carousel(elements)?;
        subs.wire_projects(elements)?;
        subs.wire_contact(elements)?;

        subs.reveal = observe(
            &elements.reveal_targets,
            settings.fade_threshold,
            Some(&settings.fade_root_margin),
            on_reveal_entry,
        )?;
        subs.skills = observe(
            elements.skills.as_slice(),
            settings.skills_threshold,
            None,
            |_| dispatch(RevealMessage::SkillsVisible.into()),
        )?;

        log::debug!("wired {} listeners", subs.listeners.len());
        Ok(subs)
    }

    pub fn unobserve(&self, target: ObserveTarget, elements: &PageElements) {
        match target {
            ObserveTarget::Reveal(RevealKey(index)) => {
                if let (Some(observer), Some(element)) =
                    (&self.reveal, elements.reveal_targets.get(index))
                {
                    observer.observer.unobserve(element);
                }
            }
            ObserveTarget::SkillsSection => {
                if let (Some(observer), Some(element)) =
                    (&self.skills, &elements.skills)
                {
                    observer.observer.unobserve(element);
                }
            }
        }
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<()> {
        let callback: EventCallback = Closure::wrap(Box::new(handler));
        target.add_event_listener_with_callback(
            kind,
            callback.as_ref().unchecked_ref(),
        )?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    fn on_click(
        &mut self,
        target: Option<&impl AsRef<EventTarget>>,
        message: impl Fn() -> Message + 'static,
    ) -> Result<()> {
        match target {
            Some(target) => self.listen(target.as_ref(), "click", move |_| {
                dispatch(message());
            }),
            None => Ok(()),
        }
    }

    fn wire_navigation(&mut self, elements: &PageElements) -> Result<()> {
        let window = elements.window.clone();
        self.listen(elements.window.as_ref(), "scroll", move |_| {
            let scroll_y = window.scroll_y().unwrap_or_default();
            dispatch(NavigationMessage::Scrolled(scroll_y).into());
        })?;

        let sections = elements.sections.clone();
        self.listen(elements.window.as_ref(), "resize", move |_| {
            let measured = measure_sections(&sections);
            dispatch(NavigationMessage::LayoutMeasured(measured).into());
        })?;

        self.on_click(elements.menu_toggle.as_ref(), || {
            NavigationMessage::ToggleMenu.into()
        })?;
        self.on_click(elements.scroll_indicator.as_ref(), || {
            NavigationMessage::ScrollIndicatorClicked.into()
        })?;
        self.on_click(elements.back_to_top.as_ref(), || {
            NavigationMessage::BackToTopClicked.into()
        })?;

        for link in &elements.nav_links {
            let href = link.get_attribute(attr::HREF);
            self.listen(link.as_ref(), "click", move |event| {
                if let Some(id) = href.as_deref().and_then(SectionId::from_anchor)
                {
                    event.prevent_default();
                    dispatch(NavigationMessage::LinkClicked(id).into());
                }
            })?;
        }

        self.listen(elements.document.as_ref(), "keydown", |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                dispatch(Message::KeyPressed(Key::from_name(&event.key())));
            }
        })
    }

    fn wire_carousel(&mut self, elements: &PageElements) -> Result<()> {
        self.on_click(elements.prev_slide.as_ref(), || {
            CarouselMessage::Previous.into()
        })?;
        self.on_click(elements.next_slide.as_ref(), || {
            CarouselMessage::Next.into()
        })?;
        for (index, dot) in elements.dots.iter().enumerate() {
            self.on_click(Some(dot), move || CarouselMessage::GoTo(index).into())?;
        }
        if let Some(carousel) = &elements.carousel {
            self.listen(carousel.as_ref(), "mouseenter", |_| {
                dispatch(CarouselMessage::Pause.into());
            })?;
            self.listen(carousel.as_ref(), "mouseleave", |_| {
                dispatch(CarouselMessage::Resume.into());
            })?;
        }
        Ok(())
    }

    fn wire_projects(&mut self, elements: &PageElements) -> Result<()> {
        for (index, button) in elements.filter_buttons.iter().enumerate() {
            let filter = FilterTag::parse(
                &button.get_attribute(attr::FILTER).unwrap_or_default(),
            );
            self.on_click(Some(button), move || {
                ProjectsMessage::FilterSelected {
                    button: index,
                    filter: filter.clone(),
                }
                .into()
            })?;
        }

        for card in &elements.cards {
            let Some(project) = card.get_attribute(attr::PROJECT) else {
                continue;
            };
            let project = ProjectId::new(project);
            self.on_click(Some(card), move || {
                ProjectsMessage::CardActivated(project.clone()).into()
            })?;
        }

        self.on_click(elements.modal_close.as_ref(), || {
            ProjectsMessage::CloseRequested.into()
        })?;
        if let Some(modal) = &elements.modal {
            let backdrop = JsValue::from(modal.clone());
            self.listen(modal.as_ref(), "click", move |event| {
                let on_backdrop = event
                    .target()
                    .is_some_and(|target| JsValue::from(target) == backdrop);
                if on_backdrop {
                    dispatch(ProjectsMessage::BackdropClicked.into());
                }
            })?;
        }
        Ok(())
    }

    fn wire_contact(&mut self, elements: &PageElements) -> Result<()> {
        let Some(form) = &elements.form else {
            return Ok(());
        };

        let controls = elements.form_controls.clone();
        self.listen(form.as_ref(), "submit", move |event| {
            event.prevent_default();
            let values = controls.iter().map(control_value).collect();
            dispatch(ContactMessage::Submitted(values).into());
        })?;

        for (index, control) in elements.form_controls.iter().enumerate() {
            let field = FieldKey(index);
            let blurred = field_handler(control, move |value| {
                ContactMessage::Blurred { field, value }
            });
            self.listen(control.as_ref(), "blur", blurred)?;
            let edited = field_handler(control, move |value| {
                ContactMessage::Edited { field, value }
            });
            self.listen(control.as_ref(), "input", edited)?;
        }
        Ok(())
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        for observer in [&self.reveal, &self.skills].into_iter().flatten() {
            observer.observer.disconnect();
        }
    }
}

fn field_handler(
    control: &Element,
    message: impl Fn(String) -> ContactMessage + 'static,
) -> impl FnMut(Event) + 'static {
    let control = control.clone();
    move |_| dispatch(message(control_value(&control)).into())
}

fn on_reveal_entry(entry: IntersectionObserverEntry) {
    let index = entry
        .target()
        .get_attribute(attr::REVEAL_INDEX)
        .and_then(|raw| raw.parse::<usize>().ok());
    if let Some(index) = index {
        dispatch(RevealMessage::Intersected(RevealKey(index)).into());
    }
}

/// Observe `targets`, calling `on_visible` for every entry that starts
/// intersecting.
fn observe(
    targets: &[impl AsRef<Element>],
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: impl Fn(IntersectionObserverEntry) + 'static,
) -> Result<Option<Observer>> {
    if targets.is_empty() {
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry);
                }
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )?;
    for target in targets {
        observer.observe(target.as_ref());
    }

    Ok(Some(Observer {
        observer,
        _callback: callback,
    }))
}
