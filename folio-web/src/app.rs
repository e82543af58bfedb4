//! The mounted page session and the single dispatch entry point every
//! browser callback goes through.

use std::cell::RefCell;
use std::collections::VecDeque;

use folio_config::{ConfigLoader, Settings};
use folio_core::domains::navigation::NavigationMessage;
use folio_core::{Command, Message, Page};
use folio_model::ProjectCatalog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, PageElements};
use crate::error::{DomError, Result};
use crate::render::{Bindings, PageView, diff};
use crate::scheduler::BrowserScheduler;
use crate::subscriptions::Subscriptions;
use crate::view;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static QUEUE: RefCell<VecDeque<Message>> = const { RefCell::new(VecDeque::new()) };
}

#[derive(Debug)]
struct App {
    page: Page<BrowserScheduler>,
    elements: PageElements,
    bindings: Bindings,
    rendered: Option<PageView>,
    subscriptions: Option<Subscriptions>,
}

impl App {
    fn handle(&mut self, message: Message) {
        for command in self.page.update(message) {
            self.run(command);
        }
        self.render();
    }

    fn run(&mut self, command: Command) {
        match command {
            Command::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.elements
                    .window
                    .scroll_to_with_scroll_to_options(&options);
            }
            Command::Unobserve(target) => {
                if let Some(subscriptions) = &self.subscriptions {
                    subscriptions.unobserve(target, &self.elements);
                }
            }
            Command::Notify(message) => {
                if let Err(err) = self.elements.window.alert_with_message(&message)
                {
                    log::warn!("notify failed: {err:?}");
                }
            }
            Command::ResetForm => {
                if let Some(form) = &self.elements.form {
                    form.reset();
                }
            }
        }
    }

    fn render(&mut self) {
        let next = PageView::capture(&self.page, &self.bindings);
        for patch in diff(self.rendered.as_ref(), &next) {
            view::apply(&self.elements, &patch);
        }
        self.rendered = Some(next);
    }
}

/// Queue `message` for the page. Messages raised while the page is already
/// handling one are processed, in order, before the outer dispatch returns.
pub(crate) fn dispatch(message: Message) {
    QUEUE.with(|queue| queue.borrow_mut().push_back(message));
    APP.with(|app| {
        let Ok(mut app) = app.try_borrow_mut() else {
            return;
        };
        let Some(app) = app.as_mut() else {
            return;
        };
        while let Some(message) = QUEUE.with(|queue| queue.borrow_mut().pop_front())
        {
            app.handle(message);
        }
    });
}

/// Mount now, or once the document has finished parsing.
pub fn mount_when_ready() -> Result<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::MissingDocument)?;
    if document.ready_state() != "loading" {
        return mount(window);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = mount(window) {
            log::error!("mount failed: {err}");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
    )?;
    Ok(())
}

fn mount(window: Window) -> Result<()> {
    let mut elements = PageElements::collect(window)?;
    let settings = load_settings(&elements);
    crate::logging::set_level(settings.log_level);

    elements.create_dots()?;
    elements.mark_reveal_targets()?;

    let scheduler = BrowserScheduler::new(elements.window.clone());
    let layout = elements.layout(ProjectCatalog::builtin());
    let page = Page::new(settings, scheduler, layout)?;
    let subscriptions = Subscriptions::wire(&elements, page.settings())?;
    let scroll_y = elements.window.scroll_y().unwrap_or_default();

    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let app = slot.insert(App {
            bindings: elements.bindings(),
            page,
            elements,
            rendered: None,
            subscriptions: Some(subscriptions),
        });
        app.page.start();
        app.render();
    });

    dispatch(NavigationMessage::Scrolled(scroll_y).into());
    Ok(())
}

/// Cancel timers, detach listeners and drop the session.
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if let Some(mut app) = app {
        app.page.teardown();
        app.subscriptions = None;
        log::info!("unmounted");
    }
}

fn load_settings(elements: &PageElements) -> Settings {
    let raw = elements.config_text();
    let mut settings = match ConfigLoader::new().load(raw.as_deref()) {
        Ok(load) => load.settings,
        Err(err) => {
            log::error!("config rejected, using defaults: {err}");
            Settings::default()
        }
    };
    if let Some(autoplay) = elements.autoplay_override() {
        settings.autoplay_enabled = autoplay;
    }
    settings
}
