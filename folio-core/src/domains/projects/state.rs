use std::fmt;

use folio_config::Settings;
use folio_model::ProjectCatalog;

use super::filter::{CardSpec, ProjectFilter};
use super::modal::ProjectModal;

#[derive(Debug)]
pub struct ProjectsState<H> {
    pub filter: ProjectFilter<H>,
    pub modal: ProjectModal,
    pub catalog: ProjectCatalog,
    /// Last filter button pressed. `None` until the first click, while the
    /// markup's initial highlight stands.
    pub selected_button: Option<usize>,
}

impl<H: fmt::Debug> ProjectsState<H> {
    pub fn new(
        cards: Vec<CardSpec>,
        catalog: ProjectCatalog,
        settings: &Settings,
    ) -> Self {
        Self {
            filter: ProjectFilter::new(
                cards,
                settings.card_show_delay,
                settings.card_hide_delay,
            ),
            modal: ProjectModal::new(),
            catalog,
            selected_button: None,
        }
    }
}
