//! Element lookup and measurement. Everything the page needs from the
//! document is gathered once at mount.

use folio_config::util::parse_bool;
use folio_core::PageLayout;
use folio_core::domains::contact::{FieldKind, FieldSpec};
use folio_core::domains::projects::CardSpec;
use folio_model::{
    CategoryTag, FilterTag, ProjectCatalog, ProjectId, Section, SectionId,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, NodeList, Window,
};

use crate::error::{DomError, Result};
use crate::render::Bindings;
use crate::selectors::{self, attr, class};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

#[derive(Debug, Clone)]
pub struct PageElements {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,

    pub navbar: Option<HtmlElement>,
    pub menu_toggle: Option<HtmlElement>,
    pub menu: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub scroll_indicator: Option<HtmlElement>,
    pub back_to_top: Option<HtmlElement>,
    pub loader: Option<HtmlElement>,

    pub carousel: Option<HtmlElement>,
    pub slides: Vec<HtmlElement>,
    pub prev_slide: Option<HtmlElement>,
    pub next_slide: Option<HtmlElement>,
    pub dots_container: Option<HtmlElement>,
    pub dots: Vec<HtmlElement>,

    pub filter_buttons: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub modal: Option<HtmlElement>,
    pub modal_body: Option<HtmlElement>,
    pub modal_close: Option<HtmlElement>,

    pub form: Option<HtmlFormElement>,
    /// `.form-group`s that contain a control, paired by index with
    /// `form_controls`.
    pub form_groups: Vec<HtmlElement>,
    pub form_controls: Vec<Element>,

    pub skills: Option<HtmlElement>,
    pub skill_bars: Vec<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,
}

impl PageElements {
    pub fn collect(window: Window) -> Result<Self> {
        let document = window.document().ok_or(DomError::MissingDocument)?;
        let body = document.body().ok_or(DomError::MissingElement("body"))?;

        let form = document
            .get_element_by_id(selectors::CONTACT_FORM)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let (form_groups, form_controls) = match &form {
            Some(form) => form_fields(form)?,
            None => (Vec::new(), Vec::new()),
        };

        Ok(Self {
            navbar: by_id(&document, selectors::NAVBAR),
            menu_toggle: by_id(&document, selectors::NAVBAR_TOGGLE),
            menu: by_id(&document, selectors::NAVBAR_MENU),
            nav_links: query_all(&document, selectors::NAV_LINKS)?,
            sections: query_all(&document, selectors::SECTIONS)?,
            scroll_indicator: query(&document, selectors::SCROLL_INDICATOR)?,
            back_to_top: by_id(&document, selectors::BACK_TO_TOP),
            loader: query(&document, selectors::LOADER)?,
            carousel: query(&document, selectors::CAROUSEL)?,
            slides: query_all(&document, selectors::SLIDES)?,
            prev_slide: by_id(&document, selectors::PREV_SLIDE),
            next_slide: by_id(&document, selectors::NEXT_SLIDE),
            dots_container: by_id(&document, selectors::DOTS),
            dots: Vec::new(),
            filter_buttons: query_all(&document, selectors::FILTER_BUTTONS)?,
            cards: query_all(&document, selectors::PROJECT_CARDS)?,
            modal: by_id(&document, selectors::MODAL),
            modal_body: by_id(&document, selectors::MODAL_BODY),
            modal_close: by_id(&document, selectors::MODAL_CLOSE),
            form,
            form_groups,
            form_controls,
            skills: by_id(&document, selectors::SKILLS),
            skill_bars: query_all(&document, selectors::SKILL_BARS)?,
            reveal_targets: query_all(&document, selectors::REVEAL_TARGETS)?,
            window,
            document,
            body,
        })
    }

    /// One dot per slide, appended to the dots container.
    pub fn create_dots(&mut self) -> Result<()> {
        let Some(container) = &self.dots_container else {
            return Ok(());
        };
        for _ in &self.slides {
            let dot = self
                .document
                .create_element("div")?
                .dyn_into::<HtmlElement>()
                .map_err(|_| DomError::Js("created div is not an HtmlElement".into()))?;
            dot.class_list().add_1(class::DOT)?;
            container.append_child(&dot)?;
            self.dots.push(dot);
        }
        Ok(())
    }

    /// Tag fade-in targets with their index so observer entries can be
    /// mapped back.
    pub fn mark_reveal_targets(&self) -> Result<()> {
        for (index, target) in self.reveal_targets.iter().enumerate() {
            target.set_attribute(attr::REVEAL_INDEX, &index.to_string())?;
        }
        Ok(())
    }

    pub fn bindings(&self) -> Bindings {
        Bindings {
            link_hrefs: self
                .nav_links
                .iter()
                .map(|link| link.get_attribute(attr::HREF).unwrap_or_default())
                .collect(),
            filters: self
                .filter_buttons
                .iter()
                .map(|button| {
                    FilterTag::parse(
                        &button.get_attribute(attr::FILTER).unwrap_or_default(),
                    )
                })
                .collect(),
        }
    }

    pub fn layout(&self, catalog: ProjectCatalog) -> PageLayout {
        PageLayout {
            sections: measure_sections(&self.sections),
            slide_count: self.slides.len(),
            cards: self.cards.iter().map(card_spec).collect(),
            form_fields: self.form.as_ref().map(|_| {
                self.form_controls
                    .iter()
                    .enumerate()
                    .map(|(index, control)| {
                        let name = control
                            .get_attribute("name")
                            .unwrap_or_else(|| format!("field-{index}"));
                        FieldSpec::new(name, control_kind(control))
                    })
                    .collect()
            }),
            reveal_targets: self.reveal_targets.len(),
            catalog,
        }
    }

    /// Raw text of the embedded configuration document, if present.
    pub fn config_text(&self) -> Option<String> {
        self.document
            .get_element_by_id(selectors::CONFIG_SCRIPT)
            .and_then(|script| script.text_content())
    }

    /// `data-autoplay` on the carousel, when it parses as a boolean.
    pub fn autoplay_override(&self) -> Option<bool> {
        self.carousel
            .as_ref()
            .and_then(|carousel| carousel.get_attribute(attr::AUTOPLAY))
            .and_then(|raw| parse_bool(&raw))
    }
}

/// Document-order sections with their offset and height. Elements with an
/// unusable id are skipped.
pub fn measure_sections(sections: &[HtmlElement]) -> Vec<Section> {
    sections
        .iter()
        .filter_map(|section| {
            let id = SectionId::new(section.id()).ok()?;
            Section::new(
                id,
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
            .map_err(|err| log::warn!("dom: skipping section: {err}"))
            .ok()
        })
        .collect()
}

pub fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn control_kind(control: &Element) -> FieldKind {
    if control.dyn_ref::<HtmlTextAreaElement>().is_some() {
        return FieldKind::TextArea;
    }
    control
        .get_attribute(attr::TYPE)
        .map(|raw| FieldKind::from_input_type(&raw))
        .unwrap_or_default()
}

fn card_spec(card: &HtmlElement) -> CardSpec {
    CardSpec {
        project: card.get_attribute(attr::PROJECT).map(ProjectId::new),
        category: CategoryTag::new(
            card.get_attribute(attr::CATEGORY).unwrap_or_default(),
        ),
    }
}

fn form_fields(
    form: &HtmlFormElement,
) -> Result<(Vec<HtmlElement>, Vec<Element>)> {
    let mut groups = Vec::new();
    let mut controls = Vec::new();
    for group in html_elements(form.query_selector_all(selectors::FORM_GROUPS)?)
    {
        if let Some(control) = group.query_selector(selectors::FORM_CONTROL)? {
            groups.push(group);
            controls.push(control);
        }
    }
    Ok((groups, controls))
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(html_elements(document.query_selector_all(selector)?))
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
