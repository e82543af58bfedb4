//! Writes [`Patch`]es onto the page's elements.

use web_sys::HtmlElement;

use crate::dom::PageElements;
use crate::render::{Patch, Target};

pub fn apply(elements: &PageElements, patch: &Patch) {
    match patch {
        Patch::Class { target, class, on } => {
            for element in resolve(elements, *target) {
                if let Err(err) =
                    element.class_list().toggle_with_force(class, *on)
                {
                    log::warn!("view: class {class} on {target:?}: {err:?}");
                }
            }
        }
        Patch::Style {
            target,
            property,
            value,
        } => {
            for element in resolve(elements, *target) {
                if let Err(err) = element.style().set_property(property, value) {
                    log::warn!("view: style {property} on {target:?}: {err:?}");
                }
            }
        }
        Patch::Html { target, html } => {
            for element in resolve(elements, *target) {
                element.set_inner_html(html);
            }
        }
    }
}

fn resolve(elements: &PageElements, target: Target) -> Vec<&HtmlElement> {
    match target {
        Target::Navbar => elements.navbar.iter().collect(),
        Target::MenuToggle => elements.menu_toggle.iter().collect(),
        Target::Menu => elements.menu.iter().collect(),
        Target::NavLink(index) => elements.nav_links.get(index).into_iter().collect(),
        Target::BackToTop => elements.back_to_top.iter().collect(),
        Target::Loader => elements.loader.iter().collect(),
        Target::Slide(index) => elements.slides.get(index).into_iter().collect(),
        Target::Dot(index) => elements.dots.get(index).into_iter().collect(),
        Target::FilterButton(index) => {
            elements.filter_buttons.get(index).into_iter().collect()
        }
        Target::Card(index) => elements.cards.get(index).into_iter().collect(),
        Target::Modal => elements.modal.iter().collect(),
        Target::ModalBody => elements.modal_body.iter().collect(),
        Target::Body => vec![&elements.body],
        Target::SkillBars => elements.skill_bars.iter().collect(),
        Target::Reveal(index) => {
            elements.reveal_targets.get(index).into_iter().collect()
        }
        Target::FormGroup(index) => {
            elements.form_groups.get(index).into_iter().collect()
        }
    }
}
