use folio_model::{Section, SectionId};

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationMessage {
    /// Viewport scrolled to the given vertical offset.
    Scrolled(f64),
    /// A navbar link pointing at `#id` was clicked.
    LinkClicked(SectionId),
    ScrollIndicatorClicked,
    ToggleMenu,
    BackToTopClicked,
    /// Sections were measured again (initial load, resize).
    LayoutMeasured(Vec<Section>),
}
