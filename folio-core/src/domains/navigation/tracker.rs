//! Maps a continuous scroll offset onto the discrete "active section".

use folio_model::{Section, SectionId};

/// Ordered section boundaries plus the pre-trigger offset.
///
/// Holds no state between calls: [`classify`](Self::classify) is a pure
/// function of the layout and the offset it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    sections: Vec<Section>,
    pre_trigger: f64,
}

impl SectionTracker {
    /// `sections` must be in document order (top to bottom).
    pub fn new(sections: Vec<Section>, pre_trigger: f64) -> Self {
        Self {
            sections,
            pre_trigger,
        }
    }

    /// First section, in document order, whose trigger range contains
    /// `scroll_y`. `None` above the first section or in gaps between them.
    pub fn classify(&self, scroll_y: f64) -> Option<&SectionId> {
        self.sections
            .iter()
            .find(|section| section.contains(scroll_y, self.pre_trigger))
            .map(|section| &section.id)
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| &section.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Replace the layout after a re-measure.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn pre_trigger(&self) -> f64 {
        self.pre_trigger
    }
}
