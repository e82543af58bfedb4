use std::ops::Range;

use crate::error::{ModelError, Result};
use crate::ids::SectionId;

/// A vertically bounded region of the page, measured in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    /// Distance from the top of the document to the top of the section.
    pub start: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: SectionId, start: f64, height: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(ModelError::InvalidSection {
                id: id.to_string(),
                reason: "start offset is not finite",
            });
        }
        if !height.is_finite() || height < 0.0 {
            return Err(ModelError::InvalidSection {
                id: id.to_string(),
                reason: "height must be a finite, non-negative value",
            });
        }
        Ok(Self { id, start, height })
    }

    /// Scroll offsets for which this section counts as active, given the
    /// pre-trigger offset applied ahead of the section top.
    pub fn trigger_range(&self, pre_trigger: f64) -> Range<f64> {
        let top = self.start - pre_trigger;
        top..top + self.height
    }

    pub fn contains(&self, scroll_y: f64, pre_trigger: f64) -> bool {
        self.trigger_range(pre_trigger).contains(&scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(start: f64, height: f64) -> Section {
        Section::new(SectionId::new("about").unwrap(), start, height).unwrap()
    }

    #[test]
    fn trigger_range_is_shifted_by_pre_trigger() {
        let s = section(800.0, 600.0);
        assert_eq!(s.trigger_range(100.0), 700.0..1300.0);
        assert!(s.contains(700.0, 100.0));
        assert!(!s.contains(1300.0, 100.0));
    }

    #[test]
    fn negative_height_is_rejected() {
        let err = Section::new(SectionId::new("x").unwrap(), 0.0, -1.0)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidSection { .. }));
    }

    #[test]
    fn zero_height_section_never_contains() {
        let s = section(100.0, 0.0);
        assert!(!s.contains(0.0, 100.0));
    }
}
