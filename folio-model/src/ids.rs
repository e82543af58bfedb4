use crate::error::{ModelError, Result};

/// Identifier of a page section, as found in the section's `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier("section"));
        }
        Ok(Self(raw))
    }

    /// Parse an in-page anchor such as `#about`. Anything that is not a bare
    /// fragment reference yields `None`.
    pub fn from_anchor(href: &str) -> Option<Self> {
        let fragment = href.strip_prefix('#')?;
        Self::new(fragment).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key into the project catalog (the `data-project` attribute of a card).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category slug carried by project cards (`data-category`) and filter
/// buttons (`data-filter`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryTag(String);

impl CategoryTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_rejects_blank() {
        assert_eq!(
            SectionId::new("  "),
            Err(ModelError::EmptyIdentifier("section"))
        );
    }

    #[test]
    fn fragment_href_names_its_section() {
        let id = SectionId::from_anchor("#contact").expect("fragment");
        assert_eq!(id.as_str(), "contact");
    }

    #[test]
    fn non_fragment_hrefs_are_not_anchors() {
        assert!(SectionId::from_anchor("https://example.com").is_none());
        assert!(SectionId::from_anchor("#").is_none());
    }
}
