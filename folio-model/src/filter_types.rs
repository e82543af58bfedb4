use std::fmt;

use crate::ids::CategoryTag;

/// Wildcard value of `data-filter` that matches every card.
pub const WILDCARD: &str = "all";

/// Active project filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterTag {
    #[default]
    All,
    Category(CategoryTag),
}

impl FilterTag {
    /// Interpret a raw `data-filter` attribute value. Only the exact string
    /// `all` is the wildcard; anything else, blank included, names a
    /// category.
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            FilterTag::All
        } else {
            FilterTag::Category(CategoryTag::new(raw))
        }
    }

    pub fn matches(&self, category: &CategoryTag) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(tag) => tag == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterTag::All => WILDCARD,
            FilterTag::Category(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        let filter = FilterTag::parse("all");
        assert_eq!(filter, FilterTag::All);
        assert!(filter.matches(&CategoryTag::from("clinical")));
    }

    #[test]
    fn category_matches_only_itself() {
        let filter = FilterTag::parse("clinical");
        assert!(filter.matches(&CategoryTag::from("clinical")));
        assert!(!filter.matches(&CategoryTag::from("compliance")));
    }

    #[test]
    fn wildcard_is_case_and_space_sensitive() {
        assert_eq!(
            FilterTag::parse("All"),
            FilterTag::Category(CategoryTag::from("All"))
        );
        assert_eq!(
            FilterTag::parse(" all"),
            FilterTag::Category(CategoryTag::from(" all"))
        );
        let blank = FilterTag::parse("");
        assert!(blank.matches(&CategoryTag::from("")));
        assert!(!blank.matches(&CategoryTag::from("clinical")));
    }
}
