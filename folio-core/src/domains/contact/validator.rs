use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email regex should compile")
});

/// How a form control is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Map an input's `type` attribute (or `textarea` tag) to a kind.
    pub fn from_input_type(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "textarea" => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Empty,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check a single value. Surrounding whitespace is ignored.
pub fn validate(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Empty);
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// One `@`, at least one `.` after it, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty_for_every_kind() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::TextArea] {
            assert_eq!(validate(kind, "   "), Err(FieldError::Empty));
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn email_value_is_trimmed_before_matching() {
        assert_eq!(validate(FieldKind::Email, "  a@b.co "), Ok(()));
    }

    #[test]
    fn text_accepts_anything_non_blank() {
        assert_eq!(validate(FieldKind::Text, "x"), Ok(()));
        assert_eq!(validate(FieldKind::TextArea, "not-an-email"), Ok(()));
    }

    #[test]
    fn input_types() {
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("textarea"), FieldKind::TextArea);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Text);
    }
}
