//! Contact form state.
//!
//! Values are pushed in by the host on every edit, blur and submit, so the
//! form never has to read the DOM. Only blur and submit can mark a field;
//! edits can only clear a mark.

use super::validator::{FieldError, FieldKind, validate};

/// Position of a `.form-group` in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldKey(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<FieldError>,
}

impl FormField {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    fn check(&mut self) -> bool {
        self.error = validate(self.spec.kind, &self.value).err();
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Submission withheld; every listed field is now marked.
    Rejected { invalid: Vec<FieldKey> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: Vec<FormField>,
}

impl ContactForm {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields: fields.into_iter().map(FormField::new).collect(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: FieldKey) -> Option<&FormField> {
        self.fields.get(key.0)
    }

    pub fn has_error(&self, key: FieldKey) -> bool {
        self.field(key).is_some_and(|field| field.error.is_some())
    }

    pub fn is_clean(&self) -> bool {
        self.fields.iter().all(|field| field.error.is_none())
    }

    /// Record an edit. A marked field is unmarked once its value is valid.
    pub fn edit(&mut self, key: FieldKey, value: impl Into<String>) {
        let Some(field) = self.fields.get_mut(key.0) else {
            return;
        };
        field.value = value.into();
        if field.error.is_some() {
            field.check();
        }
    }

    /// Record a blur and validate that field alone.
    pub fn blur(&mut self, key: FieldKey, value: impl Into<String>) {
        let Some(field) = self.fields.get_mut(key.0) else {
            return;
        };
        field.value = value.into();
        field.check();
    }

    /// Validate every field against the submitted values. Missing values
    /// count as empty. An accepted form is cleared.
    pub fn submit(&mut self, values: &[String]) -> SubmitOutcome {
        let mut invalid = Vec::new();
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.value = values.get(index).cloned().unwrap_or_default();
            if !field.check() {
                invalid.push(FieldKey(index));
            }
        }

        if invalid.is_empty() {
            self.reset();
            SubmitOutcome::Accepted
        } else {
            log::debug!("contact: {} field(s) failed validation", invalid.len());
            SubmitOutcome::Rejected { invalid }
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(vec![
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::new("message", FieldKind::TextArea),
        ])
    }

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_name_blocks_submission_and_marks_only_name() {
        let mut f = form();
        let outcome = f.submit(&values(&["", "a@b.co", "hello"]));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                invalid: vec![FieldKey(0)]
            }
        );
        assert!(f.has_error(FieldKey(0)));
        assert!(!f.has_error(FieldKey(1)));
        assert!(!f.has_error(FieldKey(2)));
        assert_eq!(f.field(FieldKey(1)).unwrap().value, "a@b.co");
    }

    #[test]
    fn accepted_submission_clears_the_form() {
        let mut f = form();
        assert!(f.submit(&values(&["Ann", "a@b.co", "hi"])).is_accepted());
        assert!(f.fields().iter().all(|field| field.value.is_empty()));
        assert!(f.is_clean());
    }

    #[test]
    fn missing_values_count_as_empty() {
        let mut f = form();
        let outcome = f.submit(&values(&["Ann"]));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                invalid: vec![FieldKey(1), FieldKey(2)]
            }
        );
    }

    #[test]
    fn edit_never_marks_but_can_unmark() {
        let mut f = form();
        f.edit(FieldKey(1), "not-an-email");
        assert!(!f.has_error(FieldKey(1)));

        f.blur(FieldKey(1), "not-an-email");
        assert_eq!(
            f.field(FieldKey(1)).unwrap().error,
            Some(FieldError::InvalidEmail)
        );

        f.edit(FieldKey(1), "still@bad");
        assert!(f.has_error(FieldKey(1)));
        f.edit(FieldKey(1), "a@b.co");
        assert!(!f.has_error(FieldKey(1)));
    }

    #[test]
    fn blur_clears_a_previous_mark() {
        let mut f = form();
        f.blur(FieldKey(0), " ");
        assert!(f.has_error(FieldKey(0)));
        f.blur(FieldKey(0), "Ann");
        assert!(!f.has_error(FieldKey(0)));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut f = form();
        f.blur(FieldKey(9), "");
        f.edit(FieldKey(9), "");
        assert!(f.is_clean());
    }
}
