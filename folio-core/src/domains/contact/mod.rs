//! Contact form validation and submission.

pub mod form;
pub mod messages;
pub mod update;
pub mod validator;

pub use form::{ContactForm, FieldKey, FieldSpec, FormField, SubmitOutcome};
pub use messages::ContactMessage;
pub use update::update_contact;
pub use validator::{FieldError, FieldKind, is_valid_email, validate};
