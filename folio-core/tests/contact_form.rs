mod common;

use folio_config::Settings;
use folio_core::domains::contact::{
    ContactMessage, FieldError, FieldKey, FieldKind, validate,
};
use folio_core::{Command, Message};

fn submit(values: &[&str]) -> Message {
    Message::Contact(ContactMessage::Submitted(
        values.iter().map(|v| v.to_string()).collect(),
    ))
}

#[test]
fn empty_name_with_valid_email_is_withheld() {
    let mut page = common::page();
    let commands = page.update(submit(&["", "a@b.co", "Hello"]));
    assert!(commands.is_empty());

    let form = page.contact.as_ref().unwrap();
    assert!(form.has_error(FieldKey(0)));
    assert!(!form.has_error(FieldKey(1)));
    assert!(!form.has_error(FieldKey(2)));
}

#[test]
fn email_shapes() {
    assert_eq!(
        validate(FieldKind::Email, "not-an-email"),
        Err(FieldError::InvalidEmail)
    );
    assert_eq!(validate(FieldKind::Email, "a@b.co"), Ok(()));
}

#[test]
fn valid_submission_notifies_and_resets() {
    let mut page = common::page();
    let commands = page.update(submit(&["Ann", "ann@example.org", "Hi"]));
    assert_eq!(
        commands,
        vec![
            Command::Notify(Settings::default().success_message),
            Command::ResetForm,
        ]
    );
    let form = page.contact.as_ref().unwrap();
    assert!(form.is_clean());
    assert!(form.fields().iter().all(|f| f.value.is_empty()));
}

#[test]
fn blur_marks_and_edit_unmarks() {
    let mut page = common::page();
    page.update(Message::Contact(ContactMessage::Blurred {
        field: FieldKey(1),
        value: "nope".into(),
    }));
    assert!(page.contact.as_ref().unwrap().has_error(FieldKey(1)));

    page.update(Message::Contact(ContactMessage::Edited {
        field: FieldKey(1),
        value: "nope@x.io".into(),
    }));
    assert!(!page.contact.as_ref().unwrap().has_error(FieldKey(1)));
}
