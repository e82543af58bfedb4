use folio_config::Settings;

use crate::command::Command;

use super::form::ContactForm;
use super::messages::ContactMessage;

/// Handle contact form messages.
pub fn update_contact(
    form: &mut ContactForm,
    settings: &Settings,
    message: ContactMessage,
) -> Vec<Command> {
    match message {
        ContactMessage::Edited { field, value } => {
            form.edit(field, value);
            Vec::new()
        }
        ContactMessage::Blurred { field, value } => {
            form.blur(field, value);
            Vec::new()
        }
        ContactMessage::Submitted(values) => {
            if form.submit(&values).is_accepted() {
                log::info!("contact: message accepted");
                vec![
                    Command::Notify(settings.success_message.clone()),
                    Command::ResetForm,
                ]
            } else {
                Vec::new()
            }
        }
    }
}
