use super::form::FieldKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMessage {
    /// Value changed while typing.
    Edited { field: FieldKey, value: String },
    /// Field lost focus.
    Blurred { field: FieldKey, value: String },
    /// Submit pressed; one value per field in document order.
    Submitted(Vec<String>),
}
