use folio_core::CoreError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("required element `{0}` not found")]
    MissingElement(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DomError>;
