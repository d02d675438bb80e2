use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid selector {0:?}")]
    Selector(String),
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
    #[error("expected {expected}")]
    WrongType { expected: &'static str },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { context, message }
    }
}

pub type DomResult<T> = Result<T, DomError>;
