use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("intersection observer: {0}")]
    Observer(String),
    #[error("event listener: {0}")]
    Listener(String),
}

impl DomError {
    pub fn observer(err: JsValue) -> Self {
        DomError::Observer(format!("{:?}", err))
    }

    pub fn listener(err: JsValue) -> Self {
        DomError::Listener(format!("{:?}", err))
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}
