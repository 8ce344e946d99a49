//! Error Types

use thiserror::Error;

/// Failure talking to the storefront backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Failure binding to the server-rendered page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} has an unexpected type")]
    WrongElementType(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}
