// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum Error {
    Dom(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Dom(e) => write!(f, "DOM Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        // JsValue carries no Display; the debug form keeps the browser message.
        Error::Dom(format!("{value:?}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dom_error() {
        let err = Error::Dom("viewer element #model-viewer not found".to_string());
        assert_eq!(
            format!("{}", err),
            "DOM Error: viewer element #model-viewer not found"
        );
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_serde_json_error_produces_config_variant() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        match err {
            Error::Config(message) => assert!(!message.is_empty()),
            _ => panic!("expected Config variant"),
        }
    }
}
