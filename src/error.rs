use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("element {selector} is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration object: {0}")]
    ConfigObject(#[from] serde_wasm_bindgen::Error),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = GalleryError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = GalleryError::MissingElement("#modal-image".to_string());
        assert_eq!(err.to_string(), "missing element: #modal-image");
    }

    #[test]
    fn unexpected_element_names_both_sides() {
        let err = GalleryError::UnexpectedElement {
            selector: "#modal-link".to_string(),
            expected: "HtmlAnchorElement",
        };
        assert_eq!(err.to_string(), "element #modal-link is not a HtmlAnchorElement");
    }

    #[test]
    fn json_errors_convert() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GalleryError = source.into();
        assert!(err.to_string().starts_with("invalid configuration: "));
    }
}
