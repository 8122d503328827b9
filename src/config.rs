use crate::error::{GalleryError, Result};
use leptos::logging::warn;
use serde::Deserialize;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Must match the host stylesheet's `.modal` opacity transition.
pub const TRANSITION_MS: u32 = 260;
pub const COPYRIGHT_START_YEAR: i32 = 2025;

/// `window.__GALLERY_CONFIG__`, checked before the JSON script element.
pub const CONFIG_GLOBAL: &str = "__GALLERY_CONFIG__";
/// `<script type="application/json" id="gallery-config">`
pub const CONFIG_SCRIPT_ID: &str = "gallery-config";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub start_year: i32,
    pub transition_ms: u32,
    pub dismiss_key: String,
    pub activation_key: String,
    pub link_label: String,
    pub alt_suffix: String,
    pub suppress_context_menu: bool,
    pub selectors: Selectors,
}

/// Where the host page keeps each piece of the gallery markup.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub item: String,
    pub thumb: String,
    pub modal_id: String,
    pub image_id: String,
    pub title_id: String,
    pub description_id: String,
    pub link_id: String,
    pub caption: String,
    pub dialog: String,
    pub close: String,
    pub action_row_class: String,
    pub action_link_class: String,
    pub years_id: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            start_year: COPYRIGHT_START_YEAR,
            transition_ms: TRANSITION_MS,
            dismiss_key: "Escape".to_string(),
            activation_key: "Enter".to_string(),
            link_label: "Jetzt bei Amazon bestellen".to_string(),
            alt_suffix: " — Description preview".to_string(),
            suppress_context_menu: true,
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item: ".image-item".to_string(),
            thumb: ".thumb".to_string(),
            modal_id: "modal".to_string(),
            image_id: "modal-image".to_string(),
            title_id: "modal-title".to_string(),
            description_id: "modal-description".to_string(),
            link_id: "modal-link".to_string(),
            caption: ".caption".to_string(),
            dialog: ".dialog".to_string(),
            close: "[data-modal-close], .close".to_string(),
            action_row_class: "amazon-row".to_string(),
            action_link_class: "amazon-link".to_string(),
            years_id: "years".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the page's configuration. Anything missing or malformed falls
    /// back to the defaults so the gallery still renders.
    pub fn load(document: &Document) -> Self {
        let resolved = if let Some(value) = window_config() {
            serde_wasm_bindgen::from_value::<GalleryConfig>(value).map_err(GalleryError::from)
        } else if let Some(json) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content())
        {
            Self::from_json(&json)
        } else {
            return Self::default();
        };

        resolved.unwrap_or_else(|err| {
            warn!("gallery: {err}, using defaults");
            Self::default()
        })
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(u64::from(self.transition_ms))
    }

    pub fn is_dismiss_key(&self, key: &str) -> bool {
        key == self.dismiss_key
    }

    pub fn is_activation_key(&self, key: &str) -> bool {
        key == self.activation_key
    }

    pub fn thumbnail_alt(&self, title: &str) -> String {
        format!("{title}{}", self.alt_suffix)
    }
}

fn window_config() -> Option<JsValue> {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod default_tests {
        use super::*;

        #[test]
        fn defaults_match_host_markup() {
            let config = GalleryConfig::default();
            assert_eq!(config.start_year, 2025);
            assert_eq!(config.transition_ms, 260);
            assert_eq!(config.selectors.item, ".image-item");
            assert_eq!(config.selectors.thumb, ".thumb");
            assert_eq!(config.selectors.modal_id, "modal");
            assert_eq!(config.selectors.caption, ".caption");
            assert!(config.suppress_context_menu);
        }

        #[test]
        fn transition_is_in_milliseconds() {
            let config = GalleryConfig::default();
            assert_eq!(config.transition(), Duration::from_millis(260));
        }

        #[test]
        fn only_escape_dismisses() {
            let config = GalleryConfig::default();
            assert!(config.is_dismiss_key("Escape"));
            assert!(!config.is_dismiss_key("Enter"));
            assert!(!config.is_dismiss_key("Esc"));
            assert!(!config.is_dismiss_key("a"));
        }

        #[test]
        fn only_enter_activates() {
            let config = GalleryConfig::default();
            assert!(config.is_activation_key("Enter"));
            assert!(!config.is_activation_key(" "));
            assert!(!config.is_activation_key("Escape"));
        }

        #[test]
        fn thumbnail_alt_appends_preview_suffix() {
            let config = GalleryConfig::default();
            assert_eq!(config.thumbnail_alt("Harbor"), "Harbor — Description preview");
        }
    }

    mod json_tests {
        use super::*;

        #[test]
        fn empty_object_is_default() {
            let config = GalleryConfig::from_json("{}").unwrap();
            assert_eq!(config, GalleryConfig::default());
        }

        #[test]
        fn partial_fields_keep_other_defaults() {
            let config = GalleryConfig::from_json(
                r#"{"startYear": 2023, "transitionMs": 400, "selectors": {"item": ".tile"}}"#,
            )
            .unwrap();
            assert_eq!(config.start_year, 2023);
            assert_eq!(config.transition(), Duration::from_millis(400));
            assert_eq!(config.selectors.item, ".tile");
            assert_eq!(config.selectors.thumb, ".thumb");
            assert_eq!(config.dismiss_key, "Escape");
        }

        #[test]
        fn custom_keys_and_label() {
            let config = GalleryConfig::from_json(
                r#"{"dismissKey": "q", "linkLabel": "Buy now", "suppressContextMenu": false}"#,
            )
            .unwrap();
            assert!(config.is_dismiss_key("q"));
            assert!(!config.is_dismiss_key("Escape"));
            assert_eq!(config.link_label, "Buy now");
            assert!(!config.suppress_context_menu);
        }

        #[test]
        fn malformed_json_is_an_error() {
            assert!(GalleryConfig::from_json("{startYear: 2023").is_err());
        }

        #[test]
        fn wrong_type_is_an_error() {
            assert!(GalleryConfig::from_json(r#"{"transitionMs": "slow"}"#).is_err());
        }
    }
}
