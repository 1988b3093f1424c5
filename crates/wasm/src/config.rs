//! Widget configuration passed from JavaScript.

use crate::error::WikiTocError;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wikitoc_core::TocConfig;

/// Where the widget finds its DOM handles, plus the core settings.
///
/// ```javascript
/// new WikiToc({
///   articleInputId: 'articleInput',
///   tocContainerSelector: 'div.toc-container',
///   toc: { userAgentContact: 'toc-widget@example.org' },
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub article_input_id: String,
    pub language_input_id: String,
    pub fetch_button_id: String,
    pub form_selector: String,
    pub toc_container_selector: String,
    pub toc: TocConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            article_input_id: "articleInput".to_string(),
            language_input_id: "languageInput".to_string(),
            fetch_button_id: "fetchButton".to_string(),
            form_selector: ".input-container form".to_string(),
            toc_container_selector: "div.toc-container".to_string(),
            toc: TocConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Reads a plain JavaScript object; `undefined` or `null` gives the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, WikiTocError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| WikiTocError::config(format!("Invalid widget config: {}", e)))
    }
}
