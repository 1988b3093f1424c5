//! `TocView` over real DOM elements.

use crate::config::WidgetConfig;
use crate::error::WikiTocError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};
use wikitoc_core::render::error_markup;
use wikitoc_core::{LanguageOption, TextDirection, TocView};

/// The attribute on `<option>` elements naming the language's text direction.
const DIRECTION_ATTRIBUTE: &str = "data-direction";

/// The article field, the language selector and the TOC container.
#[derive(Debug, Clone)]
pub struct DomView {
    article_input: HtmlInputElement,
    language_input: HtmlSelectElement,
    container: Element,
}

impl DomView {
    pub fn new(
        article_input: HtmlInputElement,
        language_input: HtmlSelectElement,
        container: Element,
    ) -> Self {
        Self {
            article_input,
            language_input,
            container,
        }
    }

    /// Looks up the configured elements in `document`.
    pub fn from_document(document: &Document, config: &WidgetConfig) -> Result<Self, WikiTocError> {
        let article_input = element_by_id::<HtmlInputElement>(document, &config.article_input_id)?;
        let language_input =
            element_by_id::<HtmlSelectElement>(document, &config.language_input_id)?;
        let container = document
            .query_selector(&config.toc_container_selector)
            .map_err(|e| WikiTocError::dom(format!("Invalid selector: {:?}", e)))?
            .ok_or_else(|| {
                WikiTocError::dom(format!(
                    "No element matches '{}'",
                    config.toc_container_selector
                ))
            })?;

        Ok(Self::new(article_input, language_input, container))
    }

    pub fn article_element(&self) -> &HtmlInputElement {
        &self.article_input
    }

    pub fn language_element(&self) -> &HtmlSelectElement {
        &self.language_input
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn set_direction(&self, direction: TextDirection) {
        let classes = self.container.class_list();
        let result = classes
            .remove_2(
                TextDirection::Ltr.css_class(),
                TextDirection::Rtl.css_class(),
            )
            .and_then(|_| classes.add_1(direction.css_class()))
            .and_then(|_| self.container.set_attribute("dir", direction.as_str()));
        if let Err(e) = result {
            log::warn!("Failed to tag TOC container with direction: {:?}", e);
        }
    }
}

pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WikiTocError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WikiTocError::dom(format!("No element with id '{}'", id)))?
        .dyn_into::<T>()
        .map_err(|_| WikiTocError::dom(format!("Element '{}' has an unexpected type", id)))
}

impl TocView for DomView {
    fn article_input(&self) -> String {
        self.article_input.value()
    }

    fn set_article_input(&self, value: &str) {
        self.article_input.set_value(value);
    }

    fn selected_language(&self) -> LanguageOption {
        let direction = self
            .language_input
            .selected_options()
            .item(0)
            .and_then(|option| option.get_attribute(DIRECTION_ATTRIBUTE));

        LanguageOption::new(
            self.language_input.value(),
            TextDirection::from_attribute(direction.as_deref()),
        )
    }

    fn clear(&self) {
        self.container.set_inner_html("");
    }

    fn show_toc(&self, markup: &str, direction: TextDirection) {
        self.set_direction(direction);
        self.container.set_inner_html(markup);
    }

    fn show_error(&self, message: &str) {
        self.container.set_inner_html(&error_markup(message));
    }
}
