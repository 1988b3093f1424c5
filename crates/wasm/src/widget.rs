//! The `WikiToc` widget exported to JavaScript.
//!
//! This module wires the page's three user events to a [`TocSession`].

use crate::client::FetchClient;
use crate::config::WidgetConfig;
use crate::dom::{DomView, element_by_id};
use crate::error::WikiTocError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Element, Event, HtmlElement};
use wikitoc_core::{LanguageSwitch, TocSession};

type Session = TocSession<FetchClient, DomView>;
type Listener = Closure<dyn FnMut(Event)>;

/// A TOC widget bound to one set of DOM elements.
///
/// # Example
///
/// ```javascript
/// const widget = new WikiToc({ toc: { userAgentContact: 'toc-widget@example.org' } });
/// widget.attach();               // button, form submit and language change
/// await widget.fetch();          // or trigger a fetch directly
/// ```
#[wasm_bindgen]
pub struct WikiToc {
    session: Rc<Session>,
    config: WidgetConfig,
    listeners: Vec<(Element, &'static str, Listener)>,
}

#[wasm_bindgen]
impl WikiToc {
    /// Create a widget from a configuration object (or `undefined` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WikiToc, JsValue> {
        let config = WidgetConfig::from_js(config)?;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| WikiTocError::dom("No document available"))?;
        let view = DomView::from_document(&document, &config)?;

        Ok(Self {
            session: Rc::new(TocSession::with_config(
                FetchClient::new(),
                view,
                config.toc.clone(),
            )),
            config,
            listeners: Vec::new(),
        })
    }

    /// Listen for the fetch button, the form submission and language changes.
    ///
    /// Calling it again replaces the previous listeners.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.detach();

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| WikiTocError::dom("No document available"))?;

        let button: HtmlElement = element_by_id(&document, &self.config.fetch_button_id)?;
        self.listen(button.into(), "click", fetch_listener(&self.session))?;

        if let Some(form) = document
            .query_selector(&self.config.form_selector)
            .map_err(|e| WikiTocError::dom(format!("Invalid selector: {:?}", e)))?
        {
            self.listen(form, "submit", fetch_listener(&self.session))?;
        } else {
            log::debug!("No form matches '{}'", self.config.form_selector);
        }

        let language: Element = self.session.view().language_element().clone().into();
        self.listen(language, "change", language_listener(&self.session))?;

        Ok(())
    }

    /// Remove every listener added by `attach`.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        for (target, event, listener) in self.listeners.drain(..) {
            if let Err(e) =
                target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }

    /// Fetch the TOC for the current inputs.
    ///
    /// Resolves once the TOC is shown; rejects with an `Error` whose `code`
    /// is `NETWORK_ERROR` or `API_ERROR` after the message has been shown.
    #[wasm_bindgen]
    pub fn fetch(&self) -> js_sys::Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            session
                .fetch_toc()
                .await
                .map_err(WikiTocError::from)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Apply the language-switch shortcut for the current selection.
    ///
    /// Resolves to `true` when the article was reloaded in the new language.
    #[wasm_bindgen(js_name = changeLanguage)]
    pub fn change_language(&self) -> js_sys::Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            let outcome = session
                .change_language()
                .await
                .map_err(WikiTocError::from)?;
            Ok(JsValue::from_bool(matches!(
                outcome,
                LanguageSwitch::Switched { .. }
            )))
        })
    }

    /// Title of the last successfully fetched article, as typed.
    #[wasm_bindgen(getter, js_name = currentArticle)]
    pub fn current_article(&self) -> Option<String> {
        self.session.snapshot().map(|s| s.article_title)
    }
}

impl WikiToc {
    fn listen(
        &mut self,
        target: Element,
        event: &'static str,
        listener: Listener,
    ) -> Result<(), WikiTocError> {
        target
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|e| WikiTocError::dom(format!("Failed to listen for {}: {:?}", event, e)))?;
        self.listeners.push((target, event, listener));
        Ok(())
    }
}

impl Drop for WikiToc {
    fn drop(&mut self) {
        self.detach();
    }
}

fn fetch_listener(session: &Rc<Session>) -> Listener {
    let session = session.clone();
    Closure::new(move |event: Event| {
        event.prevent_default();
        let session = session.clone();
        spawn_local(async move {
            // the session has already shown the message
            if let Err(err) = session.fetch_toc().await {
                log::debug!("Fetch ended with {}", err);
            }
        });
    })
}

fn language_listener(session: &Rc<Session>) -> Listener {
    let session = session.clone();
    Closure::new(move |_event: Event| {
        let session = session.clone();
        spawn_local(async move {
            match session.change_language().await {
                Ok(outcome) => log::debug!("Language change: {:?}", outcome),
                Err(err) => log::debug!("Language switch fetch ended with {}", err),
            }
        });
    })
}
