//! WebAssembly bindings for the wikitoc widget.
//!
//! This crate runs the Wikipedia table-of-contents widget in the browser:
//! it fetches `action=parse` data with the Fetch API, nests the sections and
//! renders them into the page.
//!
//! # Architecture
//!
//! The platform-agnostic session from `wikitoc-core` is driven by two
//! browser-specific collaborators:
//!
//! - [`client`] - `FetchClient`, the `ArticleClient` over `window.fetch`
//! - [`dom`] - `DomView`, the `TocView` over the article input, the language
//!   selector and the TOC container
//!
//! ## Module Structure
//!
//! - [`widget`] - `WikiToc`, the exported widget and its event wiring
//! - [`config`] - element ids/selectors and core settings read from JavaScript
//! - [`error`] - Error types with JavaScript interop
//!
//! Everything runs on the page's single thread. Event handlers spawn local
//! futures; a newer fetch does not cancel an older one.
//!
//! # Example
//!
//! ```javascript
//! import init, { WikiToc } from '@wikitoc/wasm';
//!
//! await init();
//!
//! const widget = new WikiToc({ toc: { userAgentContact: 'toc-widget@example.org' } });
//! widget.attach();
//! ```

pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod widget;

pub use client::FetchClient;
pub use config::WidgetConfig;
pub use dom::DomView;
pub use error::{ErrorCode, WikiTocError};
pub use widget::WikiToc;

use wasm_bindgen::prelude::*;
use wikitoc_core::{SectionDescriptor, TocConfig, build_toc, render};

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the wikitoc-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Render a list of sections (`{ level, number, title, anchorId }`) as TOC
/// markup linking into `articleUrl`.
#[wasm_bindgen(js_name = renderTocHtml)]
pub fn render_toc_html(sections: JsValue, article_url: &str) -> Result<String, JsValue> {
    let sections: Vec<SectionDescriptor> = serde_wasm_bindgen::from_value(sections)
        .map_err(|e| WikiTocError::config(format!("Invalid sections: {}", e)))?;
    let tree = build_toc(&sections);
    Ok(render::toc_markup(&tree, article_url, &TocConfig::default()))
}
