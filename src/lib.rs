//! # wikitoc
//!
//! Fetches a Wikipedia article's table of contents through the MediaWiki
//! `action=parse` API and renders it as nested, clickable lists, with a
//! shortcut for reloading the same article in another language edition.
//!
//! This crate re-exports the workspace:
//! - [`types`]: sections, the nested tree, languages and the article snapshot
//! - [`traits`]: the `ArticleClient` and `TocView` seams with in-memory implementations
//! - [`core`]: the TOC builder, markup renderer, API handling and `TocSession`
//!
//! The browser bindings live in the `wikitoc-wasm` crate.
//!
//! ```ignore
//! let session = TocSession::new(client, view);
//! session.fetch_toc().await?;        // renders the TOC or an error into the view
//! session.change_language().await?;  // same article, newly selected language
//! ```

pub use wikitoc_core as core;
pub use wikitoc_traits as traits;
pub use wikitoc_types as types;

pub use wikitoc_core::{
    ArticleClient, ArticleRequest, ArticleSnapshot, ContainerContent, HttpRequest, HttpResponse,
    InMemoryArticleClient, InMemoryTocView, LangLink, LanguageOption, LanguageSwitch,
    ParsedArticle, SectionDescriptor, TextDirection, TocConfig, TocError, TocNode, TocSession,
    TocTree, TocView, TransportError, build_toc, normalize_title,
};
pub use wikitoc_core::render::{error_markup, toc_markup};
