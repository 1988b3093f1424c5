//! # wikitoc-core
//!
//! Platform-agnostic core of the Wikipedia table-of-contents widget.
//!
//! - **toc**: nests a flat, ordered heading list by level
//! - **render**: turns the nested tree (or an error) into container markup
//! - **api**: builds `action=parse` requests and decodes their responses
//! - **session**: the fetch orchestrator and the language-switch shortcut
//! - **config**: domain, user-agent contact and link settings
//! - **error**: the network/API error taxonomy
//!
//! ## Design Principle
//!
//! Nothing here touches the DOM or the network directly. The HTTP call goes
//! through [`ArticleClient`] and every UI read or write through [`TocView`],
//! so the same session drives the browser widget and the headless tests.

// Re-export foundation crates
pub use wikitoc_traits as traits;
pub use wikitoc_types as types;

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod toc;

pub use api::{ArticleRequest, ParsedArticle, normalize_title};
pub use config::TocConfig;
pub use error::TocError;
pub use session::{LanguageSwitch, TocSession};
pub use toc::build_toc;

pub use traits::{
    ArticleClient, ContainerContent, HttpRequest, HttpResponse, InMemoryArticleClient,
    InMemoryTocView, TocView, TransportError,
};
pub use types::{
    ArticleSnapshot, LangLink, LanguageOption, SectionDescriptor, TextDirection, TocNode, TocTree,
};
