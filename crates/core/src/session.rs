//! The fetch orchestrator behind one widget instance.
//!
//! A [`TocSession`] owns the transport, the view, and the single
//! [`ArticleSnapshot`] slot. All calls come from one logical thread; a new
//! fetch does not cancel an older one still in flight, so whichever response
//! arrives last decides what the container shows.

use crate::api::{self, ArticleRequest};
use crate::config::TocConfig;
use crate::error::TocError;
use crate::render;
use crate::toc::build_toc;
use std::cell::RefCell;
use wikitoc_traits::{ArticleClient, TocView};
use wikitoc_types::{ArticleSnapshot, LanguageOption};

/// Outcome of a language change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSwitch {
    /// The linked article was loaded in the new language.
    Switched { title: String },
    /// Nothing has been fetched successfully since the last attempt started.
    NoSnapshot,
    /// The article input no longer holds the fetched title.
    ArticleChanged,
    /// The fetched article has no counterpart in the selected language.
    NoLink,
}

pub struct TocSession<C, V> {
    client: C,
    view: V,
    config: TocConfig,
    snapshot: RefCell<Option<ArticleSnapshot>>,
}

impl<C: ArticleClient, V: TocView> TocSession<C, V> {
    pub fn new(client: C, view: V) -> Self {
        Self::with_config(client, view, TocConfig::default())
    }

    pub fn with_config(client: C, view: V, config: TocConfig) -> Self {
        Self {
            client,
            view,
            config,
            snapshot: RefCell::new(None),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    /// The last successfully fetched article, if the latest attempt succeeded.
    pub fn snapshot(&self) -> Option<ArticleSnapshot> {
        self.snapshot.borrow().clone()
    }

    /// Fetch the TOC for whatever the view's inputs currently hold.
    pub async fn fetch_toc(&self) -> Result<(), TocError> {
        let title = self.view.article_input();
        let language = self.view.selected_language();
        self.fetch_article(&title, &language).await
    }

    /// Fetch and render the TOC of `title` in `language`.
    ///
    /// The container and the snapshot are cleared first. On failure the
    /// error message is shown before the error is returned.
    pub async fn fetch_article(
        &self,
        title: &str,
        language: &LanguageOption,
    ) -> Result<(), TocError> {
        *self.snapshot.borrow_mut() = None;
        self.view.clear();

        match self.load(title, language).await {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("Failed to fetch TOC of '{}' ({}): {}", title, language.id, err);
                self.view.show_error(err.user_message());
                Err(err)
            }
        }
    }

    async fn load(&self, title: &str, language: &LanguageOption) -> Result<(), TocError> {
        let request = ArticleRequest::new(&self.config, title, language)?;
        log::debug!("Requesting {} via {}", request.http.url, self.client.name());

        let response = self.client.get(&request.http).await?;
        let article = api::interpret_response(&response)?;

        let tree = build_toc(&article.sections);
        let markup = render::toc_markup(&tree, &request.article_url, &self.config);
        log::debug!(
            "Rendered {} sections ({} bytes) for '{}'",
            article.sections.len(),
            markup.len(),
            request.normalized_title
        );

        *self.snapshot.borrow_mut() = Some(ArticleSnapshot::new(title, article.lang_links));
        self.view.show_toc(&markup, language.direction);
        Ok(())
    }

    /// React to a change of the language selector.
    ///
    /// When the article input still holds the last fetched title (compared
    /// literally) and that article links to the selected language, the input
    /// is replaced by the linked title and one fetch is issued. Otherwise
    /// nothing happens.
    pub async fn change_language(&self) -> Result<LanguageSwitch, TocError> {
        let language = self.view.selected_language();
        let current = self.view.article_input();

        let title = {
            let snapshot = self.snapshot.borrow();
            let Some(snapshot) = snapshot.as_ref() else {
                return Ok(LanguageSwitch::NoSnapshot);
            };
            if snapshot.article_title != current {
                return Ok(LanguageSwitch::ArticleChanged);
            }
            let linked = snapshot.link_for(&language.id).map(|link| link.title.clone());
            match linked {
                Some(title) => title,
                None => return Ok(LanguageSwitch::NoLink),
            }
        };

        log::info!("Switching '{}' to {} edition: '{}'", current, language.id, title);
        self.view.set_article_input(&title);
        self.fetch_toc().await?;
        Ok(LanguageSwitch::Switched { title })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wikitoc_traits::{ContainerContent, HttpResponse, InMemoryArticleClient, InMemoryTocView};
    use wikitoc_types::{LangLink, TextDirection};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    fn rust_page() -> HttpResponse {
        HttpResponse::ok(
            json!({
                "parse": {
                    "sections": [
                        { "toclevel": 1, "line": "History", "number": "1", "anchor": "History" },
                        { "toclevel": 2, "line": "Origins", "number": "1.1", "anchor": "Origins" }
                    ],
                    "langlinks": [ { "lang": "fr", "*": "Rust (langage)" } ]
                }
            })
            .to_string(),
        )
    }

    fn session(
        response: HttpResponse,
        title: &str,
    ) -> TocSession<InMemoryArticleClient, InMemoryTocView> {
        TocSession::new(
            InMemoryArticleClient::answering(response),
            InMemoryTocView::new(title, LanguageOption::ltr("en")),
        )
    }

    #[test]
    fn test_fetch_success_renders_and_stores_snapshot() {
        let session = session(rust_page(), "Rust  language");
        block_on(session.fetch_toc()).unwrap();

        match session.view().content() {
            ContainerContent::Toc { markup, direction } => {
                assert_eq!(direction, TextDirection::Ltr);
                assert!(markup.contains("https://en.wikipedia.org/wiki/Rust_language#Origins"));
            }
            other => panic!("expected a TOC, got {:?}", other),
        }

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.article_title, "Rust  language");
        assert_eq!(snapshot.cross_language_links, vec![LangLink::new("fr", "Rust (langage)")]);
    }

    #[test]
    fn test_default_session_identifies_itself() {
        let session = session(rust_page(), "Rust");
        block_on(session.fetch_toc()).unwrap();

        let requests = session.client().requests();
        assert_eq!(
            requests[0].api_user_agent.as_deref(),
            Some(crate::config::DEFAULT_USER_AGENT_CONTACT)
        );
    }

    #[test]
    fn test_failed_fetch_clears_snapshot() {
        let session = session(rust_page(), "Rust");
        block_on(session.fetch_toc()).unwrap();
        assert!(session.snapshot().is_some());

        session
            .client()
            .set_fallback(HttpResponse::new(500, "Internal Server Error"));
        let err = block_on(session.fetch_toc()).unwrap_err();

        assert!(matches!(err, TocError::Network(_)));
        assert!(session.snapshot().is_none());
        assert_eq!(session.view().error().as_deref(), Some("A network error occurred"));
    }

    #[test]
    fn test_rtl_direction_is_passed_to_view() {
        let session = session(rust_page(), "Rust");
        session
            .view()
            .select_language(LanguageOption::new("he", TextDirection::Rtl));
        block_on(session.fetch_toc()).unwrap();

        assert!(matches!(
            session.view().content(),
            ContainerContent::Toc { direction: TextDirection::Rtl, .. }
        ));
        assert!(session.client().requests()[0].url.starts_with("https://he.wikipedia.org/"));
    }

    #[test]
    fn test_change_language_without_snapshot() {
        let session = session(rust_page(), "Rust");
        let outcome = block_on(session.change_language()).unwrap();
        assert_eq!(outcome, LanguageSwitch::NoSnapshot);
        assert_eq!(session.client().request_count(), 0);
    }

    #[test]
    fn test_change_language_after_edit() {
        let session = session(rust_page(), "Rust");
        block_on(session.fetch_toc()).unwrap();

        session.view().set_article_input("Rust ");
        session.view().select_language(LanguageOption::ltr("fr"));
        let outcome = block_on(session.change_language()).unwrap();

        assert_eq!(outcome, LanguageSwitch::ArticleChanged);
        assert_eq!(session.client().request_count(), 1);
    }
}
