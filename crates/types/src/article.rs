use crate::language::LangLink;
use serde::Serialize;

/// The last successfully fetched article and its cross-language links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSnapshot {
    /// The title exactly as the user typed it.
    pub article_title: String,
    pub cross_language_links: Vec<LangLink>,
}

impl ArticleSnapshot {
    pub fn new(article_title: impl Into<String>, cross_language_links: Vec<LangLink>) -> Self {
        Self {
            article_title: article_title.into(),
            cross_language_links,
        }
    }

    /// Returns the first link into the given language edition.
    pub fn link_for(&self, lang: &str) -> Option<&LangLink> {
        self.cross_language_links.iter().find(|link| link.lang == lang)
    }
}
