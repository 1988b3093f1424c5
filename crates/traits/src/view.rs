//! TocView trait for abstracting the widget's UI handles.
//!
//! The orchestrator reads the article title and the selected language from
//! the view, and writes TOC markup or an error message into its container.

use std::cell::RefCell;
use wikitoc_types::{LanguageOption, TextDirection};

/// The UI collaborator: three input handles and one output container.
pub trait TocView {
    /// Current raw value of the article-title field.
    fn article_input(&self) -> String;

    fn set_article_input(&self, value: &str);

    /// The language currently chosen in the language selector.
    fn selected_language(&self) -> LanguageOption;

    /// Empty the output container.
    fn clear(&self);

    /// Replace the container contents with TOC markup, tagged with a text direction.
    fn show_toc(&self, markup: &str, direction: TextDirection);

    /// Replace the container contents with a visible error message.
    fn show_error(&self, message: &str);
}

/// What the output container currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerContent {
    #[default]
    Empty,
    Toc {
        markup: String,
        direction: TextDirection,
    },
    Error(String),
}

#[derive(Debug)]
struct ViewState {
    article: String,
    language: LanguageOption,
    content: ContainerContent,
    renders: usize,
}

/// A headless view holding its state in memory.
#[derive(Debug)]
pub struct InMemoryTocView {
    state: RefCell<ViewState>,
}

impl InMemoryTocView {
    pub fn new(article: impl Into<String>, language: LanguageOption) -> Self {
        Self {
            state: RefCell::new(ViewState {
                article: article.into(),
                language,
                content: ContainerContent::Empty,
                renders: 0,
            }),
        }
    }

    /// Simulate the user picking another language.
    pub fn select_language(&self, language: LanguageOption) {
        self.state.borrow_mut().language = language;
    }

    pub fn content(&self) -> ContainerContent {
        self.state.borrow().content.clone()
    }

    /// The error message on display, if any.
    pub fn error(&self) -> Option<String> {
        match &self.state.borrow().content {
            ContainerContent::Error(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Number of times a TOC or an error was shown.
    pub fn render_count(&self) -> usize {
        self.state.borrow().renders
    }
}

impl TocView for InMemoryTocView {
    fn article_input(&self) -> String {
        self.state.borrow().article.clone()
    }

    fn set_article_input(&self, value: &str) {
        self.state.borrow_mut().article = value.to_string();
    }

    fn selected_language(&self) -> LanguageOption {
        self.state.borrow().language.clone()
    }

    fn clear(&self) {
        self.state.borrow_mut().content = ContainerContent::Empty;
    }

    fn show_toc(&self, markup: &str, direction: TextDirection) {
        let mut state = self.state.borrow_mut();
        state.content = ContainerContent::Toc {
            markup: markup.to_string(),
            direction,
        };
        state.renders += 1;
    }

    fn show_error(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.content = ContainerContent::Error(message.to_string());
        state.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_view_inputs() {
        let view = InMemoryTocView::new("Rust", LanguageOption::ltr("en"));
        assert_eq!(view.article_input(), "Rust");

        view.set_article_input("Ferris");
        view.select_language(LanguageOption::new("ar", TextDirection::Rtl));
        assert_eq!(view.article_input(), "Ferris");
        assert_eq!(view.selected_language().direction, TextDirection::Rtl);
    }

    #[test]
    fn test_in_memory_view_container() {
        let view = InMemoryTocView::new("", LanguageOption::ltr("en"));
        assert_eq!(view.content(), ContainerContent::Empty);

        view.show_error("boom");
        assert_eq!(view.error().as_deref(), Some("boom"));

        view.clear();
        assert_eq!(view.content(), ContainerContent::Empty);
        assert!(view.error().is_none());

        view.show_toc("<ul></ul>", TextDirection::Ltr);
        assert!(matches!(view.content(), ContainerContent::Toc { .. }));
        assert_eq!(view.render_count(), 2);
    }
}
