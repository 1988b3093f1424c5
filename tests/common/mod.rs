pub mod fixtures;

use wikitoc::{
    HttpResponse, InMemoryArticleClient, InMemoryTocView, LanguageOption, TocConfig, TocSession,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub type TestSession = TocSession<InMemoryArticleClient, InMemoryTocView>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A session whose client answers every request with `response`.
pub fn session_answering(response: HttpResponse, article: &str, language: &str) -> TestSession {
    init_logging();
    TocSession::with_config(
        InMemoryArticleClient::answering(response),
        InMemoryTocView::new(article, LanguageOption::ltr(language)),
        TocConfig::default().with_user_agent_contact("wikitoc-tests@example.org"),
    )
}

/// Drive a session future to completion.
pub fn run<F: std::future::Future>(future: F) -> Result<F::Output, std::io::Error> {
    Ok(tokio::runtime::Runtime::new()?.block_on(future))
}
