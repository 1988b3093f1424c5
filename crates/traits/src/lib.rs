pub mod client;
pub mod view;

pub use client::{ArticleClient, HttpRequest, HttpResponse, InMemoryArticleClient, TransportError};
pub use view::{ContainerContent, InMemoryTocView, TocView};
