pub mod article;
pub mod document;
pub mod language;

pub use article::ArticleSnapshot;
pub use document::{SectionDescriptor, Sections, TocNode, TocTree};
pub use language::{LangLink, LanguageOption, TextDirection};
