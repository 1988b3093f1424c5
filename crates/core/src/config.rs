//! Settings shared by the request builder and the markup renderer.

use serde::Deserialize;

/// Default wiki family host; language codes are prepended as subdomains.
pub const DEFAULT_DOMAIN: &str = "wikipedia.org";

/// Identifies the widget in `Api-User-Agent` when no contact is configured.
pub const DEFAULT_USER_AGENT_CONTACT: &str = concat!("wikitoc/", env!("CARGO_PKG_VERSION"));

/// Configuration of a [`TocSession`](crate::session::TocSession).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocConfig {
    /// Host suffix, e.g. `wikipedia.org` for `https://en.wikipedia.org`.
    pub domain: String,
    /// Contact string appended to the user agent in the `Api-User-Agent` header.
    pub user_agent_contact: Option<String>,
    /// Whether TOC links carry `target="_blank"`.
    pub open_links_in_new_tab: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            user_agent_contact: Some(DEFAULT_USER_AGENT_CONTACT.to_string()),
            open_links_in_new_tab: true,
        }
    }
}

impl TocConfig {
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_user_agent_contact(mut self, contact: impl Into<String>) -> Self {
        self.user_agent_contact = Some(contact.into());
        self
    }

    pub fn with_links_in_new_tab(mut self, enabled: bool) -> Self {
        self.open_links_in_new_tab = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TocConfig =
            serde_json::from_str(r#"{ "userAgentContact": "toc@example.org" }"#).unwrap();
        assert_eq!(config.domain, "wikipedia.org");
        assert_eq!(config.user_agent_contact.as_deref(), Some("toc@example.org"));
        assert!(config.open_links_in_new_tab);
    }

    #[test]
    fn test_builder_methods() {
        let config = TocConfig::default()
            .with_domain("wikivoyage.org")
            .with_links_in_new_tab(false);
        assert_eq!(config.domain, "wikivoyage.org");
        assert!(!config.open_links_in_new_tab);
    }

    #[test]
    fn test_default_identifies_widget() {
        let config: TocConfig = serde_json::from_str("{}").unwrap();
        let contact = config.user_agent_contact.unwrap();
        assert!(contact.starts_with("wikitoc/"));
        assert_eq!(contact, DEFAULT_USER_AGENT_CONTACT);
    }
}
