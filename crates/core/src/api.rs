//! Request composition and response interpretation for the MediaWiki
//! `action=parse` endpoint.

use crate::config::TocConfig;
use crate::error::TocError;
use serde::Deserialize;
use url::Url;
use wikitoc_traits::{HttpRequest, HttpResponse};
use wikitoc_types::{LangLink, LanguageOption, SectionDescriptor};

/// Replaces every run of whitespace with a single underscore.
///
/// Whitespace is the set browsers match with `\s`: Unicode `White_Space`
/// without NEL, plus the byte order mark. Nothing else is escaped; URL
/// encoding happens when the request is built.
pub fn normalize_title(title: &str) -> String {
    let mut normalized = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if is_title_whitespace(c) {
            if !in_whitespace {
                normalized.push('_');
            }
            in_whitespace = true;
        } else {
            normalized.push(c);
            in_whitespace = false;
        }
    }
    normalized
}

fn is_title_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// `https://{lang}.{domain}`
fn origin(config: &TocConfig, language: &LanguageOption) -> Result<String, TocError> {
    let valid = !language.id.is_empty()
        && language
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(TocError::Network(format!(
            "invalid language code '{}'",
            language.id
        )));
    }
    Ok(format!("https://{}.{}", language.id, config.domain))
}

/// Everything needed to fetch and present one article's TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub normalized_title: String,
    /// The API call.
    pub http: HttpRequest,
    /// The public page the TOC entries link into.
    pub article_url: String,
}

impl ArticleRequest {
    pub fn new(
        config: &TocConfig,
        title: &str,
        language: &LanguageOption,
    ) -> Result<Self, TocError> {
        let normalized_title = normalize_title(title);
        let origin = origin(config, language)?;

        let endpoint = format!("{origin}/w/api.php");
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("origin", "*"),
                ("format", "json"),
                ("action", "parse"),
                ("prop", "sections|langlinks"),
                ("page", normalized_title.as_str()),
            ],
        )
        .map_err(|e| TocError::Network(format!("invalid request URL '{endpoint}': {e}")))?;

        let mut http = HttpRequest::get(url.as_str());
        if let Some(contact) = &config.user_agent_contact {
            http = http.with_api_user_agent(contact.as_str());
        }

        let article_url = format!("{origin}/wiki/{normalized_title}");

        Ok(Self {
            normalized_title,
            http,
            article_url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    parse: Option<ParsePayload>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    #[serde(default)]
    sections: Vec<RawSection>,
    #[serde(default)]
    langlinks: Vec<RawLangLink>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    toclevel: RawLevel,
    #[serde(default)]
    number: String,
    #[serde(default)]
    line: String,
    #[serde(default)]
    anchor: String,
}

/// `toclevel` arrives as a number, but older API formats send a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(u32),
    Text(String),
}

impl RawLevel {
    fn value(&self) -> Option<u32> {
        match self {
            RawLevel::Number(n) => Some(*n),
            RawLevel::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLangLink {
    #[serde(default)]
    lang: String,
    #[serde(default, rename = "*")]
    title: String,
}

/// The useful part of a successful parse response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    pub sections: Vec<SectionDescriptor>,
    pub lang_links: Vec<LangLink>,
}

/// Checks the transport status, then decodes the body.
pub fn interpret_response(response: &HttpResponse) -> Result<ParsedArticle, TocError> {
    if !response.is_success() {
        return Err(TocError::Network(format!("HTTP status {}", response.status)));
    }
    parse_body(&response.body)
}

/// Decodes a parse response body.
///
/// An `error` member wins over everything else; its `info` text becomes the
/// message when it is a non-empty string. A body without sections is an
/// error too.
pub fn parse_body(body: &str) -> Result<ParsedArticle, TocError> {
    let envelope: ApiEnvelope = serde_json::from_str(body).map_err(|e| {
        log::warn!("Undecodable API response: {}", e);
        TocError::api_generic()
    })?;

    if let Some(error) = envelope.error {
        let info = error
            .get("info")
            .and_then(|info| info.as_str())
            .filter(|info| !info.is_empty())
            .map(str::to_string);
        if info.is_none() {
            log::warn!("API error without description: {}", error);
        }
        return Err(TocError::Api { info });
    }

    let payload = envelope.parse.ok_or_else(TocError::api_generic)?;
    if payload.sections.is_empty() {
        return Err(TocError::api_generic());
    }

    let sections = payload
        .sections
        .into_iter()
        .map(|raw| -> Result<SectionDescriptor, TocError> {
            let level = raw.toclevel.value().ok_or_else(|| {
                log::warn!("Unreadable toclevel for section '{}'", raw.number);
                TocError::api_generic()
            })?;
            Ok(SectionDescriptor {
                level,
                number: raw.number,
                title: raw.line,
                anchor_id: raw.anchor,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let lang_links = payload
        .langlinks
        .into_iter()
        .filter(|raw| {
            let usable = !raw.lang.is_empty() && !raw.title.is_empty();
            if !usable {
                log::debug!("Skipping incomplete language link {:?}", raw);
            }
            usable
        })
        .map(|raw| LangLink::new(raw.lang, raw.title))
        .collect();

    Ok(ParsedArticle {
        sections,
        lang_links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT_CONTACT;
    use serde_json::json;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("Rust"), "Rust");
        assert_eq!(normalize_title("Rust  programming\tlanguage"), "Rust_programming_language");
        assert_eq!(normalize_title(" padded "), "_padded_");
        assert_eq!(normalize_title("a\u{00a0}b"), "a_b");
    }

    #[test]
    fn test_normalize_title_matches_browser_whitespace() {
        assert_eq!(normalize_title("a\u{feff}b"), "a_b");
        assert_eq!(normalize_title("a\u{0085}b"), "a\u{0085}b");
        assert_eq!(normalize_title("a\u{0085}b\u{feff}c"), "a\u{0085}b_c");
        assert_eq!(normalize_title("a\u{2028}\u{3000}b"), "a_b");
    }

    #[test]
    fn test_request_urls() {
        let config = TocConfig::default();
        let request = ArticleRequest::new(
            &config,
            "Rust (programming language)",
            &LanguageOption::ltr("en"),
        )
        .unwrap();

        assert_eq!(request.normalized_title, "Rust_(programming_language)");
        assert_eq!(
            request.http.url,
            "https://en.wikipedia.org/w/api.php?origin=*&format=json&action=parse\
             &prop=sections%7Clanglinks&page=Rust_%28programming_language%29"
        );
        assert_eq!(
            request.article_url,
            "https://en.wikipedia.org/wiki/Rust_(programming_language)"
        );
        assert_eq!(
            request.http.api_user_agent.as_deref(),
            Some(DEFAULT_USER_AGENT_CONTACT)
        );
    }

    #[test]
    fn test_request_carries_contact() {
        let config = TocConfig::default().with_user_agent_contact("toc@example.org");
        let request = ArticleRequest::new(&config, "Rust", &LanguageOption::ltr("de")).unwrap();
        assert_eq!(request.http.api_user_agent.as_deref(), Some("toc@example.org"));
        assert!(request.http.url.starts_with("https://de.wikipedia.org/"));
    }

    #[test]
    fn test_request_rejects_bad_language() {
        let config = TocConfig::default();
        for id in ["", "en/evil", "en.wikipedia.org#"] {
            let result = ArticleRequest::new(&config, "Rust", &LanguageOption::ltr(id));
            assert!(matches!(result, Err(TocError::Network(_))), "{id}");
        }
    }

    #[test]
    fn test_parse_success() {
        let body = json!({
            "parse": {
                "title": "Rust",
                "sections": [
                    { "toclevel": 1, "level": "2", "line": "History", "number": "1", "anchor": "History" },
                    { "toclevel": "2", "level": "3", "line": "Early", "number": "1.1", "anchor": "Early" }
                ],
                "langlinks": [
                    { "lang": "de", "url": "https://de.wikipedia.org/wiki/Rust", "*": "Rust (Programmiersprache)" }
                ]
            }
        })
        .to_string();

        let article = parse_body(&body).unwrap();
        assert_eq!(
            article.sections,
            vec![
                SectionDescriptor::new(1, "1", "History", "History"),
                SectionDescriptor::new(2, "1.1", "Early", "Early"),
            ]
        );
        assert_eq!(
            article.lang_links,
            vec![LangLink::new("de", "Rust (Programmiersprache)")]
        );
    }

    #[test]
    fn test_parse_without_langlinks() {
        let body = json!({
            "parse": { "sections": [ { "toclevel": 1, "line": "A", "number": "1", "anchor": "A" } ] }
        })
        .to_string();
        assert!(parse_body(&body).unwrap().lang_links.is_empty());
    }

    #[test]
    fn test_incomplete_langlinks_do_not_block_toc() {
        let body = json!({
            "parse": {
                "sections": [ { "toclevel": 1, "line": "A", "number": "1", "anchor": "A" } ],
                "langlinks": [
                    { "lang": "fr", "url": "https://fr.wikipedia.org/wiki/A" },
                    { "lang": "de", "*": "" },
                    { "*": "Orphan" },
                    { "lang": "es", "*": "A (letra)" }
                ]
            }
        })
        .to_string();

        let article = parse_body(&body).unwrap();
        assert_eq!(article.sections.len(), 1);
        assert_eq!(article.lang_links, vec![LangLink::new("es", "A (letra)")]);
    }

    #[test]
    fn test_api_error_with_info() {
        let body = json!({
            "error": { "code": "missingtitle", "info": "No such page", "*": "See https://en.wikipedia.org/w/api.php" }
        })
        .to_string();
        let err = parse_body(&body).unwrap_err();
        assert_eq!(err.user_message(), "No such page");
    }

    #[test]
    fn test_api_error_without_info() {
        let body = json!({ "error": { "code": "internal_api_error" } }).to_string();
        let err = parse_body(&body).unwrap_err();
        assert_eq!(err, TocError::api_generic());
        assert_eq!(err.user_message(), "An error occurred while fetching data");
    }

    #[test]
    fn test_empty_sections_is_an_error() {
        let body = json!({ "parse": { "sections": [], "langlinks": [] } }).to_string();
        assert_eq!(parse_body(&body).unwrap_err(), TocError::api_generic());
    }

    #[test]
    fn test_missing_parse_and_garbage_bodies() {
        assert_eq!(parse_body("{}").unwrap_err(), TocError::api_generic());
        assert_eq!(parse_body("<html>").unwrap_err(), TocError::api_generic());
    }

    #[test]
    fn test_null_error_is_ignored() {
        let body = json!({
            "error": null,
            "parse": { "sections": [ { "toclevel": 1, "line": "A", "number": "1", "anchor": "A" } ] }
        })
        .to_string();
        assert!(parse_body(&body).is_ok());
    }

    #[test]
    fn test_non_ok_status_is_network_error() {
        let response = HttpResponse::new(503, "Service Unavailable");
        let err = interpret_response(&response).unwrap_err();
        assert!(matches!(err, TocError::Network(_)));
        assert_eq!(err.user_message(), "A network error occurred");
    }
}
