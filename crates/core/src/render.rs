//! HTML markup for the TOC container.

use crate::config::TocConfig;
use std::borrow::Cow;
use wikitoc_types::{TocNode, TocTree};

/// Renders the tree as nested unordered lists.
///
/// Each section links to `{article_url}#{anchor}`. Heading titles are
/// inserted as-is since the API delivers them as sanitized inline HTML;
/// everything else is escaped.
pub fn toc_markup(tree: &TocTree, article_url: &str, config: &TocConfig) -> String {
    let mut html = String::from("<ul class=\"toc-list\">");
    for node in &tree.roots {
        push_node(&mut html, node, article_url, config);
    }
    html.push_str("</ul>");
    html
}

fn push_node(html: &mut String, node: &TocNode, article_url: &str, config: &TocConfig) {
    match &node.section {
        Some(section) => {
            html.push_str("<li><a href=\"");
            html.push_str(&escape_html(article_url));
            html.push('#');
            html.push_str(&escape_html(&section.anchor_id));
            html.push('"');
            if config.open_links_in_new_tab {
                html.push_str(" target=\"_blank\"");
            }
            html.push_str("><span class=\"number\">");
            html.push_str(&escape_html(&section.number));
            html.push_str("</span> ");
            html.push_str(&section.title);
            html.push_str("</a>");
        }
        None => html.push_str("<li class=\"toc-gap\">"),
    }

    if !node.children.is_empty() || node.section.is_none() {
        html.push_str("<ul>");
        for child in &node.children {
            push_node(html, child, article_url, config);
        }
        html.push_str("</ul>");
    }
    html.push_str("</li>");
}

/// The alert block shown in place of the TOC.
pub fn error_markup(message: &str) -> String {
    format!("<p class=\"alert alert-error\">{}</p>", escape_html(message))
}

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
