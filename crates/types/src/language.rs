//! Language editions and the cross-language links between them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text direction of a language edition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Reads a direction attribute value. Anything other than `rtl` is
    /// left-to-right, including a missing attribute.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("rtl") => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    /// The CSS class the TOC container carries for this direction.
    pub fn css_class(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "direction-ltr",
            TextDirection::Rtl => "direction-rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable language edition: its API subdomain code and text direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub id: String,
    #[serde(default)]
    pub direction: TextDirection,
}

impl LanguageOption {
    pub fn new(id: impl Into<String>, direction: TextDirection) -> Self {
        Self {
            id: id.into(),
            direction,
        }
    }

    pub fn ltr(id: impl Into<String>) -> Self {
        Self::new(id, TextDirection::Ltr)
    }
}

/// The same article in another language edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangLink {
    pub lang: String,
    pub title: String,
}

impl LangLink {
    pub fn new(lang: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
        }
    }
}
