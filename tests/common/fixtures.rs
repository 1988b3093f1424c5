use serde_json::{Value, json};
use wikitoc::HttpResponse;

/// A parse response for the English "Rust (programming language)" article.
pub fn rust_article() -> Value {
    json!({
        "parse": {
            "title": "Rust (programming language)",
            "pageid": 29414838,
            "sections": [
                { "toclevel": 1, "level": "2", "line": "History", "number": "1", "index": "1", "anchor": "History" },
                { "toclevel": 2, "level": "3", "line": "Origins (2006–2012)", "number": "1.1", "index": "2", "anchor": "Origins_(2006–2012)" },
                { "toclevel": 2, "level": "3", "line": "Evolution", "number": "1.2", "index": "3", "anchor": "Evolution" },
                { "toclevel": 1, "level": "2", "line": "Syntax and features", "number": "2", "index": "4", "anchor": "Syntax_and_features" },
                { "toclevel": 3, "level": "4", "line": "<i>Ownership</i>", "number": "2.0.1", "index": "5", "anchor": "Ownership" },
                { "toclevel": 1, "level": "2", "line": "See also", "number": "3", "index": "6", "anchor": "See_also" }
            ],
            "langlinks": [
                { "lang": "de", "url": "https://de.wikipedia.org/wiki/Rust_(Programmiersprache)", "langname": "German", "autonym": "Deutsch", "*": "Rust (Programmiersprache)" },
                { "lang": "he", "url": "https://he.wikipedia.org/wiki/Rust", "langname": "Hebrew", "autonym": "עברית", "*": "ראסט (שפת תכנות)" }
            ]
        }
    })
}

/// The German counterpart, without further language links.
pub fn rust_article_de() -> Value {
    json!({
        "parse": {
            "title": "Rust (Programmiersprache)",
            "sections": [
                { "toclevel": 1, "line": "Geschichte", "number": "1", "anchor": "Geschichte" },
                { "toclevel": 1, "line": "Weblinks", "number": "2", "anchor": "Weblinks" }
            ],
            "langlinks": []
        }
    })
}

pub fn missing_page() -> Value {
    json!({
        "error": {
            "code": "missingtitle",
            "info": "No such page",
            "*": "See https://en.wikipedia.org/w/api.php for API usage."
        },
        "servedby": "mw-api-ext.eqiad.main-7d9f"
    })
}

pub fn ok(body: Value) -> HttpResponse {
    HttpResponse::ok(body.to_string())
}
