use std::path::Path;
use time::OffsetDateTime;

pub const MARKDOWN_EXTENSION: &str = ".md";

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Escape text for embedding inside a JavaScript template literal in an inline `<script>`
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
        .replace('<', "\\x3C")
}

/// Encode a value as a JavaScript string literal safe inside an inline `<script>`
pub fn js_string_literal(text: &str) -> String {
    serde_json::Value::String(text.to_string())
        .to_string()
        .replace('<', "\\u003c")
}

/// Percent-decode a request path; invalid UTF-8 sequences become U+FFFD
pub fn decode_path(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Percent-encode each segment of a relative path for use in an href
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a request path or file name names a Markdown document
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXTENSION)
}

/// Generate last modified metadata HTML
pub fn last_modified_html(path: &Path) -> String {
    let Ok(mtime) = std::fs::metadata(path).and_then(|m| m.modified()) else {
        return String::new();
    };
    let Ok(dur) = mtime.duration_since(std::time::UNIX_EPOCH) else {
        return String::new();
    };
    let Ok(dt) = OffsetDateTime::from_unix_timestamp(dur.as_secs() as i64) else {
        return String::new();
    };
    match dt.format(&time::format_description::well_known::Rfc3339) {
        Ok(s) => format!("<p class=\"meta\">Last modified: {}</p>", escape_html(&s)),
        Err(_) => String::new(),
    }
}
