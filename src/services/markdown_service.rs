use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use crate::utils::escape_attr;

/// Service for handling markdown rendering
///
/// The extension set is fixed: footnotes and definition lists, fenced code blocks,
/// tables, `codehilite` class annotations on code blocks, and soft line breaks
/// rendered as `<br />`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownService;

impl MarkdownService {
    /// Create a new markdown service
    pub fn new() -> Self {
        Self
    }

    /// Parser options for the fixed extension set
    pub fn options(&self) -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_DEFINITION_LIST);
        options
    }

    /// Render Markdown text to an HTML fragment
    pub fn render(&self, content: &str) -> String {
        let events = Parser::new_ext(content, self.options()).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            Event::Start(Tag::CodeBlock(kind)) => Event::Html(code_block_open(&kind)),
            Event::End(TagEnd::CodeBlock) => Event::Html(CowStr::Borrowed("</code></pre></div>\n")),
            other => other,
        });

        let mut out = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut out, events);
        out
    }
}

fn code_block_open(kind: &CodeBlockKind) -> CowStr<'static> {
    let lang = match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
        CodeBlockKind::Indented => "",
    };
    if lang.is_empty() {
        CowStr::Borrowed("<div class=\"codehilite\"><pre><code>")
    } else {
        CowStr::from(format!(
            "<div class=\"codehilite\"><pre><code class=\"language-{}\">",
            escape_attr(lang)
        ))
    }
}
