//! Embedded stylesheets; pages never fetch external CSS.

pub const BASE: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    color: #24292e;
    background: #fff;
}
a { color: #0366d6; text-decoration: none; }
a:hover { text-decoration: underline; }
.back-link { color: #586069; }
.meta { color: #6a737d; font-size: 13px; }
"#;

pub const INDEX: &str = r#"
body { max-width: 800px; margin: 40px auto; padding: 0 20px; }
h1 { border-bottom: 1px solid #eaecef; padding-bottom: 10px; }
ul.listing { list-style: none; padding: 0; }
ul.listing li { margin: 10px 0; }
ul.listing a { font-size: 16px; }
ul.listing a.edit-link { margin-left: 10px; font-size: 14px; }
.file-icon { margin-right: 8px; }
.empty { color: #6a737d; }
"#;

/// Shared by the viewer article and the editor's preview pane
pub const ARTICLE: &str = r#"
.article { line-height: 1.6; }
.article h1, .article h2, .article h3, .article h4, .article h5, .article h6 {
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}
.article h1 { font-size: 2em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
.article h2 { font-size: 1.5em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
.article code {
    background-color: rgba(27,31,35,0.05);
    border-radius: 3px;
    padding: 0.2em 0.4em;
    font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 85%;
}
.article pre { background-color: #f6f8fa; border-radius: 3px; padding: 16px; overflow: auto; }
.article pre code { background-color: transparent; padding: 0; }
.article table { border-collapse: collapse; width: 100%; margin: 16px 0; }
.article table th, .article table td { padding: 6px 13px; border: 1px solid #dfe2e5; }
.article table th { font-weight: 600; background-color: #f6f8fa; }
.article table tr:nth-child(2n) { background-color: #f6f8fa; }
.article blockquote { margin: 0; padding: 0 1em; color: #6a737d; border-left: 0.25em solid #dfe2e5; }
.article ul, .article ol { padding-left: 2em; }
.article dt { font-weight: 600; }
.article .footnote-definition { font-size: 90%; color: #586069; }
"#;

pub const VIEWER: &str = r#"
body { max-width: 900px; margin: 40px auto; padding: 0 20px; }
.back-link { display: inline-block; margin-bottom: 20px; }
.filename { color: #586069; font-size: 14px; margin-bottom: 8px; }
.filename a { margin-left: 10px; }
"#;

pub const EDITOR: &str = r#"
body { margin: 0; padding: 20px; background: #f6f8fa; }
.header {
    max-width: 1200px;
    margin: 0 auto 20px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.filename { font-weight: 600; color: #24292e; }
.editor-container {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
    height: calc(100vh - 120px);
}
.panel {
    background: #fff;
    border: 1px solid #d1d5da;
    border-radius: 6px;
    overflow: hidden;
    display: flex;
    flex-direction: column;
}
.panel-header {
    background: #f6f8fa;
    padding: 10px 15px;
    border-bottom: 1px solid #d1d5da;
    font-weight: 600;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
textarea {
    flex: 1;
    border: none;
    padding: 15px;
    font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
    font-size: 14px;
    resize: none;
    outline: none;
}
.preview { flex: 1; padding: 15px; overflow-y: auto; }
.btn {
    background: #2ea44f;
    color: white;
    border: none;
    padding: 8px 16px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 14px;
    font-weight: 600;
}
.btn:hover { background: #2c974b; }
.btn:disabled { background: #94d3a2; cursor: not-allowed; }
.message { margin-left: 10px; font-size: 14px; }
.message.ok { color: #28a745; }
.message.error { color: #d73a49; }
"#;
