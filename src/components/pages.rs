use crate::components::editor_script::EDITOR_SCRIPT;
use crate::components::styles;
use crate::components::templates::{TemplateComponent, TemplateContext};
use crate::utils::{encode_path, escape_attr, escape_html, escape_template_literal, js_string_literal};

/// Builds the index, viewer and editor pages
#[derive(Debug, Clone, Copy, Default)]
pub struct PageComponent {
    shell: TemplateComponent,
}

impl PageComponent {
    pub fn new() -> Self {
        Self { shell: TemplateComponent::new() }
    }

    /// List of links to view and edit each file
    pub fn index(&self, files: &[String]) -> String {
        let mut body = String::from("<h1>📝 Markdown Files</h1>\n");
        if files.is_empty() {
            body.push_str("<p class=\"empty\">No markdown files found.</p>\n");
        } else {
            body.push_str("<ul class=\"listing\">\n");
            for file in files {
                let href = escape_attr(&encode_path(file));
                body.push_str(&format!(
                    "  <li><span class=\"file-icon\">📄</span><a href=\"/{href}\">{name}</a> <a class=\"edit-link\" href=\"/edit/{href}\">[edit]</a></li>\n",
                    name = escape_html(file),
                ));
            }
            body.push_str("</ul>\n");
        }

        self.shell.render_shell(&TemplateContext {
            title: "Markdown Files",
            style: styles::INDEX,
            body: &body,
            scripts: &[],
        })
    }

    /// Rendered document with a back link and the file name
    pub fn viewer(&self, name: &str, fragment: &str, meta: &str) -> String {
        let href = escape_attr(&encode_path(name));
        let body = format!(
            "<a href=\"/\" class=\"back-link\">← Back to file list</a>\n\
             <div class=\"filename\">{name} <a href=\"/edit/{href}\">[edit]</a></div>\n\
             {meta}\n\
             <article class=\"article\">\n{fragment}</article>",
            name = escape_html(name),
        );

        let style = format!("{}{}", styles::ARTICLE, styles::VIEWER);
        self.shell.render_shell(&TemplateContext {
            title: name,
            style: &style,
            body: &body,
            scripts: &[],
        })
    }

    /// Links to the entries of a directory served by the static fallback
    pub fn directory(&self, name: &str, entries: &[String]) -> String {
        let dir = name.trim_matches('/');
        let title = format!("Directory listing for /{}", if dir.is_empty() { String::new() } else { format!("{dir}/") });

        let mut body = format!("<h1>{}</h1>\n<ul class=\"listing\">\n", escape_html(&title));
        for entry in entries {
            let target = if dir.is_empty() { entry.clone() } else { format!("{dir}/{entry}") };
            body.push_str(&format!(
                "  <li><a href=\"/{href}\">{label}</a></li>\n",
                href = escape_attr(&encode_path(&target)),
                label = escape_html(entry),
            ));
        }
        body.push_str("</ul>\n");

        self.shell.render_shell(&TemplateContext {
            title: &title,
            style: styles::INDEX,
            body: &body,
            scripts: &[],
        })
    }

    /// Split-pane editor pre-filled with the raw file content
    pub fn editor(&self, name: &str, content: &str) -> String {
        let href = escape_attr(&encode_path(name));
        let body = format!(
            "<div class=\"header\">\n\
             <a href=\"/\" class=\"back-link\">← Back to file list</a>\n\
             <div class=\"filename\">Editing: {name}</div>\n\
             <a href=\"/{href}\" class=\"back-link\">View rendered</a>\n\
             </div>\n\
             <div class=\"editor-container\">\n\
             <div class=\"panel\">\n\
             <div class=\"panel-header\">Editor<div><button class=\"btn\" id=\"save\">Save</button><span class=\"message\" id=\"message\"></span></div></div>\n\
             <textarea id=\"editor\" spellcheck=\"false\"></textarea>\n\
             </div>\n\
             <div class=\"panel\">\n\
             <div class=\"panel-header\">Preview</div>\n\
             <div class=\"preview article\" id=\"preview\"></div>\n\
             </div>\n\
             </div>",
            name = escape_html(name),
        );

        let data = format!(
            "const FILE_PATH = {};\nconst INITIAL_CONTENT = `{}`;",
            js_string_literal(name),
            escape_template_literal(content),
        );

        let style = format!("{}{}", styles::ARTICLE, styles::EDITOR);
        self.shell.render_shell(&TemplateContext {
            title: &format!("Edit: {}", name),
            style: &style,
            body: &body,
            scripts: &[data.as_str(), EDITOR_SCRIPT],
        })
    }
}
