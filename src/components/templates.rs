use crate::components::styles;
use crate::utils::escape_html;

/// Data needed to wrap a fragment in a full HTML document
#[derive(Debug, Clone, Default)]
pub struct TemplateContext<'a> {
    pub title: &'a str,
    /// Page-specific CSS appended after the base stylesheet
    pub style: &'a str,
    pub body: &'a str,
    /// Inline scripts placed at the end of `<body>`, in order
    pub scripts: &'a [&'a str],
}

/// Component for handling the HTML document shell
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateComponent;

impl TemplateComponent {
    /// Create a new template component
    pub fn new() -> Self {
        Self
    }

    /// Render a self-contained HTML document; the title is escaped, the body is not
    pub fn render_shell(&self, context: &TemplateContext) -> String {
        let mut html = String::with_capacity(
            context.body.len() + context.style.len() + styles::BASE.len() + 512,
        );
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(context.title)));
        html.push_str("<style>");
        html.push_str(styles::BASE);
        html.push_str(context.style);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(context.body);
        for script in context.scripts {
            html.push_str("\n<script>");
            html.push_str(script);
            html.push_str("</script>");
        }
        html.push_str("\n</body>\n</html>\n");
        html
    }
}
