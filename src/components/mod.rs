pub mod editor_script;
pub mod pages;
pub mod styles;
pub mod templates;

pub use pages::PageComponent;
pub use templates::{TemplateComponent, TemplateContext};
