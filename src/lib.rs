//! mdserve - browse, render and edit the Markdown files under a directory
//!
//! A local single-user HTTP server: an index of every Markdown file, a rendered
//! view per file, and a split-pane editor that saves back to disk.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::ServerError;
pub use handlers::{app, MarkdownRouter};
pub use types::{AppState, Document, SaveResponse, StaticContent};
pub use services::{FileService, MarkdownService, PathGuard};
pub use components::{PageComponent, TemplateComponent};
