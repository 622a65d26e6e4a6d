use std::path::PathBuf;
use std::sync::Arc;
use serde::Serialize;

use crate::handlers::MarkdownRouter;

/// Application state shared across all handlers
pub type AppState = Arc<MarkdownRouter>;

/// A Markdown file under the root, read fresh for each request
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the root, as it appeared in the request
    pub name: String,
    /// Absolute path that passed the path guard
    pub path: PathBuf,
    pub content: String,
}

/// What the static fallback found at a guarded path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticContent {
    File { bytes: Vec<u8>, content_type: &'static str },
    /// Entry names of a directory without `index.html`; subdirectories end in `/`
    Listing(Vec<String>),
}

/// JSON body returned by the save endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResponse {
    pub fn saved() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}
