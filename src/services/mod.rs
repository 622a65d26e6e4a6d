pub mod file_service;
pub mod markdown_service;
pub mod path_guard;

pub use file_service::FileService;
pub use markdown_service::MarkdownService;
pub use path_guard::PathGuard;
