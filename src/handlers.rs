use std::io;
use std::sync::Arc;
use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{header, Method, Response, StatusCode, Uri},
    response::{Html, IntoResponse},
    Json, Router,
};
use log::{debug, info, warn};

use crate::components::PageComponent;
use crate::config::Config;
use crate::errors::ServerError;
use crate::services::{FileService, MarkdownService, PathGuard};
use crate::types::{AppState, Document, SaveResponse, StaticContent};
use crate::utils::{decode_path, is_markdown, last_modified_html};

/// Dispatches requests to the lister, guard, renderer and page templates
pub struct MarkdownRouter {
    files: FileService,
    guard: PathGuard,
    markdown: MarkdownService,
    pages: PageComponent,
}

impl MarkdownRouter {
    /// Create a router serving `root`; fails if the root cannot be canonicalized
    pub fn new(root: &std::path::Path) -> io::Result<Self> {
        let guard = PathGuard::new(root)?;
        Ok(Self {
            files: FileService::new(guard.root().to_path_buf()),
            guard,
            markdown: MarkdownService::new(),
            pages: PageComponent::new(),
        })
    }

    /// Handle one request; `path` must already be percent-decoded
    pub fn handle(&self, method: &Method, path: &str, body: &[u8]) -> Response<Body> {
        debug!("{} {}", method, path);

        if *method == Method::GET {
            self.handle_get(path)
        } else if *method == Method::POST {
            self.handle_post(path, body)
        } else {
            warn!("Unsupported method {} for {}", method, path);
            (StatusCode::NOT_IMPLEMENTED, "Unsupported method").into_response()
        }
    }

    fn handle_get(&self, path: &str) -> Response<Body> {
        let result = if path == "/" || path.is_empty() {
            Ok(self.serve_index())
        } else if let Some(name) = path.strip_prefix("/edit/").filter(|name| is_markdown(name)) {
            self.serve_editor(name)
        } else if is_markdown(path) {
            self.serve_markdown(path.trim_start_matches('/'))
        } else {
            self.serve_static(path.trim_start_matches('/'))
        };
        result.unwrap_or_else(IntoResponse::into_response)
    }

    fn handle_post(&self, path: &str, body: &[u8]) -> Response<Body> {
        match path.strip_prefix("/save/").filter(|name| is_markdown(name)) {
            Some(name) => self.save_markdown(name, body),
            None => {
                warn!("No POST route for {}", path);
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
        }
    }

    /// Index page listing every Markdown file
    fn serve_index(&self) -> Response<Body> {
        let files = self.files.list_markdown();
        info!("Serving index with {} files", files.len());
        Html(self.pages.index(&files)).into_response()
    }

    fn serve_markdown(&self, name: &str) -> Result<Response<Body>, ServerError> {
        let document = self.load(name)?;
        let fragment = self.markdown.render(&document.content);
        let meta = last_modified_html(&document.path);
        info!("Serving rendered view of '{}'", document.name);
        Ok(Html(self.pages.viewer(&document.name, &fragment, &meta)).into_response())
    }

    fn serve_editor(&self, name: &str) -> Result<Response<Body>, ServerError> {
        let document = self.load(name)?;
        info!("Serving editor for '{}'", document.name);
        Ok(Html(self.pages.editor(&document.name, &document.content)).into_response())
    }

    fn serve_static(&self, name: &str) -> Result<Response<Body>, ServerError> {
        let path = self.guard.resolve(name)?;
        match self.files.read_static(&path, name)? {
            StaticContent::File { bytes, content_type } => {
                debug!("Serving static file '{}' as {}", name, content_type);
                Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
            }
            StaticContent::Listing(entries) => {
                info!("Serving directory listing for '{}'", name);
                Ok(Html(self.pages.directory(name, &entries)).into_response())
            }
        }
    }

    fn save_markdown(&self, name: &str, body: &[u8]) -> Response<Body> {
        let path = match self.guard.resolve(name) {
            Ok(path) => path,
            Err(e) => return e.into_response(),
        };

        let result = std::str::from_utf8(body)
            .map_err(|_| ServerError::InvalidUtf8)
            .and_then(|content| self.files.write_file(&path, content));

        match result {
            Ok(()) => {
                info!("Saved '{}' ({} bytes)", name, body.len());
                Json(SaveResponse::saved()).into_response()
            }
            Err(e) => {
                warn!("Saving '{}' failed: {}", name, e);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(SaveResponse::failed(e.to_string()))).into_response()
            }
        }
    }

    fn load(&self, name: &str) -> Result<Document, ServerError> {
        let path = self.guard.resolve(name)?;
        let content = self.files.read_file(&path, name)?;
        Ok(Document { name: name.to_string(), path, content })
    }
}

/// Axum entry point: decode the path and hand the request to the router
pub async fn dispatch(
    State(router): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response<Body> {
    let path = decode_path(uri.path());
    router.handle(&method, &path, &body)
}

/// Build the axum application for a configuration
pub fn app(config: &Config) -> io::Result<Router> {
    let router: AppState = Arc::new(MarkdownRouter::new(&config.root)?);
    let body_limit = match config.max_save_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Ok(Router::new()
        .fallback(dispatch)
        .layer(body_limit)
        .with_state(router))
}
