use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};
use crate::errors::ServerError;
use crate::types::StaticContent;
use crate::utils::is_markdown;

/// Service for handling file system operations under the root directory
#[derive(Clone)]
pub struct FileService {
    base_dir: PathBuf,
}

impl FileService {
    /// Create a new file service
    pub fn new(base_dir: PathBuf) -> Self {
        debug!("Creating FileService with base directory: {:?}", base_dir);
        Self { base_dir }
    }

    /// All Markdown files under the root as `/`-separated relative paths, sorted.
    ///
    /// Hidden directories are not descended into and hidden files are skipped.
    pub fn list_markdown(&self) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(&self.base_dir)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.depth() > 0 && entry.path().is_file())
            .filter(|entry| is_markdown(&entry.file_name().to_string_lossy()))
            .filter_map(|entry| self.relative_name(entry.path()))
            .collect();

        files.sort();
        info!("Listed {} markdown files under {:?}", files.len(), self.base_dir);
        files
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_dir).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    /// Read a document the path guard already resolved; `name` is used in the not-found message
    pub fn read_file(&self, path: &Path, name: &str) -> Result<String, ServerError> {
        debug!("Reading file: {:?}", path);

        if !metadata_for(path, name)?.is_file() {
            warn!("Not a regular file: {:?}", path);
            return Err(ServerError::NotFound(name.to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read file {:?}: {}", path, e);
            ServerError::Io(e)
        })?;

        info!("Read file {:?}, {} bytes", name, content.len());
        Ok(content)
    }

    /// Replace the whole content of a document, creating it if needed
    pub fn write_file(&self, path: &Path, content: &str) -> Result<(), ServerError> {
        debug!("Writing file: {:?}", path);

        fs::write(path, content).map_err(|e| {
            error!("Failed to write file {:?}: {}", path, e);
            ServerError::Io(e)
        })?;

        info!("Saved file {:?}, {} bytes", path, content.len());
        Ok(())
    }

    /// Read a non-Markdown file for the static fallback.
    ///
    /// Directories serve their `index.html`, or a listing of their entries when there is none.
    pub fn read_static(&self, path: &Path, name: &str) -> Result<StaticContent, ServerError> {
        let target = if metadata_for(path, name)?.is_dir() {
            let index = path.join("index.html");
            match metadata_for(&index, name) {
                Ok(meta) if meta.is_file() => index,
                Ok(_) | Err(ServerError::NotFound(_)) => return self.list_dir(path).map(StaticContent::Listing),
                Err(e) => return Err(e),
            }
        } else {
            path.to_path_buf()
        };

        if !metadata_for(&target, name)?.is_file() {
            warn!("Static file does not exist: {:?}", target);
            return Err(ServerError::NotFound(name.to_string()));
        }

        let bytes = fs::read(&target).map_err(|e| {
            error!("Failed to read static file {:?}: {}", target, e);
            ServerError::Io(e)
        })?;
        Ok(StaticContent::File { content_type: self.content_type_for(&target), bytes })
    }

    /// Entries of one directory, sorted case-insensitively; subdirectories get a trailing `/`
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, ServerError> {
        let entries = fs::read_dir(path).map_err(|e| {
            error!("Failed to list directory {:?}: {}", path, e);
            ServerError::Io(e)
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .map(|entry| {
                let mut name = entry.file_name().to_string_lossy().into_owned();
                if entry.path().is_dir() {
                    name.push('/');
                }
                name
            })
            .collect();

        names.sort_by_key(|name| name.to_lowercase());
        info!("Listed {} entries in {:?}", names.len(), path);
        Ok(names)
    }

    /// Determine content type for a file
    pub fn content_type_for(&self, path: &Path) -> &'static str {
        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content_type = match extension.as_str() {
            "html" | "htm" => "text/html; charset=utf-8",
            "css" => "text/css; charset=utf-8",
            "js" => "application/javascript; charset=utf-8",
            "json" => "application/json",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "ico" => "image/x-icon",
            "pdf" => "application/pdf",
            "txt" => "text/plain; charset=utf-8",
            "md" => "text/markdown; charset=utf-8",
            _ => "application/octet-stream",
        };

        debug!("Content type for {:?}: {} (extension: {})", path, content_type, extension);
        content_type
    }
}

/// Missing paths become `NotFound`; any other metadata failure is an I/O error
fn metadata_for(path: &Path, name: &str) -> Result<fs::Metadata, ServerError> {
    fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => {
            warn!("File does not exist: {:?}", path);
            ServerError::NotFound(name.to_string())
        }
        _ => {
            error!("Failed to stat {:?}: {}", path, e);
            ServerError::Io(e)
        }
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
