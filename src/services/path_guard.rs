use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use log::{debug, warn};
use crate::errors::ServerError;

/// Keeps caller-supplied paths inside the root directory
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: PathBuf,
}

impl PathGuard {
    /// Create a guard for `root`; the root must exist so it can be canonicalized
    pub fn new(root: &Path) -> io::Result<Self> {
        let root = root.canonicalize()?;
        debug!("Creating PathGuard for root: {:?}", root);
        Ok(Self { root })
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `requested` against the root and return the absolute path if it stays inside.
    ///
    /// Symlinks are followed for every component that exists. Components that do not exist
    /// yet are resolved lexically, so a file about to be created can still be checked. A
    /// dangling symlink is rejected since its target cannot be verified.
    pub fn resolve(&self, requested: &str) -> Result<PathBuf, ServerError> {
        let requested_path = Path::new(requested);
        let mut resolved = if requested_path.has_root() {
            PathBuf::new()
        } else {
            self.root.clone()
        };

        for component in requested_path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => {
                    resolved.push(other);
                    match resolved.canonicalize() {
                        Ok(real) => resolved = real,
                        Err(_) if is_symlink(&resolved) => {
                            warn!("Access denied: dangling symlink in {:?}", requested);
                            return Err(ServerError::AccessDenied);
                        }
                        Err(_) => {}
                    }
                }
            }
        }

        if resolved.starts_with(&self.root) {
            debug!("Resolved {:?} to {:?}", requested, resolved);
            Ok(resolved)
        } else {
            warn!("Access denied: {:?} resolves outside the root ({:?})", requested, resolved);
            Err(ServerError::AccessDenied)
        }
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}
