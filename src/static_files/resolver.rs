//! Path resolution
//!
//! A request path resolves to exactly one of three outcomes: a directory
//! listing, a file's contents, or nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::http::mime::guess_mime;

const LISTING_MIME: &str = "text/plain";

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Bytes to serve and their MIME type
    Content { body: Vec<u8>, mime_type: String },
    /// No file or directory at the path
    NotFound,
}

/// Resolves request paths against a fixed root directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `path`, stripped of leading and trailing `/`, onto the root.
    ///
    /// `/` and the empty path both map to the root itself. `..` segments are
    /// not collapsed.
    pub fn location(&self, path: &str) -> PathBuf {
        let relative = path.trim_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    /// Resolves `path` to a directory listing, file contents, or `NotFound`.
    ///
    /// A location that cannot be stat'ed counts as missing. Errors are only
    /// returned when an existing entry cannot be read.
    pub async fn resolve(&self, path: &str) -> Result<Resource> {
        let location = self.location(path);

        let metadata = match fs::metadata(&location).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(location = %location.display(), error = %e, "Location not found");
                return Ok(Resource::NotFound);
            }
        };

        if metadata.is_dir() {
            let body = list_directory(&location).await?;
            Ok(Resource::Content {
                body,
                mime_type: LISTING_MIME.to_string(),
            })
        } else if metadata.is_file() {
            let body = fs::read(&location)
                .await
                .with_context(|| format!("Failed to read file {}", location.display()))?;
            Ok(Resource::Content {
                body,
                mime_type: guess_mime(&location),
            })
        } else {
            Ok(Resource::NotFound)
        }
    }
}

/// Entry names joined by `\n`, in the order the filesystem returns them.
async fn list_directory(dir: &Path) -> Result<Vec<u8>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to list directory {}", dir.display()))?
    {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names.join("\n").into_bytes())
}
