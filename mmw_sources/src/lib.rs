#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Text sources read from the filesystem.
//!
//! Every file is read completely and its handle released before its lines
//! are handed out, so callers only ever see decoded text.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid file name pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One named unit of text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    pub identifier: String,
    pub lines: Vec<String>,
}

impl From<TextSource> for (String, Vec<String>) {
    fn from(source: TextSource) -> Self {
        (source.identifier, source.lines)
    }
}

/// Read a single file as a text source named after its path.
pub fn read_file(path: &Path) -> Result<TextSource, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
    }

    Ok(TextSource {
        identifier: path.to_string_lossy().into_owned(),
        lines: text.lines().map(str::to_string).collect(),
    })
}

/// All files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    file_glob: Option<String>,
    max_depth: Option<usize>,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_glob: None,
            max_depth: None,
        }
    }

    /// Only read files whose name matches the glob, e.g. `*.txt`.
    #[must_use]
    pub fn with_glob(mut self, pattern: impl Into<String>) -> Self {
        self.file_glob = Some(pattern.into());
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and read every matching file, sorted by path.
    ///
    /// Hidden files and directories are skipped. Entries that cannot be
    /// visited are logged and skipped; a file that cannot be read fails the
    /// whole collection.
    pub fn collect(&self) -> Result<Vec<TextSource>, SourceError> {
        if !self.root.exists() {
            return Err(SourceError::PathNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(SourceError::NotADirectory(self.root.clone()));
        }

        let pattern = self
            .file_glob
            .as_deref()
            .map(|glob| {
                glob::Pattern::new(glob).map_err(|source| SourceError::InvalidGlob {
                    pattern: glob.to_string(),
                    source,
                })
            })
            .transpose()?;

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .max_depth(self.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        let mut sources = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error accessing entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(ref pattern) = pattern {
                if !pattern.matches(&entry.file_name().to_string_lossy()) {
                    debug!("Skipping {}: name does not match", entry.path().display());
                    continue;
                }
            }

            sources.push(read_file(entry.path())?);
        }

        info!(
            "Read {} sources from {}",
            sources.len(),
            self.root.display()
        );

        Ok(sources)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
