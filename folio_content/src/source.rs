// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where documents come from.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Failure to fetch one document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Nothing exists at the location.
    #[error("no document at {url}")]
    NotFound {
        /// Requested location.
        url: String,
    },
    /// The location is not a relative path inside the source.
    #[error("refusing to fetch {url}: not a relative path")]
    OutsideRoot {
        /// Requested location.
        url: String,
    },
    /// The document exists but could not be read.
    #[error("failed to read {url}")]
    Io {
        /// Requested location.
        url: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A store of static documents addressed by relative URL.
///
/// Mirrors the two requests a browser host makes: a lightweight existence probe
/// without a body, and a full fetch.
pub trait Source {
    /// True if a document exists at `url`.
    fn exists(&self, url: &str) -> bool;

    /// The document body at `url`.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<S: Source + ?Sized> Source for &S {
    fn exists(&self, url: &str) -> bool {
        (**self).exists(url)
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Documents held in memory.
///
/// ```
/// use folio_content::{MemorySource, Source};
///
/// let src = MemorySource::new().with("content/a.md", "# A");
/// assert!(src.exists("content/a.md"));
/// assert!(src.fetch("content/b.md").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    docs: BTreeMap<String, String>,
}

impl MemorySource {
    /// An empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style.
    #[must_use]
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.docs.insert(url.into(), body.into());
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True if there are no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl Source for MemorySource {
    fn exists(&self, url: &str) -> bool {
        self.docs.contains_key(url)
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.docs
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: url.into() })
    }
}

/// Documents stored as files below a root directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, url: &str) -> Option<PathBuf> {
        let rel = Path::new(url);
        rel.components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| self.root.join(rel))
    }
}

impl Source for DirSource {
    fn exists(&self, url: &str) -> bool {
        self.path_for(url).is_some_and(|p| p.is_file())
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let path = self
            .path_for(url)
            .ok_or_else(|| FetchError::OutsideRoot { url: url.into() })?;
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound { url: url.into() }
            } else {
                FetchError::Io {
                    url: url.into(),
                    source,
                }
            }
        })
    }
}
