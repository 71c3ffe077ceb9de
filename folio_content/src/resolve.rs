// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping an item to the location of its content document.
//!
//! Resolution order, first hit wins:
//!
//! 1. The item's source override, returned as is without probing.
//! 2. `{root}/{categoryId}/{slug}/content.md`, if it exists.
//! 3. `{root}/{categoryId}/{slug}.md`, if it exists.

use folio_nav::ItemRef;

use crate::source::Source;

/// Default directory holding content documents.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// No candidate location exists for an item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no content for {category_id}/{slug}")]
pub struct ResolveError {
    /// Category of the item.
    pub category_id: String,
    /// Slug of the item.
    pub slug: String,
}

/// Finds the document for an item by probing candidate locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolver {
    root: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_ROOT)
    }
}

impl Resolver {
    /// Probe below `root`. Trailing separators are ignored.
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }
        Self { root }
    }

    /// Content root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Candidate locations for an item without an override, in probe order.
    pub fn candidates(&self, item: &ItemRef) -> [String; 2] {
        let base = format!("{}/{}/{}", self.root, item.category_id, item.slug());
        [format!("{base}/content.md"), format!("{base}.md")]
    }

    /// Resolve the content location of `item`.
    ///
    /// ```
    /// use folio_content::{MemorySource, Resolver};
    /// use folio_nav::{ItemRef, ItemType};
    ///
    /// let src = MemorySource::new().with("content/media/photo-one.md", "A photo.");
    /// let item = ItemRef::new("media", "Media", "Photo One", ItemType::Image);
    /// assert_eq!(
    ///     Resolver::default().resolve(&item, &src).unwrap(),
    ///     "content/media/photo-one.md"
    /// );
    /// ```
    pub fn resolve(&self, item: &ItemRef, source: &impl Source) -> Result<String, ResolveError> {
        if let Some(url) = &item.source_override {
            log::debug!("{}: using source override {url}", item.item_name);
            return Ok(url.clone());
        }
        let found = self
            .candidates(item)
            .into_iter()
            .find(|url| source.exists(url));
        match found {
            Some(url) => {
                log::debug!("{}: resolved to {url}", item.item_name);
                Ok(url)
            }
            None => Err(ResolveError {
                category_id: item.category_id.clone(),
                slug: item.slug(),
            }),
        }
    }
}
