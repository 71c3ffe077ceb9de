// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Content: finding, fetching, and rendering item documents.
//!
//! - [`Resolver`] maps an item to its document location by probing a
//!   [`Source`].
//! - [`render_markdown`] turns a content document into HTML for the panel.
//! - [`entries_for_dates`] and [`render_notes`] drive the dated notes panel.
//!
//! Failing to find or fetch content is never fatal: callers log the error and
//! leave the panel empty.
//!
//! ```
//! use folio_content::{MemorySource, Resolver, load_content};
//! use folio_nav::{ItemRef, ItemType};
//!
//! let src = MemorySource::new().with("content/writing/on-maps/content.md", "# On Maps");
//! let item = ItemRef::new("writing", "Writing", "On Maps", ItemType::Text);
//! let html = load_content(&Resolver::default(), &src, &item).unwrap();
//! assert_eq!(html, "<h1>On Maps</h1>\n");
//! ```

mod notes;
mod render;
mod resolve;
mod source;

pub use notes::{entries_for_dates, render_notes};
pub use render::render_markdown;
pub use resolve::{DEFAULT_CONTENT_ROOT, ResolveError, Resolver};
pub use source::{DirSource, FetchError, MemorySource, Source};

use folio_nav::ItemRef;

/// Why an item's content could not be shown.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No document location exists.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The document could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Resolve, fetch, and render the content of `item`.
pub fn load_content(
    resolver: &Resolver,
    source: &impl Source,
    item: &ItemRef,
) -> Result<String, ContentError> {
    let url = resolver.resolve(item, source)?;
    let markdown = source.fetch(&url)?;
    log::debug!("{}: fetched {} bytes from {url}", item.item_name, markdown.len());
    Ok(render_markdown(&markdown))
}
