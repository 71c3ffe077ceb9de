// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Router: the location is the source of truth.
//!
//! ## Overview
//!
//! The location fragment is the only persisted state. Every change to it is
//! routed: the menu, an item restored to its expanded end-state, or a redirect
//! back to the menu for anything unparseable or unknown. Changes the archive
//! makes itself are marked beforehand with a one-shot [`EchoGuard`] so that
//! routing them is skipped.
//!
//! - [`Router`] maps a fragment to a [`Route`].
//! - [`Archive`] is the coordinator: it owns the router, the
//!   [`Sequencer`](folio_sequencer::Sequencer), the menu view, the location, the
//!   content source, and the page, and executes sequencer effects.
//! - [`Location`] and [`Page`] are the host seams, with in-memory
//!   implementations ([`MemoryLocation`], [`HeadlessPage`]).
//! - [`SiteConfig`] is the single configuration record.
//!
//! ```
//! use folio_content::MemorySource;
//! use folio_router::{Archive, HeadlessPage, MemoryLocation, SiteConfig};
//!
//! let source = MemorySource::new().with(
//!     "data/menu-data.json",
//!     r#"{"columns":[{"id":"media","title":"Media","items":[{"name":"Photo One","type":"image"}]}]}"#,
//! );
//! let mut archive = Archive::new(
//!     SiteConfig::default(),
//!     MemoryLocation::new("#/media/photo-one"),
//!     source,
//!     HeadlessPage::new(),
//! );
//! archive.init(0).unwrap();
//!
//! assert_eq!(archive.sequencer().current_title(), Some("Photo One"));
//! assert!(!archive.page().stage.menu_visible);
//! ```

mod archive;
mod config;
mod guard;
mod location;
mod page;
mod plugins;
mod router;

pub use archive::Archive;
pub use config::{AssetPaths, NotesConfig, SecretPhrases, SiteConfig};
pub use guard::EchoGuard;
pub use location::{Location, MemoryLocation};
pub use page::{HeadlessPage, Page};
pub use plugins::{Plugin, PluginError, PluginKind, PluginLoader, Plugins};
pub use router::{Route, Router};

/// Initialization failed.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// A static document could not be fetched.
    #[error("failed to fetch {path}")]
    Fetch {
        /// Document location.
        path: String,
        /// Underlying failure.
        source: folio_content::FetchError,
    },
    /// The menu document is malformed.
    #[error("failed to decode menu data")]
    Menu(#[from] folio_menu::MenuError),
    /// A configuration document is malformed.
    #[error("invalid configuration")]
    Config(#[source] serde_json::Error),
}
