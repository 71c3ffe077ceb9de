// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Menu: the archive's category/item menu and its cosmetic companions.
//!
//! - [`MenuData`]: the static menu document and slug lookup.
//! - [`MenuView`]: a host-independent layout with addressable elements, so a
//!   single delegated click handler can recover the clicked [`ItemRef`](folio_nav::ItemRef).
//! - [`FontConfig`]: font preferences with a built-in fallback.
//! - [`BackgroundCycle`]: the background image rotation.

mod background;
mod data;
mod fonts;
mod view;

pub use background::BackgroundCycle;
pub use data::{Column, MenuData, MenuItem};
pub use fonts::{FontChoice, FontConfig};
pub use view::{ColumnView, ElementId, ItemView, LOAD_ERROR_MESSAGE, MenuView, Presentation};

/// A menu-related document could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Malformed JSON or unexpected shape.
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
}
