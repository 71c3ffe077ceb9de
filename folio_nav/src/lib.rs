// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Nav: the navigation codec for a hash-routed archive menu.
//!
//! ## Overview
//!
//! Every navigable item in the archive is addressed by a fragment of the form
//! `#/<categoryId>/<slug>`, where the slug is a lossy, URL-safe rendition of the
//! item's display name. An empty fragment (or `#/`) addresses the menu itself.
//!
//! - [`encode`](crate::slug::encode) turns a display name into a slug.
//! - [`decode`](crate::slug::decode) produces a best-effort display string from a slug.
//!   It is never used as a lookup key.
//! - [`build_path`](crate::slug::build_path) / [`parse_path`](crate::slug::parse_path)
//!   convert between `(categoryId, name)` pairs and `/<categoryId>/<slug>` paths.
//! - [`NavState`](crate::state::NavState) is the derived view of the current fragment:
//!   either the menu or one item.
//! - [`ItemRef`](crate::item::ItemRef) is the immutable identity of a navigable item.
//!
//! ## Matching
//!
//! Because encoding is lossy, an incoming slug is matched against known items by
//! comparing `encode(known_name) == slug`. Distinct names may collide on the same
//! slug; the first match wins.
//!
//! ```
//! use folio_nav::slug::{build_path, encode, parse_path};
//!
//! let path = build_path("media", "Photo One");
//! assert_eq!(path, "/media/photo-one");
//!
//! let parsed = parse_path(&path).unwrap();
//! assert_eq!(parsed.category_id, "media");
//! assert_eq!(parsed.slug, encode("Photo One"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod item;
pub mod slug;
pub mod state;

pub use item::{ItemRef, ItemType};
pub use slug::{
    PathError, ParsedPath, ROOT_FRAGMENT, build_path, decode, encode, parse_path, to_fragment,
};
pub use state::{NavState, same_location};
