// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state derived from the location fragment.
//!
//! The fragment is the only persisted state. It is parsed into exactly one
//! [`NavState`]; anything that is neither the menu nor a well-formed item path
//! is an error, which the router corrects by redirecting to the menu.

use alloc::string::String;

use crate::slug::{PathError, parse_path};

/// What the current fragment addresses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavState {
    /// The menu: empty fragment, `#`, `#/`, or `/`.
    MenuShown,
    /// One item, by category and slug.
    ItemShown {
        /// Category identifier.
        category_id: String,
        /// Encoded item name.
        slug: String,
    },
}

impl NavState {
    /// Parse a location fragment, with or without its leading `#`.
    ///
    /// ```
    /// use folio_nav::NavState;
    ///
    /// assert_eq!(NavState::from_fragment("#/"), Ok(NavState::MenuShown));
    /// assert_eq!(
    ///     NavState::from_fragment("#/media/photo-one"),
    ///     Ok(NavState::ItemShown { category_id: "media".into(), slug: "photo-one".into() }),
    /// );
    /// assert!(NavState::from_fragment("#/media").is_err());
    /// ```
    pub fn from_fragment(fragment: &str) -> Result<Self, PathError> {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        if path.is_empty() || path == "/" {
            return Ok(Self::MenuShown);
        }
        let parsed = parse_path(path)?;
        Ok(Self::ItemShown {
            category_id: parsed.category_id,
            slug: parsed.slug,
        })
    }

    /// True for [`NavState::MenuShown`].
    pub fn is_menu(&self) -> bool {
        matches!(self, Self::MenuShown)
    }
}

/// True if two fragments address the same location.
///
/// All menu spellings compare equal to each other.
pub fn same_location(a: &str, b: &str) -> bool {
    let a = a.strip_prefix('#').unwrap_or(a);
    let b = b.strip_prefix('#').unwrap_or(b);
    let menu = |p: &str| p.is_empty() || p == "/";
    a == b || (menu(a) && menu(b))
}
