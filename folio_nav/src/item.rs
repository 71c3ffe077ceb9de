// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identity shared by the router, the sequencer, and the menu.

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::slug::{build_path, encode, to_fragment};

/// Kind of a menu item, as declared in the menu data.
///
/// Unknown kinds are kept verbatim in [`ItemType::Other`] and presented as text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Plain text entry.
    #[default]
    Text,
    /// Image with a thumbnail.
    Image,
    /// Audio recording.
    Audio,
    /// Video.
    Video,
    /// Folder of further material.
    Folder,
    /// Finished piece of work.
    Done,
    /// Source code.
    Code,
    /// Mathematics.
    Math,
    /// Book.
    Book,
    /// Document.
    Doc,
    /// Any other declared kind.
    Other(String),
}

impl ItemType {
    /// Parse a declared kind name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "text" => Self::Text,
            "image" => Self::Image,
            "audio" => Self::Audio,
            "video" => Self::Video,
            "folder" => Self::Folder,
            "done" => Self::Done,
            "code" => Self::Code,
            "math" => Self::Math,
            "book" => Self::Book,
            "doc" => Self::Doc,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The declared kind name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Folder => "folder",
            Self::Done => "done",
            Self::Code => "code",
            Self::Math => "math",
            Self::Book => "book",
            Self::Doc => "doc",
            Self::Other(name) => name,
        }
    }
}

/// Immutable identity of a navigable item.
///
/// Produced by the menu from static data and passed by value at each boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemRef {
    /// Identifier of the owning category (first path segment).
    pub category_id: String,
    /// Display title of the owning category.
    pub category_title: String,
    /// Display name of the item; the header title when expanded.
    pub item_name: String,
    /// Declared kind.
    pub item_type: ItemType,
    /// Explicit content location; bypasses content probing when present.
    pub source_override: Option<String>,
    /// Explicit thumbnail location.
    pub thumbnail_override: Option<String>,
}

impl ItemRef {
    /// Create an item reference without overrides.
    pub fn new(
        category_id: impl Into<String>,
        category_title: impl Into<String>,
        item_name: impl Into<String>,
        item_type: ItemType,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            category_title: category_title.into(),
            item_name: item_name.into(),
            item_type,
            source_override: None,
            thumbnail_override: None,
        }
    }

    /// Set the content source override.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_override = Some(source.into());
        self
    }

    /// Set the thumbnail override.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail_override = Some(thumbnail.into());
        self
    }

    /// Encoded item name.
    pub fn slug(&self) -> String {
        encode(&self.item_name)
    }

    /// `/<categoryId>/<slug>` path for this item.
    pub fn path(&self) -> String {
        build_path(&self.category_id, &self.item_name)
    }

    /// `#/<categoryId>/<slug>` fragment for this item.
    pub fn fragment(&self) -> String {
        to_fragment(&self.path())
    }

    /// True if `slug` addresses this item.
    pub fn matches_slug(&self, slug: &str) -> bool {
        encode(&self.item_name) == slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_round_trip() {
        for name in [
            "text", "image", "audio", "video", "folder", "done", "code", "math", "book", "doc",
            "zine",
        ] {
            assert_eq!(ItemType::from_name(name).as_str(), name);
        }
        assert_eq!(
            ItemType::from_name("Image"),
            ItemType::Other("Image".to_owned())
        );
    }

    #[test]
    fn item_addresses() {
        let item = ItemRef::new("media", "Media", "Photo One", ItemType::Image)
            .with_thumbnail("thumbs/one.jpg");
        assert_eq!(item.slug(), "photo-one");
        assert_eq!(item.path(), "/media/photo-one");
        assert_eq!(item.fragment(), "#/media/photo-one");
        assert!(item.matches_slug("photo-one"));
        assert!(!item.matches_slug("photo one"));
        assert_eq!(item.thumbnail_override.as_deref(), Some("thumbs/one.jpg"));
        assert_eq!(item.source_override, None);
    }
}
