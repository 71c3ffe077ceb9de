// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The static menu document.
//!
//! ```json
//! { "columns": [
//!     { "id": "media", "title": "Media", "items": [
//!         { "name": "Photo One", "type": "image", "src": "img/one.jpg" },
//!         "A plain text item"
//!     ] }
//! ] }
//! ```
//!
//! Items are objects or bare strings; a bare string is a text item.

use folio_nav::{ItemRef, ItemType};
use serde::{Deserialize, Serialize};

use crate::MenuError;

/// One entry in a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct MenuItem {
    /// Display name; also the source of the slug.
    pub name: String,
    /// Declared kind, kept verbatim.
    #[serde(rename = "type")]
    pub kind: String,
    /// Explicit content location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Explicit thumbnail location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Name(String),
    Full {
        name: String,
        #[serde(rename = "type", default = "text_kind")]
        kind: String,
        #[serde(default)]
        src: Option<String>,
        #[serde(default)]
        thumbnail: Option<String>,
    },
}

fn text_kind() -> String {
    "text".into()
}

impl From<RawItem> for MenuItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Name(name) => Self::text(name),
            RawItem::Full {
                name,
                kind,
                src,
                thumbnail,
            } => Self {
                name,
                kind,
                src,
                thumbnail,
            },
        }
    }
}

impl MenuItem {
    /// A text item.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: text_kind(),
            src: None,
            thumbnail: None,
        }
    }

    /// A media item with a content location and optional thumbnail.
    pub fn media(
        name: impl Into<String>,
        kind: impl Into<String>,
        src: impl Into<String>,
        thumbnail: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            src: Some(src.into()),
            thumbnail,
        }
    }

    /// Parsed kind.
    pub fn item_type(&self) -> ItemType {
        ItemType::from_name(&self.kind)
    }
}

/// One category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Category id, the first path segment.
    pub id: String,
    /// Heading shown above the items.
    #[serde(default)]
    pub title: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Column {
    /// Identity of the item at `index`.
    pub fn item_ref(&self, index: usize) -> Option<ItemRef> {
        let item = self.items.get(index)?;
        let mut r = ItemRef::new(&*self.id, &*self.title, &*item.name, item.item_type());
        r.source_override = item.src.clone();
        r.thumbnail_override = item.thumbnail.clone();
        Some(r)
    }
}

/// The whole menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuData {
    /// Categories in display order.
    pub columns: Vec<Column>,
}

impl MenuData {
    /// Decode a menu document.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let data: Self = serde_json::from_str(json)?;
        log::debug!(
            "menu data: {} column(s), {} item(s)",
            data.columns.len(),
            data.columns.iter().map(|c| c.items.len()).sum::<usize>()
        );
        Ok(data)
    }

    /// Find the item addressed by `(category_id, slug)`.
    ///
    /// Matching compares the slug of each known name, in display order; the
    /// first match wins.
    ///
    /// ```
    /// use folio_menu::MenuData;
    ///
    /// let menu = MenuData::from_json(
    ///     r#"{"columns":[{"id":"media","title":"Media","items":[{"name":"Photo One","type":"image"}]}]}"#,
    /// ).unwrap();
    /// let item = menu.find("media", "photo-one").unwrap();
    /// assert_eq!(item.item_name, "Photo One");
    /// assert!(menu.find("media", "photo-two").is_none());
    /// ```
    pub fn find(&self, category_id: &str, slug: &str) -> Option<ItemRef> {
        let (column, item) = self.position(category_id, slug)?;
        self.columns[column].item_ref(item)
    }

    /// Column and item indices of the item addressed by `(category_id, slug)`.
    pub fn position(&self, category_id: &str, slug: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.id == category_id)
            .find_map(|(ci, c)| {
                c.items
                    .iter()
                    .position(|item| folio_nav::encode(&item.name) == slug)
                    .map(|ii| (ci, ii))
            })
    }

    /// Append an item to the first column titled `category_title`.
    ///
    /// Returns false if no such column exists.
    pub fn add_item(&mut self, category_title: &str, item: MenuItem) -> bool {
        match self.columns.iter_mut().find(|c| c.title == category_title) {
            Some(column) => {
                column.items.push(item);
                true
            }
            None => {
                log::debug!("add_item: no column titled {category_title:?}");
                false
            }
        }
    }

    /// Append a media item to the first column titled `category_title`.
    pub fn add_media_item(
        &mut self,
        category_title: &str,
        name: &str,
        kind: &str,
        src: &str,
        thumbnail: Option<&str>,
    ) -> bool {
        let item = MenuItem::media(name, kind, src, thumbnail.map(str::to_owned));
        self.add_item(category_title, item)
    }
}
