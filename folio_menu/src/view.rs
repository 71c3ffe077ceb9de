// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendered menu, host independent.
//!
//! A host renders one element per [`ItemView`] and tags it with its
//! [`ElementId`]. A click anywhere in the menu is delegated to a single
//! handler, which maps the element back with [`MenuView::item_at`].

use folio_nav::{ItemRef, ItemType};

use crate::data::MenuData;

/// Message rendered in place of the menu when the menu data fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load menu data";

/// Address of one rendered item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    /// Column index.
    pub column: usize,
    /// Item index within the column.
    pub item: usize,
}

/// How an item is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// A thumbnail image with a caption.
    Thumbnail {
        /// Image location: the thumbnail override, else the source.
        src: Option<String>,
    },
    /// An icon from the sprite sheet with a caption.
    Icon {
        /// Symbol reference, `#icon-menu-<type>`.
        symbol: String,
    },
    /// A plain text label.
    Text,
}

impl Presentation {
    /// Presentation for an item kind.
    pub fn for_item(item: &ItemRef) -> Self {
        match &item.item_type {
            ItemType::Image => Self::Thumbnail {
                src: item
                    .thumbnail_override
                    .clone()
                    .or_else(|| item.source_override.clone()),
            },
            ItemType::Audio
            | ItemType::Video
            | ItemType::Folder
            | ItemType::Done
            | ItemType::Code
            | ItemType::Math
            | ItemType::Book
            | ItemType::Doc => Self::Icon {
                symbol: format!("#icon-menu-{}", item.item_type.as_str()),
            },
            ItemType::Text | ItemType::Other(_) => Self::Text,
        }
    }
}

/// One rendered item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    /// Element address.
    pub id: ElementId,
    /// Caption text.
    pub label: String,
    /// Drawing style.
    pub presentation: Presentation,
    /// Identity handed to click handlers.
    pub item: ItemRef,
}

/// One rendered column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnView {
    /// Heading.
    pub title: String,
    /// Items in display order.
    pub items: Vec<ItemView>,
}

/// The rendered menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuView {
    /// Columns in display order.
    pub columns: Vec<ColumnView>,
}

impl MenuView {
    /// Lay out `data`.
    pub fn build(data: &MenuData) -> Self {
        let columns = data
            .columns
            .iter()
            .enumerate()
            .map(|(ci, column)| ColumnView {
                title: column.title.clone(),
                items: (0..column.items.len())
                    .filter_map(|ii| {
                        let item = column.item_ref(ii)?;
                        Some(ItemView {
                            id: ElementId {
                                column: ci,
                                item: ii,
                            },
                            label: item.item_name.clone(),
                            presentation: Presentation::for_item(&item),
                            item,
                        })
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Rendered item at `id`.
    pub fn view_at(&self, id: ElementId) -> Option<&ItemView> {
        self.columns.get(id.column)?.items.get(id.item)
    }

    /// Identity of the item at `id`, for the delegated click handler.
    pub fn item_at(&self, id: ElementId) -> Option<&ItemRef> {
        self.view_at(id).map(|v| &v.item)
    }

    /// Element showing the item addressed by `(category_id, slug)`; first match wins.
    pub fn element_for(&self, category_id: &str, slug: &str) -> Option<ElementId> {
        self.items()
            .find(|v| v.item.category_id == category_id && v.item.matches_slug(slug))
            .map(|v| v.id)
    }

    /// All rendered items, column by column.
    pub fn items(&self) -> impl Iterator<Item = &ItemView> {
        self.columns.iter().flat_map(|c| c.items.iter())
    }

    /// Number of rendered items.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    /// True if nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
