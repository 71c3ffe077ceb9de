// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cycling background images.

use crate::MenuError;

/// A wrapping cursor over background image locations.
///
/// ```
/// use folio_menu::BackgroundCycle;
///
/// let mut bg = BackgroundCycle::from_names("assets/background", ["a.jpg", "b.jpg"]);
/// assert_eq!(bg.advance(), Some("assets/background/b.jpg"));
/// assert_eq!(bg.advance(), Some("assets/background/a.jpg"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackgroundCycle {
    images: Vec<String>,
    index: usize,
}

impl BackgroundCycle {
    /// Resolve file names against `dir`.
    pub fn from_names<I, S>(dir: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = dir.trim_end_matches('/');
        let images = names
            .into_iter()
            .map(|n| format!("{dir}/{}", n.as_ref()))
            .collect();
        Self { images, index: 0 }
    }

    /// Decode a JSON list of file names and resolve them against `dir`.
    pub fn from_json(dir: &str, json: &str) -> Result<Self, MenuError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        log::info!("loaded {} background image(s)", names.len());
        Ok(Self::from_names(dir, names))
    }

    /// Current image, if any.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Move to the next image, wrapping. `None` if the list is empty.
    pub fn advance(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True if there are no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
