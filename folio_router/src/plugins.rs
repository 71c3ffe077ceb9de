// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easter eggs reached through the secret input.
//!
//! The games themselves live outside this workspace. The archive only knows how
//! to construct one on demand and toggle it.

use crate::config::SecretPhrases;

/// The two easter eggs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PluginKind {
    /// Keyboard "find the name" explorer.
    Explorer,
    /// Physics icon-pusher.
    IconGame,
}

impl PluginKind {
    fn slot(self) -> usize {
        match self {
            Self::Explorer => 0,
            Self::IconGame => 1,
        }
    }
}

impl core::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Explorer => "explorer",
            Self::IconGame => "icon game",
        })
    }
}

/// Why a plugin could not be toggled.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// No loader is installed.
    #[error("{0} is not available")]
    Unavailable(PluginKind),
    /// The loader failed.
    #[error("failed to load {kind}: {reason}")]
    Load {
        /// Plugin that failed.
        kind: PluginKind,
        /// Loader's explanation.
        reason: String,
    },
}

/// An opaque easter egg.
pub trait Plugin {
    /// Start or stop it.
    fn toggle(&mut self);

    /// Whether it is running.
    fn is_active(&self) -> bool;
}

/// Constructs a plugin the first time it is toggled.
pub type PluginLoader = Box<dyn FnMut(PluginKind) -> Result<Box<dyn Plugin>, PluginError>>;

/// Lazily constructed plugin slots.
#[derive(Default)]
pub struct Plugins {
    loader: Option<PluginLoader>,
    slots: [Option<Box<dyn Plugin>>; 2],
}

impl core::fmt::Debug for Plugins {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Plugins")
            .field("loader", &self.loader.is_some())
            .field("explorer", &self.is_loaded(PluginKind::Explorer))
            .field("icon_game", &self.is_loaded(PluginKind::IconGame))
            .finish()
    }
}

impl Plugins {
    /// Slots filled on demand by `loader`.
    pub fn with_loader(
        loader: impl FnMut(PluginKind) -> Result<Box<dyn Plugin>, PluginError> + 'static,
    ) -> Self {
        Self {
            loader: Some(Box::new(loader)),
            slots: [None, None],
        }
    }

    /// Whether `kind` has been constructed.
    pub fn is_loaded(&self, kind: PluginKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Whether `kind` is constructed and running.
    pub fn is_active(&self, kind: PluginKind) -> bool {
        self.slots[kind.slot()]
            .as_ref()
            .is_some_and(|p| p.is_active())
    }

    /// Toggle `kind`, constructing it first if needed. Returns the new activity.
    ///
    /// A failed construction leaves the slot empty so a later toggle retries.
    pub fn toggle(&mut self, kind: PluginKind) -> Result<bool, PluginError> {
        let slot = &mut self.slots[kind.slot()];
        if slot.is_none() {
            let loader = self
                .loader
                .as_mut()
                .ok_or(PluginError::Unavailable(kind))?;
            *slot = Some(loader(kind)?);
            log::info!("{kind} loaded");
        }
        let Some(plugin) = slot.as_mut() else {
            return Err(PluginError::Unavailable(kind));
        };
        plugin.toggle();
        Ok(plugin.is_active())
    }
}

impl SecretPhrases {
    /// The plugin an input value triggers, if any.
    ///
    /// ```
    /// use folio_router::{PluginKind, SecretPhrases};
    ///
    /// let phrases = SecretPhrases::default();
    /// assert_eq!(phrases.match_input("  Who Are You? "), Some(PluginKind::Explorer));
    /// assert_eq!(phrases.match_input("GAME"), Some(PluginKind::IconGame));
    /// assert_eq!(phrases.match_input("games"), None);
    /// ```
    pub fn match_input(&self, value: &str) -> Option<PluginKind> {
        let value = value.trim().to_lowercase();
        if self.explorer.iter().any(|p| *p == value) {
            Some(PluginKind::Explorer)
        } else if self.icon_game.iter().any(|p| *p == value) {
            Some(PluginKind::IconGame)
        } else {
            None
        }
    }
}
