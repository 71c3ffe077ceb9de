// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site configuration.
//!
//! A single JSON record; every field is optional.
//!
//! ```
//! use folio_router::SiteConfig;
//!
//! let cfg = SiteConfig::from_json(r#"{ "animate": false, "timing": { "to_corner_ms": 50 } }"#).unwrap();
//! assert!(!cfg.animate);
//! assert_eq!(cfg.timing.to_corner_ms, 50);
//! assert_eq!(cfg.timing.to_extend_ms, 500);
//! assert_eq!(cfg.paths.menu_data, "data/menu-data.json");
//! ```

use folio_sequencer::{Layout, Panels, SequencerConfig, Timing};
use kurbo::Size;
use serde::Deserialize;

use crate::InitError;

/// Locations of the static documents.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Menu document.
    pub menu_data: String,
    /// Font preferences document.
    pub font_config: String,
    /// Notes document.
    pub notes: String,
    /// Notes display configuration.
    pub notes_config: String,
    /// JSON list of background file names.
    pub backgrounds: String,
    /// Directory the background file names are relative to.
    pub background_dir: String,
    /// Directory holding item content documents.
    pub content_root: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            menu_data: "data/menu-data.json".into(),
            font_config: "data/font-config.json".into(),
            notes: "data/notes.md".into(),
            notes_config: "data/notes-config.json".into(),
            backgrounds: "assets/background/backgrounds.json".into(),
            background_dir: "assets/background".into(),
            content_root: folio_content::DEFAULT_CONTENT_ROOT.into(),
        }
    }
}

/// Input phrases that toggle the easter eggs. Compared lower-cased and trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecretPhrases {
    /// Phrases for the keyboard explorer.
    pub explorer: Vec<String>,
    /// Phrases for the icon game.
    pub icon_game: Vec<String>,
}

impl Default for SecretPhrases {
    fn default() -> Self {
        Self {
            explorer: vec!["who are you?".into(), "who are you".into()],
            icon_game: vec!["game".into()],
        }
    }
}

/// Everything configurable about the site.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Static document locations.
    pub paths: AssetPaths,
    /// Animate clicks; when false a click jumps to the expanded end-state.
    pub animate: bool,
    /// Keep the menu's own click handler from seeing intercepted clicks.
    pub stop_propagation: bool,
    /// Initial viewport width.
    pub viewport_width: f64,
    /// Initial viewport height.
    pub viewport_height: f64,
    /// Phase delays.
    pub timing: Timing,
    /// Header and dismiss geometry.
    pub layout: Layout,
    /// Easter egg trigger phrases.
    pub secrets: SecretPhrases,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let seq = SequencerConfig::default();
        Self {
            paths: AssetPaths::default(),
            animate: true,
            stop_propagation: false,
            viewport_width: seq.viewport.width,
            viewport_height: seq.viewport.height,
            timing: seq.timing,
            layout: seq.layout,
            secrets: SecretPhrases::default(),
        }
    }
}

impl SiteConfig {
    /// Decode a configuration document.
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        serde_json::from_str(json).map_err(InitError::Config)
    }

    /// Sequencer configuration derived from this record.
    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            enabled: self.animate,
            timing: self.timing,
            layout: self.layout,
            panels: Panels::all(),
            viewport: Size::new(self.viewport_width, self.viewport_height),
        }
    }
}

/// The notes display configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesConfig {
    /// Dates whose notes sections are shown.
    #[serde(default)]
    pub display_dates: Vec<String>,
}
