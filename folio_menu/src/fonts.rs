// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font preferences.

use serde::{Deserialize, Serialize};

use crate::MenuError;

/// One selectable font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontChoice {
    /// Identifier referenced by `selectedFont`.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Value for the primary font custom property.
    pub css_value: String,
}

/// The font preferences document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    /// Id of the font to apply.
    pub selected_font: String,
    /// Fonts on offer.
    #[serde(default)]
    pub available_fonts: Vec<FontChoice>,
}

impl Default for FontConfig {
    /// The built-in fallback: Courier.
    fn default() -> Self {
        Self {
            selected_font: "courier".into(),
            available_fonts: vec![FontChoice {
                id: "courier".into(),
                label: "Courier".into(),
                css_value: "'Courier New', monospace".into(),
            }],
        }
    }
}

impl FontConfig {
    /// Decode a font preferences document.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a document, falling back to the built-in default on any failure.
    pub fn from_json_or_default(json: Result<&str, impl core::fmt::Display>) -> Self {
        let parsed = match json {
            Ok(json) => Self::from_json(json).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        parsed.unwrap_or_else(|e| {
            log::warn!("font config unavailable ({e}); using Courier");
            Self::default()
        })
    }

    /// The selected font, or `None` (with a warning) if it is not on offer.
    pub fn selected(&self) -> Option<&FontChoice> {
        let found = self
            .available_fonts
            .iter()
            .find(|f| f.id == self.selected_font);
        if found.is_none() {
            log::warn!("font not found: {}", self.selected_font);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_id() {
        let cfg = FontConfig::from_json(
            r#"{"selectedFont":"mono","availableFonts":[
                {"id":"serif","label":"Serif","cssValue":"serif"},
                {"id":"mono","label":"Mono","cssValue":"ui-monospace, monospace"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(cfg.selected().map(|f| f.label.as_str()), Some("Mono"));
    }

    #[test]
    fn unknown_selection_applies_nothing() {
        let cfg = FontConfig {
            selected_font: "fancy".into(),
            ..FontConfig::default()
        };
        assert!(cfg.selected().is_none());
    }

    #[test]
    fn falls_back_to_courier() {
        let cfg = FontConfig::from_json_or_default(Ok::<_, String>("{oops"));
        assert_eq!(cfg, FontConfig::default());
        let cfg = FontConfig::from_json_or_default(Err::<&str, _>("404"));
        assert_eq!(
            cfg.selected().map(|f| f.css_value.as_str()),
            Some("'Courier New', monospace")
        );
    }
}
