// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page the archive draws on.

use folio_menu::MenuView;
use folio_sequencer::{Effect, Stage};

/// Everything the archive asks of a page.
///
/// Sequencer effects arrive through [`Page::apply`]; location writes and
/// content loads are handled by the archive and never reach the page.
pub trait Page {
    /// Draw the menu.
    fn render_menu(&mut self, view: &MenuView);

    /// Replace the menu with an error message.
    fn render_error(&mut self, message: &str);

    /// Apply one sequencer effect.
    fn apply(&mut self, effect: &Effect);

    /// Set the primary font.
    fn set_font(&mut self, css_value: &str);

    /// Show a background image.
    fn set_background(&mut self, src: &str);

    /// Fill the notes panel.
    fn set_notes(&mut self, html: &str);

    /// Clear and blur the secret input.
    fn clear_secret_input(&mut self);
}

/// A page kept in memory, for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct HeadlessPage {
    /// Sequencer-driven state.
    pub stage: Stage,
    /// Last rendered menu.
    pub menu: Option<MenuView>,
    /// Error shown in place of the menu.
    pub error: Option<String>,
    /// Applied font.
    pub font: Option<String>,
    /// Shown background.
    pub background: Option<String>,
    /// Notes panel markup.
    pub notes: Option<String>,
    /// How many times the secret input was cleared.
    pub secret_clears: usize,
}

impl HeadlessPage {
    /// An empty page.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Page for HeadlessPage {
    fn render_menu(&mut self, view: &MenuView) {
        self.error = None;
        self.menu = Some(view.clone());
    }

    fn render_error(&mut self, message: &str) {
        self.menu = None;
        self.error = Some(message.to_owned());
    }

    fn apply(&mut self, effect: &Effect) {
        self.stage.apply(effect);
    }

    fn set_font(&mut self, css_value: &str) {
        self.font = Some(css_value.to_owned());
    }

    fn set_background(&mut self, src: &str) {
        self.background = Some(src.to_owned());
    }

    fn set_notes(&mut self, html: &str) {
        self.notes = Some(html.to_owned());
    }

    fn clear_secret_input(&mut self) {
        self.secret_clears += 1;
    }
}
