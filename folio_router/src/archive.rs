// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator.
//!
//! ## Ownership
//!
//! [`Archive`] owns every piece of mutable state that has to agree: the
//! location, the sequencer's session, the self-caused mark, and the page. There
//! are no globals; hosts hold one `Archive` and feed it events.
//!
//! ## Location writes
//!
//! Every programmatic write goes through one path. A write whose target equals
//! the current location is skipped without arming the self-caused mark, since
//! no change notification will follow it. Otherwise the mark is armed and the
//! write performed in the same call, so no notification can slip in between.
//!
//! ## Host contract
//!
//! - Call [`Archive::on_navigation_changed`] once per location change
//!   notification, and rely on [`Archive::init`] for the eager first route.
//! - Call [`Archive::advance`] whenever the clock passes
//!   [`Archive::next_deadline`].
//! - Forward clicks, dismiss activations, key presses, and secret input.

use std::collections::VecDeque;

use folio_content::{Resolver, Source, entries_for_dates, load_content, render_notes};
use folio_menu::{
    BackgroundCycle, ElementId, FontConfig, LOAD_ERROR_MESSAGE, MenuData, MenuView,
};
use folio_nav::{ItemRef, ROOT_FRAGMENT, same_location};
use folio_sequencer::{CollapseCause, Effect, Hooks, ItemHook, Sequencer};
use kurbo::{Rect, Size};

use crate::config::{NotesConfig, SiteConfig};
use crate::guard::EchoGuard;
use crate::location::{Location, MemoryLocation};
use crate::page::Page;
use crate::plugins::{PluginKind, Plugins};
use crate::router::{Route, Router};
use crate::InitError;

/// Ties the router, the sequencer, the menu, and the page together.
pub struct Archive<L, S, P> {
    config: SiteConfig,
    router: Router,
    sequencer: Sequencer,
    guard: EchoGuard,
    view: MenuView,
    resolver: Resolver,
    fonts: FontConfig,
    backgrounds: BackgroundCycle,
    plugins: Plugins,
    menu_handler: Option<ItemHook>,
    location: L,
    source: S,
    page: P,
}

impl<L: Location, S, P> core::fmt::Debug for Archive<L, S, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Archive")
            .field("location", &self.location.fragment())
            .field("phase", &self.sequencer.phase())
            .field("guard", &self.guard)
            .field("items", &self.view.len())
            .field("plugins", &self.plugins)
            .finish_non_exhaustive()
    }
}

impl<L: Location, S: Source, P: Page> Archive<L, S, P> {
    /// An archive with no menu loaded yet. Call [`Archive::init`] next.
    pub fn new(config: SiteConfig, location: L, source: S, page: P) -> Self {
        Self::with_hooks(config, Hooks::default(), location, source, page)
    }

    /// Like [`Archive::new`], with sequencer hooks installed.
    pub fn with_hooks(config: SiteConfig, hooks: Hooks, location: L, source: S, page: P) -> Self {
        let sequencer = Sequencer::new(config.sequencer_config(), hooks);
        let resolver = Resolver::new(config.paths.content_root.clone());
        Self {
            config,
            router: Router::default(),
            sequencer,
            guard: EchoGuard::default(),
            view: MenuView::default(),
            resolver,
            fonts: FontConfig::default(),
            backgrounds: BackgroundCycle::default(),
            plugins: Plugins::default(),
            menu_handler: None,
            location,
            source,
            page,
        }
    }

    /// Install the easter egg loader.
    pub fn set_plugins(&mut self, plugins: Plugins) {
        self.plugins = plugins;
    }

    /// Install the menu's own click handler, which sees clicks after the sequencer.
    pub fn set_menu_handler(&mut self, handler: impl FnMut(&ItemRef) + 'static) {
        self.menu_handler = Some(Box::new(handler));
    }

    /// Load everything and route the current location.
    ///
    /// Only a missing or malformed menu document is fatal; it replaces the menu
    /// with an error message. Fonts, backgrounds, and notes fall back quietly.
    pub fn init(&mut self, now_ms: u64) -> Result<(), InitError> {
        let menu = match self.load_menu() {
            Ok(menu) => menu,
            Err(e) => {
                log::error!("failed to initialize archive: {e}");
                self.page.render_error(LOAD_ERROR_MESSAGE);
                return Err(e);
            }
        };
        self.router = Router::new(menu);
        self.load_fonts();
        self.render_menu();
        self.load_backgrounds();
        self.load_notes();
        log::info!("archive initialized with {} item(s)", self.view.len());
        self.on_navigation_changed(now_ms);
        Ok(())
    }

    /// React to one location change notification.
    pub fn on_navigation_changed(&mut self, now_ms: u64) {
        let fragment = self.location.fragment();
        match self.router.route(&fragment, &mut self.guard) {
            Route::Echo => {}
            Route::Menu => self.show_menu(now_ms),
            Route::Item(item) => {
                let fx = self.sequencer.restore(item);
                self.dispatch(fx);
            }
            Route::Redirect(_) => {
                self.write_location(ROOT_FRAGMENT);
                self.show_menu(now_ms);
            }
        }
    }

    /// A click on a rendered menu element whose on-screen rectangle is `anchor`.
    ///
    /// The sequencer sees the click first. Unless propagation is stopped, the
    /// menu's own handler sees it afterwards, even when the `on_item_click`
    /// hook vetoed the animation. Returns false if the click was ignored or
    /// vetoed.
    pub fn click(&mut self, id: ElementId, anchor: Rect, now_ms: u64) -> bool {
        let Some(item) = self.view.item_at(id).cloned() else {
            log::debug!("click on unknown element {id:?}");
            return false;
        };
        let accepted = match self.sequencer.click(item.clone(), anchor, now_ms) {
            Some(fx) => {
                self.dispatch(fx);
                true
            }
            None => false,
        };
        if !self.config.stop_propagation {
            match self.menu_handler.as_mut() {
                Some(handler) => handler(&item),
                None => log::debug!("clicked item {:?}", item.item_name),
            }
        }
        accepted
    }

    /// The dismiss control was activated.
    pub fn dismiss(&mut self, now_ms: u64) {
        let fx = self.sequencer.collapse(CollapseCause::Dismiss, now_ms);
        self.dispatch(fx);
    }

    /// A key press, by its key name. Returns true if the key was handled.
    pub fn key(&mut self, key: &str, now_ms: u64) -> bool {
        match key {
            "Escape" if self.sequencer.is_active() => {
                let fx = self.sequencer.collapse(CollapseCause::Escape, now_ms);
                self.dispatch(fx);
                true
            }
            "b" | "B" => {
                if let Some(src) = self.backgrounds.advance() {
                    self.page.set_background(src);
                }
                true
            }
            _ => false,
        }
    }

    /// The secret input changed (or Enter was pressed in it).
    ///
    /// Returns the easter egg the value triggered, if any.
    pub fn secret_input(&mut self, value: &str) -> Option<PluginKind> {
        let kind = self.config.secrets.match_input(value)?;
        match self.plugins.toggle(kind) {
            Ok(active) => log::info!("{kind} {}", if active { "started" } else { "stopped" }),
            Err(e) => log::warn!("{e}"),
        }
        self.page.clear_secret_input();
        Some(kind)
    }

    /// Fire everything due at or before `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        let fx = self.sequencer.advance(now_ms);
        self.dispatch(fx);
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.sequencer.next_deadline()
    }

    /// The viewport was resized.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.sequencer.set_viewport(viewport);
    }

    /// Append an item to a category at runtime and re-render the menu.
    pub fn add_item(&mut self, category_title: &str, item: folio_menu::MenuItem) -> bool {
        let added = self.router.menu_mut().add_item(category_title, item);
        if added {
            self.render_menu();
        }
        added
    }

    /// Enable or disable the expand animation.
    pub fn set_animated(&mut self, animate: bool) {
        self.config.animate = animate;
        let fx = self.sequencer.set_enabled(animate);
        self.dispatch(fx);
    }

    /// Configuration in effect.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Loaded menu data.
    pub fn menu(&self) -> &MenuData {
        self.router.menu()
    }

    /// The rendered menu.
    pub fn view(&self) -> &MenuView {
        &self.view
    }

    /// Applied font preferences.
    pub fn fonts(&self) -> &FontConfig {
        &self.fonts
    }

    /// Easter egg slots.
    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    /// Whether a self-caused mark is pending.
    pub fn echo_pending(&self) -> bool {
        self.guard.is_armed()
    }

    /// The location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable location, for hosts that simulate user navigation.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// The page.
    pub fn page(&self) -> &P {
        &self.page
    }

    fn show_menu(&mut self, now_ms: u64) {
        self.page.apply(&Effect::MenuVisibility(true));
        let fx = if self.sequencer.is_active() {
            self.sequencer.collapse(CollapseCause::Navigation, now_ms)
        } else {
            self.sequencer.return_panels(now_ms)
        };
        self.dispatch(fx);
    }

    fn write_location(&mut self, fragment: &str) {
        if same_location(&self.location.fragment(), fragment) {
            log::debug!("location already at {fragment:?}, not written");
            return;
        }
        self.guard.arm();
        self.location.set_fragment(fragment);
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Navigate(fragment) => self.write_location(&fragment),
                Effect::LoadContent { session, item } => {
                    let html = match load_content(&self.resolver, &self.source, &item) {
                        Ok(html) => Some(html),
                        Err(e) => {
                            log::warn!("content for {:?} unavailable: {e}", item.item_name);
                            None
                        }
                    };
                    queue.extend(self.sequencer.content_settled(session, html));
                }
                other => self.page.apply(&other),
            }
        }
    }

    fn render_menu(&mut self) {
        self.view = MenuView::build(self.router.menu());
        self.page.render_menu(&self.view);
    }

    fn fetch(&self, path: &str) -> Result<String, InitError> {
        self.source.fetch(path).map_err(|source| InitError::Fetch {
            path: path.to_owned(),
            source,
        })
    }

    fn load_menu(&self) -> Result<MenuData, InitError> {
        let json = self.fetch(&self.config.paths.menu_data)?;
        Ok(MenuData::from_json(&json)?)
    }

    fn load_fonts(&mut self) {
        let doc = self.fetch(&self.config.paths.font_config);
        self.fonts = FontConfig::from_json_or_default(doc.as_deref());
        if let Some(font) = self.fonts.selected() {
            log::info!("applied font {}", font.label);
            self.page.set_font(&font.css_value);
        }
    }

    fn load_backgrounds(&mut self) {
        let cycle = self.fetch(&self.config.paths.backgrounds).and_then(|json| {
            Ok(BackgroundCycle::from_json(
                &self.config.paths.background_dir,
                &json,
            )?)
        });
        match cycle {
            Ok(cycle) => self.backgrounds = cycle,
            Err(e) => log::warn!("no background list: {e}"),
        }
    }

    fn load_notes(&mut self) {
        match self.notes_html() {
            Ok(html) if html.is_empty() => log::debug!("no notes to show"),
            Ok(html) => self.page.set_notes(&html),
            Err(e) => log::warn!("failed to load notes: {e}"),
        }
    }

    fn notes_html(&self) -> Result<String, InitError> {
        let config = self.fetch(&self.config.paths.notes_config)?;
        let config: NotesConfig = serde_json::from_str(&config).map_err(InitError::Config)?;
        let markdown = self.fetch(&self.config.paths.notes)?;
        let entries = entries_for_dates(&markdown, &config.display_dates);
        Ok(if entries.is_empty() {
            String::new()
        } else {
            render_notes(&entries)
        })
    }
}

impl<S: Source, P: Page> Archive<MemoryLocation, S, P> {
    /// Deliver every queued change notification, including ones queued while
    /// delivering. Returns how many were delivered.
    pub fn deliver_notifications(&mut self, now_ms: u64) -> usize {
        let mut delivered = 0;
        while self.location.poll().is_some() {
            self.on_navigation_changed(now_ms);
            delivered += 1;
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HeadlessPage;
    use folio_content::MemorySource;
    use folio_sequencer::Phase;
    use pretty_assertions::assert_eq;

    const MENU: &str = r#"{"columns":[
        {"id":"media","title":"Media","items":[{"name":"Photo One","type":"image"}]},
        {"id":"writing","title":"Writing","items":["On Maps"]}
    ]}"#;

    fn source() -> MemorySource {
        MemorySource::new()
            .with("data/menu-data.json", MENU)
            .with("content/media/photo-one.md", "A *photo*.")
            .with("assets/background/backgrounds.json", r#"["a.jpg","b.jpg"]"#)
            .with("data/notes-config.json", r#"{"displayDates":["2024-05-01"]}"#)
            .with("data/notes.md", "## 2024-05-01\nhello\n## 2024-05-02\nhidden")
    }

    fn archive(fragment: &str) -> Archive<MemoryLocation, MemorySource, HeadlessPage> {
        Archive::new(
            SiteConfig::default(),
            MemoryLocation::new(fragment),
            source(),
            HeadlessPage::new(),
        )
    }

    #[test]
    fn init_renders_menu_notes_and_font() {
        let mut a = archive("");
        a.init(0).unwrap();
        let page = a.page();
        assert_eq!(page.menu.as_ref().map(MenuView::len), Some(2));
        assert_eq!(page.notes.as_deref(), Some("<h2>2024-05-01</h2><p>hello</p>"));
        assert_eq!(page.font.as_deref(), Some("'Courier New', monospace"));
        assert!(page.stage.menu_visible);
        assert_eq!(a.location().fragment(), "");
        assert!(!a.echo_pending());
    }

    #[test]
    fn missing_menu_shows_error_in_place() {
        let mut a = Archive::new(
            SiteConfig::default(),
            MemoryLocation::new(""),
            MemorySource::new(),
            HeadlessPage::new(),
        );
        let err = a.init(0).unwrap_err();
        assert!(matches!(err, InitError::Fetch { .. }), "{err}");
        assert_eq!(a.page().error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(a.page().menu.is_none());
    }

    #[test]
    fn malformed_menu_shows_error_in_place() {
        let mut a = Archive::new(
            SiteConfig::default(),
            MemoryLocation::new(""),
            MemorySource::new().with("data/menu-data.json", "[1, 2"),
            HeadlessPage::new(),
        );
        assert!(matches!(a.init(0), Err(InitError::Menu(_))));
        assert_eq!(a.page().error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn background_key_cycles() {
        let mut a = archive("");
        a.init(0).unwrap();
        assert!(a.key("b", 0));
        assert_eq!(
            a.page().background.as_deref(),
            Some("assets/background/b.jpg")
        );
        assert!(a.key("B", 0));
        assert_eq!(
            a.page().background.as_deref(),
            Some("assets/background/a.jpg")
        );
        assert!(!a.key("x", 0));
        assert!(!a.key("Escape", 0), "nothing to collapse");
    }

    #[test]
    fn click_on_unknown_element_is_ignored() {
        let mut a = archive("");
        a.init(0).unwrap();
        assert!(!a.click(ElementId { column: 9, item: 0 }, Rect::ZERO, 0));
        assert_eq!(a.sequencer().phase(), Phase::Idle);
    }

    #[test]
    fn stop_propagation_hides_click_from_menu_handler() {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(0));
        for (stop, expected) in [(false, 1), (true, 0)] {
            seen.set(0);
            let config = SiteConfig {
                stop_propagation: stop,
                ..SiteConfig::default()
            };
            let mut a = Archive::new(config, MemoryLocation::new(""), source(), HeadlessPage::new());
            a.init(0).unwrap();
            let s = seen.clone();
            a.set_menu_handler(move |_| s.set(s.get() + 1));
            assert!(a.click(ElementId { column: 0, item: 0 }, Rect::ZERO, 0));
            assert_eq!(seen.get(), expected, "stop_propagation = {stop}");
        }
    }

    #[test]
    fn vetoed_click_still_reaches_menu_handler() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut a = Archive::with_hooks(
            SiteConfig::default(),
            Hooks::new().on_item_click(|_| false),
            MemoryLocation::new(""),
            source(),
            HeadlessPage::new(),
        );
        a.init(0).unwrap();
        let s = seen.clone();
        a.set_menu_handler(move |item| s.borrow_mut().push(item.item_name.clone()));
        assert!(!a.click(ElementId { column: 0, item: 0 }, Rect::ZERO, 0));
        assert_eq!(*seen.borrow(), ["Photo One"]);
        assert_eq!(a.sequencer().phase(), Phase::Idle);
        assert_eq!(a.location().fragment(), "");
    }

    #[test]
    fn disabling_animation_mid_session_returns_to_root() {
        let mut a = archive("");
        a.init(0).unwrap();
        assert!(a.click(ElementId { column: 0, item: 0 }, Rect::ZERO, 0));
        a.advance(100);
        a.deliver_notifications(100);
        assert_eq!(a.location().fragment(), "#/media/photo-one");

        a.set_animated(false);
        assert_eq!(a.location().fragment(), "#/");
        assert!(a.echo_pending());
        assert_eq!(a.deliver_notifications(200), 1);
        assert!(!a.echo_pending());
        assert!(!a.sequencer().is_active());
        assert!(a.page().stage.menu_visible);
        assert!(!a.page().stage.has_artifacts());
    }

    #[test]
    fn runtime_item_is_routable() {
        let mut a = archive("");
        a.init(0).unwrap();
        assert!(a.add_item("Writing", folio_menu::MenuItem::text("New Essay")));
        assert_eq!(a.page().menu.as_ref().map(MenuView::len), Some(3));
        a.location_mut().visit("#/writing/new-essay");
        a.deliver_notifications(10);
        assert_eq!(a.sequencer().current_title(), Some("New Essay"));
    }
}
