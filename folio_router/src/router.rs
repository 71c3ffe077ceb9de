// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deciding what a location change means.

use folio_menu::MenuData;
use folio_nav::{ItemRef, NavState};

use crate::guard::EchoGuard;

/// Outcome of routing one change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The change was self-caused; nothing to do.
    Echo,
    /// Show the menu.
    Menu,
    /// Restore this item to its expanded end-state.
    Item(ItemRef),
    /// The fragment is unparseable or names no known item; reset to the root.
    Redirect(String),
}

/// Maps fragments to routes against the loaded menu data.
#[derive(Clone, Debug, Default)]
pub struct Router {
    menu: MenuData,
}

impl Router {
    /// Route against `menu`.
    pub fn new(menu: MenuData) -> Self {
        Self { menu }
    }

    /// Loaded menu data.
    pub fn menu(&self) -> &MenuData {
        &self.menu
    }

    /// Mutable menu data, for adding items at runtime.
    pub fn menu_mut(&mut self) -> &mut MenuData {
        &mut self.menu
    }

    /// Route one change notification for the current `fragment`.
    ///
    /// A pending self-caused mark is consumed first and short-circuits routing.
    ///
    /// ```
    /// use folio_menu::MenuData;
    /// use folio_router::{EchoGuard, Route, Router};
    ///
    /// let menu = MenuData::from_json(
    ///     r#"{"columns":[{"id":"media","title":"Media","items":[{"name":"Photo One","type":"image"}]}]}"#,
    /// ).unwrap();
    /// let router = Router::new(menu);
    /// let mut guard = EchoGuard::default();
    ///
    /// assert!(matches!(router.route("#/media/photo-one", &mut guard), Route::Item(_)));
    /// assert_eq!(router.route("#/", &mut guard), Route::Menu);
    /// guard.arm();
    /// assert_eq!(router.route("#/media/photo-one", &mut guard), Route::Echo);
    /// ```
    pub fn route(&self, fragment: &str, guard: &mut EchoGuard) -> Route {
        if guard.take() {
            log::debug!("route {fragment:?}: self-caused, ignored");
            return Route::Echo;
        }
        match NavState::from_fragment(fragment) {
            Ok(NavState::MenuShown) => {
                log::debug!("route {fragment:?}: menu");
                Route::Menu
            }
            Ok(NavState::ItemShown { category_id, slug }) => {
                match self.menu.find(&category_id, &slug) {
                    Some(item) => {
                        log::debug!("route {fragment:?}: item {:?}", item.item_name);
                        Route::Item(item)
                    }
                    None => {
                        log::warn!("no item at {fragment:?}, redirecting to menu");
                        Route::Redirect(fragment.to_owned())
                    }
                }
            }
            Err(e) => {
                log::warn!("invalid location {fragment:?} ({e}), redirecting to menu");
                Route::Redirect(fragment.to_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn router() -> Router {
        Router::new(
            MenuData::from_json(
                r#"{"columns":[{"id":"media","title":"Media","items":[{"name":"Photo One","type":"image"}]}]}"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn menu_spellings() {
        let r = router();
        let mut guard = EchoGuard::default();
        for f in ["", "#", "#/", "/"] {
            assert_eq!(r.route(f, &mut guard), Route::Menu, "{f:?}");
        }
    }

    #[test]
    fn unknown_and_malformed_redirect() {
        let r = router();
        let mut guard = EchoGuard::default();
        for f in ["#/media/does-not-exist", "#/media", "#/media/photo-one/", "#media/photo-one"] {
            assert_eq!(r.route(f, &mut guard), Route::Redirect(f.to_string()), "{f:?}");
        }
    }

    #[test]
    fn echo_consumes_the_guard_once() {
        let r = router();
        let mut guard = EchoGuard::default();
        guard.arm();
        assert_eq!(r.route("#/nonsense", &mut guard), Route::Echo);
        assert_eq!(
            r.route("#/nonsense", &mut guard),
            Route::Redirect("#/nonsense".to_string())
        );
    }

    #[test]
    fn item_carries_menu_metadata() {
        let Route::Item(item) = router().route("#/media/photo-one", &mut EchoGuard::default())
        else {
            panic!("expected an item route");
        };
        assert_eq!(item.category_title, "Media");
        assert_eq!(item.item_name, "Photo One");
    }
}
