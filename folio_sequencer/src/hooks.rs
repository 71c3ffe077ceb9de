// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extension points invoked by the sequencer.
//!
//! Every hook is optional. Hooks run synchronously inside the sequencer call
//! that triggers them, after that call's own state change and before it
//! returns its effects.
//!
//! | Hook | When | Contract |
//! |---|---|---|
//! | `on_item_click` | before anything else on a click | returning `false` vetoes the click |
//! | `on_before_expand` | click accepted, before the old session is torn down | |
//! | `on_after_expand` | animated path entered `Expanded` | |
//! | `on_expand_complete` | content settled (loaded or not) | |
//! | `on_before_collapse` | collapse accepted | |
//! | `on_after_collapse` | collapse finished, before `on_collapse_complete` | |
//! | `on_collapse_complete` | collapse finished | |
//! | `on_panels_leave` | panels should slide away | replaces the default panel effects |
//! | `on_panels_return` | panels should slide back | replaces the default panel effects |

use alloc::boxed::Box;

use folio_nav::ItemRef;

/// Handler that may veto an item click.
pub type ClickHook = Box<dyn FnMut(&ItemRef) -> bool>;
/// Handler observing an item.
pub type ItemHook = Box<dyn FnMut(&ItemRef)>;
/// Handler without arguments.
pub type PlainHook = Box<dyn FnMut()>;

/// Optional handlers for every extension point.
#[derive(Default)]
pub struct Hooks {
    /// Return `false` to cancel the transition.
    pub on_item_click: Option<ClickHook>,
    /// Click accepted.
    pub on_before_expand: Option<ItemHook>,
    /// Animated path reached `Expanded`.
    pub on_after_expand: Option<ItemHook>,
    /// Content settled for the current session.
    pub on_expand_complete: Option<ItemHook>,
    /// Collapse accepted.
    pub on_before_collapse: Option<ItemHook>,
    /// Collapse finished.
    pub on_after_collapse: Option<ItemHook>,
    /// Collapse finished; fires after `on_after_collapse`.
    pub on_collapse_complete: Option<PlainHook>,
    /// Custom panel exit; replaces the default panel effects.
    pub on_panels_leave: Option<PlainHook>,
    /// Custom panel return; replaces the default panel effects.
    pub on_panels_return: Option<PlainHook>,
}

impl Hooks {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`Hooks::on_item_click`].
    #[must_use]
    pub fn on_item_click(mut self, f: impl FnMut(&ItemRef) -> bool + 'static) -> Self {
        self.on_item_click = Some(Box::new(f));
        self
    }

    /// Set [`Hooks::on_after_expand`].
    #[must_use]
    pub fn on_after_expand(mut self, f: impl FnMut(&ItemRef) + 'static) -> Self {
        self.on_after_expand = Some(Box::new(f));
        self
    }

    /// Set [`Hooks::on_expand_complete`].
    #[must_use]
    pub fn on_expand_complete(mut self, f: impl FnMut(&ItemRef) + 'static) -> Self {
        self.on_expand_complete = Some(Box::new(f));
        self
    }

    /// Set [`Hooks::on_collapse_complete`].
    #[must_use]
    pub fn on_collapse_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_collapse_complete = Some(Box::new(f));
        self
    }

    pub(crate) fn allow_click(&mut self, item: &ItemRef) -> bool {
        self.on_item_click.as_mut().is_none_or(|f| f(item))
    }

    pub(crate) fn item(hook: &mut Option<ItemHook>, item: &ItemRef) {
        if let Some(f) = hook.as_mut() {
            f(item);
        }
    }

    pub(crate) fn plain(hook: &mut Option<PlainHook>) {
        if let Some(f) = hook.as_mut() {
            f();
        }
    }
}

impl core::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_item_click", &self.on_item_click.is_some())
            .field("on_before_expand", &self.on_before_expand.is_some())
            .field("on_after_expand", &self.on_after_expand.is_some())
            .field("on_expand_complete", &self.on_expand_complete.is_some())
            .field("on_before_collapse", &self.on_before_collapse.is_some())
            .field("on_after_collapse", &self.on_after_collapse.is_some())
            .field("on_collapse_complete", &self.on_collapse_complete.is_some())
            .field("on_panels_leave", &self.on_panels_leave.is_some())
            .field("on_panels_return", &self.on_panels_return.is_some())
            .finish()
    }
}
