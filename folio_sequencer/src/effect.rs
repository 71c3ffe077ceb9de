// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects emitted by the sequencer for a host to apply.
//!
//! The sequencer never touches a page. Every operation returns the ordered list
//! of effects it wants applied; hosts apply them in order. Two effects are
//! requests rather than page mutations and must be routed back by the host:
//!
//! - [`Effect::Navigate`]: a self-caused location write. The host must mark the
//!   write as self-caused immediately before performing it.
//! - [`Effect::LoadContent`]: resolve and fetch the item's content, then report
//!   back with [`Sequencer::content_settled`](crate::Sequencer::content_settled).

use alloc::string::String;

use folio_nav::ItemRef;
use kurbo::Point;

use crate::types::{PanelPose, Phase, Placeholder, SessionId};

/// One page mutation or host request.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// A session entered a phase. Informational.
    PhaseEntered {
        /// Session.
        session: SessionId,
        /// Phase entered.
        phase: Phase,
    },
    /// Hide or restore an item's label. Hidden labels keep their layout space.
    LabelVisibility {
        /// Item whose label changes.
        item: ItemRef,
        /// New visibility.
        visible: bool,
    },
    /// Create the placeholder, or update it in place if it exists.
    Placeholder(Placeholder),
    /// Remove the placeholder.
    RemovePlaceholder,
    /// Create the dismiss control at the given top-right anchor.
    ShowDismiss {
        /// Top-right anchor in viewport coordinates.
        origin: Point,
    },
    /// Remove the dismiss control.
    RemoveDismiss,
    /// Move the panel group to a pose.
    Panels(PanelPose),
    /// Show or hide the menu container.
    MenuVisibility(bool),
    /// Request: write the location fragment. Self-caused.
    Navigate(String),
    /// Request: resolve and fetch content for the session's item.
    LoadContent {
        /// Session the content is for.
        session: SessionId,
        /// Item to resolve.
        item: ItemRef,
    },
    /// Show the content panel with rendered HTML.
    ShowContent(String),
    /// Hide and clear the content panel.
    HideContent,
}

impl Effect {
    /// True for effects the host must route back into the coordinator instead of
    /// applying to the page.
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Navigate(_) | Self::LoadContent { .. })
    }
}
