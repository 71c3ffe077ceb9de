// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the sequencer: phases, session ids, placeholder looks, and panel poses.

use alloc::string::String;

use kurbo::Rect;

/// Phase of the expand/collapse lifecycle.
///
/// The animated path visits, in order:
/// `Idle → Shrunk → Cornering → Extending → Rotating → Expanded`,
/// and leaves through `CollapseRequested → Idle`.
/// The restore path jumps from `Idle` straight to `Expanded`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No session.
    #[default]
    Idle,
    /// First expanding phase: placeholder shrunk in place over the label.
    Shrunk,
    /// Second expanding phase: header markup moving to the corner.
    Cornering,
    /// Third expanding phase: header growing to full viewport height.
    Extending,
    /// Fourth expanding phase: label rotating, dismiss control appears.
    Rotating,
    /// End-state: content loading or loaded.
    Expanded,
    /// Collapse in progress; the session ends on the next settle.
    CollapseRequested,
}

impl Phase {
    /// True for the four intermediate expanding phases.
    pub fn is_expanding(self) -> bool {
        matches!(
            self,
            Self::Shrunk | Self::Cornering | Self::Extending | Self::Rotating
        )
    }
}

/// Identifier of one expand/collapse session.
///
/// Ids are handed out monotonically and never reused, so a stale id can never
/// alias a later session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub(crate) u32);

impl SessionId {
    /// Raw counter value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

bitflags::bitflags! {
    /// Visual state classes carried by the placeholder.
    ///
    /// Hosts map these onto whatever styling mechanism they use (CSS classes
    /// in a browser). Transition durations on the host side must match the
    /// sequencer's [`Timing`](crate::timing::Timing).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Look: u8 {
        /// Shrunk in place, showing the bare label.
        const START       = 0b0000_0001;
        /// Travelling to the corner.
        const MOVING      = 0b0000_0010;
        /// Extending to full height.
        const EXTENDING   = 0b0000_0100;
        /// Label rotated, background changed.
        const ROTATING    = 0b0000_1000;
        /// Final expanded presentation.
        const EXPANDED    = 0b0001_0000;
        /// Collapse started.
        const DESELECTING = 0b0010_0000;
        /// Interaction still owned by the animation.
        const ACTIVE      = 0b0100_0000;
    }
}

bitflags::bitflags! {
    /// Page panels that slide away while an item is expanded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Panels: u8 {
        /// The menu container.
        const MENU       = 0b0000_0001;
        /// The background layer.
        const BACKGROUND = 0b0000_0010;
        /// The side text (notes) container.
        const TEXT       = 0b0000_0100;
    }
}

impl Default for Panels {
    fn default() -> Self {
        Self::all()
    }
}

/// Pose of the panel group at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PanelPose {
    /// Panels the pose applies to.
    pub panels: Panels,
    /// Shifted off to the side (true) or at their resting position (false).
    pub away: bool,
    /// Transition styling is attached.
    pub transitioning: bool,
    /// The host should animate towards this pose rather than jump.
    pub animate: bool,
}

impl PanelPose {
    /// Panels at rest with no transition styling.
    pub const fn rest(panels: Panels) -> Self {
        Self {
            panels,
            away: false,
            transitioning: false,
            animate: false,
        }
    }
}

impl Default for PanelPose {
    fn default() -> Self {
        Self::rest(Panels::all())
    }
}

/// Where the panel group is in its own (item-independent) transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelStance {
    /// At rest.
    #[default]
    Rest,
    /// Transition styling attached, shift pending.
    Leaving,
    /// Shifted away.
    Away,
    /// Shifting back, styling removal pending.
    Returning,
}

/// What the placeholder shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderContent {
    /// The bare label text, mimicking the menu label.
    Label(String),
    /// The full header markup with a title.
    Header {
        /// Header title.
        title: String,
    },
}

/// The floating element that travels from the label to the corner header.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    /// Position and size in viewport coordinates.
    pub rect: Rect,
    /// Displayed content.
    pub content: PlaceholderContent,
    /// Visual state classes.
    pub look: Look,
}

/// Why a collapse was requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollapseCause {
    /// The dismiss control was activated.
    Dismiss,
    /// The Escape key was pressed.
    Escape,
    /// The router saw the location return to the menu.
    ///
    /// The location is already at the root, so collapse does not write it.
    Navigation,
}

impl CollapseCause {
    /// True if completing this collapse should reset the location to the root.
    pub fn resets_location(self) -> bool {
        !matches!(self, Self::Navigation)
    }
}
