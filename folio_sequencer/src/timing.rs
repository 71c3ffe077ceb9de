// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected timing and layout configuration.
//!
//! The delays here must match the host's transition durations exactly, or the
//! placeholder snaps instead of flowing. The sequencer only sequences; it never
//! derives a duration.

use kurbo::{Point, Rect, Size};

use crate::types::Panels;

/// Delays, in milliseconds.
///
/// Phase delays are per transition; the sequencer schedules each phase at the
/// cumulative offset from session start.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// `Shrunk → Cornering`.
    pub to_corner_ms: u32,
    /// `Cornering → Extending`.
    pub to_extend_ms: u32,
    /// `Extending → Rotating`.
    pub to_rotate_ms: u32,
    /// `Rotating → Expanded`.
    pub to_expanded_ms: u32,
    /// Delay between attaching panel transition styling and shifting the panels.
    pub panel_kickoff_ms: u32,
    /// Duration of the panel return transition before its styling is removed.
    pub panel_settle_ms: u32,
    /// `CollapseRequested → Idle`.
    pub collapse_settle_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            to_corner_ms: 100,
            to_extend_ms: 500,
            to_rotate_ms: 500,
            to_expanded_ms: 500,
            panel_kickoff_ms: 10,
            panel_settle_ms: 1000,
            collapse_settle_ms: 32,
        }
    }
}

/// Geometry of the expanded header and the dismiss control.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    /// Width of the corner header.
    pub header_width: f64,
    /// Gap between the header and the right edge of the viewport.
    pub header_margin: f64,
    /// Offset of the dismiss control from the top-right corner.
    pub dismiss_inset: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            header_width: 200.0,
            header_margin: 20.0,
            dismiss_inset: 40.0,
        }
    }
}

impl Layout {
    /// Header rectangle anchored at the top-right corner with the given height.
    pub fn corner_rect(&self, viewport: Size, height: f64) -> Rect {
        let x = viewport.width - self.header_width - self.header_margin;
        Rect::from_origin_size(Point::new(x, 0.0), Size::new(self.header_width, height))
    }

    /// Top-right anchor point of the dismiss control.
    pub fn dismiss_origin(&self, viewport: Size) -> Point {
        Point::new(viewport.width - self.dismiss_inset, self.dismiss_inset)
    }
}

/// Everything the sequencer needs besides hooks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SequencerConfig {
    /// When false, clicks jump straight to the expanded end-state.
    pub enabled: bool,
    /// Delays.
    pub timing: Timing,
    /// Header and dismiss geometry.
    pub layout: Layout,
    /// Panels present on the page.
    pub panels: Panels,
    /// Current viewport size.
    pub viewport: Size,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timing: Timing::default(),
            layout: Layout::default(),
            panels: Panels::all(),
            viewport: Size::new(1280.0, 800.0),
        }
    }
}
