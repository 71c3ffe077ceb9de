// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Sequencer: the expand/collapse animation state machine.
//!
//! ## Overview
//!
//! When a visitor clicks a menu item, its label becomes a floating placeholder
//! that travels to the top-right corner, grows into a full-height header,
//! rotates, and settles next to the item's content. Collapsing reverses the
//! page to the menu. [`Sequencer`] sequences these steps; it never draws.
//!
//! - Operations return ordered [`Effect`]s for the host to apply.
//! - All time is the host's: scheduling operations take `now_ms`, and
//!   [`Sequencer::advance`] fires whatever came due.
//! - One session at a time. Starting a new one cancels every timer the old
//!   one owned before scheduling its own.
//!
//! ## Phases
//!
//! `Idle → Shrunk → Cornering → Extending → Rotating → Expanded`, then
//! `CollapseRequested → Idle`. [`Sequencer::restore`] jumps straight to
//! `Expanded` for page loads that already name an item.
//!
//! ```
//! use folio_nav::{ItemRef, ItemType};
//! use folio_sequencer::{CollapseCause, Phase, Sequencer, Stage};
//! use kurbo::Rect;
//!
//! let mut seq = Sequencer::default();
//! let mut stage = Stage::new();
//! let item = ItemRef::new("writing", "Writing", "On Maps", ItemType::Text);
//!
//! stage.apply_all(&seq.click(item, Rect::new(0.0, 0.0, 60.0, 20.0), 0).unwrap());
//! stage.apply_all(&seq.advance(1600));
//! assert_eq!(seq.phase(), Phase::Expanded);
//!
//! stage.apply_all(&seq.collapse(CollapseCause::Escape, 2000));
//! stage.apply_all(&seq.advance(2032));
//! assert_eq!(seq.phase(), Phase::Idle);
//! assert!(!stage.has_artifacts());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod effect;
mod hooks;
mod sequencer;
mod stage;
pub mod timeline;
mod timing;
mod types;

pub use effect::Effect;
pub use hooks::{ClickHook, Hooks, ItemHook, PlainHook};
pub use sequencer::Sequencer;
pub use stage::Stage;
pub use timing::{Layout, SequencerConfig, Timing};
pub use types::{
    CollapseCause, Look, PanelPose, PanelStance, Panels, Phase, Placeholder, PlaceholderContent,
    SessionId,
};
