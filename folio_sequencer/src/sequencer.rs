// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The expand/collapse state machine.
//!
//! ## Sessions
//!
//! At most one session exists at a time. A click starts a new session; if one
//! is already active it is torn down first, synchronously and completely, and
//! every pending timer it owned is cancelled before the new session schedules
//! its own. Phase cues also carry their session id, and a cue whose session is
//! no longer current is dropped.
//!
//! ## Phase table
//!
//! The animated path is driven by a table of `(phase, delay, entry action)`
//! rows. All rows are scheduled at click time at their cumulative offsets, on
//! one timeline track, so cancelling the session is a single
//! [`Timeline::cancel_track`] call.
//!
//! ## Panels
//!
//! The panel group (menu, background, side text) slides away when a session
//! starts and back when it ends. Its transition is independent of the item's
//! phase timeline and lives on its own track.
//!
//! ## Clock
//!
//! Nothing here reads a clock. Every operation that may schedule takes the
//! host's `now_ms`, and [`Sequencer::advance`] fires whatever is due.

use alloc::string::String;
use alloc::vec::Vec;

use folio_nav::{ItemRef, ROOT_FRAGMENT};
use kurbo::{Rect, Size};

use crate::effect::Effect;
use crate::hooks::Hooks;
use crate::timeline::Timeline;
use crate::timing::{Layout, SequencerConfig, Timing};
use crate::types::{
    CollapseCause, Look, PanelPose, PanelStance, Phase, Placeholder, PlaceholderContent,
    SessionId,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Track {
    Session,
    Panels,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cue {
    Enter(SessionId, Phase),
    SettleCollapse(SessionId, CollapseCause),
    ShiftPanels,
    SettlePanels,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ContentState {
    NotRequested,
    Pending,
    Loaded,
    Empty,
}

#[derive(Clone, Debug)]
struct Session {
    id: SessionId,
    phase: Phase,
    item: ItemRef,
    anchor: Rect,
    placeholder: Placeholder,
    dismiss: bool,
    label_hidden: bool,
    content: ContentState,
}

/// Geometry in effect when an entry action runs.
#[derive(Copy, Clone, Debug)]
struct Frame {
    layout: Layout,
    viewport: Size,
}

type EntryAction = fn(&mut Session, &Frame, &mut Vec<Effect>);

struct PhaseStep {
    phase: Phase,
    delay_ms: u32,
    entry: EntryAction,
}

fn phase_table(timing: &Timing) -> [PhaseStep; 4] {
    [
        PhaseStep {
            phase: Phase::Cornering,
            delay_ms: timing.to_corner_ms,
            entry: enter_cornering,
        },
        PhaseStep {
            phase: Phase::Extending,
            delay_ms: timing.to_extend_ms,
            entry: enter_extending,
        },
        PhaseStep {
            phase: Phase::Rotating,
            delay_ms: timing.to_rotate_ms,
            entry: enter_rotating,
        },
        PhaseStep {
            phase: Phase::Expanded,
            delay_ms: timing.to_expanded_ms,
            entry: enter_expanded,
        },
    ]
}

fn entry_for(timing: &Timing, phase: Phase) -> Option<EntryAction> {
    phase_table(timing)
        .into_iter()
        .find(|step| step.phase == phase)
        .map(|step| step.entry)
}

// Swap in the header markup and head for the corner; the location follows the item.
fn enter_cornering(s: &mut Session, frame: &Frame, out: &mut Vec<Effect>) {
    s.placeholder.content = PlaceholderContent::Header {
        title: s.item.item_name.clone(),
    };
    s.placeholder.look = Look::MOVING;
    s.placeholder.rect = frame.layout.corner_rect(frame.viewport, s.anchor.height());
    out.push(Effect::Placeholder(s.placeholder.clone()));
    out.push(Effect::Navigate(s.item.fragment()));
}

fn enter_extending(s: &mut Session, frame: &Frame, out: &mut Vec<Effect>) {
    s.placeholder.look |= Look::EXTENDING;
    s.placeholder.rect = frame
        .layout
        .corner_rect(frame.viewport, frame.viewport.height);
    out.push(Effect::Placeholder(s.placeholder.clone()));
}

fn enter_rotating(s: &mut Session, frame: &Frame, out: &mut Vec<Effect>) {
    s.placeholder.look |= Look::ROTATING;
    out.push(Effect::Placeholder(s.placeholder.clone()));
    ensure_dismiss(s, frame, out);
}

fn enter_expanded(s: &mut Session, _frame: &Frame, out: &mut Vec<Effect>) {
    s.placeholder.look |= Look::EXPANDED;
    out.push(Effect::Placeholder(s.placeholder.clone()));
    request_content(s, out);
}

fn ensure_dismiss(s: &mut Session, frame: &Frame, out: &mut Vec<Effect>) {
    if s.dismiss {
        return;
    }
    s.dismiss = true;
    out.push(Effect::ShowDismiss {
        origin: frame.layout.dismiss_origin(frame.viewport),
    });
}

fn request_content(s: &mut Session, out: &mut Vec<Effect>) {
    s.content = ContentState::Pending;
    out.push(Effect::LoadContent {
        session: s.id,
        item: s.item.clone(),
    });
}

/// Drives one item at a time from its menu label to the expanded panel and back.
///
/// ```
/// use folio_nav::{ItemRef, ItemType};
/// use folio_sequencer::{Effect, Phase, Sequencer};
/// use kurbo::Rect;
///
/// let mut seq = Sequencer::default();
/// let item = ItemRef::new("media", "Media", "Photo One", ItemType::Image);
///
/// let fx = seq.click(item, Rect::new(10.0, 10.0, 90.0, 30.0), 0).unwrap();
/// assert!(fx.iter().any(|e| matches!(e, Effect::Placeholder(_))));
/// assert_eq!(seq.phase(), Phase::Shrunk);
///
/// let fx = seq.advance(1600);
/// assert!(fx.contains(&Effect::Navigate("#/media/photo-one".into())));
/// assert_eq!(seq.phase(), Phase::Expanded);
/// ```
#[derive(Debug, Default)]
pub struct Sequencer {
    config: SequencerConfig,
    hooks: Hooks,
    timeline: Timeline<Track, Cue>,
    session: Option<Session>,
    next_session: u32,
    panels: PanelStance,
}

impl Sequencer {
    /// Create a sequencer with the given configuration and hooks.
    pub fn new(config: SequencerConfig, hooks: Hooks) -> Self {
        Self {
            config,
            hooks,
            ..Self::default()
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Mutable access to the hooks.
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// Update the viewport used for header geometry. Applies from the next phase entry.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
    }

    /// Current phase; [`Phase::Idle`] when no session exists.
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, |s| s.phase)
    }

    /// True while a session exists.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Current session id.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Item of the current session.
    pub fn current_item(&self) -> Option<&ItemRef> {
        self.session.as_ref().map(|s| &s.item)
    }

    /// Header title of the current session.
    pub fn current_title(&self) -> Option<&str> {
        self.current_item().map(|item| item.item_name.as_str())
    }

    /// Where the panel group is in its transition.
    pub fn panel_stance(&self) -> PanelStance {
        self.panels
    }

    /// Earliest pending deadline, so a host can arm a single real timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    /// Enable or disable the animated path.
    ///
    /// Disabling tears down any active session immediately and points the
    /// location back at the menu.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<Effect> {
        let mut out = Vec::new();
        if self.config.enabled == enabled {
            return out;
        }
        self.config.enabled = enabled;
        log::debug!("animation {}", if enabled { "enabled" } else { "disabled" });
        if !enabled && self.session.is_some() {
            self.teardown(&mut out);
            self.timeline.cancel_track(Track::Panels);
            self.panels = PanelStance::Rest;
            out.push(Effect::MenuVisibility(true));
            out.push(Effect::Panels(PanelPose::rest(self.config.panels)));
            out.push(Effect::Navigate(ROOT_FRAGMENT.into()));
        }
        out
    }

    /// Intercept a click on an item label whose on-screen rectangle is `anchor`.
    ///
    /// Returns `None` if the `on_item_click` hook vetoed the click, in which case
    /// nothing changed. Otherwise any previous session is torn down and a new one
    /// starts in [`Phase::Shrunk`] (or jumps to [`Phase::Expanded`] when the
    /// animation is disabled).
    pub fn click(&mut self, item: ItemRef, anchor: Rect, now_ms: u64) -> Option<Vec<Effect>> {
        if !self.hooks.allow_click(&item) {
            log::debug!("click on {:?} vetoed by hook", item.item_name);
            return None;
        }
        Hooks::item(&mut self.hooks.on_before_expand, &item);

        let mut out = Vec::new();
        self.teardown(&mut out);

        if !self.config.enabled {
            out.push(Effect::Navigate(item.fragment()));
            self.restore_into(item, &mut out);
            return Some(out);
        }

        let id = self.allocate_session();
        log::debug!("{id}: expand {:?} from {anchor:?}", item.item_name);
        let placeholder = Placeholder {
            rect: anchor,
            content: PlaceholderContent::Label(item.item_name.clone()),
            look: Look::START,
        };
        out.push(Effect::PhaseEntered {
            session: id,
            phase: Phase::Shrunk,
        });
        out.push(Effect::LabelVisibility {
            item: item.clone(),
            visible: false,
        });
        out.push(Effect::Placeholder(placeholder.clone()));
        self.session = Some(Session {
            id,
            phase: Phase::Shrunk,
            item,
            anchor,
            placeholder,
            dismiss: false,
            label_hidden: true,
            content: ContentState::NotRequested,
        });

        self.leave_panels(now_ms, &mut out);

        let mut due = now_ms;
        for step in phase_table(&self.config.timing) {
            due += u64::from(step.delay_ms);
            self.timeline
                .schedule(due, Track::Session, Cue::Enter(id, step.phase));
        }
        Some(out)
    }

    /// Jump straight to the expanded end-state for `item`, with no animation.
    ///
    /// Used when the location already names an item (page load, refresh,
    /// back/forward). Hides the menu container, never enters an expanding
    /// phase, and never writes the location.
    pub fn restore(&mut self, item: ItemRef) -> Vec<Effect> {
        let mut out = Vec::new();
        self.teardown(&mut out);
        self.restore_into(item, &mut out);
        out
    }

    /// Request a collapse of the current session.
    ///
    /// A no-op when idle or already collapsing. Collapsing mid-expansion cancels
    /// the remaining phase timers.
    pub fn collapse(&mut self, cause: CollapseCause, now_ms: u64) -> Vec<Effect> {
        let mut out = Vec::new();
        let Some(s) = self.session.as_mut() else {
            log::debug!("collapse ({cause:?}) with no session: ignored");
            return out;
        };
        if s.phase == Phase::CollapseRequested {
            log::debug!("{}: collapse ({cause:?}) already in progress", s.id);
            return out;
        }
        let cancelled = self.timeline.cancel_track(Track::Session);
        log::debug!(
            "{}: collapse ({cause:?}) from {:?}, {cancelled} cue(s) cancelled",
            s.id,
            s.phase
        );
        s.phase = Phase::CollapseRequested;
        s.placeholder.look = Look::DESELECTING | Look::ACTIVE;
        let id = s.id;
        let item = s.item.clone();
        out.push(Effect::HideContent);
        out.push(Effect::PhaseEntered {
            session: id,
            phase: Phase::CollapseRequested,
        });
        out.push(Effect::Placeholder(s.placeholder.clone()));
        Hooks::item(&mut self.hooks.on_before_collapse, &item);

        let due = now_ms + u64::from(self.config.timing.collapse_settle_ms);
        self.timeline
            .schedule(due, Track::Session, Cue::SettleCollapse(id, cause));
        out
    }

    /// Report the outcome of a [`Effect::LoadContent`] request.
    ///
    /// `html` is `None` when nothing could be resolved or fetched; the panel then
    /// stays empty. Reports for a session that is no longer current are dropped.
    pub fn content_settled(&mut self, session: SessionId, html: Option<String>) -> Vec<Effect> {
        let mut out = Vec::new();
        let Some(s) = self.session.as_mut() else {
            log::debug!("{session}: content settled after teardown, dropped");
            return out;
        };
        if s.id != session || s.phase != Phase::Expanded || s.content != ContentState::Pending {
            log::debug!("{session}: stale content report, dropped");
            return out;
        }
        let item = s.item.clone();
        match html {
            Some(html) => {
                s.content = ContentState::Loaded;
                out.push(Effect::ShowContent(html));
            }
            None => {
                s.content = ContentState::Empty;
                log::warn!("{session}: no content for {:?}", item.item_name);
            }
        }
        Hooks::item(&mut self.hooks.on_expand_complete, &item);
        out
    }

    /// Return the panel group to rest.
    ///
    /// Animates the return if the panels are away or on their way out;
    /// otherwise re-asserts the resting pose without animation.
    pub fn return_panels(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut out = Vec::new();
        self.return_panels_into(now_ms, &mut out);
        out
    }

    /// Fire every cue due at or before `now_ms`, in deadline order.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut out = Vec::new();
        while let Some(fired) = self.timeline.pop_due(now_ms) {
            self.fire(fired.payload, fired.due, &mut out);
        }
        out
    }

    fn allocate_session(&mut self) -> SessionId {
        self.next_session += 1;
        SessionId(self.next_session)
    }

    fn frame(&self) -> Frame {
        Frame {
            layout: self.config.layout,
            viewport: self.config.viewport,
        }
    }

    fn fire(&mut self, cue: Cue, due: u64, out: &mut Vec<Effect>) {
        match cue {
            Cue::Enter(id, phase) => self.enter(id, phase, out),
            Cue::SettleCollapse(id, cause) => self.settle_collapse(id, cause, due, out),
            Cue::ShiftPanels => {
                self.panels = PanelStance::Away;
                out.push(Effect::Panels(PanelPose {
                    panels: self.config.panels,
                    away: true,
                    transitioning: true,
                    animate: true,
                }));
            }
            Cue::SettlePanels => {
                self.panels = PanelStance::Rest;
                out.push(Effect::Panels(PanelPose::rest(self.config.panels)));
            }
        }
    }

    fn enter(&mut self, id: SessionId, phase: Phase, out: &mut Vec<Effect>) {
        let frame = self.frame();
        let Some(entry) = entry_for(&self.config.timing, phase) else {
            return;
        };
        let Some(s) = self.session.as_mut().filter(|s| s.id == id) else {
            log::debug!("{id}: stale {phase:?} cue dropped");
            return;
        };
        if s.phase == Phase::CollapseRequested {
            log::debug!("{id}: {phase:?} cue after collapse dropped");
            return;
        }
        log::debug!("{id}: {:?} -> {phase:?}", s.phase);
        s.phase = phase;
        out.push(Effect::PhaseEntered { session: id, phase });
        entry(s, &frame, out);
        if phase == Phase::Expanded {
            let item = s.item.clone();
            Hooks::item(&mut self.hooks.on_after_expand, &item);
        }
    }

    fn settle_collapse(
        &mut self,
        id: SessionId,
        cause: CollapseCause,
        due: u64,
        out: &mut Vec<Effect>,
    ) {
        if self.session_id() != Some(id) {
            log::debug!("{id}: stale collapse settle dropped");
            return;
        }
        let Some(s) = self.session.take() else {
            return;
        };
        if s.dismiss {
            out.push(Effect::RemoveDismiss);
        }
        out.push(Effect::RemovePlaceholder);
        if s.label_hidden {
            out.push(Effect::LabelVisibility {
                item: s.item.clone(),
                visible: true,
            });
        }
        out.push(Effect::MenuVisibility(true));
        self.return_panels_into(due, out);
        if cause.resets_location() {
            out.push(Effect::Navigate(ROOT_FRAGMENT.into()));
        }
        out.push(Effect::PhaseEntered {
            session: id,
            phase: Phase::Idle,
        });
        log::debug!("{id}: collapsed ({cause:?})");
        Hooks::item(&mut self.hooks.on_after_collapse, &s.item);
        Hooks::plain(&mut self.hooks.on_collapse_complete);
    }

    fn restore_into(&mut self, item: ItemRef, out: &mut Vec<Effect>) {
        let id = self.allocate_session();
        log::debug!("{id}: restore {:?}", item.item_name);
        let frame = self.frame();
        out.push(Effect::MenuVisibility(false));
        self.place_panels_away(out);
        let rect = frame
            .layout
            .corner_rect(frame.viewport, frame.viewport.height);
        let mut s = Session {
            id,
            phase: Phase::Expanded,
            placeholder: Placeholder {
                rect,
                content: PlaceholderContent::Header {
                    title: item.item_name.clone(),
                },
                look: Look::EXPANDED,
            },
            anchor: rect,
            item,
            dismiss: false,
            label_hidden: false,
            content: ContentState::NotRequested,
        };
        out.push(Effect::PhaseEntered {
            session: id,
            phase: Phase::Expanded,
        });
        out.push(Effect::Placeholder(s.placeholder.clone()));
        ensure_dismiss(&mut s, &frame, out);
        request_content(&mut s, out);
        self.session = Some(s);
    }

    /// Synchronous, total teardown of the current session. No animation.
    fn teardown(&mut self, out: &mut Vec<Effect>) {
        let Some(s) = self.session.take() else {
            return;
        };
        let cancelled = self.timeline.cancel_track(Track::Session);
        log::debug!("{}: torn down in {:?}, {cancelled} cue(s) cancelled", s.id, s.phase);
        if s.dismiss {
            out.push(Effect::RemoveDismiss);
        }
        out.push(Effect::RemovePlaceholder);
        if s.label_hidden {
            out.push(Effect::LabelVisibility {
                item: s.item,
                visible: true,
            });
        }
        out.push(Effect::HideContent);
        out.push(Effect::PhaseEntered {
            session: s.id,
            phase: Phase::Idle,
        });
    }

    fn leave_panels(&mut self, now_ms: u64, out: &mut Vec<Effect>) {
        self.timeline.cancel_track(Track::Panels);
        if let Some(f) = self.hooks.on_panels_leave.as_mut() {
            f();
            self.panels = PanelStance::Away;
            return;
        }
        self.panels = PanelStance::Leaving;
        out.push(Effect::Panels(PanelPose {
            panels: self.config.panels,
            away: false,
            transitioning: true,
            animate: true,
        }));
        let due = now_ms + u64::from(self.config.timing.panel_kickoff_ms);
        self.timeline.schedule(due, Track::Panels, Cue::ShiftPanels);
    }

    fn place_panels_away(&mut self, out: &mut Vec<Effect>) {
        self.timeline.cancel_track(Track::Panels);
        self.panels = PanelStance::Away;
        out.push(Effect::Panels(PanelPose {
            panels: self.config.panels,
            away: true,
            transitioning: true,
            animate: false,
        }));
    }

    fn return_panels_into(&mut self, now_ms: u64, out: &mut Vec<Effect>) {
        match self.panels {
            PanelStance::Rest => out.push(Effect::Panels(PanelPose::rest(self.config.panels))),
            PanelStance::Returning => {}
            PanelStance::Leaving | PanelStance::Away => {
                self.timeline.cancel_track(Track::Panels);
                if let Some(f) = self.hooks.on_panels_return.as_mut() {
                    f();
                    self.panels = PanelStance::Rest;
                    return;
                }
                self.panels = PanelStance::Returning;
                out.push(Effect::Panels(PanelPose {
                    panels: self.config.panels,
                    away: false,
                    transitioning: true,
                    animate: true,
                }));
                let due = now_ms + u64::from(self.config.timing.panel_settle_ms);
                self.timeline.schedule(due, Track::Panels, Cue::SettlePanels);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Panels;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::RefCell;
    use folio_nav::ItemType;

    fn photo() -> ItemRef {
        ItemRef::new("media", "Media", "Photo One", ItemType::Image)
    }

    fn essay() -> ItemRef {
        ItemRef::new("writing", "Writing", "An Essay", ItemType::Text)
    }

    fn anchor() -> Rect {
        Rect::new(40.0, 300.0, 160.0, 324.0)
    }

    fn phases(fx: &[Effect]) -> Vec<Phase> {
        fx.iter()
            .filter_map(|e| match e {
                Effect::PhaseEntered { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect()
    }

    fn sessions(fx: &[Effect]) -> Vec<SessionId> {
        fx.iter()
            .filter_map(|e| match e {
                Effect::PhaseEntered { session, .. } => Some(*session),
                _ => None,
            })
            .collect()
    }

    fn navigations(fx: &[Effect]) -> Vec<String> {
        fx.iter()
            .filter_map(|e| match e {
                Effect::Navigate(f) => Some(f.clone()),
                _ => None,
            })
            .collect()
    }

    fn expanded(seq: &mut Sequencer, item: ItemRef) -> SessionId {
        seq.click(item, anchor(), 0).unwrap();
        seq.advance(1600);
        seq.session_id().unwrap()
    }

    #[test]
    fn click_walks_the_five_phases_in_order() {
        let mut seq = Sequencer::default();
        let mut fx = seq.click(photo(), anchor(), 0).unwrap();
        assert_eq!(seq.phase(), Phase::Shrunk);
        assert_eq!(
            &fx[..3],
            &[
                Effect::PhaseEntered {
                    session: seq.session_id().unwrap(),
                    phase: Phase::Shrunk
                },
                Effect::LabelVisibility {
                    item: photo(),
                    visible: false
                },
                Effect::Placeholder(Placeholder {
                    rect: anchor(),
                    content: PlaceholderContent::Label("Photo One".to_string()),
                    look: Look::START,
                }),
            ]
        );

        // Nothing fires before its deadline.
        assert!(phases(&seq.advance(99)).is_empty());
        assert_eq!(seq.phase(), Phase::Shrunk);

        fx.extend(seq.advance(2000));
        assert_eq!(
            phases(&fx),
            vec![
                Phase::Shrunk,
                Phase::Cornering,
                Phase::Extending,
                Phase::Rotating,
                Phase::Expanded
            ]
        );
        assert_eq!(seq.phase(), Phase::Expanded);
        assert_eq!(navigations(&fx), vec!["#/media/photo-one".to_string()]);
        assert!(fx.iter().any(|e| matches!(e, Effect::LoadContent { .. })));
    }

    #[test]
    fn phase_delays_accumulate_from_click() {
        let config = SequencerConfig {
            timing: Timing {
                to_corner_ms: 1,
                to_extend_ms: 2,
                to_rotate_ms: 3,
                to_expanded_ms: 4,
                ..Timing::default()
            },
            ..SequencerConfig::default()
        };
        let mut seq = Sequencer::new(config, Hooks::new());
        seq.click(photo(), anchor(), 1000).unwrap();
        let mut entered = Vec::new();
        for (phase, at) in [
            (Phase::Cornering, 1001),
            (Phase::Extending, 1003),
            (Phase::Rotating, 1006),
            (Phase::Expanded, 1010),
        ] {
            assert!(phases(&seq.advance(at - 1)).is_empty(), "{phase:?} fired early");
            entered.extend(phases(&seq.advance(at)));
            assert_eq!(seq.phase(), phase);
        }
        assert_eq!(
            entered,
            vec![
                Phase::Cornering,
                Phase::Extending,
                Phase::Rotating,
                Phase::Expanded
            ]
        );
    }

    #[test]
    fn cornering_moves_header_to_top_right() {
        let mut seq = Sequencer::default();
        seq.click(photo(), anchor(), 0).unwrap();
        let fx = seq.advance(100);
        let header = fx.iter().find_map(|e| match e {
            Effect::Placeholder(p) => Some(p.clone()),
            _ => None,
        });
        let header = header.unwrap();
        assert_eq!(header.rect, Rect::new(1060.0, 0.0, 1260.0, 24.0));
        assert_eq!(
            header.content,
            PlaceholderContent::Header {
                title: "Photo One".to_string()
            }
        );
        assert_eq!(header.look, Look::MOVING);
    }

    #[test]
    fn restore_never_enters_expanding_phases() {
        let mut seq = Sequencer::default();
        let mut fx = seq.restore(photo());
        fx.extend(seq.advance(10_000));
        assert_eq!(phases(&fx), vec![Phase::Expanded]);
        assert_eq!(fx[0], Effect::MenuVisibility(false));
        assert!(navigations(&fx).is_empty(), "restore never writes the location");
        assert_eq!(
            fx.iter()
                .filter(|e| matches!(e, Effect::ShowDismiss { .. }))
                .count(),
            1
        );
        assert_eq!(seq.panel_stance(), PanelStance::Away);
        assert!(fx.contains(&Effect::Panels(PanelPose {
            panels: Panels::all(),
            away: true,
            transitioning: true,
            animate: false,
        })));
    }

    #[test]
    fn reclick_mid_expansion_cancels_old_session() {
        let mut seq = Sequencer::default();
        seq.click(photo(), anchor(), 0).unwrap();
        seq.advance(700);
        assert_eq!(seq.phase(), Phase::Extending);
        let first = seq.session_id().unwrap();

        let mut fx = seq.click(essay(), anchor(), 700).unwrap();
        let second = seq.session_id().unwrap();
        assert_ne!(first, second);
        // The old session is gone before the new one starts.
        assert_eq!(
            fx[..4],
            [
                Effect::RemovePlaceholder,
                Effect::LabelVisibility {
                    item: photo(),
                    visible: true
                },
                Effect::HideContent,
                Effect::PhaseEntered {
                    session: first,
                    phase: Phase::Idle
                },
            ]
        );

        fx.extend(seq.advance(10_000));
        let after: Vec<_> = sessions(&fx).into_iter().skip(1).collect();
        assert!(after.iter().all(|s| *s == second), "{after:?}");
        assert_eq!(seq.current_title(), Some("An Essay"));
        assert_eq!(seq.phase(), Phase::Expanded);
    }

    #[test]
    fn collapse_leaves_no_artifacts() {
        let mut seq = Sequencer::default();
        let id = expanded(&mut seq, photo());
        let shown = seq.content_settled(id, Some("<p>hi</p>".to_string()));
        assert_eq!(shown, vec![Effect::ShowContent("<p>hi</p>".to_string())]);

        let fx = seq.collapse(CollapseCause::Dismiss, 2000);
        assert_eq!(fx[0], Effect::HideContent);
        assert_eq!(seq.phase(), Phase::CollapseRequested);

        let fx = seq.advance(2032);
        assert_eq!(
            fx,
            vec![
                Effect::RemoveDismiss,
                Effect::RemovePlaceholder,
                Effect::LabelVisibility {
                    item: photo(),
                    visible: true
                },
                Effect::MenuVisibility(true),
                Effect::Panels(PanelPose {
                    panels: Panels::all(),
                    away: false,
                    transitioning: true,
                    animate: true,
                }),
                Effect::Navigate(ROOT_FRAGMENT.to_string()),
                Effect::PhaseEntered {
                    session: id,
                    phase: Phase::Idle
                },
            ]
        );
        assert!(!seq.is_active());
        assert_eq!(seq.panel_stance(), PanelStance::Returning);

        let fx = seq.advance(3032);
        assert_eq!(fx, vec![Effect::Panels(PanelPose::rest(Panels::all()))]);
        assert_eq!(seq.panel_stance(), PanelStance::Rest);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn collapse_from_navigation_keeps_location() {
        let mut seq = Sequencer::default();
        expanded(&mut seq, photo());
        seq.collapse(CollapseCause::Navigation, 2000);
        let fx = seq.advance(2100);
        assert!(navigations(&fx).is_empty());
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn collapse_mid_expansion_cancels_remaining_phases() {
        let mut seq = Sequencer::default();
        let mut fx = seq.click(photo(), anchor(), 0).unwrap();
        fx.extend(seq.advance(300));
        assert_eq!(seq.phase(), Phase::Cornering);
        fx.extend(seq.collapse(CollapseCause::Escape, 300));
        fx.extend(seq.advance(10_000));
        assert_eq!(
            phases(&fx),
            vec![
                Phase::Shrunk,
                Phase::Cornering,
                Phase::CollapseRequested,
                Phase::Idle
            ]
        );
        // No dismiss control was ever shown, so none is removed.
        assert!(!fx.contains(&Effect::RemoveDismiss));
        assert_eq!(seq.panel_stance(), PanelStance::Rest);
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut seq = Sequencer::default();
        assert!(seq.collapse(CollapseCause::Dismiss, 0).is_empty());
        expanded(&mut seq, photo());
        assert!(!seq.collapse(CollapseCause::Dismiss, 2000).is_empty());
        assert!(seq.collapse(CollapseCause::Escape, 2001).is_empty());
        let fx = seq.advance(2100);
        assert_eq!(phases(&fx), vec![Phase::Idle]);
    }

    #[test]
    fn dismiss_control_is_created_once() {
        let mut seq = Sequencer::default();
        let mut fx = seq.click(photo(), anchor(), 0).unwrap();
        fx.extend(seq.advance(5000));
        let shown: Vec<_> = fx
            .iter()
            .filter(|e| matches!(e, Effect::ShowDismiss { .. }))
            .collect();
        assert_eq!(
            shown,
            vec![&Effect::ShowDismiss {
                origin: kurbo::Point::new(1240.0, 40.0)
            }]
        );
    }

    #[test]
    fn vetoed_click_changes_nothing() {
        let mut seq = Sequencer::new(
            SequencerConfig::default(),
            Hooks::new().on_item_click(|item| item.category_id != "media"),
        );
        assert!(seq.click(photo(), anchor(), 0).is_none());
        assert!(!seq.is_active());
        assert_eq!(seq.next_deadline(), None);
        assert!(seq.click(essay(), anchor(), 0).is_some());
    }

    #[test]
    fn disabled_animation_jumps_to_end_state() {
        let mut seq = Sequencer::default();
        assert!(seq.set_enabled(false).is_empty());
        let fx = seq.click(photo(), anchor(), 0).unwrap();
        assert_eq!(phases(&fx), vec![Phase::Expanded]);
        assert!(fx.contains(&Effect::MenuVisibility(false)));
        assert_eq!(navigations(&fx), vec!["#/media/photo-one".to_string()]);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn disabling_tears_down_active_session() {
        let mut seq = Sequencer::default();
        seq.click(photo(), anchor(), 0).unwrap();
        let fx = seq.set_enabled(false);
        assert_eq!(phases(&fx), vec![Phase::Idle]);
        assert!(fx.contains(&Effect::MenuVisibility(true)));
        assert!(fx.contains(&Effect::Panels(PanelPose::rest(Panels::all()))));
        assert_eq!(navigations(&fx), vec![ROOT_FRAGMENT.to_string()]);
        assert!(!seq.is_active());
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn stale_content_is_dropped() {
        let mut seq = Sequencer::default();
        let first = expanded(&mut seq, photo());
        seq.click(essay(), anchor(), 1700).unwrap();
        assert!(seq.content_settled(first, Some("old".to_string())).is_empty());

        // Not yet expanded: the request has not been made.
        let second = seq.session_id().unwrap();
        assert!(seq.content_settled(second, Some("early".to_string())).is_empty());

        seq.advance(3300);
        assert_eq!(
            seq.content_settled(second, Some("new".to_string())),
            vec![Effect::ShowContent("new".to_string())]
        );
        // A second report for the same request is ignored.
        assert!(seq.content_settled(second, None).is_empty());
    }

    #[test]
    fn missing_content_leaves_panel_empty() {
        let mut seq = Sequencer::default();
        let id = expanded(&mut seq, photo());
        assert!(seq.content_settled(id, None).is_empty());
        assert_eq!(seq.phase(), Phase::Expanded);
    }

    #[test]
    fn hooks_fire_in_order() {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut hooks = Hooks::new();
        let l = log.clone();
        hooks.on_before_expand = Some(Box::new(move |_: &ItemRef| {
            l.borrow_mut().push("before_expand");
        }));
        let l = log.clone();
        hooks = hooks.on_after_expand(move |_| l.borrow_mut().push("after_expand"));
        let l = log.clone();
        hooks = hooks.on_expand_complete(move |_| l.borrow_mut().push("expand_complete"));
        let l = log.clone();
        hooks.on_before_collapse = Some(Box::new(move |_: &ItemRef| {
            l.borrow_mut().push("before_collapse");
        }));
        let l = log.clone();
        hooks.on_after_collapse = Some(Box::new(move |_: &ItemRef| {
            l.borrow_mut().push("after_collapse");
        }));
        let l = log.clone();
        hooks = hooks.on_collapse_complete(move || l.borrow_mut().push("collapse_complete"));

        let mut seq = Sequencer::new(SequencerConfig::default(), hooks);
        let id = expanded(&mut seq, photo());
        seq.content_settled(id, None);
        seq.collapse(CollapseCause::Dismiss, 2000);
        seq.advance(2100);
        assert_eq!(
            *log.borrow(),
            vec![
                "before_expand",
                "after_expand",
                "expand_complete",
                "before_collapse",
                "after_collapse",
                "collapse_complete"
            ]
        );
    }

    #[test]
    fn panel_hooks_replace_default_effects() {
        let count: Rc<RefCell<u32>> = Rc::default();
        let mut hooks = Hooks::new();
        let c = count.clone();
        hooks.on_panels_leave = Some(Box::new(move || *c.borrow_mut() += 1));
        let c = count.clone();
        hooks.on_panels_return = Some(Box::new(move || *c.borrow_mut() += 10));

        let mut seq = Sequencer::new(SequencerConfig::default(), hooks);
        let fx = seq.click(photo(), anchor(), 0).unwrap();
        assert!(!fx.iter().any(|e| matches!(e, Effect::Panels(_))));
        seq.collapse(CollapseCause::Dismiss, 50);
        let fx = seq.advance(5000);
        assert!(!fx.iter().any(|e| matches!(e, Effect::Panels(_))));
        assert_eq!(*count.borrow(), 11);
        assert_eq!(seq.panel_stance(), PanelStance::Rest);
    }

    #[test]
    fn return_panels_at_rest_reasserts_rest_pose() {
        let mut seq = Sequencer::default();
        assert_eq!(
            seq.return_panels(0),
            vec![Effect::Panels(PanelPose::rest(Panels::all()))]
        );
    }

    #[test]
    fn viewport_change_applies_to_next_phase() {
        let mut seq = Sequencer::default();
        seq.click(photo(), anchor(), 0).unwrap();
        seq.advance(100);
        seq.set_viewport(Size::new(800.0, 600.0));
        let fx = seq.advance(600);
        let rect = fx.iter().find_map(|e| match e {
            Effect::Placeholder(p) => Some(p.rect),
            _ => None,
        });
        assert_eq!(rect, Some(Rect::new(580.0, 0.0, 780.0, 600.0)));
    }
}
