// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless page model that applies [`Effect`]s.
//!
//! Hosts without a real page (tests, demos, server-side rendering) can use a
//! [`Stage`] to observe exactly what a browser host would display. Requests
//! ([`Effect::Navigate`], [`Effect::LoadContent`]) are recorded, not performed.

use alloc::string::String;
use alloc::vec::Vec;

use folio_nav::ItemRef;
use kurbo::Point;

use crate::effect::Effect;
use crate::types::{PanelPose, Phase, Placeholder, SessionId};

/// What a page would currently show.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    /// The floating placeholder, if present.
    pub placeholder: Option<Placeholder>,
    /// The dismiss control anchor, if present.
    pub dismiss: Option<Point>,
    /// Labels currently hidden.
    pub hidden_labels: Vec<ItemRef>,
    /// Current panel pose.
    pub panels: PanelPose,
    /// Rendered content in the panel, if shown.
    pub content: Option<String>,
    /// Whether the menu container is visible.
    pub menu_visible: bool,
    /// Every phase entry observed, in order.
    pub phases: Vec<(SessionId, Phase)>,
    /// Location writes requested, in order.
    pub navigations: Vec<String>,
    /// Content loads requested, in order.
    pub content_requests: Vec<(SessionId, ItemRef)>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            placeholder: None,
            dismiss: None,
            hidden_labels: Vec::new(),
            panels: PanelPose::default(),
            content: None,
            menu_visible: true,
            phases: Vec::new(),
            navigations: Vec::new(),
            content_requests: Vec::new(),
        }
    }
}

impl Stage {
    /// An empty page with the menu visible and panels at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one effect.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::PhaseEntered { session, phase } => self.phases.push((*session, *phase)),
            Effect::LabelVisibility { item, visible } => {
                self.hidden_labels.retain(|hidden| hidden != item);
                if !visible {
                    self.hidden_labels.push(item.clone());
                }
            }
            Effect::Placeholder(p) => self.placeholder = Some(p.clone()),
            Effect::RemovePlaceholder => self.placeholder = None,
            Effect::ShowDismiss { origin } => self.dismiss = Some(*origin),
            Effect::RemoveDismiss => self.dismiss = None,
            Effect::Panels(pose) => self.panels = *pose,
            Effect::MenuVisibility(visible) => self.menu_visible = *visible,
            Effect::Navigate(fragment) => self.navigations.push(fragment.clone()),
            Effect::LoadContent { session, item } => {
                self.content_requests.push((*session, item.clone()));
            }
            Effect::ShowContent(html) => self.content = Some(html.clone()),
            Effect::HideContent => self.content = None,
        }
    }

    /// Apply effects in order.
    pub fn apply_all<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Phases entered by one session, in order.
    pub fn phases_of(&self, session: SessionId) -> Vec<Phase> {
        self.phases
            .iter()
            .filter(|(s, _)| *s == session)
            .map(|(_, p)| *p)
            .collect()
    }

    /// True if any session artifact is still on the page.
    pub fn has_artifacts(&self) -> bool {
        self.placeholder.is_some()
            || self.dismiss.is_some()
            || !self.hidden_labels.is_empty()
            || self.content.is_some()
    }

    /// True if `item`'s label is hidden.
    pub fn label_hidden(&self, item: &ItemRef) -> bool {
        self.hidden_labels.contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollapseCause, Sequencer};
    use alloc::string::ToString;
    use alloc::vec;
    use folio_nav::ItemType;
    use kurbo::Rect;

    #[test]
    fn full_cycle_leaves_a_clean_page() {
        let item = ItemRef::new("media", "Media", "Photo One", ItemType::Image);
        let mut seq = Sequencer::default();
        let mut stage = Stage::new();

        let fx = seq
            .click(item.clone(), Rect::new(0.0, 0.0, 80.0, 20.0), 0)
            .unwrap();
        stage.apply_all(&fx);
        assert!(stage.label_hidden(&item));
        assert!(stage.panels.transitioning);

        stage.apply_all(&seq.advance(1600));
        assert!(stage.dismiss.is_some());
        assert_eq!(stage.content_requests.len(), 1);
        let (session, _) = stage.content_requests[0].clone();
        stage.apply_all(&seq.content_settled(session, Some("<p>x</p>".to_string())));
        assert_eq!(stage.content.as_deref(), Some("<p>x</p>"));

        stage.apply_all(&seq.collapse(CollapseCause::Dismiss, 2000));
        stage.apply_all(&seq.advance(4000));
        assert!(!stage.has_artifacts(), "{stage:?}");
        assert!(stage.menu_visible);
        assert_eq!(stage.panels, PanelPose::default());
        assert_eq!(
            stage.navigations,
            vec!["#/media/photo-one".to_string(), "#/".to_string()]
        );
        assert_eq!(
            stage.phases_of(session),
            vec![
                Phase::Shrunk,
                Phase::Cornering,
                Phase::Extending,
                Phase::Rotating,
                Phase::Expanded,
                Phase::CollapseRequested,
                Phase::Idle
            ]
        );
    }

    #[test]
    fn relabel_is_not_duplicated() {
        let item = ItemRef::new("a", "A", "x", ItemType::Text);
        let mut stage = Stage::new();
        let hide = Effect::LabelVisibility {
            item: item.clone(),
            visible: false,
        };
        stage.apply(&hide);
        stage.apply(&hide);
        assert_eq!(stage.hidden_labels.len(), 1);
        stage.apply(&Effect::LabelVisibility {
            item: item.clone(),
            visible: true,
        });
        assert!(!stage.label_hidden(&item));
    }
}
