// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The addressable location: the URL fragment.

use std::collections::VecDeque;

/// Read and write access to the current fragment.
///
/// Change notifications are delivered by the host, which calls
/// [`Archive::on_navigation_changed`](crate::Archive::on_navigation_changed)
/// once per change.
pub trait Location {
    /// Current fragment, including the leading `#` if any.
    fn fragment(&self) -> String;

    /// Replace the fragment.
    fn set_fragment(&mut self, fragment: &str);
}

/// In-memory location that queues change notifications like a browser.
///
/// A write queues a notification only if the value changed.
///
/// ```
/// use folio_router::{Location, MemoryLocation};
///
/// let mut loc = MemoryLocation::new("#/");
/// loc.set_fragment("#/a/b");
/// loc.set_fragment("#/a/b");
/// assert_eq!(loc.poll(), Some("#/a/b".to_string()));
/// assert_eq!(loc.poll(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLocation {
    current: String,
    history: Vec<String>,
    pending: VecDeque<String>,
}

impl MemoryLocation {
    /// Start at `fragment` with nothing queued.
    pub fn new(fragment: impl Into<String>) -> Self {
        let current = fragment.into();
        Self {
            history: vec![current.clone()],
            current,
            pending: VecDeque::new(),
        }
    }

    /// A user navigation (address bar, link, bookmark).
    pub fn visit(&mut self, fragment: &str) {
        self.set_fragment(fragment);
    }

    /// Go back one history entry, queueing a notification. False if there is none.
    pub fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        let Some(previous) = self.history.last().cloned() else {
            return false;
        };
        self.current.clone_from(&previous);
        self.pending.push_back(previous);
        true
    }

    /// Next undelivered change notification, carrying the value written.
    pub fn poll(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Number of undelivered notifications.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Every fragment visited, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.current.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        if self.current == fragment {
            return;
        }
        self.current = fragment.to_owned();
        self.history.push(self.current.clone());
        self.pending.push_back(self.current.clone());
    }
}
