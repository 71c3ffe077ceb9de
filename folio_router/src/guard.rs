// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The self-caused navigation flag.

/// One-shot marker for a location write the application made itself.
///
/// Armed immediately before a programmatic write; consumed by the very next
/// change notification, which the router then ignores. Reading the flag is
/// only possible through [`EchoGuard::take`], which clears it.
///
/// The flag is a boolean, not a counter: two writes before the first
/// notification arrives leave only one armed mark, so the second notification
/// is routed normally.
///
/// ```
/// use folio_router::EchoGuard;
///
/// let mut guard = EchoGuard::default();
/// guard.arm();
/// assert!(guard.take());
/// assert!(!guard.take());
/// ```
#[derive(Debug, Default)]
pub struct EchoGuard {
    armed: bool,
}

impl EchoGuard {
    /// Mark the next change notification as self-caused.
    pub fn arm(&mut self) {
        if self.armed {
            log::debug!("echo guard armed twice before a notification");
        }
        self.armed = true;
    }

    /// Consume the mark.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.armed)
    }

    /// Whether a mark is pending. Does not consume it.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
