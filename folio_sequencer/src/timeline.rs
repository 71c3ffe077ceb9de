// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable, host-clocked timer queue.
//!
//! ## Overview
//!
//! The timeline never reads a clock. Callers schedule payloads at absolute
//! deadlines (milliseconds on the host's clock) and later drain whatever is due
//! with [`Timeline::pop_due`]. Each entry belongs to a *track*; cancelling a
//! track removes every pending entry on it in one operation.
//!
//! ## Ordering
//!
//! Entries fire by deadline, and entries with equal deadlines fire in
//! scheduling order. Draining one entry at a time lets the caller cancel or
//! schedule in response, and the next pop observes that immediately.
//!
//! ```
//! use folio_sequencer::timeline::Timeline;
//!
//! let mut t: Timeline<u8, &str> = Timeline::new();
//! t.schedule(20, 0, "late");
//! t.schedule(10, 0, "early");
//! t.schedule(10, 1, "other track");
//! assert_eq!(t.cancel_track(1), 1);
//!
//! assert_eq!(t.pop_due(15).map(|f| f.payload), Some("early"));
//! assert!(t.pop_due(15).is_none());
//! assert_eq!(t.next_due(), Some(20));
//! ```

use alloc::vec::Vec;

#[derive(Clone, Debug)]
struct Entry<K, T> {
    due: u64,
    seq: u64,
    track: K,
    payload: T,
}

/// An entry that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<K, T> {
    /// Deadline the entry was scheduled for.
    pub due: u64,
    /// Track it was scheduled on.
    pub track: K,
    /// Scheduled payload.
    pub payload: T,
}

/// Deadline-ordered queue of payloads grouped into cancellable tracks.
#[derive(Clone, Debug)]
pub struct Timeline<K, T> {
    entries: Vec<Entry<K, T>>,
    next_seq: u64,
}

impl<K, T> Default for Timeline<K, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq, T> Timeline<K, T> {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` on `track` at the absolute deadline `due`.
    pub fn schedule(&mut self, due: u64, track: K, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due,
            seq,
            track,
            payload,
        });
    }

    /// Cancel every pending entry on `track`, returning how many were removed.
    pub fn cancel_track(&mut self, track: K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.track != track);
        before - self.entries.len()
    }

    /// Number of pending entries on `track`.
    pub fn pending(&self, track: K) -> usize {
        self.entries.iter().filter(|e| e.track == track).count()
    }

    /// Total number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Remove and return the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Fired<K, T>> {
        let (idx, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))?;
        let entry = self.entries.swap_remove(idx);
        Some(Fired {
            due: entry.due,
            track: entry.track,
            payload: entry.payload,
        })
    }
}
