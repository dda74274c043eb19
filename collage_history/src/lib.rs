// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=collage_history --heading-base-level=0

//! Collage History: snapshot-based undo/redo.
//!
//! This crate keeps the _bookkeeping_ of an undo/redo stack whose entries are
//! whole-document snapshots. It does not know what a document is; callers
//! commit a value after every user-visible mutation and restore whatever
//! [`History::undo`] or [`History::redo`] hands back.
//!
//! The core type is [`History`], which tracks:
//! - The **past** stack. Its last entry is always the current state, so the
//!   stack is never empty once constructed.
//! - The **future** stack of states that were undone and can be redone.
//! - An optional **limit** on the number of undo steps.
//! - A monotonically increasing **revision** counter that bumps when either
//!   stack changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use collage_history::History;
//!
//! // Start from an initial (for example, empty) document.
//! let mut history = History::new(0_u32);
//!
//! history.commit(1);
//! history.commit(2);
//! assert_eq!(history.current(), &2);
//!
//! // Undo restores the previous entry.
//! assert_eq!(history.undo(), Some(&1));
//!
//! // Redo brings it back.
//! assert_eq!(history.redo(), Some(&2));
//!
//! // A fresh commit after an undo drops the redo branch.
//! history.undo();
//! history.commit(7);
//! assert!(!history.can_redo());
//! ```
//!
//! ## Boundaries
//!
//! - [`History::undo`] is a no-op while only the initial entry remains.
//! - [`History::redo`] is a no-op while the future stack is empty.
//!
//! Neither is an error: both simply return `None` and leave the revision
//! untouched.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// An undo/redo stack over owned snapshots.
///
/// The past stack always holds at least one entry: the state the caller is
/// currently looking at. [`History::commit`] pushes a new current state and
/// clears the future stack; [`History::undo`] and [`History::redo`] move
/// entries between the two stacks.
#[derive(Clone, Debug)]
pub struct History<T> {
    past: VecDeque<T>,
    future: Vec<T>,
    limit: Option<NonZeroUsize>,
    revision: u64,
}

impl<T> History<T> {
    /// Creates a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let mut past = VecDeque::new();
        past.push_back(initial);
        Self {
            past,
            future: Vec::new(),
            limit: None,
            revision: 0,
        }
    }

    /// Creates a history that keeps at most `limit` undo steps.
    ///
    /// The current entry is kept on top of those, so a limit of one allows a
    /// single undo.
    #[must_use]
    pub fn with_limit(initial: T, limit: NonZeroUsize) -> Self {
        let mut history = Self::new(initial);
        history.limit = Some(limit);
        history
    }

    /// Returns the configured undo-step limit, if any.
    #[must_use]
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Sets or clears the undo-step limit, discarding the oldest entries if needed.
    pub fn set_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.limit = limit;
        if self.trim() {
            self.bump_revision();
        }
    }

    /// Returns the current entry (the top of the past stack).
    #[must_use]
    pub fn current(&self) -> &T {
        // `past` is never empty: every mutation keeps at least one entry.
        &self.past[self.past.len() - 1]
    }

    /// Returns `true` if [`History::undo`] would restore an entry.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Returns `true` if [`History::redo`] would restore an entry.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Returns how many undo steps are available.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.past.len() - 1
    }

    /// Returns how many redo steps are available.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Returns the past stack, oldest first. The last item is [`History::current`].
    pub fn past(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.past.iter()
    }

    /// Returns the future stack, next-to-redo first.
    pub fn future(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.future.iter().rev()
    }

    /// Returns the current revision counter.
    ///
    /// The counter is bumped on every commit and on every undo or redo that
    /// actually moved an entry. Boundary no-ops leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pushes `snapshot` as the new current entry and clears the redo stack.
    pub fn commit(&mut self, snapshot: T) {
        self.past.push_back(snapshot);
        self.future.clear();
        self.trim();
        self.bump_revision();
    }

    /// Steps back one entry.
    ///
    /// Moves the current entry onto the redo stack and returns the entry that
    /// is now current. Returns `None` without changing anything when only one
    /// entry remains.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        let undone = self.past.pop_back()?;
        self.future.push(undone);
        self.bump_revision();
        self.past.back()
    }

    /// Steps forward one entry.
    ///
    /// Pops the most recently undone entry, pushes it back onto the past
    /// stack and returns it. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        let redone = self.future.pop()?;
        self.past.push_back(redone);
        self.trim();
        self.bump_revision();
        self.past.back()
    }

    /// Drops every entry and starts over from `initial`.
    ///
    /// The limit is kept.
    pub fn reset(&mut self, initial: T) {
        self.past.clear();
        self.past.push_back(initial);
        self.future.clear();
        self.bump_revision();
    }

    /// Discards the oldest past entries so at most `limit` undo steps remain.
    /// Returns `true` if anything was dropped.
    fn trim(&mut self) -> bool {
        let Some(limit) = self.limit else {
            return false;
        };
        let mut trimmed = false;
        while self.undo_len() > limit.get() {
            self.past.pop_front();
            trimmed = true;
        }
        trimmed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> History<T>
where
    T: PartialEq,
{
    /// Commits `snapshot` only if it differs from the current entry.
    ///
    /// Returns `true` if a commit happened. This is the natural fit for
    /// "commit on release" interactions such as sliders, where the live value
    /// may already equal the last committed one.
    pub fn commit_if_changed(&mut self, snapshot: T) -> bool {
        if *self.current() == snapshot {
            return false;
        }
        self.commit(snapshot);
        true
    }
}

impl<T> Default for History<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
