// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=collage_selection --heading-base-level=0

//! Collage Selection: a single-object selection pointer.
//!
//! A collage editor selects at most one object at a time. [`Selection`] holds
//! that optional key plus a **revision** counter that bumps whenever the
//! selected key actually changes, so observers can cheaply ask "did anything
//! change?" without comparing contents.
//!
//! The crate does not know what keys mean. After every document change the
//! owner calls [`Selection::retain`] with a presence test so the selection
//! never points at an object that no longer exists.
//!
//! ## Minimal example
//!
//! ```rust
//! use collage_selection::Selection;
//!
//! let mut selection = Selection::<u64>::new();
//!
//! // Click on object 7.
//! selection.select(7);
//! assert_eq!(selection.key(), Some(&7));
//!
//! // Object 7 is deleted; the selection follows.
//! let alive = [3_u64, 4];
//! assert!(selection.retain(|key| alive.contains(key)));
//! assert!(selection.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// An optional selected key and a revision counter.
///
/// `Selection` only requires `PartialEq` on its keys, so application id types
/// (plain integers, generational handles) can be used as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<K> {
    key: Option<K>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    /// Returns the selected key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// The counter is local to this instance and bumps only when the selected
    /// key changes. No-op calls (selecting the already-selected key, clearing
    /// an empty selection) leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        if self.key.take().is_some() {
            self.bump_revision();
        }
    }

    /// Clears the selection and returns the key that was selected.
    pub fn take(&mut self) -> Option<K> {
        let key = self.key.take();
        if key.is_some() {
            self.bump_revision();
        }
        key
    }

    /// Keeps the selected key only if `present` returns `true` for it.
    ///
    /// Returns `true` if the selection was cleared by this call.
    pub fn retain<F>(&mut self, mut present: F) -> bool
    where
        F: FnMut(&K) -> bool,
    {
        if self.key.as_ref().is_none_or(|key| present(key)) {
            return false;
        }
        self.key = None;
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> Selection<K>
where
    K: PartialEq,
{
    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Replaces the selection with `key`.
    pub fn select(&mut self, key: K) {
        if self.is_selected(&key) {
            return;
        }
        self.key = Some(key);
        self.bump_revision();
    }

    /// Replaces the selection with `key`, or clears it for `None`.
    pub fn set(&mut self, key: Option<K>) {
        match key {
            Some(key) => self.select(key),
            None => self.clear(),
        }
    }
}
