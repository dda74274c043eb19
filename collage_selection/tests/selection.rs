// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `collage_selection` crate.
//!
//! These exercise how the selected key and the revision counter interact,
//! including validation against a changing set of live keys.

use collage_selection::Selection;

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u64>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.key(), None);
    assert!(!sel.is_selected(&1));
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_replaces_and_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.select(1_u64);
    assert_eq!(sel.key(), Some(&1));
    assert_eq!(sel.revision(), 1);

    // No-op: selecting the same key again should not change revision.
    sel.select(1);
    assert_eq!(sel.revision(), 1);

    sel.select(2);
    assert!(sel.is_selected(&2));
    assert!(!sel.is_selected(&1));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn clear_empties_and_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select(1_u64);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);

    sel.clear();
    assert_eq!(sel.revision(), 2);
}

#[test]
fn retain_keeps_live_key() {
    let mut sel = Selection::new();
    sel.select(3_u64);
    let live = [1_u64, 2, 3];

    assert!(!sel.retain(|k| live.contains(k)));
    assert_eq!(sel.key(), Some(&3));
    assert_eq!(sel.revision(), 1);
}

#[test]
fn retain_clears_vanished_key() {
    let mut sel = Selection::new();
    sel.select(9_u64);
    let live = [1_u64, 2, 3];

    assert!(sel.retain(|k| live.contains(k)));
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);

    // Nothing left to clear.
    assert!(!sel.retain(|_| false));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn works_with_non_copy_keys() {
    #[derive(Debug, PartialEq)]
    struct Handle(&'static str);

    let mut sel = Selection::new();
    sel.select(Handle("a"));
    assert!(sel.is_selected(&Handle("a")));
    assert_eq!(sel.take(), Some(Handle("a")));
}
