// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=collage_geometry --heading-base-level=0

//! Collage Geometry: the small amount of 2D math an image-collage editor owns.
//!
//! Everything here is a pure function or a plain value over [`kurbo`] types.
//! The crate does **not** render, hit test, or track pointer state; the scene
//! graph does that. It answers the questions the editor asks on top:
//!
//! - [`RotatedBox`]: where do the corners of a rotated object land, and what
//!   axis-aligned box ("client rect") encloses them?
//! - [`bounds`]: should a proposed resize/rotate be rejected because it leaves
//!   the canvas or gets too small, and how far must a dragged group move to
//!   get back inside?
//! - [`guide`]: which canvas or object line is the dragged object close enough
//!   to snap onto?
//! - [`crop`]: which source pixels does a stage-space crop box select, given
//!   the crops and resizes already applied?
//! - [`fit`]: how large should a freshly loaded image be to fit the canvas?
//!
//! ## Conventions
//!
//! - Coordinates are stage (canvas) pixels, y pointing down.
//! - Rotations are in **degrees**, clockwise on screen, around the object's
//!   origin (its unrotated top-left corner).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use collage_geometry::guide::{find_guides, LineGuideStops, SnapEdges, DEFAULT_SNAP_THRESHOLD};
//! use collage_geometry::RotatedBox;
//!
//! let canvas = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! // An unrotated 100x100 object dragged to x = 3: its left edge is 3px from
//! // the canvas edge, close enough to snap.
//! let moving = RotatedBox::new(Point::new(3.0, 250.0), Size::new(100.0, 100.0), 0.0);
//! let stops = LineGuideStops::from_canvas(canvas);
//! let edges = SnapEdges::new(moving.client_rect(), moving.origin);
//! let guides = find_guides(&stops, &edges, DEFAULT_SNAP_THRESHOLD);
//!
//! let snapped = guides.apply(moving.origin);
//! assert_eq!(snapped.x, 0.0);
//! // Its center (300) lines up with the canvas center too.
//! assert_eq!(snapped.y, 250.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod bounds;
pub mod crop;
pub mod fit;
pub mod guide;
mod rotated;

pub use rotated::{RotatedBox, union_rect};
