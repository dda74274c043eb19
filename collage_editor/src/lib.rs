// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=collage_editor --heading-base-level=0

//! Collage Editor: a headless editing session for image collages.
//!
//! [`Editor`] wires the lower crates together:
//!
//! - `collage_document` for the model and its reducers,
//! - `collage_history` for undo/redo over whole-document snapshots,
//! - `collage_selection` for the selected image,
//! - `collage_geometry` for fitting, guide snapping, bounding, and cropping.
//!
//! The UI layer feeds it pointer positions and gesture results and reads the
//! live [`Document`](collage_document::Document) back out to render. Nothing
//! here draws, decodes images, or recognizes gestures.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use collage_editor::{Editor, EditorConfig};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//!
//! // An 800x600 photo is fitted into the 1280x720 canvas.
//! let id = editor.add_image("blob:photo", Size::new(800.0, 600.0)).unwrap();
//! let fitted = editor.document().get(id).unwrap().position;
//!
//! // Drag it by (-220, -80) and let go.
//! editor.begin_drag(id, Point::new(400.0, 300.0));
//! editor.drag_to(Point::new(180.0, 220.0));
//! assert!(editor.end_drag());
//! assert_eq!(editor.document().get(id).unwrap().position, Point::new(100.0, 100.0));
//!
//! editor.undo();
//! assert_eq!(editor.document().get(id).unwrap().position, fitted);
//! editor.redo();
//! assert_eq!(editor.document().get(id).unwrap().position, Point::new(100.0, 100.0));
//! ```
//!
//! ## Logging
//!
//! The editor logs through the [`log`] facade: commits, undo, and redo at
//! `debug`, drag moves and previews at `trace`, and cleared stale selections or
//! repaired documents at `warn`. Install any logger to see them.

mod config;
mod crop;
mod drag;
mod editor;
mod error;

pub use config::{CanvasSize, EditorConfig};
pub use crop::CropSession;
pub use drag::DragSession;
pub use editor::Editor;
pub use error::{Error, Result};
