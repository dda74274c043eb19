// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use collage_document::{
    Action, BackgroundColor, Document, Filter, FilterKind, FilterParam, ImageId, ImageObject,
    ImageSource, Transform,
};
use collage_geometry::RotatedBox;
use collage_geometry::bounds::{contains_rect, keep_inside, limit_box, limit_resize};
use collage_geometry::crop::crop_to_source;
use collage_geometry::fit::{fit_size, initial_position};
use collage_geometry::guide::{Guides, LineGuideStops, SnapEdges, find_guides};
use collage_history::History;
use collage_selection::Selection;
use kurbo::{Line, Point, Rect, Size};

use crate::{CropSession, DragSession, EditorConfig, Error, Result};

/// An editing session over one collage document.
///
/// The editor keeps two views of the document: the **live** document that
/// the UI renders, and the **history** of committed snapshots. Most edits
/// commit immediately. Drags and filter sliders only change the live
/// document until [`Editor::end_drag`] or [`Editor::commit_preview`].
///
/// Boundary conditions are not errors. An operation that cannot apply (no
/// selection, reorder at the end of the stack, undo with nothing to undo)
/// returns `false` or `None` and leaves every piece of state untouched.
#[derive(Clone, Debug)]
pub struct Editor {
    config: EditorConfig,
    document: Document,
    history: History<Document>,
    selection: Selection<ImageId>,
    drag: Option<DragSession>,
    crop: Option<CropSession>,
    next_id: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Creates an editor with an empty document.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let document = Document::with_background(config.background);
        let history = match config.history_limit {
            Some(limit) => History::with_limit(document.clone(), limit),
            None => History::new(document.clone()),
        };
        Self {
            config,
            document,
            history,
            selection: Selection::new(),
            drag: None,
            crop: None,
            next_id: 1,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the live document, including any uncommitted preview.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the committed history.
    #[must_use]
    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    /// Returns the selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<ImageId> {
        &self.selection
    }

    /// Returns the selected image.
    #[must_use]
    pub fn selected(&self) -> Option<&ImageObject> {
        self.selection.key().and_then(|id| self.document.get(*id))
    }

    /// Returns the active drag, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Returns the active crop, if crop mode is on.
    #[must_use]
    pub fn crop_session(&self) -> Option<&CropSession> {
        self.crop.as_ref()
    }

    /// Returns the guides of the active drag.
    #[must_use]
    pub fn guides(&self) -> Guides {
        self.drag.as_ref().map_or(Guides::NONE, |d| d.guides)
    }

    /// Returns the active guides as canvas-spanning line segments, for drawing.
    pub fn guide_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let canvas = self.config.canvas.rect();
        self.drag
            .iter()
            .flat_map(|d| d.guides.iter())
            .map(move |g| g.segment(canvas))
    }

    /// Returns `true` if [`Editor::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if [`Editor::redo`] would do something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns `true` if the live document differs from the last commit.
    #[must_use]
    pub fn has_uncommitted_changes(&self) -> bool {
        self.document != *self.history.current()
    }

    /// Applies `action` to the live document and commits the result.
    ///
    /// Returns `false`, committing nothing, if the action changes nothing.
    /// Any pending preview is committed along with the action.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        if !self.document.apply(action) {
            log::trace!("no-op {action:?}");
            return false;
        }
        if let Action::AddImage(image) = action {
            self.next_id = self.next_id.max(image.id.0.saturating_add(1));
        }
        self.history.commit(self.document.clone());
        log::debug!(
            "commit {action:?} (undo depth {})",
            self.history.undo_len()
        );
        self.drop_stale_state();
        true
    }

    /// Loads an image: fits it to the canvas and drops it a quarter of the
    /// way in.
    ///
    /// Returns the new id, or `None` if `natural_size` is empty.
    pub fn add_image(&mut self, url: impl Into<String>, natural_size: Size) -> Option<ImageId> {
        if !natural_size.is_finite() || natural_size.width <= 0.0 || natural_size.height <= 0.0 {
            log::debug!("ignoring image with natural size {natural_size:?}");
            return None;
        }
        let canvas = self.config.canvas.size();
        let size = fit_size(natural_size, canvas, self.config.fit_padding);
        let id = ImageId(self.next_id);
        let image = ImageObject::new(
            id,
            ImageSource::new(url, natural_size),
            initial_position(canvas),
            size,
        );
        self.dispatch(&Action::AddImage(image)).then_some(id)
    }

    /// Selects `id`. Selecting an unknown id clears the selection.
    ///
    /// Returns `true` if `id` is now selected.
    pub fn select(&mut self, id: ImageId) -> bool {
        if !self.document.contains(id) {
            self.deselect();
            return false;
        }
        self.selection.select(id);
        if self.crop.is_some_and(|c| c.id != id) {
            self.crop = None;
        }
        true
    }

    /// Clears the selection and leaves crop mode.
    pub fn deselect(&mut self) {
        self.selection.clear();
        self.crop = None;
    }

    /// Starts dragging `id` from pointer position `pointer`, selecting it.
    ///
    /// A drag already in progress is ended first.
    pub fn begin_drag(&mut self, id: ImageId, pointer: Point) -> bool {
        if self.drag.is_some() {
            self.end_drag();
        }
        let Some(image) = self.document.get(id) else {
            return false;
        };
        let start = image.position;
        let bounded = self.is_bounded(image.client_rect());
        self.select(id);
        self.drag = Some(DragSession::new(id, pointer, start, bounded));
        log::trace!("begin drag of {id} at {pointer:?}");
        true
    }

    /// Moves the dragged image to follow `pointer`.
    ///
    /// The proposed position snaps onto the closest canvas or object guide
    /// and, when configured and the image started out fully inside the canvas,
    /// is pushed back inside the canvas. The live
    /// document is updated but nothing is committed. Returns the new position.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        let canvas = self.config.canvas.rect();
        let drag = self.drag.as_mut()?;
        let proposed = drag.proposed(pointer);
        let id = drag.id;
        let moving = RotatedBox {
            origin: proposed,
            ..self.document.get(id)?.displayed_box()
        };

        let stops =
            LineGuideStops::from_canvas_and_rects(canvas, self.document.client_rects_except(id));
        let edges = SnapEdges::new(moving.client_rect(), proposed);
        let guides = find_guides(&stops, &edges, self.config.snap_threshold);
        let mut position = guides.apply(proposed);
        if drag.bounded {
            let snapped = RotatedBox {
                origin: position,
                ..moving
            };
            position += keep_inside(snapped.client_rect(), canvas);
        }

        drag.position = position;
        drag.guides = guides;
        if let Some(image) = self.document.get_mut(id) {
            image.position = position;
        }
        log::trace!(
            "drag {id} to ({:.1}, {:.1}) with {} guide(s)",
            position.x,
            position.y,
            guides.len()
        );
        Some(position)
    }

    /// Ends the drag and commits the move.
    ///
    /// Returns `true` if something was committed.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if drag.position == drag.object_start {
            return false;
        }
        let committed = self.history.commit_if_changed(self.document.clone());
        if committed {
            log::debug!("commit drag of {} to {:?}", drag.id, drag.position);
        }
        committed
    }

    /// Abandons the drag and puts the image back where it started.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Some(image) = self.document.get_mut(drag.id) {
            image.position = drag.object_start;
        }
        true
    }

    /// Applies the result of a resize or rotate gesture and commits it.
    ///
    /// The transform is rejected, leaving the image as it was, if either
    /// displayed side would be shorter than the configured minimum or, when
    /// configured, if an image inside the canvas would leave it.
    pub fn transform(&mut self, id: ImageId, transform: Transform) -> bool {
        let Some(image) = self.document.get(id) else {
            return false;
        };
        let old = image.displayed_box();
        let new = transform.displayed_box();
        if limit_resize(old, new, self.config.min_object_size) != new {
            log::trace!("rejected resize of {id}: below minimum size");
            return false;
        }
        if self.is_bounded(old.client_rect()) && limit_box(old, new, self.config.canvas.rect()) != new
        {
            log::trace!("rejected transform of {id}: outside canvas");
            return false;
        }
        self.dispatch(&Action::SetTransform { id, transform })
    }

    /// Changes the canvas background.
    pub fn set_background(&mut self, color: impl Into<BackgroundColor>) -> bool {
        self.dispatch(&Action::SetBackground(color.into()))
    }

    /// Changes the canvas background from a `#rrggbb` style string.
    pub fn set_background_hex(&mut self, hex: &str) -> Result<bool> {
        let color: BackgroundColor = hex.parse()?;
        Ok(self.set_background(color))
    }

    /// Swaps the selected image with the one above it.
    pub fn bring_forward(&mut self) -> bool {
        self.dispatch_on_selection(Action::BringForward)
    }

    /// Swaps the selected image with the one below it.
    pub fn send_backward(&mut self) -> bool {
        self.dispatch_on_selection(Action::SendBackward)
    }

    /// Moves the selected image to the top.
    pub fn bring_to_front(&mut self) -> bool {
        self.dispatch_on_selection(Action::BringToFront)
    }

    /// Moves the selected image to the bottom.
    pub fn send_to_back(&mut self) -> bool {
        self.dispatch_on_selection(Action::SendToBack)
    }

    /// Deletes the selected image and clears the selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.take() else {
            return false;
        };
        self.dispatch(&Action::Remove(id))
    }

    /// Gives the selected image a filter of `kind` with default parameters.
    pub fn choose_filter(&mut self, kind: FilterKind) -> bool {
        self.dispatch_on_selection(|id| Action::SetFilter {
            id,
            filter: Filter::default_for(kind),
        })
    }

    /// Live slider change on the selected image's filter. Not committed.
    ///
    /// Returns `true` if the live document changed.
    pub fn preview_filter_param(&mut self, param: FilterParam, value: f64) -> bool {
        let Some(id) = self.selection.key().copied() else {
            return false;
        };
        let changed = self
            .document
            .apply(&Action::SetFilterParam { id, param, value });
        if changed {
            log::trace!("preview {param:?} = {value} on {id}");
        }
        changed
    }

    /// Commits the live document if it differs from the last commit.
    ///
    /// This is the slider-release counterpart of
    /// [`Editor::preview_filter_param`].
    pub fn commit_preview(&mut self) -> bool {
        let committed = self.history.commit_if_changed(self.document.clone());
        if committed {
            log::debug!("commit preview (undo depth {})", self.history.undo_len());
        }
        committed
    }

    /// Enters crop mode on the selected image with the crop box covering it.
    pub fn start_crop(&mut self) -> bool {
        let Some(image) = self.selected() else {
            return false;
        };
        let id = image.id;
        let shown = image.displayed_box();
        self.crop = Some(CropSession {
            id,
            crop_box: Rect::from_origin_size(shown.origin, shown.size),
        });
        true
    }

    /// Replaces the crop box. Empty boxes are rejected.
    pub fn adjust_crop(&mut self, crop_box: Rect) -> bool {
        let Some(session) = self.crop.as_mut() else {
            return false;
        };
        if !(crop_box.width() > 0.0 && crop_box.height() > 0.0) || session.crop_box == crop_box {
            return false;
        }
        session.crop_box = crop_box;
        true
    }

    /// Applies the crop box and leaves crop mode.
    ///
    /// The new crop is computed against the original source pixels and
    /// clamped to them; the image takes the place and size of the visible
    /// part of the box, with scale reset to 1. Returns `true` if committed.
    pub fn confirm_crop(&mut self) -> bool {
        let Some(session) = self.crop.take() else {
            return false;
        };
        let Some(image) = self.document.get(session.id) else {
            return false;
        };
        let Some(placement) = crop_to_source(&image.crop_request(session.crop_box)) else {
            log::debug!("crop box {:?} misses {}", session.crop_box, session.id);
            return false;
        };
        self.dispatch(&Action::Crop {
            id: session.id,
            crop: placement.source,
            position: placement.position,
            size: placement.size,
        })
    }

    /// Leaves crop mode without changing anything.
    pub fn cancel_crop(&mut self) -> bool {
        self.crop.take().is_some()
    }

    /// Restores the previous committed document.
    ///
    /// Ends crop mode and any drag, and clears the selection if the selected
    /// image no longer exists. Uncommitted changes (a filter preview or a
    /// drag in progress) count as one step of their own: the first undo only
    /// discards them.
    pub fn undo(&mut self) -> bool {
        if self.has_uncommitted_changes() {
            self.document = self.history.current().clone();
            log::debug!("undo discarded uncommitted changes");
            self.end_transient_modes();
            return true;
        }
        let Some(previous) = self.history.undo() else {
            return false;
        };
        self.document = previous.clone();
        log::debug!("undo ({} left)", self.history.undo_len());
        self.end_transient_modes();
        true
    }

    /// Re-applies the most recently undone document.
    ///
    /// Same side effects as [`Editor::undo`].
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo() else {
            return false;
        };
        self.document = next.clone();
        log::debug!("redo ({} left)", self.history.redo_len());
        self.end_transient_modes();
        true
    }

    /// Serializes the live document as pretty-printed JSON.
    pub fn save_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Replaces the document with one parsed from JSON.
    ///
    /// History restarts from the loaded document and the selection is
    /// cleared. Images repeating an earlier id are dropped with a warning.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let document: Document = serde_json::from_str(json)?;
        self.replace_document(document);
        Ok(())
    }

    /// Writes the live document to `path` as JSON.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.save_json()?).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })
    }

    /// Reads a JSON document from `path`. See [`Editor::load_json`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        self.load_json(&json)
    }

    fn replace_document(&mut self, mut document: Document) {
        let repeated = document.remove_duplicate_ids();
        if !repeated.is_empty() {
            log::warn!("loaded document repeats ids {repeated:?}; keeping the lowest of each");
        }
        if let Some(max) = document.max_id() {
            self.next_id = self.next_id.max(max.0.saturating_add(1));
        }
        self.history.reset(document.clone());
        log::debug!("loaded document with {} image(s)", document.images.len());
        self.document = document;
        self.selection.clear();
        self.drag = None;
        self.crop = None;
    }

    /// Whether an image with bounds `rect` is kept inside the canvas.
    ///
    /// Images that already stick out (a freshly fitted image usually does)
    /// move freely.
    fn is_bounded(&self, rect: Rect) -> bool {
        self.config.keep_inside_canvas && contains_rect(self.config.canvas.rect(), rect)
    }

    fn dispatch_on_selection(&mut self, action: impl FnOnce(ImageId) -> Action) -> bool {
        match self.selection.key().copied() {
            Some(id) => self.dispatch(&action(id)),
            None => false,
        }
    }

    fn end_transient_modes(&mut self) {
        self.drag = None;
        self.crop = None;
        self.drop_stale_state();
    }

    /// Clears selection, drag, and crop state pointing at images that no
    /// longer exist.
    fn drop_stale_state(&mut self) {
        let document = &self.document;
        let stale = self.selection.key().copied();
        if self.selection.retain(|id| document.contains(*id))
            && let Some(id) = stale
        {
            log::warn!("selected image {id} no longer exists; selection cleared");
        }
        if self.drag.as_ref().is_some_and(|d| !document.contains(d.id)) {
            self.drag = None;
        }
        if self.crop.is_some_and(|c| !document.contains(c.id)) {
            self.crop = None;
        }
    }
}
