// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropping a rotated image twice, then tuning a filter.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p collage_demos --example crop_and_filters`

use collage_document::{FilterKind, FilterParam, ImageObject, Transform};
use collage_editor::Editor;
use kurbo::{Point, Rect, Size};

fn describe(image: &ImageObject) {
    println!(
        "crop {:?} shown at {:?} size {:?}, filter {:?}",
        image.crop, image.position, image.size, image.filter
    );
}

fn main() {
    env_logger::init();

    let mut editor = Editor::default();
    let Some(id) = editor.add_image("street.jpg", Size::new(1200.0, 800.0)) else {
        return;
    };
    let mut placement = Transform::new(Point::new(400.0, 150.0), Size::new(600.0, 400.0));
    placement.rotation = 15.0;
    editor.transform(id, placement);
    editor.select(id);

    // First crop: keep the middle half along both axes.
    editor.start_crop();
    if let Some(session) = editor.crop_session() {
        let full = session.crop_box();
        println!("crop box starts as {full:?}");
    }
    let first = {
        let Some(image) = editor.selected() else {
            return;
        };
        let shown = image.displayed_box();
        let x_axis = kurbo::Vec2::from_angle(shown.radians());
        let y_axis = x_axis.turn_90();
        let corner = shown.origin + x_axis * 150.0 + y_axis * 100.0;
        Rect::from_origin_size(corner, Size::new(300.0, 200.0))
    };
    editor.adjust_crop(first);
    editor.confirm_crop();
    if let Some(image) = editor.selected() {
        describe(image);
    }

    // Second crop: its box is measured against the new placement but the
    // result is still in the original file's pixels.
    editor.start_crop();
    if let Some(full) = editor.crop_session().map(|s| s.crop_box()) {
        editor.adjust_crop(Rect::from_origin_size(
            full.origin(),
            Size::new(full.width() / 2.0, full.height()),
        ));
    }
    editor.confirm_crop();
    if let Some(image) = editor.selected() {
        describe(image);
    }

    // Filters: choose, drag a slider, release.
    editor.choose_filter(FilterKind::Hsl);
    for hue in [30.0, 90.0, 180.0, 400.0] {
        editor.preview_filter_param(FilterParam::Hue, hue);
    }
    editor.commit_preview();
    if let Some(image) = editor.selected() {
        for (param, value) in image.filter.params() {
            let range = param.range();
            println!("  {param:?} = {value} in [{}, {}]", range.min, range.max);
        }
    }

    editor.undo();
    editor.undo();
    if let Some(image) = editor.selected() {
        describe(image);
    }
}
