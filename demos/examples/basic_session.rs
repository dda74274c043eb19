// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A short editing session.
//!
//! Adds two photos, drags one until it snaps to the other, reorders them, and
//! walks the history back and forth.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p collage_demos --example basic_session`

use collage_document::{Document, Transform};
use collage_editor::Editor;
use kurbo::{Point, Size};

fn print_document(label: &str, document: &Document) {
    println!("{label}:");
    for image in &document.images {
        println!(
            "  {} {:>7.1},{:>7.1}  {:>6.1}x{:<6.1} rot {:>5.1}",
            image.id,
            image.position.x,
            image.position.y,
            image.size.width,
            image.size.height,
            image.rotation,
        );
    }
}

fn main() {
    env_logger::init();

    let mut editor = Editor::default();
    let Some(beach) = editor.add_image("beach.jpg", Size::new(800.0, 600.0)) else {
        return;
    };
    let Some(dog) = editor.add_image("dog.png", Size::new(300.0, 400.0)) else {
        return;
    };
    print_document("after loading", editor.document());

    // Shrink both so they fit side by side.
    editor.transform(
        beach,
        Transform::new(Point::new(40.0, 60.0), Size::new(400.0, 300.0)),
    );
    editor.transform(
        dog,
        Transform::new(Point::new(700.0, 200.0), Size::new(150.0, 200.0)),
    );
    print_document("after resizing", editor.document());

    // Drag the dog so its top edge lands near the beach photo's top edge.
    editor.begin_drag(dog, Point::new(750.0, 250.0));
    for (x, y) in [(700.0, 200.0), (650.0, 140.0), (600.0, 113.0)] {
        let moved = editor.drag_to(Point::new(x, y));
        println!(
            "pointer ({x}, {y}) -> {moved:?}, guides: {:?}",
            editor.guide_lines().collect::<Vec<_>>()
        );
    }
    editor.end_drag();

    editor.select(beach);
    editor.bring_to_front();
    print_document("after drag and reorder", editor.document());

    while editor.undo() {}
    print_document("fully undone", editor.document());
    while editor.redo() {}
    print_document("fully redone", editor.document());
}
