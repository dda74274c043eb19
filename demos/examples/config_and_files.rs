// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading settings from TOML and saving a collage to JSON.
//!
//! Run:
//! - `cargo run -p collage_demos --example config_and_files [config.toml]`

use collage_editor::{Editor, EditorConfig};
use kurbo::Size;

fn main() -> collage_editor::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load_or_default(path)?,
        None => EditorConfig::from_toml_str(
            "snap_threshold = 8.0\nbackground = \"#1e1e2e\"\n\n[canvas]\nwidth = 1024.0\nheight = 768.0\n",
        )?,
    };
    println!("config:\n{}", config.to_toml_string()?);

    let mut editor = Editor::new(config);
    editor.add_image("left.jpg", Size::new(640.0, 480.0));
    editor.add_image("right.jpg", Size::new(480.0, 640.0));
    if let Err(err) = editor.set_background_hex("#zzzzzz") {
        log::warn!("{err}");
    }

    let path = std::env::temp_dir().join("collage_demo.json");
    editor.save_file(&path)?;
    println!("saved {}", path.display());

    let mut reopened = Editor::new(editor.config().clone());
    reopened.load_file(&path)?;
    println!(
        "reopened {} image(s) on {}, undo available: {}",
        reopened.document().images.len(),
        reopened.document().background,
        reopened.can_undo()
    );
    println!("{}", reopened.save_json()?);
    Ok(())
}
