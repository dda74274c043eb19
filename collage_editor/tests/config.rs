// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::num::NonZeroUsize;
use std::path::PathBuf;

use collage_document::BackgroundColor;
use collage_editor::{CanvasSize, Editor, EditorConfig, Error};
use kurbo::Size;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("collage-{}-{name}", std::process::id()))
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let config = EditorConfig::from_toml_str(
        r##"
snap_threshold = 8.0
history_limit = 50
background = "#202020"

[canvas]
width = 1024.0
"##,
    )
    .unwrap();

    assert_eq!(config.snap_threshold, 8.0);
    assert_eq!(config.history_limit, NonZeroUsize::new(50));
    assert_eq!(
        config.background,
        BackgroundColor::from_rgba8(0x20, 0x20, 0x20, 0xff)
    );
    assert_eq!(
        config.canvas,
        CanvasSize {
            width: 1024.0,
            height: 720.0
        }
    );
    let defaults = EditorConfig::default();
    assert_eq!(config.min_object_size, defaults.min_object_size);
    assert_eq!(config.fit_padding, defaults.fit_padding);
    assert!(config.keep_inside_canvas);
}

#[test]
fn written_config_reads_back() {
    let config = EditorConfig {
        canvas: CanvasSize {
            width: 800.0,
            height: 600.0,
        },
        history_limit: NonZeroUsize::new(10),
        background: BackgroundColor::from_rgba8(1, 2, 3, 128),
        keep_inside_canvas: false,
        ..EditorConfig::default()
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(EditorConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn bad_background_is_a_parse_error() {
    let err = EditorConfig::from_toml_str("background = \"white\"").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)), "{err}");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = temp_path("missing.toml");
    assert_eq!(
        EditorConfig::load_or_default(&path).unwrap(),
        EditorConfig::default()
    );
    let err = EditorConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn malformed_file_is_still_an_error() {
    let path = temp_path("malformed.toml");
    std::fs::write(&path, "canvas = 3").unwrap();
    let result = EditorConfig::load_or_default(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn config_drives_the_editor() {
    let path = temp_path("editor.toml");
    std::fs::write(
        &path,
        "background = \"#000000\"\n[canvas]\nwidth = 402.0\nheight = 402.0\n",
    )
    .unwrap();
    let config = EditorConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut editor = Editor::new(config);
    assert_eq!(editor.document().background.to_string(), "#000000");
    let id = editor
        .add_image("blob:wide", Size::new(100.0, 50.0))
        .unwrap();
    assert_eq!(
        editor.document().get(id).unwrap().size,
        Size::new(400.0, 200.0)
    );
}
