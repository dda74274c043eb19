// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reducer sequences and the saved-document format.

use collage_document::{
    Action, BackgroundColor, Document, Filter, FilterKind, FilterParam, ImageId, ImageObject,
    ImageSource, reduce,
};
use kurbo::{Point, Rect, Size};

fn photo(id: u64) -> ImageObject {
    ImageObject::new(
        ImageId(id),
        ImageSource::new(format!("blob:photo-{id}"), Size::new(800.0, 600.0)),
        Point::new(320.0, 180.0),
        Size::new(957.0, 718.0),
    )
}

#[test]
fn reducers_never_touch_the_input() {
    let doc = reduce(&Document::new(), &Action::AddImage(photo(1))).unwrap();
    let before = doc.clone();

    let actions = [
        Action::SetBackground("#336699".parse().unwrap()),
        Action::SetFilter {
            id: ImageId(1),
            filter: Filter::default_for(FilterKind::Pixelate),
        },
        Action::Remove(ImageId(1)),
    ];
    for action in &actions {
        assert!(reduce(&doc, action).is_some(), "{action:?} should apply");
    }
    assert_eq!(doc, before);
}

#[test]
fn saved_document_uses_tagged_filters_and_hex_background() {
    let mut doc = Document::with_background(BackgroundColor::from_rgba8(0x33, 0x66, 0x99, 0xff));
    assert!(doc.apply(&Action::AddImage(photo(7))));
    assert!(doc.apply(&Action::SetFilter {
        id: ImageId(7),
        filter: Filter::default_for(FilterKind::Hsl),
    }));
    assert!(doc.apply(&Action::SetFilterParam {
        id: ImageId(7),
        param: FilterParam::Hue,
        value: 90.0,
    }));

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["background"], "#336699");
    assert_eq!(json["images"][0]["id"], 7);
    assert_eq!(json["images"][0]["filter"]["kind"], "hsl");
    assert_eq!(json["images"][0]["filter"]["hue"], 90.0);

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn minimal_saved_document_fills_defaults() {
    let text = r##"{
        "images": [{
            "id": 3,
            "source": { "url": "blob:a", "natural_size": { "width": 10.0, "height": 20.0 } },
            "position": { "x": 1.0, "y": 2.0 },
            "size": { "width": 10.0, "height": 20.0 },
            "rotation": 0.0,
            "scale": { "x": 1.0, "y": 1.0 },
            "crop": { "x0": 0.0, "y0": 0.0, "x1": 10.0, "y1": 20.0 }
        }]
    }"##;
    let doc: Document = serde_json::from_str(text).unwrap();
    assert_eq!(doc.background, BackgroundColor::WHITE);
    assert_eq!(doc.images[0].filter, Filter::None);
    assert_eq!(doc.images[0].crop, Rect::new(0.0, 0.0, 10.0, 20.0));
}

#[test]
fn bad_background_is_a_parse_error() {
    let err = serde_json::from_str::<Document>(r#"{ "background": "blue" }"#).unwrap_err();
    assert!(err.to_string().contains("must start with '#'"), "{err}");
}
