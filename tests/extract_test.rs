//! Integration tests for extraction over decoded API trees.

use figextract::extract::{frames, outline, walk, DEFAULT_OUTLINE_DEPTH};
use figextract::{
    dedup_last_wins, extract_colors, extract_typography, unique_colors, unique_typography, Color,
    Node, NodeVisitor, PageExtraction, VisitAction,
};
use serde_json::json;

fn decode(value: serde_json::Value) -> Node {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_bare_frame_yields_nothing() {
    let node = decode(json!({"type": "FRAME", "name": "x"}));
    assert!(extract_colors(&node).is_empty());
    assert!(extract_typography(&node).is_empty());
    assert!(frames(&node).is_empty());
}

#[test]
fn test_shared_fill_different_names() {
    let tree = decode(json!({
        "type": "FRAME",
        "name": "root",
        "children": [
            {"type": "RECTANGLE", "name": "Card", "fills": [
                {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
            ]},
            {"type": "RECTANGLE", "name": "Panel", "fills": [
                {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 0.8}}
            ]}
        ]
    }));

    let colors = unique_colors(extract_colors(&tree));
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex, "#ffffff");
    assert_eq!(colors[0].name, "Panel");
    assert_eq!(colors[0].opacity, 0.8);
}

#[test]
fn test_three_text_nodes_two_styles() {
    let text = |name: &str, weight: u32| {
        json!({"type": "TEXT", "name": name, "style": {
            "fontFamily": "Inter", "fontSize": 16, "fontWeight": weight
        }})
    };
    let tree = decode(json!({
        "type": "FRAME",
        "name": "root",
        "children": [text("a", 400), text("b", 400), text("c", 700)]
    }));

    let styles = unique_typography(extract_typography(&tree));
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].name, "b");
    assert_eq!(styles[1].name, "c");
}

#[test]
fn test_paint_without_color_is_ignored() {
    let tree = decode(json!({
        "type": "VECTOR",
        "name": "icon",
        "fills": [{"type": "SOLID"}],
        "strokes": [{"type": "IMAGE", "imageRef": "abc"}]
    }));
    assert!(extract_colors(&tree).is_empty());
}

#[test]
fn test_hex_channels_zero_padded() {
    for byte in 0u8..=255 {
        let v = f64::from(byte) / 255.0;
        let hex = Color::rgb(v, 0.0, 1.0).to_hex();
        assert_eq!(hex.len(), 7);
        assert_eq!(&hex[1..3], format!("{byte:02x}"));
        assert_eq!(Color::from_hex(&hex).unwrap().to_hex(), hex);
    }
}

#[test]
fn test_unique_colors_idempotent() {
    let tree = decode(json!({
        "type": "FRAME",
        "name": "root",
        "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}],
        "children": [
            {"type": "TEXT", "name": "t1", "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}]},
            {"type": "TEXT", "name": "t2", "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}]}
        ]
    }));

    let once = unique_colors(extract_colors(&tree));
    let twice = unique_colors(once.clone());
    assert_eq!(once, twice);
    assert_eq!(once[0].name, "t2");
}

#[test]
fn test_dedup_generic_keys() {
    let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
    let by_initial = dedup_last_wins(words, |w| w.chars().next());
    assert_eq!(by_initial, vec!["avocado", "blueberry", "cherry"]);
}

#[test]
fn test_custom_visitor() {
    struct MaxDepth(usize);

    impl NodeVisitor for MaxDepth {
        fn visit(&mut self, _node: &Node, depth: usize) -> VisitAction {
            self.0 = self.0.max(depth);
            VisitAction::Continue
        }
    }

    let tree = decode(json!({
        "type": "CANVAS", "name": "p", "children": [
            {"type": "FRAME", "name": "f", "children": [
                {"type": "GROUP", "name": "g", "children": [{"type": "TEXT", "name": "t"}]}
            ]}
        ]
    }));

    let mut visitor = MaxDepth(0);
    walk(&tree, &mut visitor);
    assert_eq!(visitor.0, 3);

    let lines = outline(&tree, DEFAULT_OUTLINE_DEPTH);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "      - TEXT: \"t\" (no size)");
}

#[test]
fn test_extraction_does_not_touch_tree() {
    let source = json!({
        "id": "1:1",
        "type": "CANVAS",
        "name": "Landing",
        "exportSettings": [],
        "children": [
            {"id": "1:2", "type": "TEXT", "name": "Hi", "style": {"fontFamily": "Inter", "fontSize": 12.0, "fontWeight": 400.0, "italic": true}}
        ]
    });
    let page = PageExtraction::assemble("1:1", source.clone(), chrono::Utc::now()).unwrap();
    assert_eq!(page.structure, source);
    assert_eq!(page.typography.len(), 1);
    assert_eq!(page.tree.children()[0].name, "Hi");
}

#[test]
fn test_structure_keeps_empty_lists_and_nulls() {
    let source = json!({
        "id": "1:1",
        "name": "Hero",
        "type": "FRAME",
        "fills": [],
        "strokes": [],
        "children": [],
        "absoluteBoundingBox": null,
        "effects": [],
        "cornerRadius": 8
    });

    let page = PageExtraction::assemble("1:1", source.clone(), chrono::Utc::now()).unwrap();
    let written = serde_json::to_value(&page).unwrap();
    assert_eq!(written["structure"], source);
    assert_eq!(written["structure"]["cornerRadius"], json!(8));
}

#[test]
fn test_null_lists_are_empty() {
    let tree = decode(json!({
        "type": "FRAME",
        "name": "x",
        "fills": null,
        "strokes": null,
        "children": [
            {"type": "TEXT", "name": "t", "fills": null, "children": null,
             "style": {"fontFamily": "Inter", "fontSize": 14, "fontWeight": 400}},
            {"type": "RECTANGLE", "name": "r", "fills": [
                {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}
            ]}
        ]
    }));

    assert_eq!(extract_colors(&tree).len(), 1);
    assert_eq!(extract_typography(&tree).len(), 1);
    assert_eq!(outline(&tree, DEFAULT_OUTLINE_DEPTH).len(), 3);
}

#[test]
fn test_outline_counts_empty_child_list_past_limit() {
    let tree = decode(json!({
        "type": "CANVAS", "name": "p", "children": [
            {"type": "FRAME", "name": "f", "children": [
                {"type": "GROUP", "name": "g", "children": [
                    {"type": "GROUP", "name": "empty", "children": []},
                    {"type": "GROUP", "name": "none", "children": null}
                ]}
            ]}
        ]
    }));

    let lines = outline(&tree, DEFAULT_OUTLINE_DEPTH);
    assert_eq!(
        &lines[3..],
        [
            "      - GROUP: \"empty\" (no size)",
            "        ... 0 more children",
            "      - GROUP: \"none\" (no size)",
        ]
    );
}
