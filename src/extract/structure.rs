//! Page structure: layer outline and top-level frames.

use super::walk::{walk, VisitAction};
use crate::model::{Color, Node};
use serde::{Deserialize, Serialize};

/// Default depth below which the outline stops expanding children.
pub const DEFAULT_OUTLINE_DEPTH: usize = 3;

/// Render an indented outline of the layer tree.
///
/// Each node produces `- TYPE: "name" (WxH)`, indented two spaces per
/// level. Children are expanded for nodes shallower than `max_depth`;
/// at `max_depth` a node that has a child list, even an empty one, gets a
/// single `... N more children` line instead.
pub fn outline(root: &Node, max_depth: usize) -> Vec<String> {
    let mut lines = Vec::new();

    walk(root, &mut |node: &Node, depth: usize| {
        let indent = "  ".repeat(depth);
        lines.push(format!(
            "{indent}- {}: \"{}\" ({})",
            node.node_type,
            node.name,
            size_label(node)
        ));

        match &node.children {
            Some(children) if depth >= max_depth => {
                lines.push(format!("{indent}  ... {} more children", children.len()));
                VisitAction::SkipChildren
            }
            _ => VisitAction::Continue,
        }
    });

    lines
}

fn size_label(node: &Node) -> String {
    match node.absolute_bounding_box {
        Some(rect) => format!("{}x{}", rect.width.round(), rect.height.round()),
        None => "no size".to_string(),
    }
}

/// Summary of a top-level frame of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    /// Node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Layer name
    pub name: String,

    /// Type tag
    #[serde(rename = "type")]
    pub node_type: String,

    /// Width from the bounding box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Height from the bounding box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl From<&Node> for FrameSummary {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            width: node.absolute_bounding_box.map(|r| r.width),
            height: node.absolute_bounding_box.map(|r| r.height),
            background_color: node.background_color,
        }
    }
}

/// Summarize the direct children of `page`.
pub fn frames(page: &Node) -> Vec<FrameSummary> {
    page.children().iter().map(FrameSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_lines() {
        let tree = Node::new("CANVAS", "Landing").with_child(
            Node::new("FRAME", "Hero")
                .with_bounds(0.0, 0.0, 1440.4, 899.6)
                .with_child(Node::new("TEXT", "Title")),
        );

        assert_eq!(
            outline(&tree, DEFAULT_OUTLINE_DEPTH),
            vec![
                "- CANVAS: \"Landing\" (no size)",
                "  - FRAME: \"Hero\" (1440x900)",
                "    - TEXT: \"Title\" (no size)",
            ]
        );
    }

    #[test]
    fn test_outline_truncates_deep_children() {
        let tree = Node::new("CANVAS", "p").with_child(
            Node::new("FRAME", "f")
                .with_child(Node::new("TEXT", "a"))
                .with_child(Node::new("TEXT", "b")),
        );

        let lines = outline(&tree, 1);
        assert_eq!(
            lines,
            vec![
                "- CANVAS: \"p\" (no size)",
                "  - FRAME: \"f\" (no size)",
                "    ... 2 more children",
            ]
        );
    }

    #[test]
    fn test_outline_depth_zero_leaf() {
        let lines = outline(&Node::new("FRAME", "x"), 0);
        assert_eq!(lines, vec!["- FRAME: \"x\" (no size)"]);
    }

    #[test]
    fn test_outline_empty_child_list_at_limit() {
        let mut empty = Node::new("GROUP", "empty");
        empty.children = Some(Vec::new());
        let tree = Node::new("FRAME", "f")
            .with_child(empty)
            .with_child(Node::new("RECTANGLE", "leaf"));

        assert_eq!(
            outline(&tree, 1),
            vec![
                "- FRAME: \"f\" (no size)",
                "  - GROUP: \"empty\" (no size)",
                "    ... 0 more children",
                "  - RECTANGLE: \"leaf\" (no size)",
            ]
        );
    }

    #[test]
    fn test_frames() {
        let mut hero = Node::new("FRAME", "Hero")
            .with_id("1:2")
            .with_bounds(0.0, 0.0, 1440.0, 900.0);
        hero.background_color = Some(Color::rgb(1.0, 1.0, 1.0));
        let page = Node::new("CANVAS", "Landing")
            .with_child(hero)
            .with_child(Node::new("SECTION", "Pricing"));

        let frames = frames(&page);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].id.as_deref(), Some("1:2"));
        assert_eq!(frames[0].width, Some(1440.0));
        assert!(frames[0].background_color.is_some());
        assert_eq!(frames[1].node_type, "SECTION");
        assert!(frames[1].width.is_none());
    }
}
