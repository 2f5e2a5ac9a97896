//! Solid color extraction.

use super::dedup::dedup_last_wins;
use super::walk::{walk, NodeVisitor, VisitAction};
use crate::model::Node;
use serde::{Deserialize, Serialize};

/// A solid color used somewhere in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// `#rrggbb`, lowercase
    pub hex: String,

    /// Alpha of the paint color
    pub opacity: f64,

    /// Name of the node the color was found on
    pub name: String,
}

/// Collects a [`ColorEntry`] for every solid fill and stroke.
#[derive(Debug, Clone, Default)]
pub struct ColorCollector {
    entries: Vec<ColorEntry>,
}

impl ColorCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates in discovery order, duplicates included.
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Consume the collector, returning candidates in discovery order.
    pub fn into_entries(self) -> Vec<ColorEntry> {
        self.entries
    }
}

impl NodeVisitor for ColorCollector {
    fn visit(&mut self, node: &Node, _depth: usize) -> VisitAction {
        for color in node.paints().filter_map(|p| p.solid_color()) {
            self.entries.push(ColorEntry {
                hex: color.to_hex(),
                opacity: color.a,
                name: node.name.clone(),
            });
        }
        VisitAction::Continue
    }
}

/// Collect every solid fill and stroke color in the subtree, in pre-order.
///
/// The result may contain the same hex many times; see [`unique_colors`].
pub fn extract_colors(root: &Node) -> Vec<ColorEntry> {
    let mut collector = ColorCollector::new();
    walk(root, &mut collector);
    collector.into_entries()
}

/// Deduplicate colors by hex. The last occurrence's name and opacity win.
pub fn unique_colors(entries: Vec<ColorEntry>) -> Vec<ColorEntry> {
    dedup_last_wins(entries, |c| c.hex.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Paint};

    #[test]
    fn test_extract_fills_and_strokes() {
        let tree = Node::new("FRAME", "card")
            .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
            .with_stroke(Paint::solid(Color::rgba(0.0, 0.0, 0.0, 0.1)))
            .with_child(
                Node::new("TEXT", "label").with_fill(Paint::solid(Color::rgb(0.2, 0.4, 0.6))),
            );

        let colors = extract_colors(&tree);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].hex, "#ffffff");
        assert_eq!(colors[1].hex, "#000000");
        assert_eq!(colors[1].opacity, 0.1);
        assert_eq!(colors[2].hex, "#336699");
        assert_eq!(colors[2].name, "label");
    }

    #[test]
    fn test_non_solid_paints_ignored() {
        let tree = Node::new("RECTANGLE", "hero-bg")
            .with_fill(Paint::of_type("GRADIENT_LINEAR"))
            .with_fill(Paint::of_type("IMAGE"));
        assert!(extract_colors(&tree).is_empty());
    }

    #[test]
    fn test_children_visited_without_own_colors() {
        let tree = Node::new("GROUP", "outer").with_child(
            Node::new("GROUP", "inner")
                .with_child(Node::new("VECTOR", "icon").with_fill(Paint::solid(Color::rgb(
                    1.0, 0.0, 0.0,
                )))),
        );
        let colors = extract_colors(&tree);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "icon");
    }

    #[test]
    fn test_bare_node() {
        assert!(extract_colors(&Node::new("FRAME", "x")).is_empty());
    }

    #[test]
    fn test_unique_colors_last_name_wins() {
        let tree = Node::new("FRAME", "root")
            .with_child(Node::new("RECTANGLE", "first").with_fill(Paint::solid(Color::rgb(
                0.5, 0.5, 0.5,
            ))))
            .with_child(
                Node::new("RECTANGLE", "second")
                    .with_fill(Paint::solid(Color::rgba(0.5, 0.5, 0.5, 0.5))),
            );

        let unique = unique_colors(extract_colors(&tree));
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "second");
        assert_eq!(unique[0].opacity, 0.5);
    }
}
