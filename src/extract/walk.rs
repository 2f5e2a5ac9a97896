//! Depth-first traversal of a node tree.
//!
//! Extractors implement [`NodeVisitor`] and are driven by [`walk`], which
//! visits nodes in pre-order (parent before children, children in layer
//! order) without recursion.
//!
//! # Example
//!
//! ```
//! use figextract::extract::{walk, NodeVisitor, VisitAction};
//! use figextract::model::Node;
//!
//! struct CountText(usize);
//!
//! impl NodeVisitor for CountText {
//!     fn visit(&mut self, node: &Node, _depth: usize) -> VisitAction {
//!         if node.is_text() {
//!             self.0 += 1;
//!         }
//!         VisitAction::Continue
//!     }
//! }
//!
//! let tree = Node::new("FRAME", "root").with_child(Node::new("TEXT", "title"));
//! let mut counter = CountText(0);
//! walk(&tree, &mut counter);
//! assert_eq!(counter.0, 1);
//! ```

use crate::model::Node;

/// Action returned by a visitor to control traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitAction {
    /// Descend into the node's children.
    #[default]
    Continue,

    /// Do not visit the node's children.
    SkipChildren,
}

/// Trait for visiting nodes during a tree walk.
pub trait NodeVisitor {
    /// Called once per node, parent before children.
    ///
    /// # Arguments
    /// * `node` - The node being visited
    /// * `depth` - Distance from the walk root (root is 0)
    fn visit(&mut self, node: &Node, depth: usize) -> VisitAction;
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node, usize) -> VisitAction,
{
    fn visit(&mut self, node: &Node, depth: usize) -> VisitAction {
        self(node, depth)
    }
}

/// Walk `root` depth-first in pre-order, calling `visitor` on every node.
pub fn walk<V: NodeVisitor + ?Sized>(root: &Node, visitor: &mut V) {
    let mut stack: Vec<(&Node, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        if visitor.visit(node, depth) == VisitAction::SkipChildren {
            continue;
        }
        // Reversed so the first child is popped next
        stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
}
