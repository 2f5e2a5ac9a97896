//! Extraction of design data from a node tree.
//!
//! All extractors borrow the tree and build fresh results; the input is
//! never modified.

mod color;
mod dedup;
mod structure;
mod typography;
mod walk;

pub use color::{extract_colors, unique_colors, ColorCollector, ColorEntry};
pub use dedup::dedup_last_wins;
pub use structure::{frames, outline, FrameSummary, DEFAULT_OUTLINE_DEPTH};
pub use typography::{
    extract_typography, unique_typography, TypographyCollector, TypographyEntry, TypographyKey,
};
pub use walk::{walk, NodeVisitor, VisitAction};
