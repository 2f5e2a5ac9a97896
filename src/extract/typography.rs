//! Text style extraction.

use super::dedup::dedup_last_wins;
use super::walk::{walk, NodeVisitor, VisitAction};
use crate::model::Node;
use serde::{Deserialize, Serialize};

/// Text style used by a TEXT node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyEntry {
    /// Name of the TEXT node
    pub name: String,

    /// Font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Numeric font weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,

    /// Line height in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,

    /// Letter spacing in px
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,

    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

/// Identity of a text style for deduplication: family, size and weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypographyKey {
    family: Option<String>,
    size: Option<u64>,
    weight: Option<u64>,
}

impl TypographyEntry {
    /// Deduplication key.
    pub fn key(&self) -> TypographyKey {
        TypographyKey {
            family: self.font_family.clone(),
            size: self.font_size.map(float_key),
            weight: self.font_weight.map(float_key),
        }
    }

    /// Short label such as `Inter 700 32px`.
    pub fn label(&self) -> String {
        let mut label = self.font_family.clone().unwrap_or_else(|| "?".to_string());
        if let Some(weight) = self.font_weight {
            label.push_str(&format!(" {weight}"));
        }
        if let Some(size) = self.font_size {
            label.push_str(&format!(" {size}px"));
        }
        label
    }
}

// Treats 0.0 and -0.0 as the same size
fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Collects a [`TypographyEntry`] for every styled TEXT node.
#[derive(Debug, Clone, Default)]
pub struct TypographyCollector {
    entries: Vec<TypographyEntry>,
}

impl TypographyCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the collector, returning entries in discovery order.
    pub fn into_entries(self) -> Vec<TypographyEntry> {
        self.entries
    }
}

impl NodeVisitor for TypographyCollector {
    fn visit(&mut self, node: &Node, _depth: usize) -> VisitAction {
        if let (true, Some(style)) = (node.is_text(), node.style.as_ref()) {
            self.entries.push(TypographyEntry {
                name: node.name.clone(),
                font_family: style.font_family.clone(),
                font_size: style.font_size,
                font_weight: style.font_weight,
                line_height: style.line_height_px,
                letter_spacing: style.letter_spacing,
                text_align: style.text_align_horizontal.clone(),
            });
        }
        VisitAction::Continue
    }
}

/// Collect the style of every TEXT node in the subtree, in pre-order.
pub fn extract_typography(root: &Node) -> Vec<TypographyEntry> {
    let mut collector = TypographyCollector::new();
    walk(root, &mut collector);
    collector.into_entries()
}

/// Deduplicate by (family, size, weight). The last occurrence wins.
pub fn unique_typography(entries: Vec<TypographyEntry>) -> Vec<TypographyEntry> {
    dedup_last_wins(entries, TypographyEntry::key)
}
