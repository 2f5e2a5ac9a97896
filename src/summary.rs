//! Extraction summaries written to disk.

use crate::extract::{
    extract_colors, extract_typography, frames, unique_colors, unique_typography, ColorEntry,
    FrameSummary, TypographyEntry,
};
use crate::error::Result;
use crate::model::{ComponentMeta, ComponentsResponse, FileInfo, Node, StyleMeta, StylesResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format an extraction timestamp as ISO-8601 UTC with milliseconds.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// File-level design data: metadata, pages, published styles and components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSummary {
    /// File metadata
    pub file: FileSummary,

    /// Pages of the file
    pub pages: Vec<PageRef>,

    /// Published styles by kind
    pub styles: StyleSummary,

    /// Published components
    pub components: Vec<ComponentSummary>,

    /// Extraction time
    pub extracted_at: String,

    /// Style counts, for reporting
    #[serde(skip)]
    pub counts: StyleCounts,
}

impl DesignSummary {
    /// Assemble the summary from already-fetched API responses.
    pub fn assemble(
        file_key: &str,
        info: &FileInfo,
        styles: &StylesResponse,
        components: &ComponentsResponse,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        let groups = StyleGroups::from_styles(styles.styles());

        Self {
            file: FileSummary {
                name: info.name.clone(),
                key: file_key.to_string(),
                last_modified: info.last_modified.clone(),
                version: info.version.clone(),
                thumbnail_url: info.thumbnail_url.clone(),
            },
            pages: info.pages().iter().map(PageRef::from).collect(),
            styles: StyleSummary {
                colors: groups.fill.iter().map(|s| StyleRef::described(s)).collect(),
                typography: groups.text.iter().map(|s| StyleRef::described(s)).collect(),
                effects: groups.effect.iter().map(|s| StyleRef::bare(s)).collect(),
            },
            components: components
                .components()
                .iter()
                .map(ComponentSummary::from)
                .collect(),
            extracted_at: format_timestamp(extracted_at),
            counts: groups.counts(),
        }
    }
}

/// File metadata in a [`DesignSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    /// File name
    pub name: String,
    /// File key
    pub key: String,
    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A page (or any node) reference: id, name and type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    /// Node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name
    pub name: String,
    /// Type tag
    #[serde(rename = "type")]
    pub node_type: String,
}

impl From<&Node> for PageRef {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
        }
    }
}

/// Published styles grouped by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSummary {
    /// FILL styles
    pub colors: Vec<StyleRef>,
    /// TEXT styles
    pub typography: Vec<StyleRef>,
    /// EFFECT styles
    pub effects: Vec<StyleRef>,
}

/// A published style reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRef {
    /// Style name
    pub name: String,
    /// Style key
    pub key: String,
    /// Description; omitted for effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StyleRef {
    fn described(style: &StyleMeta) -> Self {
        Self {
            name: style.name.clone(),
            key: style.key.clone(),
            description: style.description.clone(),
        }
    }

    fn bare(style: &StyleMeta) -> Self {
        Self {
            name: style.name.clone(),
            key: style.key.clone(),
            description: None,
        }
    }
}

/// A published component in a [`DesignSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    /// Component name
    pub name: String,
    /// Component key
    pub key: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Component set id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_set_id: Option<String>,
}

impl From<&ComponentMeta> for ComponentSummary {
    fn from(meta: &ComponentMeta) -> Self {
        Self {
            name: meta.name.clone(),
            key: meta.key.clone(),
            description: meta.description.clone(),
            component_set_id: meta.component_set_id.clone(),
        }
    }
}

/// Published styles split by `style_type`. Unknown types are dropped.
#[derive(Debug, Clone, Default)]
pub struct StyleGroups<'a> {
    /// FILL styles
    pub fill: Vec<&'a StyleMeta>,
    /// TEXT styles
    pub text: Vec<&'a StyleMeta>,
    /// EFFECT styles
    pub effect: Vec<&'a StyleMeta>,
    /// GRID styles
    pub grid: Vec<&'a StyleMeta>,
}

impl<'a> StyleGroups<'a> {
    /// Group styles by type, preserving order within each group.
    pub fn from_styles(styles: &'a [StyleMeta]) -> Self {
        let mut groups = Self::default();
        for style in styles {
            match style.style_type.as_str() {
                "FILL" => groups.fill.push(style),
                "TEXT" => groups.text.push(style),
                "EFFECT" => groups.effect.push(style),
                "GRID" => groups.grid.push(style),
                other => log::debug!("Ignoring style '{}' of type {}", style.name, other),
            }
        }
        groups
    }

    /// Number of styles per group.
    pub fn counts(&self) -> StyleCounts {
        StyleCounts {
            fill: self.fill.len(),
            text: self.text.len(),
            effect: self.effect.len(),
            grid: self.grid.len(),
        }
    }
}

/// Style counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleCounts {
    /// Colors
    pub fill: usize,
    /// Typography
    pub text: usize,
    /// Effects
    pub effect: usize,
    /// Layout grids
    pub grid: usize,
}

/// Design data of a single page: frames, used colors and text styles, and
/// the full node tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExtraction {
    /// The page itself
    pub page: PageRef,

    /// Direct children of the page
    pub frames: Vec<FrameSummary>,

    /// Unique solid colors, by hex
    pub colors: Vec<ColorEntry>,

    /// Unique text styles, by family/size/weight
    pub typography: Vec<TypographyEntry>,

    /// The complete page node tree as returned by the API
    pub structure: Value,

    /// Extraction time
    pub extracted_at: String,

    /// Typed view of `structure`, for reporting
    #[serde(skip)]
    pub tree: Node,
}

impl PageExtraction {
    /// Decode `structure`, run the extractors over it and assemble the
    /// result. `structure` itself is kept untouched.
    ///
    /// `page_id` is the id the page was requested by; it is used when the
    /// node itself carries no id.
    pub fn assemble(page_id: &str, structure: Value, extracted_at: DateTime<Utc>) -> Result<Self> {
        let document = Node::from_json(&structure)?;
        let colors = unique_colors(extract_colors(&document));
        let typography = unique_typography(extract_typography(&document));
        log::debug!(
            "Page '{}': {} nodes, {} unique colors, {} unique text styles",
            document.name,
            document.subtree_len(),
            colors.len(),
            typography.len()
        );

        Ok(Self {
            page: PageRef {
                id: Some(page_id.to_string()),
                name: document.name.clone(),
                node_type: document.node_type.clone(),
            },
            frames: frames(&document),
            colors,
            typography,
            structure,
            extracted_at: format_timestamp(extracted_at),
            tree: document,
        })
    }
}
