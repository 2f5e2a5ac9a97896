//! Figma REST API response shapes.

use super::node::null_as_default;
use super::Node;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Response of `GET files/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// File name
    #[serde(default)]
    pub name: String,

    /// Last modification time as reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// Version id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Root DOCUMENT node; its children are the pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Node>,
}

impl FileInfo {
    /// Pages (CANVAS nodes) of the file.
    pub fn pages(&self) -> &[Node] {
        self.document
            .as_ref()
            .map(Node::children)
            .unwrap_or_default()
    }

    /// Parsed last modification time.
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Response of `GET files/{key}/styles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylesResponse {
    /// Payload
    #[serde(default)]
    pub meta: Option<StylesMeta>,
}

impl StylesResponse {
    /// All published styles, empty when the payload is missing.
    pub fn styles(&self) -> &[StyleMeta] {
        self.meta
            .as_ref()
            .map(|m| m.styles.as_slice())
            .unwrap_or_default()
    }
}

/// Payload of [`StylesResponse`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylesMeta {
    /// Published styles
    #[serde(default, deserialize_with = "null_as_default")]
    pub styles: Vec<StyleMeta>,
}

/// Metadata of a published style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMeta {
    /// Style key
    #[serde(default)]
    pub key: String,

    /// Style name (e.g. "Brand/Primary")
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// "FILL", "TEXT", "EFFECT" or "GRID"
    #[serde(default)]
    pub style_type: String,

    /// Id of the node defining the style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

/// Response of `GET files/{key}/components`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsResponse {
    /// Payload
    #[serde(default)]
    pub meta: Option<ComponentsMeta>,
}

impl ComponentsResponse {
    /// All published components, empty when the payload is missing.
    pub fn components(&self) -> &[ComponentMeta] {
        self.meta
            .as_ref()
            .map(|m| m.components.as_slice())
            .unwrap_or_default()
    }
}

/// Payload of [`ComponentsResponse`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsMeta {
    /// Published components
    #[serde(default, deserialize_with = "list_or_map_values")]
    pub components: Vec<ComponentMeta>,
}

/// Metadata of a published component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Component key
    #[serde(default)]
    pub key: String,

    /// Component name
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Id of the component set this component belongs to
    #[serde(
        default,
        rename = "componentSetId",
        alias = "component_set_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub component_set_id: Option<String>,
}

/// Accepts either a JSON array or an object whose values are the items.
fn list_or_map_values<'de, D>(deserializer: D) -> Result<Vec<ComponentMeta>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected components list or map, found {other}"
            )))
        }
    };
    items
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(serde::de::Error::custom))
        .collect()
}

/// Response of `GET files/{key}/nodes?ids=...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodesResponse {
    /// File name
    #[serde(default)]
    pub name: String,

    /// Requested nodes by id; `None` for ids the file does not contain
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeEntry>>,
}

impl NodesResponse {
    /// Document of a requested node, if the API returned it.
    pub fn document(&self, id: &str) -> Option<&Value> {
        self.nodes.get(id)?.as_ref()?.document.as_ref()
    }

    /// Take ownership of a requested node's document.
    pub fn take_document(&mut self, id: &str) -> Option<Value> {
        self.nodes.remove(id)??.document
    }
}

/// One entry of [`NodesResponse::nodes`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeEntry {
    /// The node subtree, exactly as the API sent it
    #[serde(default)]
    pub document: Option<Value>,
}
