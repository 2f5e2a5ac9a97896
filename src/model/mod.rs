//! Document model types for Figma design data.
//!
//! These types mirror the parts of the Figma REST API the extractors read.
//! Requested node subtrees stay raw JSON in [`NodesResponse`] so they can be
//! written back out without loss; [`Node`] is decoded from them on demand.

mod api;
mod node;

pub use api::{
    ComponentMeta, ComponentsMeta, ComponentsResponse, FileInfo, NodeEntry, NodesResponse,
    StyleMeta, StylesMeta, StylesResponse,
};
pub use node::{Color, Node, Paint, Rect, TypeStyle, SOLID_PAINT, TEXT_NODE};
