//! # figextract
//!
//! Extract design data from Figma files into JSON.
//!
//! The library fetches file metadata, published styles and components, or
//! a single page's node tree, from the Figma REST API and condenses them
//! into serializable summaries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use figextract::{extract_page, output, FigmaClient, JsonFormat};
//!
//! # async fn run() -> figextract::Result<()> {
//! let client = FigmaClient::new(std::env::var("FIGMA_TOKEN").unwrap_or_default())?;
//! let page = extract_page(&client, "FILE_KEY", "18862:42390").await?;
//! println!("{} colors, {} text styles", page.colors.len(), page.typography.len());
//! output::write_json("page-design.json", &page, JsonFormat::Pretty)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Design summary**: pages, color/text/effect styles, components
//! - **Page extraction**: used solid colors and text styles, deduplicated
//!   with last-write-wins, plus frames and the full layer tree
//! - **Lossless structure**: the page tree is written out exactly as the API
//!   returned it, at any nesting depth

pub mod client;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod summary;

// Re-export commonly used types
pub use client::{ClientOptions, FigmaClient, DEFAULT_BASE_URL, TOKEN_HEADER};
pub use error::{Error, Result};
pub use extract::{
    dedup_last_wins, extract_colors, extract_typography, outline, unique_colors,
    unique_typography, ColorEntry, FrameSummary, NodeVisitor, TypographyEntry, VisitAction,
};
pub use model::{Color, FileInfo, Node, Paint, TypeStyle};
pub use output::{to_json, write_json, JsonFormat};
pub use summary::{DesignSummary, PageExtraction, StyleCounts};

use chrono::Utc;

/// Fetch file metadata with the page list (`depth=1`).
pub async fn fetch_file_info(client: &FigmaClient, file_key: &str) -> Result<FileInfo> {
    let info = client.file_info(file_key, Some(1)).await?;
    if info.document.is_none() {
        return Err(Error::MissingData(format!("file {file_key} has no document")));
    }
    Ok(info)
}

/// Fetch file info, styles and components and assemble a [`DesignSummary`].
///
/// Requests run one after another; the first failure aborts the rest.
pub async fn fetch_design_summary(client: &FigmaClient, file_key: &str) -> Result<DesignSummary> {
    let info = fetch_file_info(client, file_key).await?;
    log::info!("File '{}' has {} page(s)", info.name, info.pages().len());

    let styles = client.styles(file_key).await?;
    log::info!("Fetched {} style(s)", styles.styles().len());

    let components = client.components(file_key).await?;
    log::info!("Fetched {} component(s)", components.components().len());

    Ok(DesignSummary::assemble(
        file_key,
        &info,
        &styles,
        &components,
        Utc::now(),
    ))
}

/// Fetch one page (or any node) and assemble a [`PageExtraction`].
///
/// Fails with [`Error::MissingData`] when the file has no node `page_id`.
pub async fn extract_page(
    client: &FigmaClient,
    file_key: &str,
    page_id: &str,
) -> Result<PageExtraction> {
    let mut response = client.nodes(file_key, &[page_id]).await?;
    let structure = response.take_document(page_id).ok_or_else(|| {
        Error::MissingData(format!("could not find node {page_id} in file {file_key}"))
    })?;

    let page = PageExtraction::assemble(page_id, structure, Utc::now())?;
    log::info!(
        "Fetched '{}' ({}, {} children)",
        page.page.name,
        page.page.node_type,
        page.tree.children().len()
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_message() {
        let err = Error::MissingData("could not find node 1:1 in file K".into());
        assert!(err.to_string().contains("1:1"));
    }
}
