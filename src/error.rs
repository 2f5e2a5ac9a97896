//! Error types for figextract.

use std::io;
use thiserror::Error;

/// Result type alias for figextract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum number of characters of a failed response body kept in [`Error::Http`].
pub const BODY_EXCERPT_LEN: usize = 200;

/// Error types that can occur while fetching or extracting design data.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Leading excerpt of the response body
        body: String,
    },

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded fine but lacked data the pipeline needs.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// I/O error when writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error while rendering output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an HTTP error from a status code and raw response body.
    pub fn http(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        Error::Http {
            status,
            body: text.chars().take(BODY_EXCERPT_LEN).collect(),
        }
    }

    /// HTTP status code, if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// User-facing guidance for well-known failures.
    pub fn hint(&self) -> Option<&'static [&'static str]> {
        match self.status() {
            Some(403) => Some(&[
                "This is a permissions error. Please check:",
                "  - Your Figma token is valid",
                "  - You have access to view this file",
            ]),
            Some(404) => Some(&[
                "File not found. Please check:",
                "  - The file key is correct",
                "  - The file hasn't been deleted",
            ]),
            _ => None,
        }
    }
}
