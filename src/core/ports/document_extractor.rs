//! Document extractor port
//!
//! Defines the interface for turning an uploaded document into
//! [`ExtractedData`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::super::models::ExtractedData;

/// Errors raised by extraction backends
///
/// These belong to the caller: the engine itself only ever sees a
/// best-effort [`ExtractedData`], however empty.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The backend cannot read this kind of input
    #[error("unsupported document input: {0}")]
    UnsupportedInput(String),

    /// The document could not be read from disk
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The backend did not answer
    #[error("extraction backend unavailable: {0}")]
    Unavailable(String),
}

/// A document submitted for extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInput {
    /// Original file name, if known
    pub file_name: Option<String>,
    /// Raw document bytes
    pub bytes: Vec<u8>,
    /// MRZ text already read off the document, if any
    pub mrz_text: Option<String>,
}

impl DocumentInput {
    /// Wrap raw bytes
    #[must_use]
    pub fn from_bytes(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            bytes,
            mrz_text: None,
        }
    }

    /// Wrap MRZ text
    #[must_use]
    pub fn from_mrz_text(text: impl Into<String>) -> Self {
        Self {
            mrz_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Read a document from disk
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let bytes = fs::read(path)?;
        let file_name = path.file_name().map(|n| n.to_string_lossy().to_string());
        Ok(Self::from_bytes(file_name, bytes))
    }
}

/// Extraction backend abstraction
///
/// Implementations are injected by the caller; the engine never decides
/// which backend runs.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentExtractor: Send + Sync {
    /// Provider tag recorded on decisions
    fn provider(&self) -> &str;

    /// Extract identity fields from a document
    fn extract(&self, input: &DocumentInput) -> Result<ExtractedData, ExtractionError>;
}

/// Extraction backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Deterministic canned extraction (default)
    #[default]
    Mock,
    /// Parse MRZ text off the document
    Mrz,
}

impl ExtractorKind {
    /// The provider tag this backend stamps on decisions
    #[must_use]
    pub const fn provider_tag(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Mrz => "mrz",
        }
    }
}

impl std::str::FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" | "test" => Ok(Self::Mock),
            "mrz" | "mrz-text" => Ok(Self::Mrz),
            _ => Err(format!("Unknown extractor: {s}. Use 'mock' or 'mrz'")),
        }
    }
}

impl std::fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.provider_tag())
    }
}
