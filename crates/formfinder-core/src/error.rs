//! Error types for catalog loading and token parsing.
//!
//! The query engine itself never fails; these only surface while a catalog
//! is being built or while outer layers translate user input into filters.

use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog could not be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate form id {0:?}")]
    DuplicateFormId(String),

    #[error("duplicate category id {0:?}")]
    DuplicateCategoryId(String),
}

/// A source-type token that is not one of the five known origins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown source type {0:?} (expected government, educational, legal, manual or user_submitted)"
)]
pub struct UnknownSourceType(pub String);
