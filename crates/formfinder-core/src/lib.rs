//! formfinder-core: catalog model and query engine for formfinder.
//!
//! This crate holds everything that does not depend on how results are
//! presented: the catalog records, the immutable [`Catalog`] they live in,
//! the query engine, and configuration.
//!
//! # Architecture
//!
//! ```text
//! catalog.json ──► Catalog (Arc, read-only) ──► search ──► CLI / HTTP
//! ```
//!
//! Every query function takes `&Catalog` and returns fresh values; there is
//! no hidden state between calls.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, UnknownSourceType};
pub use types::{Category, DateRange, Form, SearchFilters, SearchResult, SortBy, SourceType};
