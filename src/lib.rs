//! formfinder: form catalog lookup.
//!
//! The query engine and catalog live in [`formfinder_core`]; this crate adds
//! the two outer surfaces so integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! catalog.json ──► Catalog ──► search ──┬──► cli    (JSON on stdout)
//!                                       └──► server (JSON over HTTP)
//! ```

pub mod cli;
pub mod server;
