//! Resources domain module.
//!
//! This module exposes IPFS content as MCP resources. Every tracked CID is
//! listed as `ipfs://<cid>`, and reads are resolved through the configured
//! HTTP gateway.
//!
//! ## Architecture
//!
//! - `address.rs` - `ipfs://` URI parsing and the CID length rule
//! - `definitions/` - Well-known CIDs seeded at startup (one file per resource)
//! - `registry.rs` - The in-memory CID registry and seed loading
//! - `resolver.rs` - Gateway fetches and text/binary classification
//! - `service.rs` - Resource service for listing and reading

pub mod address;
pub mod definitions;
mod error;
mod registry;
mod resolver;
mod service;

pub use definitions::SeedResource;
pub use error::ResourceError;
pub use registry::{
    DEFAULT_MIME_TYPE, ResourceEntry, ResourceRegistry, builtin_entries, load_seed_file,
};
pub use resolver::{BINARY_CONTENT_MARKER, ContentResolver, FetchedContent};
pub use service::ResourceService;
