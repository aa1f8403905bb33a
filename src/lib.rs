//! IPFS MCP Server Library
//!
//! This crate exposes content from the IPFS network to Model Context Protocol
//! (MCP) clients. Tracked CIDs are listed as `ipfs://<cid>` resources and read
//! through a configurable HTTP gateway; two tools let clients track new CIDs
//! and fetch arbitrary ones.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler, and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **resources**: the CID registry and the gateway resolver
//!   - **tools**: `add_ipfs_resource` and `fetch_ipfs_content`
//!
//! # Example
//!
//! ```rust,no_run
//! use ipfs_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
