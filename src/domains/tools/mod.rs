//! Tools domain module.
//!
//! This module handles the MCP tools exposed by the server. Tools are
//! executable functions that MCP clients call to act on the IPFS registry
//! or fetch content directly.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry and dispatch
//! - `notifier.rs` - `list_changed` notification seam
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define `NAME`, `to_tool()` and an `execute()` function
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs` (`get_all_tools()` and `call_tool()`)

pub mod definitions;
mod error;
pub(crate) mod notifier;
mod registry;

pub use error::ToolError;
pub use notifier::ResourceListNotifier;
pub use registry::ToolRegistry;
