//! IPFS tools module.
//!
//! - `add_resource`: Track a CID as an MCP resource
//! - `fetch_content`: Fetch any CID through the gateway
//!
//! Both tools read their arguments from the raw JSON object so that the
//! hand-written input schemas stay the single description of the wire format.

pub mod add_resource;
pub mod common;
pub mod fetch_content;

pub use add_resource::{AddIpfsResourceParams, AddIpfsResourceTool};
pub use fetch_content::{FetchIpfsContentParams, FetchIpfsContentTool};
