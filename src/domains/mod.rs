//! Domains module containing business logic organized by bounded contexts.
//!
//! - **resources**: the IPFS resource registry and gateway resolver
//! - **tools**: the `add_ipfs_resource` and `fetch_ipfs_content` tools

pub mod resources;
pub mod tools;
