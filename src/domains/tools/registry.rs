//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of tool descriptors advertised in `tools/list`
//! - Dispatch of `tools/call` by tool name, for every transport

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use crate::domains::resources::{ContentResolver, ResourceRegistry};

use super::definitions::{AddIpfsResourceParams, AddIpfsResourceTool, FetchIpfsContentTool};
use super::error::ToolError;
use super::notifier::ResourceListNotifier;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Holds the shared state the tools operate on: the resource registry for
/// `add_ipfs_resource` and the gateway resolver for `fetch_ipfs_content`.
pub struct ToolRegistry {
    resources: Arc<ResourceRegistry>,
    resolver: Arc<ContentResolver>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(resources: Arc<ResourceRegistry>, resolver: Arc<ContentResolver>) -> Self {
        Self {
            resources,
            resolver,
        }
    }

    /// Whether a call to `name` may be abandoned when its request is cancelled.
    ///
    /// Only read-only tools qualify. `add_ipfs_resource` always runs to the
    /// end so a registered entry is never left without its notification.
    pub fn is_cancellable(name: &str) -> bool {
        name == FetchIpfsContentTool::NAME
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![AddIpfsResourceTool::to_tool(), FetchIpfsContentTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// `notifier` receives the `list_changed` notification for tools that
    /// mutate the resource registry.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        notifier: &dyn ResourceListNotifier,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = arguments.unwrap_or_default();

        match name {
            AddIpfsResourceTool::NAME => {
                let params = AddIpfsResourceParams::from_arguments(&arguments)?;
                AddIpfsResourceTool::execute(params, &self.resources, notifier).await
            }
            FetchIpfsContentTool::NAME => {
                Ok(FetchIpfsContentTool::call(&arguments, &self.resolver).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}
