//! Outbound `list_changed` notifications.
//!
//! Tools that mutate the resource registry notify the calling session through
//! this trait. In production the notifier is the session's rmcp peer.

use async_trait::async_trait;
use rmcp::service::{Peer, RoleServer};

use super::error::ToolError;

/// Delivers `notifications/resources/list_changed` to the orchestrator.
#[async_trait]
pub trait ResourceListNotifier: Send + Sync {
    /// Announce that the resource list has changed.
    async fn resource_list_changed(&self) -> Result<(), ToolError>;
}

#[async_trait]
impl ResourceListNotifier for Peer<RoleServer> {
    async fn resource_list_changed(&self) -> Result<(), ToolError> {
        self.notify_resource_list_changed()
            .await
            .map_err(|e| ToolError::notification(e.to_string()))
    }
}
