//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the resources and tools domains.
//!
//! Long-lived state (the resource registry and the gateway HTTP client) is
//! built once in `McpServer::new` and shared by every session through `Arc`.
//! The HTTP client is released when the last clone of the server is dropped.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::{
    resources::{
        ContentResolver, ResourceError, ResourceRegistry, ResourceService, builtin_entries,
        load_seed_file,
    },
    tools::{ResourceListNotifier, ToolError, ToolRegistry},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of tracked CIDs, shared with the tools.
    registry: Arc<ResourceRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Registry and dispatcher for tool calls.
    tool_registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the gateway client and seeds the registry with the built-in
    /// entries plus any entries from the configured seed file.
    pub fn new(config: Config) -> Result<Self> {
        let resolver = Arc::new(ContentResolver::new(&config.gateway)?);
        let registry = Arc::new(Self::seed_registry(&config)?);

        Ok(Self::from_parts(config, registry, resolver))
    }

    /// Assemble a server from already constructed components.
    pub fn from_parts(
        config: Config,
        registry: Arc<ResourceRegistry>,
        resolver: Arc<ContentResolver>,
    ) -> Self {
        let resource_service = Arc::new(ResourceService::new(registry.clone(), resolver.clone()));
        let tool_registry = Arc::new(ToolRegistry::new(registry.clone(), resolver));

        Self {
            config: Arc::new(config),
            registry,
            resource_service,
            tool_registry,
        }
    }

    fn seed_registry(config: &Config) -> Result<ResourceRegistry> {
        let mut entries = builtin_entries();

        if let Some(path) = &config.resources.seed_file {
            let seeded = load_seed_file(path).map_err(|e| Error::config(e.to_string()))?;
            info!("Loaded {} resource(s) from {}", seeded.len(), path.display());
            entries.extend(seeded);
        }

        let registry = ResourceRegistry::with_entries(entries)?;
        info!("Resource registry seeded with {} entries", registry.len());
        Ok(registry)
    }

    /// Get the shared resource registry.
    pub fn registry(&self) -> &Arc<ResourceRegistry> {
        &self.registry
    }

    // ========================================================================
    // Protocol operations (transport independent)
    // ========================================================================

    /// List all tracked resources as MCP descriptors.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by `ipfs://` URI.
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri).await
    }

    /// List the tool descriptors.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name, sending `list_changed` through `notifier`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        notifier: &dyn ResourceListNotifier,
    ) -> std::result::Result<CallToolResult, ToolError> {
        self.tool_registry.call_tool(name, arguments, notifier).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes IPFS content as resources (ipfs://<cid>). \
                 Use add_ipfs_resource to track a CID and fetch_ipfs_content to read any CID."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_resources_list_changed()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        tokio::select! {
            _ = context.ct.cancelled() => {
                warn!("Read cancelled: {}", request.uri);
                Err(McpError::internal_error("request cancelled", None))
            }
            result = self.resource_service.read_resource(&request.uri) => {
                result.map_err(McpError::from)
            }
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let CallToolRequestParam { name, arguments } = request;
        let call = self.tool_registry.call_tool(&name, arguments, &context.peer);

        // Mutating tools finish even if the client gives up on the request.
        if !ToolRegistry::is_cancellable(&name) {
            return call.await.map_err(McpError::from);
        }

        tokio::select! {
            _ = context.ct.cancelled() => {
                warn!("Tool call cancelled: {}", name);
                Err(McpError::internal_error("request cancelled", None))
            }
            result = call => result.map_err(McpError::from),
        }
    }
}
