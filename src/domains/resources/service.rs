//! Resource service implementation.
//!
//! The ResourceService answers `resources/list`, `resources/templates/list`
//! and `resources/read` by combining the registry with the content resolver.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::sync::Arc;
use tracing::info;

use super::address::parse_address;
use super::error::ResourceError;
use super::registry::{DEFAULT_MIME_TYPE, ResourceRegistry, get_all_resource_templates};
use super::resolver::ContentResolver;

/// MIME hint for text reads of unregistered CIDs.
const TEXT_MIME_TYPE: &str = "text/plain";

/// Service for listing and reading IPFS resources.
pub struct ResourceService {
    /// Registry of tracked CIDs.
    registry: Arc<ResourceRegistry>,

    /// Gateway client used for reads.
    resolver: Arc<ContentResolver>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over a shared registry and resolver.
    pub fn new(registry: Arc<ResourceRegistry>, resolver: Arc<ContentResolver>) -> Self {
        info!("Initializing ResourceService");

        Self {
            registry,
            resolver,
            templates: get_all_resource_templates(),
        }
    }

    /// List all tracked resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.registry
            .list()
            .iter()
            .map(|entry| entry.to_resource())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// The URI need not be registered; any well-formed `ipfs://` address is fetched.
    /// Registered CIDs report their `mimeType` hint. Unregistered ones report
    /// `text/plain` for text and the default hint for tagged binary.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let cid = parse_address(uri)?;
        let content = self.resolver.fetch(cid).await?;

        let mime_type = match self.registry.get(cid) {
            Some(entry) => entry.mime_type,
            None if content.is_binary() => DEFAULT_MIME_TYPE.to_string(),
            None => TEXT_MIME_TYPE.to_string(),
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(mime_type),
                text: content.into_tagged_text(),
                meta: None,
            }],
        })
    }
}
