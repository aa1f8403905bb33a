//! Add IPFS resource tool.
//!
//! Registers a CID with display metadata so that it appears in
//! `resources/list`, then notifies the session that the list changed.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::common::{object_schema, optional_string, required_string, text_result};
use crate::domains::resources::{DEFAULT_MIME_TYPE, ResourceEntry, ResourceRegistry};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::notifier::ResourceListNotifier;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add resource tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddIpfsResourceParams {
    /// The CID to track.
    pub cid: String,

    /// Human-readable name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// Optional MIME type.
    pub mime_type: Option<String>,
}

impl AddIpfsResourceParams {
    /// Extract parameters from raw tool arguments.
    ///
    /// `mime_type` is accepted as a legacy spelling of `mimeType`.
    pub fn from_arguments(args: &JsonObject) -> Result<Self, ToolError> {
        let mime_type = match optional_string(args, "mimeType")? {
            Some(m) => Some(m),
            None => optional_string(args, "mime_type")?,
        };

        Ok(Self {
            cid: required_string(args, "cid")?,
            name: required_string(args, "name")?,
            description: optional_string(args, "description")?,
            mime_type,
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add IPFS resource tool.
pub struct AddIpfsResourceTool;

impl AddIpfsResourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_ipfs_resource";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new IPFS CID to track as a resource";

    /// Register the CID and notify the session.
    ///
    /// A failed notification is logged but does not fail the call: the
    /// entry is already registered.
    #[instrument(skip_all, fields(cid = %params.cid))]
    pub async fn execute(
        params: AddIpfsResourceParams,
        registry: &ResourceRegistry,
        notifier: &dyn ResourceListNotifier,
    ) -> Result<CallToolResult, ToolError> {
        info!("Adding IPFS resource: {}", params.name);

        let AddIpfsResourceParams {
            cid,
            name,
            description,
            mime_type,
        } = params;
        let message = format!("Successfully added IPFS resource: {} (CID: {})", name, cid);

        registry.put(ResourceEntry::new(cid, Some(name), description, mime_type))?;

        if let Err(e) = notifier.resource_list_changed().await {
            warn!("Resource registered but list_changed was not delivered: {}", e);
        }

        Ok(text_result(message))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: object_schema(json!({
                "type": "object",
                "properties": {
                    "cid": {
                        "type": "string",
                        "description": "The IPFS CID to add"
                    },
                    "name": {
                        "type": "string",
                        "description": "Human-readable name for this resource"
                    },
                    "description": {
                        "type": "string",
                        "description": "Description of the content"
                    },
                    "mimeType": {
                        "type": "string",
                        "description": "MIME type of the content (default: application/octet-stream)",
                        "default": DEFAULT_MIME_TYPE
                    }
                },
                "required": ["cid", "name"]
            })),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::ResourceError;
    use crate::domains::tools::notifier::testing::RecordingNotifier;
    use rmcp::model::RawContent;
    use serde_json::Value;

    const CID: &str = "QmNewResource123456789012345678901234567890123456";

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_params_from_arguments() {
        let params = AddIpfsResourceParams::from_arguments(&args(json!({
            "cid": CID,
            "name": "Test Resource",
            "description": "A test resource"
        })))
        .unwrap();
        assert_eq!(params.cid, CID);
        assert_eq!(params.description.as_deref(), Some("A test resource"));
        assert_eq!(params.mime_type, None);
    }

    #[test]
    fn test_params_accepts_legacy_mime_key() {
        let params = AddIpfsResourceParams::from_arguments(&args(json!({
            "cid": CID,
            "name": "x",
            "mime_type": "image/png"
        })))
        .unwrap();
        assert_eq!(params.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_params_missing_required() {
        let missing_cid = AddIpfsResourceParams::from_arguments(&args(json!({ "name": "x" })));
        assert!(matches!(missing_cid, Err(ToolError::MissingArgument(k)) if k == "cid"));

        let missing_name = AddIpfsResourceParams::from_arguments(&args(json!({ "cid": CID })));
        assert!(matches!(missing_name, Err(ToolError::MissingArgument(k)) if k == "name"));
    }

    #[tokio::test]
    async fn test_execute_registers_and_notifies() {
        let registry = ResourceRegistry::new();
        let notifier = RecordingNotifier::new();
        let params = AddIpfsResourceParams {
            cid: CID.to_string(),
            name: "Test Resource".to_string(),
            description: Some("A test resource".to_string()),
            mime_type: None,
        };

        let result = AddIpfsResourceTool::execute(params, &registry, &notifier)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(text(&result).contains("Successfully added"));
        assert!(text(&result).contains("Test Resource"));
        assert!(text(&result).contains(CID));
        assert_eq!(notifier.count(), 1);

        let entry = registry.get(CID).unwrap();
        assert_eq!(entry.description, "A test resource");
        assert_eq!(entry.mime_type, DEFAULT_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_execute_survives_notification_failure() {
        let registry = ResourceRegistry::new();
        let notifier = RecordingNotifier::failing();
        let params = AddIpfsResourceParams {
            cid: CID.to_string(),
            name: "Test Resource".to_string(),
            description: None,
            mime_type: None,
        };

        let result = AddIpfsResourceTool::execute(params, &registry, &notifier)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(notifier.count(), 1);
        assert!(registry.get(CID).is_some());
    }

    #[tokio::test]
    async fn test_execute_rejects_short_cid_without_notifying() {
        let registry = ResourceRegistry::new();
        let notifier = RecordingNotifier::new();
        let params = AddIpfsResourceParams {
            cid: "QmShort".to_string(),
            name: "x".to_string(),
            description: None,
            mime_type: None,
        };

        let result = AddIpfsResourceTool::execute(params, &registry, &notifier).await;

        assert!(matches!(
            result,
            Err(ToolError::Resource(ResourceError::InvalidIdentifier(_)))
        ));
        assert_eq!(notifier.count(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tool_schema() {
        let tool = AddIpfsResourceTool::to_tool();
        assert_eq!(tool.name, "add_ipfs_resource");
        assert_eq!(tool.input_schema["required"], json!(["cid", "name"]));
        assert_eq!(
            tool.input_schema["properties"]["mimeType"]["default"],
            json!("application/octet-stream")
        );
    }
}
