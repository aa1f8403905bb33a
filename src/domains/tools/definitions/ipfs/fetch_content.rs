//! Fetch IPFS content tool.
//!
//! Fetches any CID through the gateway, tracked or not. Unlike resource
//! reads, the CID is passed to the gateway unvalidated, and failures are
//! returned as tool output rather than protocol errors.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::common::{object_schema, required_string, text_result};
use crate::domains::resources::address::address_for;
use crate::domains::resources::{ContentResolver, FetchedContent};
use crate::domains::tools::error::ToolError;

/// Parameters for the fetch content tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchIpfsContentParams {
    /// The CID to fetch.
    pub cid: String,
}

impl FetchIpfsContentParams {
    /// Extract parameters from raw tool arguments.
    pub fn from_arguments(args: &JsonObject) -> Result<Self, ToolError> {
        Ok(Self {
            cid: required_string(args, "cid")?,
        })
    }
}

/// Fetch IPFS content tool.
pub struct FetchIpfsContentTool;

impl FetchIpfsContentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch_ipfs_content";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch content from any IPFS CID (not just tracked resources)";

    /// Run the tool against raw arguments. Never fails at the protocol level.
    pub async fn call(args: &JsonObject, resolver: &ContentResolver) -> CallToolResult {
        match FetchIpfsContentParams::from_arguments(args) {
            Ok(params) => Self::execute(&params, resolver).await,
            Err(e) => Self::failure(&e),
        }
    }

    /// Fetch the CID and render the outcome as text.
    #[instrument(skip_all, fields(cid = %params.cid))]
    pub async fn execute(params: &FetchIpfsContentParams, resolver: &ContentResolver) -> CallToolResult {
        info!("Fetch tool called");

        match resolver.fetch(&params.cid).await {
            Ok(FetchedContent::Text(text)) => text_result(text),
            Ok(FetchedContent::Binary(_)) => text_result(format!(
                "[Binary content from CID: {}] - Use the resource URI {} to access",
                params.cid,
                address_for(&params.cid)
            )),
            Err(e) => Self::failure(&e),
        }
    }

    fn failure(err: &dyn std::fmt::Display) -> CallToolResult {
        warn!("Fetch tool failed: {}", err);
        text_result(format!("Error fetching IPFS content: {}", err))
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
                        "description": "The IPFS CID to fetch"
                    }
                },
                "required": ["cid"]
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
    use crate::core::config::GatewayConfig;
    use rmcp::model::RawContent;
    use serde_json::Value;

    const CID: &str = "QmTest123456789012345678901234567890123456789012";

    fn resolver_for(server: &mockito::Server) -> ContentResolver {
        ContentResolver::new(&GatewayConfig::new(format!("{}/ipfs/", server.url()), 30)).unwrap()
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            _ => panic!("expected text content"),
        }
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_fetch_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("/ipfs/{}", CID).as_str())
            .with_status(200)
            .with_body("Fetched content")
            .create_async()
            .await;

        let result =
            FetchIpfsContentTool::call(&args(json!({ "cid": CID })), &resolver_for(&server)).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "Fetched content");
    }

    #[tokio::test]
    async fn test_fetch_binary_returns_pointer_not_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("/ipfs/{}", CID).as_str())
            .with_status(200)
            .with_body(vec![0xffu8, 0xd8, 0xff, 0xe0])
            .create_async()
            .await;

        let result =
            FetchIpfsContentTool::call(&args(json!({ "cid": CID })), &resolver_for(&server)).await;

        assert_eq!(
            text(&result),
            format!(
                "[Binary content from CID: {}] - Use the resource URI ipfs://{} to access",
                CID, CID
            )
        );
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_successful_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("/ipfs/{}", CID).as_str())
            .with_status(404)
            .create_async()
            .await;

        let result =
            FetchIpfsContentTool::call(&args(json!({ "cid": CID })), &resolver_for(&server)).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text(&result).starts_with("Error fetching IPFS content:"));
        assert!(text(&result).contains(CID));
    }

    #[tokio::test]
    async fn test_fetch_short_cid_is_not_validated() {
        // Resource reads reject CIDs under 46 characters; this tool does not.
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ipfs/short")
            .with_status(200)
            .with_body("still fetched")
            .create_async()
            .await;

        let result =
            FetchIpfsContentTool::call(&args(json!({ "cid": "short" })), &resolver_for(&server))
                .await;

        assert_eq!(text(&result), "still fetched");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_cid_is_reported_as_content() {
        let resolver = ContentResolver::new(&GatewayConfig::default()).unwrap();
        let result = FetchIpfsContentTool::call(&JsonObject::new(), &resolver).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text(&result).contains("Missing required argument: cid"));
    }

    #[test]
    fn test_tool_schema() {
        let tool = FetchIpfsContentTool::to_tool();
        assert_eq!(tool.name, "fetch_ipfs_content");
        assert_eq!(tool.input_schema["required"], json!(["cid"]));
    }
}
