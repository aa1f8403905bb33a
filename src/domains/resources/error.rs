//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while resolving or fetching IPFS resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource URI does not use the `ipfs://` scheme.
    #[error("Invalid IPFS URI: {0}")]
    InvalidAddress(String),

    /// The candidate CID failed the length check.
    #[error("Invalid IPFS CID: {0}")]
    InvalidIdentifier(String),

    /// The gateway answered 404 for this CID.
    #[error("CID not found: {0}")]
    NotFound(String),

    /// The gateway answered with a non-404 failure status.
    #[error("Error fetching from IPFS: gateway returned HTTP {status} for CID {cid}")]
    Gateway { status: u16, cid: String },

    /// Network-level failure (timeout, connection refused, DNS).
    #[error("Failed to fetch IPFS content: {0}")]
    Transport(String),

    /// A seed entry could not be loaded.
    #[error("Invalid resource seed: {0}")]
    Seed(String),
}

impl ResourceError {
    /// Create a new "invalid address" error.
    pub fn invalid_address(uri: impl Into<String>) -> Self {
        Self::InvalidAddress(uri.into())
    }

    /// Create a new "invalid identifier" error.
    pub fn invalid_identifier(cid: impl Into<String>) -> Self {
        Self::InvalidIdentifier(cid.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(cid: impl Into<String>) -> Self {
        Self::NotFound(cid.into())
    }

    /// Create a new gateway status error.
    pub fn gateway(status: u16, cid: impl Into<String>) -> Self {
        Self::Gateway {
            status,
            cid: cid.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    /// Create a new seed error.
    pub fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::InvalidAddress(_) | ResourceError::InvalidIdentifier(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
            ResourceError::Gateway { .. } | ResourceError::Transport(_) | ResourceError::Seed(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
