//! IPFS resource addressing.
//!
//! Resources are addressed as `ipfs://<cid>`. CIDs are treated as opaque
//! strings: the only check applied is a coarse minimum length, which matches
//! the shortest CIDv0 (base58btc) encoding. No multihash or multibase parsing
//! is performed.

use super::error::ResourceError;

/// URI scheme prefix for IPFS resources.
pub const IPFS_SCHEME: &str = "ipfs://";

/// Minimum accepted CID length in characters.
pub const MIN_CID_LENGTH: usize = 46;

/// Build the resource URI for a CID.
pub fn address_for(cid: &str) -> String {
    format!("{}{}", IPFS_SCHEME, cid)
}

/// Check that a candidate CID passes the length rule.
pub fn validate_cid(cid: &str) -> Result<(), ResourceError> {
    if cid.is_empty() || cid.chars().count() < MIN_CID_LENGTH {
        return Err(ResourceError::invalid_identifier(cid));
    }
    Ok(())
}

/// Extract and validate the CID from an `ipfs://` URI.
pub fn parse_address(uri: &str) -> Result<&str, ResourceError> {
    let cid = uri
        .strip_prefix(IPFS_SCHEME)
        .ok_or_else(|| ResourceError::invalid_address(uri))?;
    validate_cid(cid)?;
    Ok(cid)
}
