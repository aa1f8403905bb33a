//! IPFS introduction document.

use super::SeedResource;

/// The "IPFS Introduction" text document.
pub struct IpfsIntroductionResource;

impl SeedResource for IpfsIntroductionResource {
    const CID: &'static str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
    const NAME: &'static str = "IPFS Introduction";
    const DESCRIPTION: &'static str = "An introduction to IPFS concepts";
    const MIME_TYPE: &'static str = "text/plain";
}
