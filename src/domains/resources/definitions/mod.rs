//! Built-in resource definitions.
//!
//! Each well-known CID is defined in its own file and seeded into the
//! registry at startup.
//!
//! ## Adding a New Seed Resource
//!
//! 1. Create a new file (e.g., `my_document.rs`)
//! 2. Implement the `SeedResource` trait
//! 3. Export it here
//! 4. Add it to `builtin_entries()` in `registry.rs`

pub mod ipfs_introduction;

pub use ipfs_introduction::IpfsIntroductionResource;

use super::registry::ResourceEntry;

/// Trait for resources that are known at compile time.
pub trait SeedResource {
    /// The CID of the content.
    const CID: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Build the registry entry for this resource.
    fn entry() -> ResourceEntry {
        ResourceEntry::new(
            Self::CID,
            Some(Self::NAME.to_string()),
            Some(Self::DESCRIPTION.to_string()),
            Some(Self::MIME_TYPE.to_string()),
        )
    }
}
