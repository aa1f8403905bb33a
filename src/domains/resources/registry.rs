//! Resource Registry - the set of CIDs exposed as MCP resources.
//!
//! Entries are keyed by CID and kept in insertion order so listings are
//! stable. Re-adding a CID replaces its entry in place (last write wins).
//! There is no removal.

use std::path::Path;

use parking_lot::RwLock;
use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::address::{IPFS_SCHEME, address_for, validate_cid};
use super::definitions::{IpfsIntroductionResource, SeedResource};
use super::error::ResourceError;

/// Fallback MIME type when none is given.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// One tracked piece of IPFS content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Content identifier, the registry key.
    pub cid: String,

    /// Human-readable label.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Content-type hint.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl ResourceEntry {
    /// Create an entry, filling absent metadata with defaults.
    pub fn new(
        cid: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        let cid = cid.into();
        let name = name.unwrap_or_else(|| default_name(&cid));
        let description = description.unwrap_or_else(|| default_description(&cid));
        let mime_type = mime_type.unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        Self {
            cid,
            name,
            description,
            mime_type,
        }
    }

    /// The `ipfs://` URI of this entry.
    pub fn uri(&self) -> String {
        address_for(&self.cid)
    }

    /// Render the entry as an MCP resource descriptor.
    pub fn to_resource(&self) -> Resource {
        let mut raw = RawResource::new(self.uri(), self.name.clone());
        raw.description = Some(self.description.clone());
        raw.mime_type = Some(self.mime_type.clone());
        raw.no_annotation()
    }
}

/// Default display name: `IPFS File <first 8 chars>...`.
pub fn default_name(cid: &str) -> String {
    let prefix: String = cid.chars().take(8).collect();
    format!("IPFS File {}...", prefix)
}

/// Default description embedding the CID.
pub fn default_description(cid: &str) -> String {
    format!("Content from IPFS CID: {}", cid)
}

/// In-memory registry of known CIDs.
///
/// Writers replace whole entries under the write lock, so readers never see
/// a partially built entry.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    entries: RwLock<Vec<ResourceEntry>>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-seeded with the given entries.
    pub fn with_entries(
        entries: impl IntoIterator<Item = ResourceEntry>,
    ) -> Result<Self, ResourceError> {
        let registry = Self::new();
        for entry in entries {
            registry.put(entry)?;
        }
        Ok(registry)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Vec<ResourceEntry> {
        self.entries.read().clone()
    }

    /// Look up an entry by CID.
    pub fn get(&self, cid: &str) -> Option<ResourceEntry> {
        self.entries.read().iter().find(|e| e.cid == cid).cloned()
    }

    /// Insert an entry, or overwrite the existing entry with the same CID.
    pub fn put(&self, entry: ResourceEntry) -> Result<(), ResourceError> {
        validate_cid(&entry.cid)?;

        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.cid == entry.cid) {
            Some(existing) => {
                debug!("Replacing resource: {}", entry.cid);
                *existing = entry;
            }
            None => {
                info!("Registering resource: {}{}", IPFS_SCHEME, entry.cid);
                entries.push(entry);
            }
        }
        Ok(())
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Entries compiled into the server.
///
/// This is the central place where well-known CIDs are registered.
pub fn builtin_entries() -> Vec<ResourceEntry> {
    vec![IpfsIntroductionResource::entry()]
}

/// A record in a seed file. Only `cid` is required.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    cid: String,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
}

/// Load additional entries from a JSON seed file.
///
/// The file holds an array of `{ "cid", "name"?, "description"?, "mimeType"? }`.
pub fn load_seed_file(path: &Path) -> Result<Vec<ResourceEntry>, ResourceError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ResourceError::seed(format!("cannot read {}: {}", path.display(), e)))?;
    let records: Vec<SeedRecord> = serde_json::from_str(&raw)
        .map_err(|e| ResourceError::seed(format!("cannot parse {}: {}", path.display(), e)))?;

    records
        .into_iter()
        .map(|r| {
            validate_cid(&r.cid)
                .map_err(|e| ResourceError::seed(format!("{} in {}", e, path.display())))?;
            Ok(ResourceEntry::new(r.cid, r.name, r.description, r.mime_type))
        })
        .collect()
}

/// Get all registered resource templates.
///
/// Any CID can be read through the template, not only the registered ones.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{}{{cid}}", IPFS_SCHEME),
            name: "IPFS Content".to_string(),
            title: Some("Read IPFS Content by CID".to_string()),
            description: Some(
                "Read any content from IPFS by its CID through the configured gateway".to_string(),
            ),
            mime_type: Some(DEFAULT_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    const CID_A: &str = "QmAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    const CID_B: &str = "QmBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

    fn entry(cid: &str, name: &str) -> ResourceEntry {
        ResourceEntry::new(cid, Some(name.to_string()), None, None)
    }

    #[test]
    fn test_entry_defaults() {
        let e = ResourceEntry::new(CID_A, None, None, None);
        assert_eq!(e.name, "IPFS File QmAAAAAA...");
        assert_eq!(e.description, format!("Content from IPFS CID: {}", CID_A));
        assert_eq!(e.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_entry_to_resource() {
        let resource = entry(CID_A, "Doc").to_resource();
        assert_eq!(resource.raw.uri, format!("ipfs://{}", CID_A));
        assert_eq!(resource.raw.name, "Doc");
        assert_eq!(resource.raw.mime_type.as_deref(), Some(DEFAULT_MIME_TYPE));
    }

    #[test]
    fn test_insertion_order() {
        let registry = ResourceRegistry::new();
        registry.put(entry(CID_B, "b")).unwrap();
        registry.put(entry(CID_A, "a")).unwrap();

        let cids: Vec<_> = registry.list().into_iter().map(|e| e.cid).collect();
        assert_eq!(cids, vec![CID_B, CID_A]);
    }

    #[test]
    fn test_last_write_wins() {
        let registry = ResourceRegistry::new();
        registry.put(entry(CID_A, "first")).unwrap();
        registry.put(entry(CID_B, "other")).unwrap();
        registry
            .put(ResourceEntry::new(
                CID_A,
                Some("second".to_string()),
                Some("updated".to_string()),
                Some("text/plain".to_string()),
            ))
            .unwrap();

        let entries = registry.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].cid, CID_A);
        assert_eq!(entries[0].name, "second");
        assert_eq!(entries[0].description, "updated");
        assert_eq!(entries[0].mime_type, "text/plain");
    }

    #[test]
    fn test_put_rejects_short_cid() {
        let registry = ResourceRegistry::new();
        assert!(matches!(
            registry.put(entry("QmShort", "x")),
            Err(ResourceError::InvalidIdentifier(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_builtin_entries() {
        let registry = ResourceRegistry::with_entries(builtin_entries()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(IpfsIntroductionResource::CID).is_some());
    }

    #[test]
    fn test_concurrent_puts_lose_nothing() {
        let registry = Arc::new(ResourceRegistry::with_entries(builtin_entries()).unwrap());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let cid = format!("Qm{:0>44}", i);
                    registry.put(entry(&cid, "concurrent")).unwrap();
                    registry.list().len()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = registry.list();
        assert_eq!(entries.len(), 33);
        for i in 0..32 {
            let cid = format!("Qm{:0>44}", i);
            assert_eq!(entries.iter().filter(|e| e.cid == cid).count(), 1);
        }
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"cid": "{}", "name": "Alpha", "mimeType": "text/markdown"}},
                {{"cid": "{}", "mime_type": "image/png"}}
            ]"#,
            CID_A, CID_B
        )
        .unwrap();

        let entries = load_seed_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Alpha");
        assert_eq!(entries[0].mime_type, "text/markdown");
        assert_eq!(entries[1].name, "IPFS File QmBBBBBB...");
        assert_eq!(entries[1].mime_type, "image/png");
    }

    #[test]
    fn test_load_seed_file_rejects_short_cid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"cid": "QmShort"}}]"#).unwrap();

        assert!(matches!(
            load_seed_file(file.path()),
            Err(ResourceError::Seed(_))
        ));
    }

    #[test]
    fn test_load_seed_file_missing() {
        let result = load_seed_file(Path::new("/nonexistent/seeds.json"));
        assert!(matches!(result, Err(ResourceError::Seed(_))));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "ipfs://{cid}");
    }
}
