//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::types::{FolderPath, TenantId};

/// A folder in an organization's hierarchy.
///
/// The record carries no parent/child links; tree edges are derived
/// from `path` when the store is built and live in the store's arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name, unique (case-insensitively) within its organization.
    pub name: String,
    /// The organization this folder belongs to.
    pub tenant_id: TenantId,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    pub path: FolderPath,
}

impl Folder {
    /// Create a root folder record (path equals the name).
    pub fn root(name: impl Into<String>, tenant_id: TenantId) -> Self {
        let name = name.into();
        let path = FolderPath::new(name.clone());
        Self {
            name,
            tenant_id,
            path,
        }
    }

    /// Create a folder record at an explicit path.
    pub fn at_path(name: impl Into<String>, tenant_id: TenantId, path: impl Into<FolderPath>) -> Self {
        Self {
            name: name.into(),
            tenant_id,
            path: path.into(),
        }
    }

    /// Check if this is a root folder (path equals the name).
    pub fn is_root(&self) -> bool {
        self.path.as_str() == self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_record() {
        let folder = Folder::root("alpha", TenantId::new());
        assert!(folder.is_root());
        assert_eq!(folder.path.as_str(), "alpha");
    }

    #[test]
    fn test_nested_record_is_not_root() {
        let folder = Folder::at_path("bravo", TenantId::new(), "alpha.bravo");
        assert!(!folder.is_root());
    }

    #[test]
    fn test_serde_roundtrip() {
        let folder = Folder::at_path("bravo", TenantId::new(), "alpha.bravo");
        let json = serde_json::to_string(&folder).expect("serialize");
        let parsed: Folder = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, folder);
    }

    #[test]
    fn test_field_names_in_json() {
        let tenant_id = TenantId::new();
        let folder = Folder::root("alpha", tenant_id);
        let value = serde_json::to_value(&folder).expect("serialize");
        assert_eq!(value["name"], "alpha");
        assert_eq!(value["path"], "alpha");
        assert_eq!(value["tenant_id"], tenant_id.to_string());
    }
}
