//! Store construction: arena, indices, and load-time tree derivation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use folderhub_core::error::FolderError;
use folderhub_core::result::FolderResult;
use folderhub_core::types::TenantId;
use folderhub_entity::Folder;

/// Stable arena index of a folder node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// One folder plus its tree edges.
///
/// Edges are arena indices, never references, so the store owns every
/// folder exactly once and navigation stays O(1).
#[derive(Debug)]
pub(crate) struct Node {
    /// The folder record; its `path` is rewritten on every ancestor move.
    pub(crate) folder: Folder,
    /// Parent node, `None` for a root.
    pub(crate) parent: Option<NodeId>,
    /// Direct children in insertion order. The order carries no meaning.
    pub(crate) children: Vec<NodeId>,
}

/// The indexed folder state behind the store's lock.
#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    /// Arena owning every folder node.
    pub(crate) nodes: Vec<Node>,
    /// Organization id -> that organization's folders, in load order.
    pub(crate) by_tenant: HashMap<TenantId, Vec<NodeId>>,
    /// Lowercased name -> organization -> node, for scoped lookup that can
    /// still classify "exists elsewhere".
    pub(crate) by_name: HashMap<String, HashMap<TenantId, NodeId>>,
}

impl StoreInner {
    pub(crate) fn folder(&self, id: NodeId) -> &Folder {
        &self.nodes[id.0].folder
    }

    /// Resolve a case-insensitive folder name scoped to one organization.
    ///
    /// A name that exists only in other organizations is classified as
    /// `NotInOrganization` rather than `NotFound`.
    pub(crate) fn resolve(&self, tenant_id: TenantId, name: &str) -> FolderResult<NodeId> {
        let lower = name.to_lowercase();
        match self.by_name.get(&lower) {
            Some(tenants) => tenants.get(&tenant_id).copied().ok_or_else(|| {
                FolderError::NotInOrganization {
                    name: name.to_string(),
                }
            }),
            None => Err(FolderError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    pub(crate) fn tenant_folders(&self, tenant_id: TenantId) -> Vec<Folder> {
        self.by_tenant
            .get(&tenant_id)
            .map(|ids| ids.iter().map(|id| self.folder(*id).clone()).collect())
            .unwrap_or_default()
    }
}

/// An in-memory, multi-tenant folder hierarchy.
///
/// Built once from a flat record collection; thereafter mutated only by
/// [`FolderStore::move_folder`]. A single read/write lock guards the
/// whole structure: queries share the read guard, moves take the write
/// guard.
#[derive(Debug)]
pub struct FolderStore {
    inner: RwLock<StoreInner>,
}

impl FolderStore {
    /// Build the store from a flat collection of folder records.
    ///
    /// Tree edges are derived by stripping the trailing segment of each
    /// non-root path and resolving the result within the same
    /// organization. Construction fails on the first invalid record:
    /// empty name, path whose final segment is not the folder's name,
    /// duplicate case-insensitive name within an organization, or a
    /// non-root path whose parent path no record owns.
    pub fn from_records(records: Vec<Folder>) -> FolderResult<Self> {
        let mut inner = StoreInner::default();
        let mut by_path: HashMap<(TenantId, String), NodeId> = HashMap::new();

        for folder in records {
            if folder.name.trim().is_empty() {
                return Err(FolderError::validation("folder name cannot be empty"));
            }
            if folder.tenant_id.as_uuid().is_nil() {
                return Err(FolderError::validation(format!(
                    "folder '{}' has no organization ID",
                    folder.name
                )));
            }
            if folder.path.leaf() != folder.name {
                return Err(FolderError::validation(format!(
                    "path '{}' does not end in folder name '{}'",
                    folder.path, folder.name
                )));
            }

            let id = NodeId(inner.nodes.len());
            let lower = folder.name.to_lowercase();

            let tenants = inner.by_name.entry(lower.clone()).or_default();
            if tenants.contains_key(&folder.tenant_id) {
                return Err(FolderError::DuplicateName {
                    name: lower,
                    tenant_id: folder.tenant_id,
                });
            }
            tenants.insert(folder.tenant_id, id);

            inner.by_tenant.entry(folder.tenant_id).or_default().push(id);
            by_path.insert((folder.tenant_id, folder.path.as_str().to_string()), id);

            inner.nodes.push(Node {
                folder,
                parent: None,
                children: Vec::new(),
            });
        }

        // Link parent/child edges from the materialized paths. A non-root
        // path whose parent path has no owner is a configuration error,
        // not a silent root.
        for idx in 0..inner.nodes.len() {
            let Some(parent_path) = inner.nodes[idx].folder.path.parent() else {
                continue;
            };
            let tenant_id = inner.nodes[idx].folder.tenant_id;
            match by_path.get(&(tenant_id, parent_path.as_str().to_string())) {
                Some(parent) => {
                    inner.nodes[idx].parent = Some(*parent);
                    inner.nodes[parent.0].children.push(NodeId(idx));
                }
                None => {
                    return Err(FolderError::MissingParent {
                        path: inner.nodes[idx].folder.path.as_str().to_string(),
                        parent: parent_path.as_str().to_string(),
                    });
                }
            }
        }

        info!(
            folders = inner.nodes.len(),
            organizations = inner.by_tenant.len(),
            "folder store built"
        );

        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Total number of folders across all organizations.
    pub fn len(&self) -> usize {
        self.read().nodes.len()
    }

    /// Whether the store holds no folders at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Lock poisoning only means another thread panicked while holding the
    // guard; moves validate fully before mutating, so the state behind a
    // poisoned lock is still consistent and the guard can be recovered.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
