//! Read-only store operations: listings, descendants, and tree display.

use folderhub_core::result::FolderResult;
use folderhub_core::types::TenantId;
use folderhub_entity::{Folder, FolderNode, FolderTree};

use crate::store::{FolderStore, NodeId, StoreInner};

impl FolderStore {
    /// List all folders belonging to one organization.
    ///
    /// Returns owned copies in load order; an unknown organization yields
    /// an empty list, never an error.
    pub fn list_by_tenant(&self, tenant_id: TenantId) -> Vec<Folder> {
        self.read().tenant_folders(tenant_id)
    }

    /// List every folder transitively reachable below the named folder,
    /// the folder itself excluded.
    ///
    /// The name is resolved case-insensitively within the organization; a
    /// name that only exists elsewhere fails with `NotInOrganization`. A
    /// leaf folder yields an empty list.
    pub fn list_descendants(&self, tenant_id: TenantId, name: &str) -> FolderResult<Vec<Folder>> {
        let inner = self.read();
        let id = inner.resolve(tenant_id, name)?;

        let mut descendants = Vec::new();
        let mut stack: Vec<NodeId> = inner.nodes[id.0].children.clone();
        while let Some(next) = stack.pop() {
            descendants.push(inner.folder(next).clone());
            stack.extend(inner.nodes[next.0].children.iter().copied());
        }
        Ok(descendants)
    }

    /// All organizations known to the store, in sorted order.
    pub fn tenants(&self) -> Vec<TenantId> {
        let inner = self.read();
        let mut tenants: Vec<TenantId> = inner.by_tenant.keys().copied().collect();
        tenants.sort();
        tenants
    }

    /// Build the nested display tree for one organization.
    ///
    /// An unknown organization yields an empty tree.
    pub fn tree(&self, tenant_id: TenantId) -> FolderTree {
        let inner = self.read();
        let Some(ids) = inner.by_tenant.get(&tenant_id) else {
            return FolderTree::empty();
        };

        let roots: Vec<FolderNode> = ids
            .iter()
            .filter(|id| inner.nodes[id.0].parent.is_none())
            .map(|id| build_node(&inner, *id))
            .collect();

        FolderTree {
            roots,
            total_folders: ids.len() as u64,
        }
    }
}

/// Build one display node and, recursively, its subtree.
fn build_node(inner: &StoreInner, id: NodeId) -> FolderNode {
    let node = &inner.nodes[id.0];
    let children: Vec<FolderNode> = node
        .children
        .iter()
        .map(|child| build_node(inner, *child))
        .collect();

    FolderNode {
        name: node.folder.name.clone(),
        path: node.folder.path.as_str().to_string(),
        child_count: children.len() as u64,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folderhub_core::error::ErrorKind;

    fn sample() -> (FolderStore, TenantId, TenantId) {
        let org1 = TenantId::new();
        let org2 = TenantId::new();
        let store = FolderStore::from_records(vec![
            Folder::root("alpha", org1),
            Folder::at_path("bravo", org1, "alpha.bravo"),
            Folder::at_path("charlie", org1, "alpha.bravo.charlie"),
            Folder::at_path("delta", org1, "alpha.delta"),
            Folder::root("echo", org1),
            Folder::root("foxtrot", org2),
        ])
        .expect("valid fixture");
        (store, org1, org2)
    }

    fn names(folders: &[Folder]) -> Vec<&str> {
        let mut names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_list_by_tenant_is_isolated() {
        let (store, org1, org2) = sample();
        let listed = store.list_by_tenant(org1);
        assert_eq!(listed.len(), 5);
        assert!(listed.iter().all(|f| f.tenant_id == org1));
        assert_eq!(names(&store.list_by_tenant(org2)), vec!["foxtrot"]);
    }

    #[test]
    fn test_list_by_tenant_unknown_is_empty() {
        let (store, _, _) = sample();
        assert!(store.list_by_tenant(TenantId::new()).is_empty());
    }

    #[test]
    fn test_list_by_tenant_returns_copies() {
        let (store, org1, _) = sample();
        let mut listed = store.list_by_tenant(org1);
        listed[0].name = "corrupted".to_string();
        assert!(store.list_by_tenant(org1).iter().all(|f| f.name != "corrupted"));
    }

    #[test]
    fn test_descendants_of_root() {
        let (store, org1, _) = sample();
        let descendants = store.list_descendants(org1, "alpha").expect("alpha exists");
        assert_eq!(names(&descendants), vec!["bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_descendants_of_leaf_is_empty() {
        let (store, org1, _) = sample();
        let descendants = store
            .list_descendants(org1, "charlie")
            .expect("charlie exists");
        assert!(descendants.is_empty());
    }

    #[test]
    fn test_descendants_resolution_is_case_insensitive() {
        let (store, org1, _) = sample();
        let descendants = store.list_descendants(org1, "ALPHA").expect("alpha exists");
        assert_eq!(descendants.len(), 3);
    }

    #[test]
    fn test_descendants_wrong_tenant() {
        let (store, org1, _) = sample();
        let err = store
            .list_descendants(org1, "foxtrot")
            .expect_err("foxtrot belongs to another organization");
        assert_eq!(err.kind(), ErrorKind::NotInOrganization);
    }

    #[test]
    fn test_descendants_unknown_name() {
        let (store, org1, _) = sample();
        let err = store
            .list_descendants(org1, "nope")
            .expect_err("no such folder anywhere");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_tenants_are_sorted() {
        let (store, org1, org2) = sample();
        let mut expected = vec![org1, org2];
        expected.sort();
        assert_eq!(store.tenants(), expected);
    }

    #[test]
    fn test_tree_shape() {
        let (store, org1, _) = sample();
        let tree = store.tree(org1);
        assert_eq!(tree.total_folders, 5);
        assert_eq!(tree.roots.len(), 2);

        let alpha = tree
            .roots
            .iter()
            .find(|n| n.name == "alpha")
            .expect("alpha root");
        assert_eq!(alpha.child_count, 2);
        let bravo = alpha
            .children
            .iter()
            .find(|n| n.name == "bravo")
            .expect("bravo under alpha");
        assert_eq!(bravo.children[0].path, "alpha.bravo.charlie");
    }

    #[test]
    fn test_tree_unknown_tenant_is_empty() {
        let (store, _, _) = sample();
        let tree = store.tree(TenantId::new());
        assert!(tree.roots.is_empty());
        assert_eq!(tree.total_folders, 0);
    }
}
