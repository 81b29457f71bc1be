//! The move operation: validation, re-linking, and subtree path rewrite.

use tracing::{debug, info};

use folderhub_core::error::FolderError;
use folderhub_core::result::FolderResult;
use folderhub_core::types::{FolderPath, TenantId};
use folderhub_entity::Folder;

use crate::store::{FolderStore, NodeId, StoreInner};

impl FolderStore {
    /// Move the named folder, with its entire subtree, under a new parent
    /// in the same organization, and return the organization's updated
    /// folder listing.
    ///
    /// Every check runs before any mutation, so a rejected move leaves
    /// the store untouched:
    /// - source and destination resolve per the shared rule, except that
    ///   a destination found only in another organization fails with
    ///   `CannotMoveAcrossOrganizations`;
    /// - moving a folder onto itself fails with `CannotMoveToItself`;
    /// - moving a folder under its own subtree fails with
    ///   `CannotMoveToOwnDescendant`.
    ///
    /// Moving a folder under its current parent succeeds and changes
    /// nothing but the parent's child order.
    pub fn move_folder(
        &self,
        tenant_id: TenantId,
        source: &str,
        destination: &str,
    ) -> FolderResult<Vec<Folder>> {
        let mut inner = self.write();

        let src = inner.resolve(tenant_id, source)?;
        let dst = inner.resolve(tenant_id, destination).map_err(|err| {
            // A same-organization move can never legitimately target
            // another organization's folder.
            match err {
                FolderError::NotInOrganization { .. } => {
                    FolderError::CannotMoveAcrossOrganizations {
                        name: source.to_string(),
                        destination: destination.to_string(),
                    }
                }
                other => other,
            }
        })?;

        if src == dst {
            debug!(%tenant_id, source, "move rejected: folder targeted itself");
            return Err(FolderError::CannotMoveToItself {
                name: source.to_string(),
            });
        }

        // Walk up from the destination; hitting the source means the
        // destination sits inside the source's subtree and the move would
        // create a cycle.
        let mut ancestor = inner.nodes[dst.0].parent;
        while let Some(id) = ancestor {
            if id == src {
                debug!(
                    %tenant_id,
                    source,
                    destination,
                    "move rejected: destination is inside the source subtree"
                );
                return Err(FolderError::CannotMoveToOwnDescendant {
                    name: source.to_string(),
                    destination: destination.to_string(),
                });
            }
            ancestor = inner.nodes[id.0].parent;
        }

        // Detach from the old parent (a root has none).
        if let Some(old_parent) = inner.nodes[src.0].parent {
            inner.nodes[old_parent.0].children.retain(|child| *child != src);
        }

        // Attach under the destination.
        inner.nodes[src.0].parent = Some(dst);
        inner.nodes[dst.0].children.push(src);

        // Every descendant's stored path is absolute, so the whole moved
        // subtree gets rewritten eagerly.
        let new_path = inner.folder(dst).path.join(&inner.folder(src).name);
        rewrite_paths(&mut inner, src, new_path);

        info!(
            %tenant_id,
            source,
            destination,
            new_path = %inner.folder(src).path,
            "folder moved"
        );

        Ok(inner.tenant_folders(tenant_id))
    }
}

/// Set the folder's path and recompute, top-down, the path of every
/// descendant from its already-updated parent.
fn rewrite_paths(inner: &mut StoreInner, id: NodeId, new_path: FolderPath) {
    inner.nodes[id.0].folder.path = new_path;
    for child in inner.nodes[id.0].children.clone() {
        let child_path = inner
            .folder(id)
            .path
            .join(&inner.folder(child).name);
        rewrite_paths(inner, child, child_path);
    }
}
