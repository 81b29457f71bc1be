//! Folder query and move CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::error::FolderError;
use folderhub_core::types::TenantId;
use folderhub_entity::Folder;
use folderhub_store::FolderStore;

use crate::output::{self, OutputFormat};

/// Arguments for the `list` command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Organization ID
    #[arg(short, long)]
    pub tenant_id: String,
}

/// Arguments for the `descendants` command
#[derive(Debug, Args)]
pub struct DescendantsArgs {
    /// Organization ID
    #[arg(short, long)]
    pub tenant_id: String,
    /// Folder name (case-insensitive)
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for the `move` command
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Organization ID
    #[arg(short, long)]
    pub tenant_id: String,
    /// Folder to move
    #[arg(short, long)]
    pub source: String,
    /// New parent folder
    #[arg(short, long)]
    pub destination: String,
}

/// Arguments for the `tree` command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Organization ID
    #[arg(short, long)]
    pub tenant_id: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Organization
    tenant_id: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            path: folder.path.as_str().to_string(),
            tenant_id: folder.tenant_id.to_string(),
        }
    }
}

/// Organization display row
#[derive(Debug, Serialize, Tabled)]
struct TenantRow {
    /// Organization
    tenant_id: String,
    /// Folder count
    folders: usize,
}

fn parse_tenant(raw: &str) -> Result<TenantId, FolderError> {
    raw.parse()
        .map_err(|e| FolderError::validation(format!("invalid organization ID '{raw}': {e}")))
}

/// Execute the `list` command
pub fn list(store: &FolderStore, args: &ListArgs, format: OutputFormat) -> Result<(), FolderError> {
    let tenant_id = parse_tenant(&args.tenant_id)?;
    let rows: Vec<FolderRow> = store
        .list_by_tenant(tenant_id)
        .iter()
        .map(FolderRow::from)
        .collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute the `descendants` command
pub fn descendants(
    store: &FolderStore,
    args: &DescendantsArgs,
    format: OutputFormat,
) -> Result<(), FolderError> {
    let tenant_id = parse_tenant(&args.tenant_id)?;
    let folders = store.list_descendants(tenant_id, &args.name)?;
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute the `move` command
pub fn relocate(
    store: &FolderStore,
    args: &MoveArgs,
    format: OutputFormat,
) -> Result<(), FolderError> {
    let tenant_id = parse_tenant(&args.tenant_id)?;
    let updated = store.move_folder(tenant_id, &args.source, &args.destination)?;

    output::print_success(&format!(
        "moved '{}' under '{}'",
        args.source, args.destination
    ));
    let rows: Vec<FolderRow> = updated.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute the `tree` command
pub fn tree(store: &FolderStore, args: &TreeArgs, format: OutputFormat) -> Result<(), FolderError> {
    let tenant_id = parse_tenant(&args.tenant_id)?;
    let tree = store.tree(tenant_id);
    output::print_tree(&tree, format);
    Ok(())
}

/// Execute the `tenants` command
pub fn tenants(store: &FolderStore, format: OutputFormat) -> Result<(), FolderError> {
    let rows: Vec<TenantRow> = store
        .tenants()
        .into_iter()
        .map(|tenant_id| TenantRow {
            folders: store.list_by_tenant(tenant_id).len(),
            tenant_id: tenant_id.to_string(),
        })
        .collect();
    output::print_list(&rows, format);
    Ok(())
}
