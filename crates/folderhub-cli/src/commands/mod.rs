//! CLI command definitions and dispatch.

pub mod folder;

use clap::{Parser, Subcommand};

use folderhub_core::config::AppConfig;
use folderhub_core::error::FolderError;
use folderhub_entity::Folder;
use folderhub_store::FolderStore;

use crate::output::OutputFormat;

/// FolderHub — multi-tenant folder hierarchy explorer
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to the folder data file (overrides the configured path)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all folders of an organization
    List(folder::ListArgs),
    /// List all descendants of a folder
    Descendants(folder::DescendantsArgs),
    /// Move a folder (and its subtree) under a new parent
    Move(folder::MoveArgs),
    /// Show an organization's folders as a tree
    Tree(folder::TreeArgs),
    /// List the organizations present in the data file
    Tenants,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), FolderError> {
        let data_file = self.data.as_deref().unwrap_or(&config.data.file);
        let store = load_store(data_file)?;

        match &self.command {
            Commands::List(args) => folder::list(&store, args, self.format),
            Commands::Descendants(args) => folder::descendants(&store, args, self.format),
            Commands::Move(args) => folder::relocate(&store, args, self.format),
            Commands::Tree(args) => folder::tree(&store, args, self.format),
            Commands::Tenants => folder::tenants(&store, self.format),
        }
    }
}

/// Load the folder records from a JSON file and build the store.
fn load_store(path: &str) -> Result<FolderStore, FolderError> {
    tracing::debug!(path, "loading folder data");
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<Folder> = serde_json::from_str(&raw)?;
    FolderStore::from_records(records)
}
