//! Table, JSON, and tree output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folderhub_entity::{FolderNode, FolderTree};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a folder tree, ASCII-rendered or as JSON
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if tree.roots.is_empty() {
                println!("No folders found.");
                return;
            }
            for root in &tree.roots {
                println!("{}", root.name);
                render_children(root, "");
            }
            println!("\n{} folders total", tree.total_folders);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tree).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

fn render_children(node: &FolderNode, prefix: &str) {
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let (branch, continuation) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        println!("{}{}{}", prefix, branch, child.name);
        render_children(child, &format!("{}{}", prefix, continuation));
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
