//! The dot-delimited folder path type.
//!
//! A folder's path is the chain of ancestor names ending in its own name,
//! e.g. `alpha.bravo.charlie`. A root folder's path equals its name.
//! Wrapping the string keeps the segment surgery (leaf extraction, parent
//! stripping, joining) in one place instead of scattered `rfind('.')`
//! calls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// A dot-delimited materialized folder path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderPath(String);

impl FolderPath {
    /// Create a path from an existing string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final segment of the path — the folder's own name.
    pub fn leaf(&self) -> &str {
        match self.0.rfind(PATH_SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The path with the final segment stripped, or `None` for a
    /// single-segment path.
    pub fn parent(&self) -> Option<FolderPath> {
        self.0
            .rfind(PATH_SEPARATOR)
            .map(|idx| Self(self.0[..idx].to_string()))
    }

    /// Append a child name, producing the child's full path.
    pub fn join(&self, name: &str) -> FolderPath {
        Self(format!("{}{}{}", self.0, PATH_SEPARATOR, name))
    }

    /// Whether this is a single-segment path (a root folder's path).
    pub fn is_root(&self) -> bool {
        !self.0.contains(PATH_SEPARATOR)
    }

    /// Iterate over the path segments from root to leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Number of segments, which is the folder's depth plus one.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FolderPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for FolderPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
