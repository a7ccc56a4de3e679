//! Tree construction and path resolution

use crate::entry::{Children, Entry};
use crate::path;
use serde::{Deserialize, Serialize};

/// The session's file-system tree.
///
/// Holds a single root drive addressed by its path token (e.g. `C:`).
/// Entry identity is the absolute `/`-joined path from that token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VfsTree {
    root_token: String,
    root: Entry,
}

impl VfsTree {
    /// Wraps a built root drive under its path token.
    ///
    /// The tree is immutable from here on; build the entry hierarchy first.
    pub fn new(root_token: impl Into<String>, root: Entry) -> Self {
        Self {
            root_token: root_token.into(),
            root,
        }
    }

    /// The root drive's path token
    pub fn root_token(&self) -> &str {
        &self.root_token
    }

    /// The root drive entry
    pub fn root(&self) -> &Entry {
        &self.root
    }

    /// Resolves an absolute path to an entry.
    ///
    /// Walks the tree segment by segment; any missing segment, a leading
    /// segment that is not the root token, or traversal through a leaf
    /// yields `None`.
    pub fn resolve(&self, path: &str) -> Option<&Entry> {
        let segments = path::split(path);
        let (first, rest) = segments.split_first()?;
        if *first != self.root_token {
            return None;
        }

        let mut current = &self.root;
        for segment in rest {
            current = current.children()?.get(segment)?;
        }
        Some(current)
    }

    /// Lists the children of a drive or folder path.
    ///
    /// File and shortcut paths yield `None`, as do unresolvable paths.
    pub fn list_children(&self, path: &str) -> Option<&Children> {
        self.resolve(path)?.children()
    }
}
