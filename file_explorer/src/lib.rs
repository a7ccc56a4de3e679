//! # File Explorer
//!
//! Application model for the file-browser window: current location,
//! back/forward/up navigation history, and folder listings.
//!
//! The explorer never opens files itself; activating a non-folder entry is
//! delegated outward as an [`ExplorerEvent`] so the shell routes it through
//! the same dispatch path as a desktop click.

use serde::{Deserialize, Serialize};
use vfs::{path, Entry, VfsTree};

/// Delegation from the explorer to the shell's dispatch path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExplorerEvent {
    OpenFile { name: String, path: String },
}

/// Navigation state of one file-browser window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explorer {
    current: String,
    history: Vec<String>,
    cursor: usize,
}

impl Explorer {
    /// Creates an explorer at the given starting path
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            current: initial.clone(),
            history: vec![initial],
            cursor: 0,
        }
    }

    /// The path currently shown
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Jumps to a path, truncating any forward history.
    pub fn navigate(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target == self.current {
            return;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(target.clone());
        self.cursor = self.history.len() - 1;
        self.current = target;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Steps back through the history; no-op at the start.
    pub fn back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
            self.current = self.history[self.cursor].clone();
        }
    }

    /// Steps forward through the history; no-op at the end.
    pub fn forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
            self.current = self.history[self.cursor].clone();
        }
    }

    /// Moves to the parent folder, clamped at the root drive.
    pub fn up(&mut self, tree: &VfsTree) {
        let parent = path::parent(&self.current, tree.root_token());
        self.navigate(parent);
    }

    /// The current folder's entries, folders first, then by name.
    ///
    /// An unresolvable or non-folder path degrades to an empty listing
    /// (rendered as "folder is empty"), never an error.
    pub fn listing<'a>(&self, tree: &'a VfsTree) -> Vec<(&'a str, &'a Entry)> {
        let Some(children) = tree.list_children(&self.current) else {
            return Vec::new();
        };

        let mut entries: Vec<(&str, &Entry)> = children.iter().collect();
        entries.sort_by(|(a_name, a), (b_name, b)| {
            b.is_container()
                .cmp(&a.is_container())
                .then_with(|| a_name.cmp(b_name))
        });
        entries
    }

    /// Activates an entry in the current folder by name.
    ///
    /// Folders are entered in place; anything else is handed back to the
    /// shell to dispatch. Unknown names do nothing.
    pub fn activate(&mut self, tree: &VfsTree, name: &str) -> Option<ExplorerEvent> {
        let target = path::join(&self.current, name);
        let entry = tree.resolve(&target)?;

        if entry.is_container() {
            self.navigate(target);
            None
        } else {
            Some(ExplorerEvent::OpenFile {
                name: name.to_string(),
                path: target,
            })
        }
    }
}
