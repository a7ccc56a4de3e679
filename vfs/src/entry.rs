//! Entry types for the file-system tree

use icon_resolver::IconRef;
use serde::{Deserialize, Serialize};

/// Semantic subtype of a file entry.
///
/// Determines which application opens the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Markdown,
    Text,
    Pdf,
    Image,
    Video,
    Audio,
    Binary,
    /// A launcher for a named system application
    App(SystemApp),
}

impl FileKind {
    /// Sniffs a file kind from a filename extension.
    ///
    /// Used only when an entry carries no declared kind (e.g. a shortcut
    /// pointing at a plain file name).
    pub fn from_extension(name: &str) -> Option<FileKind> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        let kind = match ext.as_str() {
            "md" => FileKind::Markdown,
            "txt" => FileKind::Text,
            "pdf" => FileKind::Pdf,
            "png" | "jpg" | "jpeg" | "gif" => FileKind::Image,
            "mp4" | "webm" => FileKind::Video,
            "mp3" | "wav" | "ogg" => FileKind::Audio,
            "exe" | "bin" => FileKind::Binary,
            _ => return None,
        };
        Some(kind)
    }
}

/// Built-in applications launchable from `FileKind::App` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemApp {
    FileExplorer,
    Terminal,
    Browser,
}

impl SystemApp {
    /// Stable slug used when deriving window ids
    pub fn slug(&self) -> &'static str {
        match self {
            SystemApp::FileExplorer => "file-explorer",
            SystemApp::Terminal => "terminal",
            SystemApp::Browser => "browser",
        }
    }
}

/// Payload of a file entry: inline text, a fetchable reference, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    /// Inline payload carried in the tree itself
    Inline(String),
    /// Reference the viewer application fetches on demand
    Url(String),
    /// No content; the file is empty
    Empty,
}

impl ContentSource {
    pub fn inline(text: impl Into<String>) -> Self {
        ContentSource::Inline(text.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        ContentSource::Url(url.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ContentSource::Empty)
    }
}

/// Ordered name→entry mapping for a drive or folder.
///
/// Sibling order is insertion order: lookup ignores it, display listings
/// preserve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Children(Vec<(String, Entry)>);

impl Children {
    /// Creates an empty child mapping
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a child, replacing any existing entry with the same name.
    ///
    /// Returns the replaced entry if there was one.
    pub fn insert(&mut self, name: impl Into<String>, entry: Entry) -> Option<Entry> {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(&mut slot.1, entry));
        }
        self.0.push((name, entry));
        None
    }

    /// Gets a child by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    /// Gets a mutable child by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.0.iter_mut().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    /// Checks whether a child with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates children in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.0.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A node in the file-system tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    /// Root volume; the display label differs from its path token
    Drive {
        label: String,
        icon: IconRef,
        children: Children,
    },
    Folder {
        icon: IconRef,
        children: Children,
    },
    File {
        file_kind: FileKind,
        source: ContentSource,
        icon: IconRef,
    },
    /// Link to an external URI; never has children or content
    Shortcut {
        target: String,
        icon: IconRef,
    },
}

impl Entry {
    /// Creates a drive entry
    pub fn drive(label: impl Into<String>, icon: IconRef) -> Self {
        Entry::Drive {
            label: label.into(),
            icon,
            children: Children::new(),
        }
    }

    /// Creates an empty folder entry
    pub fn folder(icon: IconRef) -> Self {
        Entry::Folder {
            icon,
            children: Children::new(),
        }
    }

    /// Creates a file entry
    pub fn file(file_kind: FileKind, source: ContentSource, icon: IconRef) -> Self {
        Entry::File {
            file_kind,
            source,
            icon,
        }
    }

    /// Creates a shortcut entry
    pub fn shortcut(target: impl Into<String>, icon: IconRef) -> Self {
        Entry::Shortcut {
            target: target.into(),
            icon,
        }
    }

    /// Adds a child to a drive or folder entry (builder form).
    ///
    /// Adding to a file or shortcut is a no-op; those shapes cannot hold
    /// children.
    pub fn with_child(mut self, name: impl Into<String>, entry: Entry) -> Self {
        if let Some(children) = self.children_mut() {
            children.insert(name, entry);
        }
        self
    }

    /// Returns the children mapping for drive/folder entries
    pub fn children(&self) -> Option<&Children> {
        match self {
            Entry::Drive { children, .. } | Entry::Folder { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Mutable access to children, used while the tree is being built
    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Entry::Drive { children, .. } | Entry::Folder { children, .. } => Some(children),
            _ => None,
        }
    }

    /// True for entries that can be navigated into
    pub fn is_container(&self) -> bool {
        matches!(self, Entry::Drive { .. } | Entry::Folder { .. })
    }

    /// The entry's icon reference
    pub fn icon(&self) -> &IconRef {
        match self {
            Entry::Drive { icon, .. }
            | Entry::Folder { icon, .. }
            | Entry::File { icon, .. }
            | Entry::Shortcut { icon, .. } => icon,
        }
    }

    /// Declared file kind, for file entries only
    pub fn file_kind(&self) -> Option<FileKind> {
        match self {
            Entry::File { file_kind, .. } => Some(*file_kind),
            _ => None,
        }
    }
}
