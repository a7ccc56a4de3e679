//! # Icon Resolver
//!
//! Maps symbolic icon keys to displayable asset paths.
//!
//! ## Philosophy
//!
//! - **Decided at construction**: whether an icon is a symbolic key or an
//!   already-resolved asset path is encoded in the type, not sniffed from
//!   the string shape at render time
//! - **Total resolution**: every lookup yields some asset path; unknown
//!   keys fall back to a generic document icon so every window title bar
//!   and file listing row can always render
//!
//! ## Non-Goals
//!
//! This is NOT an asset loader. A path that resolves here may still fail to
//! load as an image; swapping in [`FALLBACK_ICON`] at that point is the
//! presentation layer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic document icon returned for unknown symbolic keys.
pub const DEFAULT_ICON: &str = "/assets/icons/file-text.ico";

/// Last-resort icon for the render-time image-load failure swap.
pub const FALLBACK_ICON: &str = "/assets/icons/application.ico";

/// Reference to an icon, decided when the entry is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconRef {
    /// A symbolic key resolved through the icon table (e.g. `"folder"`)
    Symbolic(String),
    /// An asset path or URI used verbatim
    Asset(String),
}

impl IconRef {
    /// Creates a symbolic icon reference
    pub fn symbolic(key: impl Into<String>) -> Self {
        IconRef::Symbolic(key.into())
    }

    /// Creates an already-resolved asset reference
    pub fn asset(path: impl Into<String>) -> Self {
        IconRef::Asset(path.into())
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRef::Symbolic(key) => write!(f, "icon:{}", key),
            IconRef::Asset(path) => write!(f, "{}", path),
        }
    }
}

/// Resolves an icon reference to an asset path.
///
/// Asset references pass through unchanged; symbolic keys are looked up in
/// the fixed table, with [`DEFAULT_ICON`] on a miss. Never fails.
pub fn resolve(icon: &IconRef) -> &str {
    match icon {
        IconRef::Asset(path) => path,
        IconRef::Symbolic(key) => resolve_key(key),
    }
}

/// Resolves a symbolic key to its asset path, or [`DEFAULT_ICON`].
pub fn resolve_key(key: &str) -> &'static str {
    lookup(key).unwrap_or(DEFAULT_ICON)
}

fn lookup(key: &str) -> Option<&'static str> {
    let path = match key {
        // System / special folders
        "desktop" => "/assets/icons/desktop-folder.ico",
        "documents" => "/assets/icons/document-folder.ico",
        "downloads" => "/assets/icons/downloads-folder.ico",
        "pictures" => "/assets/icons/pictures-folder.ico",
        "music" => "/assets/icons/music-folder.ico",
        "videos" => "/assets/icons/video-folder.ico",

        // Items
        "folder" => "/assets/icons/folder.ico",
        "this-pc" => "/assets/icons/this-pc.ico",
        "trash" => "/assets/icons/trash.ico",
        "hard-drive" => "/assets/icons/hard-drive.ico",

        // File types
        "file-text" | "text" | "markdown" => "/assets/icons/file-text.ico",
        "file-pdf" => "/assets/icons/file-pdf.ico",
        "file-image" | "image" => "/assets/icons/file-image.ico",
        "video-file" => "/assets/icons/video-file.ico",
        "music-file" => "/assets/icons/music-file.ico",
        "exe-file" => "/assets/icons/exe-file.ico",

        // Apps
        "browser" => "/assets/icons/browser.png",
        "workspace" => "/assets/icons/workspace.png",
        "photos" => "/assets/icons/photos.ico",
        "settings" => "/assets/icons/settings.png",
        "terminal" => "/assets/icons/terminal.ico",
        "github" => "/assets/icons/github-mark.svg",
        "linkedin" => "/assets/icons/linkedin.png",

        // Custom
        "user-circle" => "/assets/icons/user-circle.ico",
        "shortcut" => "/assets/icons/browser.png",

        _ => return None,
    };
    Some(path)
}
