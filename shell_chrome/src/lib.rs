//! # Shell Chrome
//!
//! Taskbar and start-menu view models: the presentational controllers that
//! sit outside every window and drive the session through its four
//! operations.
//!
//! Chrome holds only UI-local state (menu open flag, injected clock). The
//! window list itself always derives from the session, and menu items carry
//! the entry name/path needed to re-enter the dispatch path — never
//! captured closures into the session.

use core_types::WindowId;
use icon_resolver::IconRef;
use serde::{Deserialize, Serialize};
use services_window_manager::WindowManager;
use vfs::{path, DesktopProfile, VfsTree};

/// One button on the taskbar, derived from a session window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    /// Resolved asset path, ready to render
    pub icon: String,
    pub is_minimized: bool,
    pub is_active: bool,
}

/// Session operation a taskbar click maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskbarAction {
    Focus(WindowId),
    ToggleMinimize(WindowId),
}

/// Builds the taskbar button list in window insertion order.
pub fn taskbar_entries<C>(session: &WindowManager<C>) -> Vec<TaskbarEntry> {
    session
        .windows()
        .iter()
        .map(|window| TaskbarEntry {
            id: window.id.clone(),
            title: window.title.clone(),
            icon: icon_resolver::resolve(&window.icon).to_string(),
            is_minimized: window.is_minimized,
            is_active: session.active_id() == Some(&window.id) && !window.is_minimized,
        })
        .collect()
}

/// Maps a taskbar button click to a session operation.
///
/// A minimized or inactive window is focused (which restores and raises
/// it); clicking the button of the window that is already active and
/// visible minimizes it. Unknown ids map to nothing.
pub fn taskbar_click<C>(session: &WindowManager<C>, id: &WindowId) -> Option<TaskbarAction> {
    let window = session.get(id)?;
    if window.is_minimized || session.active_id() != Some(id) {
        Some(TaskbarAction::Focus(id.clone()))
    } else {
        Some(TaskbarAction::ToggleMinimize(id.clone()))
    }
}

/// What activating a start-menu item means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuTarget {
    /// A file-system entry, re-entering the normal dispatch path
    Entry { name: String, path: String },
    /// A bare external link with no file-system backing
    External { url: String },
}

/// One row in the start menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartMenuItem {
    pub name: String,
    /// Resolved asset path, ready to render
    pub icon: String,
    pub target: MenuTarget,
}

/// UI-local start-menu state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartMenu {
    is_open: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Closes the menu (launching an item or clicking away)
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Composes the start-menu item list.
///
/// Pinned launcher items come first, then the profile's social links, then
/// the desktop folder's entries with launcher-style display names; a
/// desktop entry whose display name collides with an earlier item is
/// shadowed.
pub fn start_menu_items(tree: &VfsTree, profile: &DesktopProfile) -> Vec<StartMenuItem> {
    let documents = profile.documents_path();
    let mut items = vec![
        pinned_entry("Projects", "folder", path::join(&documents, "Projects")),
        pinned_entry("Skills.md", "file-text", path::join(&documents, "Skills.md")),
        pinned_entry(
            "Certificates",
            "folder",
            path::join(&documents, "Certificates"),
        ),
        pinned_entry("Resume.pdf", "file-pdf", path::join(&documents, "Resume.pdf")),
    ];

    for social in &profile.socials {
        items.push(StartMenuItem {
            name: social.name.clone(),
            icon: icon_resolver::resolve_key(&social.icon_key).to_string(),
            target: MenuTarget::External {
                url: social.url.clone(),
            },
        });
    }

    let desktop = profile.desktop_path();
    if let Some(children) = tree.list_children(&desktop) {
        for (name, entry) in children.iter() {
            let display = launcher_name(name);
            if items.iter().any(|item| item.name == display) {
                continue;
            }
            items.push(StartMenuItem {
                name: display,
                icon: icon_resolver::resolve(entry.icon()).to_string(),
                target: MenuTarget::Entry {
                    name: name.to_string(),
                    path: path::join(&desktop, name),
                },
            });
        }
    }
    items
}

fn pinned_entry(name: &str, icon_key: &str, entry_path: String) -> StartMenuItem {
    StartMenuItem {
        name: name.to_string(),
        icon: icon_resolver::resolve(&IconRef::symbolic(icon_key)).to_string(),
        target: MenuTarget::Entry {
            name: path::file_name(&entry_path).to_string(),
            path: entry_path,
        },
    }
}

/// Strips launcher-style file extensions from a display name.
fn launcher_name(name: &str) -> String {
    for ext in [".md", ".pdf", ".txt", ".lnk", ".exe"] {
        if let Some(stripped) = name.strip_suffix(ext) {
            return stripped.to_string();
        }
    }
    name.to_string()
}

/// Taskbar-corner clock. Time is injected so rendering stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub hour: u8,
    pub minute: u8,
}

impl Clock {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// `HH:MM` display form
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}
