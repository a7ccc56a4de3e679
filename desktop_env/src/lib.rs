//! # Desktop Environment
//!
//! The session aggregate: one struct owning the file-system tree, the
//! window manager, and the dispatch policy, wired so that every activation
//! — desktop icon, start-menu item, explorer delegation, or a leaf
//! application's window request — flows through the same route-then-open
//! path.
//!
//! The environment is also the only place allowed to bypass the window
//! manager: external-tab delegations land in an outbox the host drains to
//! open a real browser tab.

use core_types::WindowId;
use launch_router::{
    dispatch, route_request, AppContent, DispatchContext, DispatchPolicy, Launch, WindowRequest,
};
use serde::{Deserialize, Serialize};
use services_window_manager::WindowManager;
use shell_chrome::{
    start_menu_items, taskbar_click, taskbar_entries, MenuTarget, StartMenuItem, TaskbarAction,
    TaskbarEntry,
};
use vfs::{build_tree, path, DesktopProfile, VfsTree};

/// Outcome of one activation, for callers that care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// A window was opened or re-focused
    Opened(WindowId),
    /// The URL was handed to the host browser outbox
    DelegatedExternal(String),
    /// Nothing observable happened
    Ignored,
}

/// A desktop icon row: name, resolved icon, and the entry path it opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub name: String,
    pub icon: String,
    pub path: String,
}

/// The live desktop session.
pub struct DesktopEnv {
    profile: DesktopProfile,
    tree: VfsTree,
    session: WindowManager<AppContent>,
    context: DispatchContext,
    external_outbox: Vec<String>,
}

impl DesktopEnv {
    /// Boots a session from a profile with the default policy
    pub fn new(profile: DesktopProfile) -> Self {
        Self::with_policy(profile, DispatchPolicy::default())
    }

    /// Boots a session with an explicit dispatch policy
    pub fn with_policy(profile: DesktopProfile, policy: DispatchPolicy) -> Self {
        let tree = build_tree(&profile);
        let context = DispatchContext::new(policy, tree.root_token());
        Self {
            profile,
            tree,
            session: WindowManager::new(),
            context,
            external_outbox: Vec::new(),
        }
    }

    pub fn profile(&self) -> &DesktopProfile {
        &self.profile
    }

    pub fn tree(&self) -> &VfsTree {
        &self.tree
    }

    pub fn session(&self) -> &WindowManager<AppContent> {
        &self.session
    }

    /// Activates the entry at an absolute path.
    ///
    /// Unresolvable paths are ignored, like any unclassifiable click.
    pub fn activate_path(&mut self, entry_path: &str) -> Activation {
        let name = path::file_name(entry_path).to_string();
        let Some(entry) = self.tree.resolve(entry_path) else {
            return Activation::Ignored;
        };
        let launch = dispatch(&name, entry, entry_path, &self.context);
        self.apply(launch)
    }

    /// Feeds a leaf application's window request through the dispatch path.
    pub fn handle_window_request(&mut self, request: &WindowRequest) -> Activation {
        let launch = route_request(request, &self.context);
        self.apply(launch)
    }

    /// Launches a start-menu item.
    pub fn open_menu_item(&mut self, item: &StartMenuItem) -> Activation {
        match &item.target {
            MenuTarget::Entry { path, .. } => self.activate_path(path),
            MenuTarget::External { url } => {
                self.external_outbox.push(url.clone());
                Activation::DelegatedExternal(url.clone())
            }
        }
    }

    /// The desktop folder's icon grid
    pub fn desktop_icons(&self) -> Vec<DesktopIcon> {
        let desktop = self.profile.desktop_path();
        let Some(children) = self.tree.list_children(&desktop) else {
            return Vec::new();
        };
        children
            .iter()
            .map(|(name, entry)| DesktopIcon {
                name: name.to_string(),
                icon: icon_resolver::resolve(entry.icon()).to_string(),
                path: path::join(&desktop, name),
            })
            .collect()
    }

    /// The taskbar button list
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        taskbar_entries(&self.session)
    }

    /// Applies a taskbar button click to the session.
    pub fn click_taskbar(&mut self, id: &WindowId) {
        match taskbar_click(&self.session, id) {
            Some(TaskbarAction::Focus(id)) => self.session.focus(&id),
            Some(TaskbarAction::ToggleMinimize(id)) => self.session.toggle_minimize(&id),
            None => {}
        }
    }

    /// The start-menu item list
    pub fn start_menu(&self) -> Vec<StartMenuItem> {
        start_menu_items(&self.tree, &self.profile)
    }

    pub fn focus_window(&mut self, id: &WindowId) {
        self.session.focus(id);
    }

    pub fn close_window(&mut self, id: &WindowId) {
        self.session.close(id);
    }

    pub fn toggle_minimize(&mut self, id: &WindowId) {
        self.session.toggle_minimize(id);
    }

    /// External URLs awaiting the host browser, oldest first
    pub fn external_requests(&self) -> &[String] {
        &self.external_outbox
    }

    /// Hands the pending external URLs to the host
    pub fn drain_external_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.external_outbox)
    }

    fn apply(&mut self, launch: Launch) -> Activation {
        match launch {
            Launch::Window(spec) => {
                let id = spec.id.clone();
                self.session.open(spec.id, spec.title, spec.icon, spec.content);
                Activation::Opened(id)
            }
            Launch::OpenExternal(url) => {
                self.external_outbox.push(url.clone());
                Activation::DelegatedExternal(url)
            }
            Launch::Ignore => Activation::Ignored,
        }
    }
}
