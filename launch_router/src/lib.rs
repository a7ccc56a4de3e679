//! # Launch Router
//!
//! Maps a file-system entry to the application window that should open it.
//!
//! ## Philosophy
//!
//! Unlike ad hoc click handlers, launches are routed through one typed
//! decision function:
//! - Ordered precedence: several conditions can hold at once (a markdown
//!   file that is also a readme shortcut); the first matching rule wins
//! - Decisions, not effects: the router returns a [`Launch`] value and
//!   never touches session state itself
//! - Policy over hardcoding: the divergent behaviors observed for external
//!   shortcuts and instance reuse are explicit [`DispatchPolicy`] knobs
//!
//! Leaf applications that need a second window (the reader's "open
//! workspace" button) emit a [`WindowRequest`] consumed by the same
//! routing path as user clicks.

use core_types::{LaunchToken, WindowId};
use icon_resolver::IconRef;
use serde::{Deserialize, Serialize};
use vfs::{ContentSource, Entry, FileKind, SystemApp};

/// Repository host expected in project shortcut targets.
pub const REPO_HOST: &str = "github.com";
/// Host serving the heavyweight in-browser workspace view of a repository.
pub const WORKSPACE_HOST: &str = "github1s.com";
/// Host serving raw file content for the document reader.
pub const RAW_HOST: &str = "raw.githubusercontent.com";

/// How a click on an external (http) shortcut is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutPolicy {
    /// Open the target inside an embedded browser window
    EmbeddedBrowser,
    /// Delegate to the host environment's real browser
    ExternalTab,
}

/// Whether repeated launches of the same logical window reuse one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstancePolicy {
    /// Stable ids: launching again focuses the existing window
    ReuseByLogicalKey,
    /// Unique token per launch: every trigger spawns a new window
    AlwaysNew,
}

/// Caller-supplied routing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPolicy {
    pub shortcut: ShortcutPolicy,
    pub instance: InstancePolicy,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            shortcut: ShortcutPolicy::EmbeddedBrowser,
            instance: InstancePolicy::ReuseByLogicalKey,
        }
    }
}

/// Routing context: policy plus the path the file-explorer app starts at
/// when launched as a bare application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchContext {
    pub policy: DispatchPolicy,
    pub explorer_root: String,
}

impl DispatchContext {
    pub fn new(policy: DispatchPolicy, explorer_root: impl Into<String>) -> Self {
        Self {
            policy,
            explorer_root: explorer_root.into(),
        }
    }
}

/// Media category for the player application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Audio,
}

/// The application view a window should mount, with its props.
///
/// Opaque to the window manager; only the shell composition layer and the
/// leaf applications look inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppContent {
    FileBrowser {
        path: String,
    },
    /// Rich readme reader with a secondary workspace action
    DocumentReader {
        title: String,
        raw_url: String,
        workspace_url: String,
    },
    MarkdownViewer {
        name: String,
        source: ContentSource,
    },
    TextViewer {
        name: String,
        source: ContentSource,
    },
    PdfViewer {
        name: String,
        source: ContentSource,
    },
    ImageViewer {
        name: String,
        source: ContentSource,
    },
    MediaPlayer {
        name: String,
        medium: MediaKind,
        source: ContentSource,
    },
    BinaryInspector {
        name: String,
    },
    Browser {
        url: Option<String>,
    },
    /// Heavyweight repository workspace view
    WorkspaceViewer {
        url: String,
    },
    Terminal,
}

impl AppContent {
    /// The follow-up request behind a document reader's workspace button,
    /// if this content has one.
    pub fn workspace_request(&self) -> Option<WindowRequest> {
        match self {
            AppContent::DocumentReader {
                title,
                workspace_url,
                ..
            } => Some(WindowRequest::OpenWorkspace {
                title: title.clone(),
                url: workspace_url.clone(),
            }),
            _ => None,
        }
    }
}

/// Everything the window manager needs to open one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub id: WindowId,
    pub title: String,
    pub icon: IconRef,
    pub content: AppContent,
}

/// Outcome of routing one activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Launch {
    /// Open (or re-focus) a session window
    Window(WindowSpec),
    /// Hand the URL to the host environment's browser
    OpenExternal(String),
    /// Unrecognized entry; the click does nothing observable
    Ignore,
}

impl Launch {
    /// The window spec, when the decision is to open a window
    pub fn window_spec(&self) -> Option<&WindowSpec> {
        match self {
            Launch::Window(spec) => Some(spec),
            _ => None,
        }
    }
}

/// A cross-window action emitted by a leaf application.
///
/// Routed through [`route_request`] so leaves share the click path instead
/// of holding bespoke closures into the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowRequest {
    OpenWorkspace { title: String, url: String },
}

/// Routes an entry activation to a launch decision.
///
/// `name` is the entry's display name, `path` its absolute VFS path. Rules
/// are evaluated in precedence order; the first match wins.
pub fn dispatch(name: &str, entry: &Entry, path: &str, ctx: &DispatchContext) -> Launch {
    match entry {
        // 1. Containers open in the file browser, keyed by target path so
        //    sibling folders get distinct windows.
        Entry::Drive { .. } | Entry::Folder { .. } => Launch::Window(WindowSpec {
            id: WindowId::new(format!("explorer-{}", path)),
            title: name.to_string(),
            icon: IconRef::symbolic("folder"),
            content: AppContent::FileBrowser {
                path: path.to_string(),
            },
        }),

        Entry::Shortcut { target, .. } if is_http(target) => {
            // 2. Readme shortcuts get the native reader, not the browser.
            if is_readme(name, target) {
                let title = repo_title(target).unwrap_or_else(|| name.to_string());
                return Launch::Window(WindowSpec {
                    id: instanced_id(ctx.policy.instance, &format!("readme-{}", title)),
                    title: format!("{} - ReadMe", title),
                    icon: IconRef::symbolic("file-text"),
                    content: AppContent::DocumentReader {
                        title,
                        raw_url: raw_content_url(target),
                        workspace_url: workspace_url(target),
                    },
                });
            }

            // 3. Any other external target follows the shortcut policy.
            match ctx.policy.shortcut {
                ShortcutPolicy::EmbeddedBrowser => Launch::Window(WindowSpec {
                    id: instanced_id(ctx.policy.instance, &format!("browser-{}", name)),
                    title: name.to_string(),
                    icon: IconRef::symbolic("browser"),
                    content: AppContent::Browser {
                        url: Some(target.clone()),
                    },
                }),
                ShortcutPolicy::ExternalTab => Launch::OpenExternal(target.clone()),
            }
        }

        // Shortcut to something that is not a URL: no declared kind, so
        // fall back to extension sniffing with empty content.
        Entry::Shortcut { .. } => match FileKind::from_extension(name) {
            Some(kind) => viewer_window(name, kind, ContentSource::Empty),
            None => Launch::Ignore,
        },

        Entry::File {
            file_kind, source, ..
        } => match file_kind {
            // 4. Named system applications.
            FileKind::App(app) => system_app_window(*app, ctx),
            // 5. Dedicated viewer per file kind.
            kind => viewer_window(name, *kind, source.clone()),
        },
    }
}

/// Routes a leaf-emitted window request through the same decision type.
pub fn route_request(request: &WindowRequest, ctx: &DispatchContext) -> Launch {
    match request {
        WindowRequest::OpenWorkspace { title, url } => Launch::Window(WindowSpec {
            id: instanced_id(ctx.policy.instance, &format!("workspace-{}", title)),
            title: format!("Workspace - {}", title),
            icon: IconRef::symbolic("workspace"),
            content: AppContent::WorkspaceViewer { url: url.clone() },
        }),
    }
}

fn system_app_window(app: SystemApp, ctx: &DispatchContext) -> Launch {
    let id = instanced_id(ctx.policy.instance, app.slug());
    let spec = match app {
        SystemApp::FileExplorer => WindowSpec {
            id,
            title: "This PC".to_string(),
            icon: IconRef::symbolic("this-pc"),
            content: AppContent::FileBrowser {
                path: ctx.explorer_root.clone(),
            },
        },
        SystemApp::Terminal => WindowSpec {
            id,
            title: "Terminal".to_string(),
            icon: IconRef::symbolic("terminal"),
            content: AppContent::Terminal,
        },
        SystemApp::Browser => WindowSpec {
            id,
            title: "New Tab".to_string(),
            icon: IconRef::symbolic("browser"),
            content: AppContent::Browser { url: None },
        },
    };
    Launch::Window(spec)
}

fn viewer_window(name: &str, kind: FileKind, source: ContentSource) -> Launch {
    let spec = match kind {
        FileKind::Markdown => WindowSpec {
            id: WindowId::new(format!("markdown-{}", name)),
            title: format!("{} - Markdown", name),
            icon: IconRef::symbolic("file-text"),
            content: AppContent::MarkdownViewer {
                name: name.to_string(),
                source,
            },
        },
        FileKind::Text => WindowSpec {
            id: WindowId::new(format!("notepad-{}", name)),
            title: format!("{} - Notepad", name),
            icon: IconRef::symbolic("file-text"),
            content: AppContent::TextViewer {
                name: name.to_string(),
                source,
            },
        },
        FileKind::Pdf => WindowSpec {
            id: WindowId::new(format!("pdf-{}", name)),
            title: name.to_string(),
            icon: IconRef::symbolic("file-pdf"),
            content: AppContent::PdfViewer {
                name: name.to_string(),
                source,
            },
        },
        FileKind::Image => WindowSpec {
            id: WindowId::new(format!("img-{}", name)),
            title: name.to_string(),
            icon: IconRef::symbolic("photos"),
            content: AppContent::ImageViewer {
                name: name.to_string(),
                source,
            },
        },
        FileKind::Video => WindowSpec {
            id: WindowId::new(format!("media-{}", name)),
            title: name.to_string(),
            icon: IconRef::symbolic("video-file"),
            content: AppContent::MediaPlayer {
                name: name.to_string(),
                medium: MediaKind::Video,
                source,
            },
        },
        FileKind::Audio => WindowSpec {
            id: WindowId::new(format!("media-{}", name)),
            title: name.to_string(),
            icon: IconRef::symbolic("music-file"),
            content: AppContent::MediaPlayer {
                name: name.to_string(),
                medium: MediaKind::Audio,
                source,
            },
        },
        FileKind::Binary => WindowSpec {
            id: WindowId::new(format!("binary-{}", name)),
            title: name.to_string(),
            icon: IconRef::symbolic("exe-file"),
            content: AppContent::BinaryInspector {
                name: name.to_string(),
            },
        },
        // App files are handled before viewer selection.
        FileKind::App(_) => return Launch::Ignore,
    };
    Launch::Window(spec)
}

fn instanced_id(policy: InstancePolicy, base: &str) -> WindowId {
    match policy {
        InstancePolicy::ReuseByLogicalKey => WindowId::new(base),
        InstancePolicy::AlwaysNew => WindowId::new(format!("{}-{}", base, LaunchToken::new())),
    }
}

fn is_http(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Readme convention: the canonical name, or a repository blob path ending
/// in `README.md`.
fn is_readme(name: &str, target: &str) -> bool {
    name == "README.md" || (target.contains("/blob/") && target.ends_with("/README.md"))
}

/// Rewrites a repository blob URL to the raw-content host.
fn raw_content_url(target: &str) -> String {
    target
        .replace(WORKSPACE_HOST, RAW_HOST)
        .replace(REPO_HOST, RAW_HOST)
        .replace("/blob/", "/")
}

/// Rewrites a repository URL to the workspace-viewer host.
fn workspace_url(target: &str) -> String {
    target.replace(REPO_HOST, WORKSPACE_HOST)
}

/// Extracts the repository name segment from a repo URL, dashes spaced.
fn repo_title(target: &str) -> Option<String> {
    let segment = target.split('/').nth(4)?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.replace('-', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DispatchContext {
        DispatchContext::new(DispatchPolicy::default(), "C:")
    }

    fn ctx_with(shortcut: ShortcutPolicy, instance: InstancePolicy) -> DispatchContext {
        DispatchContext::new(DispatchPolicy { shortcut, instance }, "C:")
    }

    fn folder() -> Entry {
        Entry::folder(IconRef::symbolic("documents"))
    }

    fn readme_shortcut() -> Entry {
        Entry::shortcut(
            "https://github1s.com/guest/ray-tracer/blob/main/README.md",
            IconRef::symbolic("file-text"),
        )
    }

    #[test]
    fn test_folder_opens_file_browser_keyed_by_path() {
        let launch = dispatch("Documents", &folder(), "C:/Users/guest/Documents", &ctx());
        let spec = launch.window_spec().unwrap();
        assert_eq!(spec.id, WindowId::new("explorer-C:/Users/guest/Documents"));
        assert_eq!(spec.title, "Documents");
        assert_eq!(
            spec.content,
            AppContent::FileBrowser {
                path: "C:/Users/guest/Documents".to_string()
            }
        );
    }

    #[test]
    fn test_sibling_folders_get_distinct_ids() {
        let a = dispatch("Documents", &folder(), "C:/Users/guest/Documents", &ctx());
        let b = dispatch(
            "Projects",
            &folder(),
            "C:/Users/guest/Documents/Projects",
            &ctx(),
        );
        assert_ne!(a.window_spec().unwrap().id, b.window_spec().unwrap().id);
    }

    #[test]
    fn test_readme_shortcut_beats_browser_rule() {
        // The entry matches both the readme rule and the generic external
        // shortcut rule; precedence picks the reader.
        let launch = dispatch("README.md", &readme_shortcut(), "C:/x/README.md", &ctx());
        let spec = launch.window_spec().unwrap();
        match &spec.content {
            AppContent::DocumentReader {
                title,
                raw_url,
                workspace_url,
            } => {
                assert_eq!(title, "ray tracer");
                assert_eq!(
                    raw_url,
                    "https://raw.githubusercontent.com/guest/ray-tracer/main/README.md"
                );
                assert_eq!(
                    workspace_url,
                    "https://github1s.com/guest/ray-tracer/blob/main/README.md"
                );
            }
            other => panic!("expected DocumentReader, got {:?}", other),
        }
        assert_eq!(spec.title, "ray tracer - ReadMe");
    }

    #[test]
    fn test_readme_detected_by_target_when_name_differs() {
        let entry = Entry::shortcut(
            "https://github.com/guest/chess-engine/blob/main/README.md",
            IconRef::symbolic("file-text"),
        );
        let launch = dispatch("Project ReadMe", &entry, "C:/x", &ctx());
        assert!(matches!(
            launch.window_spec().unwrap().content,
            AppContent::DocumentReader { .. }
        ));
    }

    #[test]
    fn test_external_shortcut_embedded_browser_policy() {
        let entry = Entry::shortcut("https://example.com", IconRef::symbolic("shortcut"));
        let launch = dispatch("Example", &entry, "C:/x", &ctx());
        let spec = launch.window_spec().unwrap();
        assert_eq!(spec.id, WindowId::new("browser-Example"));
        assert_eq!(
            spec.content,
            AppContent::Browser {
                url: Some("https://example.com".to_string())
            }
        );
    }

    #[test]
    fn test_external_shortcut_external_tab_policy() {
        let entry = Entry::shortcut("https://example.com", IconRef::symbolic("shortcut"));
        let launch = dispatch(
            "Example",
            &entry,
            "C:/x",
            &ctx_with(ShortcutPolicy::ExternalTab, InstancePolicy::ReuseByLogicalKey),
        );
        assert_eq!(launch, Launch::OpenExternal("https://example.com".to_string()));
    }

    #[test]
    fn test_reuse_policy_yields_stable_ids() {
        let entry = Entry::file(
            FileKind::App(SystemApp::Terminal),
            ContentSource::Empty,
            IconRef::symbolic("terminal"),
        );
        let a = dispatch("Terminal", &entry, "C:/x", &ctx());
        let b = dispatch("Terminal", &entry, "C:/x", &ctx());
        assert_eq!(a.window_spec().unwrap().id, b.window_spec().unwrap().id);
    }

    #[test]
    fn test_always_new_policy_yields_fresh_ids() {
        let entry = Entry::file(
            FileKind::App(SystemApp::Terminal),
            ContentSource::Empty,
            IconRef::symbolic("terminal"),
        );
        let ctx = ctx_with(ShortcutPolicy::EmbeddedBrowser, InstancePolicy::AlwaysNew);
        let a = dispatch("Terminal", &entry, "C:/x", &ctx);
        let b = dispatch("Terminal", &entry, "C:/x", &ctx);
        assert_ne!(a.window_spec().unwrap().id, b.window_spec().unwrap().id);
    }

    #[test]
    fn test_system_app_launches() {
        let explorer = Entry::file(
            FileKind::App(SystemApp::FileExplorer),
            ContentSource::Empty,
            IconRef::symbolic("this-pc"),
        );
        let launch = dispatch("This PC", &explorer, "C:/x", &ctx());
        let spec = launch.window_spec().unwrap();
        assert_eq!(spec.title, "This PC");
        assert_eq!(
            spec.content,
            AppContent::FileBrowser {
                path: "C:".to_string()
            }
        );

        let browser = Entry::file(
            FileKind::App(SystemApp::Browser),
            ContentSource::Empty,
            IconRef::symbolic("browser"),
        );
        let launch = dispatch("Edge", &browser, "C:/x", &ctx());
        assert_eq!(
            launch.window_spec().unwrap().content,
            AppContent::Browser { url: None }
        );
    }

    #[test]
    fn test_viewer_selection_by_file_kind() {
        let cases = [
            (FileKind::Markdown, "Notes.md", "markdown-Notes.md"),
            (FileKind::Text, "Ideas.txt", "notepad-Ideas.txt"),
            (FileKind::Pdf, "Resume.pdf", "pdf-Resume.pdf"),
            (FileKind::Image, "cat.png", "img-cat.png"),
            (FileKind::Video, "Demo.mp4", "media-Demo.mp4"),
            (FileKind::Audio, "Song.mp3", "media-Song.mp3"),
            (FileKind::Binary, "installer.exe", "binary-installer.exe"),
        ];
        for (kind, name, expected_id) in cases {
            let entry = Entry::file(kind, ContentSource::Empty, IconRef::symbolic("file-text"));
            let launch = dispatch(name, &entry, "C:/x", &ctx());
            assert_eq!(
                launch.window_spec().unwrap().id,
                WindowId::new(expected_id),
                "kind {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_viewer_carries_content_source() {
        let entry = Entry::file(
            FileKind::Markdown,
            ContentSource::inline("# Hi"),
            IconRef::symbolic("file-text"),
        );
        let launch = dispatch("Notes.md", &entry, "C:/x", &ctx());
        assert_eq!(
            launch.window_spec().unwrap().content,
            AppContent::MarkdownViewer {
                name: "Notes.md".to_string(),
                source: ContentSource::inline("# Hi"),
            }
        );
    }

    #[test]
    fn test_non_http_shortcut_sniffs_extension() {
        let entry = Entry::shortcut("Skills.md", IconRef::symbolic("file-text"));
        let launch = dispatch("Skills.md", &entry, "C:/x", &ctx());
        assert!(matches!(
            launch.window_spec().unwrap().content,
            AppContent::MarkdownViewer { .. }
        ));
    }

    #[test]
    fn test_unclassifiable_entry_is_ignored() {
        let entry = Entry::shortcut("not a url and no extension", IconRef::symbolic("shortcut"));
        let launch = dispatch("mystery", &entry, "C:/x", &ctx());
        assert_eq!(launch, Launch::Ignore);
    }

    #[test]
    fn test_workspace_request_round_trip() {
        let launch = dispatch("README.md", &readme_shortcut(), "C:/x", &ctx());
        let request = launch
            .window_spec()
            .unwrap()
            .content
            .workspace_request()
            .unwrap();

        let follow_up = route_request(&request, &ctx());
        let spec = follow_up.window_spec().unwrap();
        assert_eq!(spec.id, WindowId::new("workspace-ray tracer"));
        assert_eq!(
            spec.content,
            AppContent::WorkspaceViewer {
                url: "https://github1s.com/guest/ray-tracer/blob/main/README.md".to_string()
            }
        );
    }

    #[test]
    fn test_non_reader_content_has_no_workspace_request() {
        assert!(AppContent::Terminal.workspace_request().is_none());
    }

    #[test]
    fn test_raw_url_rewrite_from_repo_host() {
        assert_eq!(
            raw_content_url("https://github.com/u/r/blob/main/README.md"),
            "https://raw.githubusercontent.com/u/r/main/README.md"
        );
    }

    #[test]
    fn test_workspace_url_rewrite_is_stable_for_workspace_host() {
        let already = "https://github1s.com/u/r/blob/main/README.md";
        assert_eq!(workspace_url(already), already);
    }

    #[test]
    fn test_repo_title_extraction() {
        assert_eq!(
            repo_title("https://github.com/u/my-cool-repo/blob/main/README.md"),
            Some("my cool repo".to_string())
        );
        assert_eq!(repo_title("https://github.com/u"), None);
    }

    #[test]
    fn test_policy_serialization() {
        let policy = DispatchPolicy {
            shortcut: ShortcutPolicy::ExternalTab,
            instance: InstancePolicy::AlwaysNew,
        };
        let json = serde_json::to_string(&policy).unwrap();
        let deserialized: DispatchPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, deserialized);
    }
}
