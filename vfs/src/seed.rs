//! Initial tree construction from declarative profile data
//!
//! The session's tree is seeded once at startup: a fixed folder skeleton
//! plus projection of the profile's project and certificate lists into
//! synthetic folders.

use crate::entry::{ContentSource, Entry, FileKind, SystemApp};
use crate::tree::VfsTree;
use icon_resolver::IconRef;
use serde::{Deserialize, Serialize};

const ROOT_TOKEN: &str = "C:";

/// An external link pinned to the desktop (and surfaced in the start menu).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon_key: String,
}

/// A project projected into `Documents/Projects` as a synthetic folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    /// Repository page URL; also the source of the readme shortcut target
    pub github: String,
    /// Optional live-site link
    pub link: Option<String>,
    /// Optional screenshot asset, also projected into Pictures
    pub image: Option<String>,
}

/// A certificate projected into `Documents/Certificates` as an image file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub title: String,
    pub image: String,
}

/// Declarative data the session tree is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopProfile {
    /// User name; becomes the home directory under `C:/Users`
    pub user: String,
    /// Markdown bio behind the desktop's "About Me" file
    pub about: String,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<ProjectRecord>,
    pub certificates: Vec<CertificateRecord>,
}

impl DesktopProfile {
    pub fn home_path(&self) -> String {
        format!("{}/Users/{}", ROOT_TOKEN, self.user)
    }

    pub fn desktop_path(&self) -> String {
        format!("{}/Desktop", self.home_path())
    }

    pub fn documents_path(&self) -> String {
        format!("{}/Documents", self.home_path())
    }
}

impl Default for DesktopProfile {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            about: "# About Me\n\nNothing here yet.".to_string(),
            socials: Vec::new(),
            projects: Vec::new(),
            certificates: Vec::new(),
        }
    }
}

/// Strips entry names down to alphanumerics and spaces.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

fn sym(key: &str) -> IconRef {
    IconRef::symbolic(key)
}

/// Builds the session tree from a profile.
pub fn build_tree(profile: &DesktopProfile) -> VfsTree {
    let home = Entry::folder(sym("folder"))
        .with_child("Desktop", desktop(profile))
        .with_child("Documents", documents(profile))
        .with_child("Downloads", downloads(profile))
        .with_child("Pictures", pictures(profile))
        .with_child("Music", music())
        .with_child("Videos", videos());

    let root = Entry::drive("Local Disk (C:)", sym("hard-drive"))
        .with_child(
            "Users",
            Entry::folder(sym("folder")).with_child(profile.user.clone(), home),
        )
        .with_child("Windows", windows_system());

    VfsTree::new(ROOT_TOKEN, root)
}

fn desktop(profile: &DesktopProfile) -> Entry {
    let mut desktop = Entry::folder(sym("desktop"))
        .with_child(
            "About Me",
            Entry::file(
                FileKind::Markdown,
                ContentSource::inline(profile.about.clone()),
                sym("user-circle"),
            ),
        )
        .with_child(
            "This PC",
            Entry::file(
                FileKind::App(SystemApp::FileExplorer),
                ContentSource::Empty,
                sym("this-pc"),
            ),
        )
        .with_child(
            "Terminal",
            Entry::file(
                FileKind::App(SystemApp::Terminal),
                ContentSource::Empty,
                sym("terminal"),
            ),
        );

    for social in &profile.socials {
        desktop = desktop.with_child(
            social.name.clone(),
            Entry::shortcut(social.url.clone(), sym(&social.icon_key)),
        );
    }
    desktop
}

fn documents(profile: &DesktopProfile) -> Entry {
    let docs_url = |file: &str| format!("/C/Users/{}/Documents/{}", profile.user, file);

    Entry::folder(sym("documents"))
        .with_child(
            "Resume.pdf",
            Entry::file(
                FileKind::Pdf,
                ContentSource::url(docs_url("Resume.pdf")),
                sym("file-pdf"),
            ),
        )
        .with_child("Projects", projects(profile))
        .with_child(
            "Skills.md",
            Entry::file(
                FileKind::Markdown,
                ContentSource::url(docs_url("Skills.md")),
                sym("file-text"),
            ),
        )
        .with_child("Certificates", certificates(profile))
        .with_child(
            "Project_Ideas.txt",
            Entry::file(
                FileKind::Text,
                ContentSource::url(docs_url("Project_Ideas.txt")),
                sym("file-text"),
            ),
        )
        .with_child(
            "Notes.md",
            Entry::file(
                FileKind::Markdown,
                ContentSource::url(docs_url("Notes.md")),
                sym("file-text"),
            ),
        )
}

fn projects(profile: &DesktopProfile) -> Entry {
    let mut projects = Entry::folder(sym("folder"));

    for project in &profile.projects {
        let safe_name = sanitize_name(&project.name);
        let readme_target = format!(
            "{}/blob/main/README.md",
            project.github.replace("github.com", "github1s.com")
        );

        let mut folder = Entry::folder(sym("folder"))
            .with_child("README.md", Entry::shortcut(readme_target, sym("file-text")));
        if let Some(link) = &project.link {
            folder = folder.with_child("Visit Link", Entry::shortcut(link.clone(), sym("browser")));
        }
        folder = folder.with_child(
            "GitHub Repo",
            Entry::shortcut(project.github.clone(), sym("github")),
        );

        projects = projects.with_child(safe_name, folder);
    }
    projects
}

fn certificates(profile: &DesktopProfile) -> Entry {
    let mut certs = Entry::folder(sym("folder"));

    for cert in &profile.certificates {
        let ext = if cert.image.ends_with(".jpg") {
            ".jpg"
        } else {
            ".png"
        };
        let name = format!("{}{}", sanitize_name(&cert.title), ext);
        certs = certs.with_child(
            name,
            Entry::file(
                FileKind::Image,
                ContentSource::url(cert.image.clone()),
                sym("file-image"),
            ),
        );
    }
    certs
}

fn downloads(profile: &DesktopProfile) -> Entry {
    Entry::folder(sym("downloads"))
        .with_child(
            "installer.exe",
            Entry::file(FileKind::Binary, ContentSource::Empty, sym("exe-file")),
        )
        .with_child(
            "funny_cat.png",
            Entry::file(
                FileKind::Image,
                ContentSource::url(format!(
                    "/C/Users/{}/Downloads/funny_cat.png",
                    profile.user
                )),
                sym("file-image"),
            ),
        )
}

fn pictures(profile: &DesktopProfile) -> Entry {
    let mut pictures = Entry::folder(sym("pictures")).with_child(
        "Wallpaper.jpg",
        Entry::file(
            FileKind::Image,
            ContentSource::url(format!("/C/Users/{}/Pictures/Wallpaper.jpg", profile.user)),
            sym("file-image"),
        ),
    );

    // Project screenshots double as a picture gallery.
    for project in &profile.projects {
        if let Some(image) = &project.image {
            pictures = pictures.with_child(
                format!("{}.png", sanitize_name(&project.name)),
                Entry::file(
                    FileKind::Image,
                    ContentSource::url(image.clone()),
                    sym("file-image"),
                ),
            );
        }
    }
    pictures
}

fn music() -> Entry {
    Entry::folder(sym("music")).with_child(
        "Song.mp3",
        Entry::file(FileKind::Audio, ContentSource::Empty, sym("music-file")),
    )
}

fn videos() -> Entry {
    Entry::folder(sym("videos")).with_child(
        "Demo.mp4",
        Entry::file(FileKind::Video, ContentSource::Empty, sym("video-file")),
    )
}

fn windows_system() -> Entry {
    Entry::folder(sym("folder")).with_child(
        "System32",
        Entry::folder(sym("folder"))
            .with_child(
                "cmd.exe",
                Entry::file(
                    FileKind::App(SystemApp::Terminal),
                    ContentSource::Empty,
                    sym("terminal"),
                ),
            )
            .with_child(
                "explorer.exe",
                Entry::file(
                    FileKind::App(SystemApp::FileExplorer),
                    ContentSource::Empty,
                    sym("this-pc"),
                ),
            ),
    )
}
